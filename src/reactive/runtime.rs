//! Reactive Runtime
//!
//! This module owns the dependency graph between reactive nodes and the queue of
//! effects waiting to re-run.
//!
//! ## Architecture
//!
//! 1. **Observer Stack**: Tracks the currently executing Effect
//! 2. **Dependency Tracking**: `Signal::get()` records an edge from the signal to the
//!    observer on top of the stack
//! 3. **Notification**: A signal write runs layout effects synchronously and queues
//!    passive effects
//! 4. **Flushing**: Queued effects run when the installed scheduler fires, or when
//!    [`flush_updates`] is called by hand
//!
//! The runtime is thread-local. In the browser there is only one thread, so this
//! is effectively a page-wide runtime.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::effect;

/// Unique identifier for reactive nodes (Signals and Effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Create a new unique NodeId
	pub fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

/// Effect execution timing.
///
/// - Layout effects run synchronously inside the signal write
/// - Passive effects are queued and run on the next flush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectTiming {
	/// Runs synchronously, before the write returns
	Layout,
	/// Runs on the next scheduled flush
	#[default]
	Passive,
}

/// Dependency graph node
#[derive(Debug, Default)]
pub(crate) struct DependencyNode {
	/// IDs of nodes that depend on this node
	pub(crate) subscribers: Vec<NodeId>,
	/// IDs of nodes this node depends on
	pub(crate) dependencies: Vec<NodeId>,
}

/// A boxed unit of deferred work handed to the scheduler.
pub type Task = Box<dyn FnOnce()>;

type SchedulerFn = Rc<dyn Fn(Task)>;

thread_local! {
	static SCHEDULER: RefCell<Option<SchedulerFn>> = const { RefCell::new(None) };
}

/// Sets the function used to schedule a flush of passive effects.
///
/// In the browser this is typically a microtask:
///
/// ```ignore
/// hash_router::reactive::set_scheduler(|task| {
///     wasm_bindgen_futures::spawn_local(async move { task() });
/// });
/// ```
///
/// Without a scheduler, passive effects stay queued until [`flush_updates`] is called.
pub fn set_scheduler<F>(scheduler: F)
where
	F: Fn(Task) + 'static,
{
	SCHEDULER.with(|slot| *slot.borrow_mut() = Some(Rc::new(scheduler)));
	// Effects queued while no scheduler was installed flush now.
	with_runtime(|rt| rt.request_flush());
}

/// Returns true when a flush scheduler is installed on this thread.
pub fn has_scheduler() -> bool {
	SCHEDULER.with(|slot| slot.borrow().is_some())
}

/// Removes the installed scheduler, returning to manual flushing.
pub fn clear_scheduler() {
	SCHEDULER.with(|slot| slot.borrow_mut().take());
	// A flush handed to the old scheduler may never run.
	with_runtime(|rt| rt.update_scheduled.set(false));
}

/// Reactive runtime state for the current thread.
pub struct Runtime {
	/// Observer stack for tracking currently executing effects
	observer_stack: RefCell<Vec<NodeId>>,
	/// Dependency graph: NodeId -> DependencyNode
	pub(crate) dependency_graph: RefCell<BTreeMap<NodeId, DependencyNode>>,
	/// Passive effects waiting for the next flush, in notification order
	pub(crate) pending_updates: RefCell<Vec<NodeId>>,
	/// Whether a flush has been handed to the scheduler
	update_scheduled: Cell<bool>,
}

impl Runtime {
	/// Create a new Runtime instance
	pub fn new() -> Self {
		Self {
			observer_stack: RefCell::new(Vec::new()),
			dependency_graph: RefCell::new(BTreeMap::new()),
			pending_updates: RefCell::new(Vec::new()),
			update_scheduled: Cell::new(false),
		}
	}

	/// Get the currently executing observer, if any
	pub fn current_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow().last().copied()
	}

	/// Push an observer onto the stack
	pub fn push_observer(&self, observer: NodeId) {
		self.observer_stack.borrow_mut().push(observer);
	}

	/// Pop an observer from the stack
	pub fn pop_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow_mut().pop()
	}

	/// Track a dependency between the current observer and a signal
	///
	/// This is called automatically when `Signal::get()` is invoked.
	pub fn track_dependency(&self, signal_id: NodeId) {
		let Some(observer_id) = self.current_observer() else {
			return;
		};
		let mut graph = self.dependency_graph.borrow_mut();

		let signal_node = graph.entry(signal_id).or_default();
		if !signal_node.subscribers.contains(&observer_id) {
			signal_node.subscribers.push(observer_id);
		}

		let observer_node = graph.entry(observer_id).or_default();
		if !observer_node.dependencies.contains(&signal_id) {
			observer_node.dependencies.push(signal_id);
		}
	}

	/// Returns the subscribers of a signal, in subscription order.
	pub(crate) fn subscribers_of(&self, signal_id: NodeId) -> Vec<NodeId> {
		self.dependency_graph
			.borrow()
			.get(&signal_id)
			.map(|node| node.subscribers.clone())
			.unwrap_or_default()
	}

	/// Queue a passive effect and make sure a flush is scheduled
	pub fn schedule_update(&self, node_id: NodeId) {
		{
			let mut pending = self.pending_updates.borrow_mut();
			if !pending.contains(&node_id) {
				pending.push(node_id);
			}
		}

		self.request_flush();
	}

	/// Hands a flush to the scheduler if effects are queued and none is in flight.
	///
	/// Without a scheduler the queue is left as is, so installing one later still
	/// flushes it.
	fn request_flush(&self) {
		if self.update_scheduled.get() || self.pending_updates.borrow().is_empty() {
			return;
		}

		let Some(scheduler) = SCHEDULER.with(|slot| slot.borrow().clone()) else {
			return;
		};
		self.update_scheduled.set(true);
		scheduler(Box::new(flush_updates));
	}

	/// Takes the queued effects and marks the queue as unscheduled.
	fn take_pending(&self) -> Vec<NodeId> {
		self.update_scheduled.set(false);
		std::mem::take(&mut *self.pending_updates.borrow_mut())
	}

	/// Clear dependencies for a node
	///
	/// Called before re-executing an Effect so stale dependencies are dropped.
	pub fn clear_dependencies(&self, node_id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();

		let dependencies = match graph.get_mut(&node_id) {
			Some(node) => std::mem::take(&mut node.dependencies),
			None => return,
		};

		for dep_id in dependencies {
			if let Some(dep_node) = graph.get_mut(&dep_id) {
				dep_node.subscribers.retain(|&id| id != node_id);
			}
		}
	}

	/// Remove a node from the dependency graph
	///
	/// Called when a Signal or Effect is dropped.
	pub fn remove_node(&self, node_id: NodeId) {
		self.clear_dependencies(node_id);
		self.dependency_graph.borrow_mut().remove(&node_id);
		self.pending_updates.borrow_mut().retain(|&id| id != node_id);
	}

	/// Check if a node exists in the dependency graph (for testing)
	pub fn has_node(&self, node_id: NodeId) -> bool {
		self.dependency_graph.borrow().contains_key(&node_id)
	}

	/// Get the number of subscribers for a node (for testing)
	pub fn subscriber_count(&self, node_id: NodeId) -> usize {
		self.dependency_graph
			.borrow()
			.get(&node_id)
			.map(|node| node.subscribers.len())
			.unwrap_or(0)
	}

	/// Get the number of queued passive effects
	pub fn pending_count(&self) -> usize {
		self.pending_updates.borrow().len()
	}
}

impl Default for Runtime {
	fn default() -> Self {
		Self::new()
	}
}

thread_local! {
	static RUNTIME: Runtime = Runtime::new();
}

/// Run a closure against the thread's runtime
pub fn with_runtime<F, R>(f: F) -> R
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.with(f)
}

/// Like [`with_runtime`], but returns `None` once thread-local storage is torn down.
///
/// Drop implementations use this.
pub(crate) fn try_with_runtime<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.try_with(f).ok()
}

/// Notify the runtime that a signal changed.
///
/// Layout subscribers run before this returns; passive subscribers are queued.
pub(crate) fn notify_signal_change(signal_id: NodeId) {
	let subscribers = with_runtime(|rt| rt.subscribers_of(signal_id));

	for subscriber_id in subscribers {
		match effect::effect_timing(subscriber_id) {
			Some(EffectTiming::Layout) => effect::execute_effect(subscriber_id),
			Some(EffectTiming::Passive) => with_runtime(|rt| rt.schedule_update(subscriber_id)),
			None => {}
		}
	}
}

/// Run every queued passive effect.
///
/// Effects that are queued while flushing run in the same call, so the queue is
/// empty when this returns.
pub fn flush_updates() {
	loop {
		let pending = with_runtime(|rt| rt.take_pending());
		if pending.is_empty() {
			break;
		}
		for effect_id in pending {
			effect::execute_effect(effect_id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial]
	fn test_node_id_uniqueness() {
		let id1 = NodeId::new();
		let id2 = NodeId::new();
		let id3 = NodeId::new();

		assert_ne!(id1, id2);
		assert_ne!(id2, id3);
		assert_ne!(id1, id3);
	}

	#[rstest]
	#[serial]
	fn test_runtime_observer_stack() {
		let runtime = Runtime::new();
		assert!(runtime.current_observer().is_none());

		let id1 = NodeId::new();
		let id2 = NodeId::new();

		runtime.push_observer(id1);
		assert_eq!(runtime.current_observer(), Some(id1));

		runtime.push_observer(id2);
		assert_eq!(runtime.current_observer(), Some(id2));

		runtime.pop_observer();
		assert_eq!(runtime.current_observer(), Some(id1));

		runtime.pop_observer();
		assert!(runtime.current_observer().is_none());
	}

	#[rstest]
	#[serial]
	fn test_dependency_tracking() {
		let runtime = Runtime::new();
		let signal_id = NodeId::new();
		let effect_id = NodeId::new();

		runtime.push_observer(effect_id);
		runtime.track_dependency(signal_id);
		runtime.pop_observer();

		let graph = runtime.dependency_graph.borrow();
		assert!(graph[&signal_id].subscribers.contains(&effect_id));
		assert!(graph[&effect_id].dependencies.contains(&signal_id));
	}

	#[rstest]
	#[serial]
	fn test_track_without_observer_is_noop() {
		let runtime = Runtime::new();
		let signal_id = NodeId::new();

		runtime.track_dependency(signal_id);

		assert!(!runtime.has_node(signal_id));
	}

	#[rstest]
	#[serial]
	fn test_schedule_update_deduplicates() {
		let runtime = Runtime::new();
		let effect_id = NodeId::new();

		runtime.schedule_update(effect_id);
		runtime.schedule_update(effect_id);

		assert_eq!(runtime.pending_count(), 1);
	}

	#[rstest]
	#[serial]
	fn test_clear_dependencies() {
		let runtime = Runtime::new();
		let signal_id = NodeId::new();
		let effect_id = NodeId::new();

		runtime.push_observer(effect_id);
		runtime.track_dependency(signal_id);
		runtime.pop_observer();

		runtime.clear_dependencies(effect_id);

		let graph = runtime.dependency_graph.borrow();
		assert!(!graph[&signal_id].subscribers.contains(&effect_id));
		assert!(graph[&effect_id].dependencies.is_empty());
	}

	#[rstest]
	#[serial]
	fn test_schedule_without_scheduler_does_not_block_later_flushes() {
		let runtime = Runtime::new();
		let effect_id = NodeId::new();

		runtime.schedule_update(effect_id);

		assert_eq!(runtime.pending_count(), 1);
		assert!(!runtime.update_scheduled.get());
	}

	#[rstest]
	#[serial]
	fn test_remove_node_drops_pending_update() {
		let runtime = Runtime::new();
		let effect_id = NodeId::new();

		runtime.schedule_update(effect_id);
		runtime.remove_node(effect_id);

		assert_eq!(runtime.pending_count(), 0);
	}
}
