//! Signal - Observable Cell
//!
//! `Signal<T>` holds a value and records which effects read it. Writing the value
//! re-runs those effects.
//!
//! `ReadSignal<T>` is the read-only projection of a signal. It shares the value and
//! the dependency-graph node with the signal it came from but cannot write.
//!
//! ## Example
//!
//! ```ignore
//! use hash_router::reactive::Signal;
//!
//! let count = Signal::new(0);
//! assert_eq!(count.get(), 0);
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::runtime::{NodeId, notify_signal_change, try_with_runtime, with_runtime};

/// A reactive cell that tracks its readers
///
/// All clones of a `Signal` share the same value and the same node in the
/// dependency graph. The node is removed from the graph when the last clone
/// (including [`ReadSignal`] projections) is dropped.
pub struct Signal<T: 'static> {
	/// Unique identifier for this signal
	id: NodeId,
	/// The actual value, shared via reference counting
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::new(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Get the current value, tracking the read if an effect is running
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Get the current value without creating a dependency
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Borrow the current value, tracking the read
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		with_runtime(|rt| rt.track_dependency(self.id));
		f(&*self.value.borrow())
	}

	/// Set the signal to a new value and notify dependents
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		notify_signal_change(self.id);
	}

	/// Update the value in place and notify dependents once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		notify_signal_change(self.id);
	}

	/// Returns a read-only handle to this signal.
	pub fn read_only(&self) -> ReadSignal<T> {
		ReadSignal {
			inner: self.clone(),
		}
	}

	/// Get the NodeId of this signal
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			value: Rc::clone(&self.value),
		}
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &*self.value.borrow())
			.finish()
	}
}

/// Read-only view of a [`Signal`].
pub struct ReadSignal<T: 'static> {
	inner: Signal<T>,
}

impl<T: 'static> ReadSignal<T> {
	/// Get the current value, tracking the read if an effect is running
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.get()
	}

	/// Get the current value without creating a dependency
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.inner.get_untracked()
	}

	/// Borrow the current value, tracking the read
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.inner.with(f)
	}

	/// Get the NodeId of the underlying signal
	pub fn id(&self) -> NodeId {
		self.inner.id()
	}
}

impl<T: 'static> Clone for ReadSignal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for ReadSignal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadSignal").field(&self.inner).finish()
	}
}
