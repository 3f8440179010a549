//! Effect - Dependent Computations
//!
//! An `Effect` runs a closure once when created and again whenever a signal it read
//! during its last run changes. Dependencies are re-collected on every run.
//!
//! ## Example
//!
//! ```ignore
//! use hash_router::reactive::{Effect, Signal, flush_updates};
//!
//! let path = Signal::new("/".to_string());
//!
//! let _effect = Effect::new({
//!     let path = path.clone();
//!     move || println!("path is now {}", path.get())
//! });
//!
//! path.set("/about".to_string());
//! flush_updates(); // Prints: "path is now /about"
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::runtime::{EffectTiming, NodeId, try_with_runtime, with_runtime};

type EffectFn = Box<dyn FnMut() + 'static>;

struct EffectSlot {
	/// `None` while the effect is running.
	f: Option<EffectFn>,
	timing: EffectTiming,
}

thread_local! {
	static EFFECTS: RefCell<BTreeMap<NodeId, EffectSlot>> = const { RefCell::new(BTreeMap::new()) };
}

/// Get the timing for an effect by its ID.
///
/// Returns `None` if no live effect has this ID.
pub(crate) fn effect_timing(effect_id: NodeId) -> Option<EffectTiming> {
	EFFECTS.with(|storage| storage.borrow().get(&effect_id).map(|slot| slot.timing))
}

/// Run an effect by its ID, re-collecting its dependencies.
///
/// An effect that is already running is skipped, which stops an effect that writes
/// one of its own dependencies from recursing.
pub(crate) fn execute_effect(effect_id: NodeId) {
	let taken = EFFECTS.with(|storage| {
		storage
			.borrow_mut()
			.get_mut(&effect_id)
			.and_then(|slot| slot.f.take())
	});
	let Some(mut f) = taken else {
		return;
	};

	with_runtime(|rt| {
		rt.clear_dependencies(effect_id);
		rt.push_observer(effect_id);
	});
	f();
	with_runtime(|rt| rt.pop_observer());

	// The effect may have been dropped while it ran.
	let orphaned = EFFECTS.with(move |storage| match storage.borrow_mut().get_mut(&effect_id) {
		Some(slot) => {
			slot.f = Some(f);
			None
		}
		None => Some(f),
	});
	drop(orphaned);
}

/// A computation that re-runs when the signals it reads change
///
/// Dropping the `Effect` unsubscribes it. Keep the handle alive for as long as the
/// output should stay in sync.
#[derive(Debug)]
pub struct Effect {
	/// Unique identifier for this effect
	id: NodeId,
}

impl Effect {
	/// Create a passive Effect and run it once immediately
	///
	/// Later runs happen on the next flush after a dependency changes.
	pub fn new<F>(f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		Self::new_with_timing(f, EffectTiming::Passive)
	}

	/// Create an Effect with the given timing and run it once immediately
	pub fn new_with_timing<F>(f: F, timing: EffectTiming) -> Self
	where
		F: FnMut() + 'static,
	{
		let id = NodeId::new();

		EFFECTS.with(|storage| {
			storage.borrow_mut().insert(
				id,
				EffectSlot {
					f: Some(Box::new(f)),
					timing,
				},
			);
		});

		execute_effect(id);

		Self { id }
	}

	/// Get the NodeId of this effect
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Get the execution timing of this effect
	pub fn timing(&self) -> EffectTiming {
		effect_timing(self.id).unwrap_or_default()
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		let removed = EFFECTS
			.try_with(|storage| storage.borrow_mut().remove(&self.id))
			.ok()
			.flatten();
		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		drop(removed);
	}
}
