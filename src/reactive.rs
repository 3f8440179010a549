//! Fine-grained reactivity
//!
//! - [`Signal`]: an observable cell that records which effects read it
//! - [`ReadSignal`]: the read-only projection handed to consumers
//! - [`Effect`]: a computation that re-runs when the signals it read change
//!
//! Signal writes run [`EffectTiming::Layout`] effects before returning and queue
//! [`EffectTiming::Passive`] effects for the next [`flush_updates`], which the
//! installed scheduler triggers (see [`set_scheduler`]).

mod effect;
mod runtime;
mod signal;

pub use effect::Effect;
pub use runtime::{
	EffectTiming, NodeId, Runtime, Task, clear_scheduler, flush_updates, has_scheduler,
	set_scheduler, with_runtime,
};
pub use signal::{ReadSignal, Signal};
