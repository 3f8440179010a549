//! Navigation environment.
//!
//! The router only needs three things from its host: the current fragment, a way
//! to write it, and a fragment-change event. [`Location`] captures that contract.
//!
//! - [`BrowserLocation`] (wasm32): `window.location.hash` and the `hashchange` event
//! - [`MemoryLocation`]: an in-process fragment with synchronous event delivery

use super::error::RouterError;
use super::FRAGMENT_DELIMITER;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Callback invoked with the new fragment (delimiter included) on every change.
pub type HashChangeListener = Box<dyn FnMut(String)>;

/// Host capabilities consumed by the router.
pub trait Location {
	/// Returns the current fragment, including the leading delimiter when present.
	fn hash(&self) -> String;

	/// Replaces the fragment. A change fires the fragment-change event.
	fn set_hash(&self, hash: &str) -> Result<(), RouterError>;

	/// Registers a listener for fragment changes.
	///
	/// The listener stays registered for the lifetime of the location.
	fn on_hash_change(&self, listener: HashChangeListener) -> Result<(), RouterError>;
}

/// Normalizes a fragment the way `location.hash` does on assignment.
fn normalize_hash(hash: &str) -> String {
	if hash.is_empty() || hash == FRAGMENT_DELIMITER {
		String::new()
	} else if hash.starts_with(FRAGMENT_DELIMITER) {
		hash.to_string()
	} else {
		format!("{FRAGMENT_DELIMITER}{hash}")
	}
}

#[derive(Default)]
struct MemoryInner {
	hash: RefCell<String>,
	listeners: RefCell<Vec<HashChangeListener>>,
	queue: RefCell<VecDeque<String>>,
	dispatching: Cell<bool>,
	events_disabled: bool,
}

/// In-process [`Location`].
///
/// Fragment changes are delivered synchronously, in order. A change made by a
/// listener while an event is being delivered is queued and delivered after it.
/// Setting the fragment to its current value fires nothing, as in a browser.
#[derive(Clone, Default)]
pub struct MemoryLocation {
	inner: Rc<MemoryInner>,
}

impl std::fmt::Debug for MemoryLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryLocation")
			.field("hash", &*self.inner.hash.borrow())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl MemoryLocation {
	/// Creates a location with the given initial fragment.
	pub fn new(hash: &str) -> Self {
		Self {
			inner: Rc::new(MemoryInner {
				hash: RefCell::new(normalize_hash(hash)),
				..MemoryInner::default()
			}),
		}
	}

	/// Creates a location whose fragment-change event source is unavailable.
	pub fn without_events(hash: &str) -> Self {
		Self {
			inner: Rc::new(MemoryInner {
				hash: RefCell::new(normalize_hash(hash)),
				events_disabled: true,
				..MemoryInner::default()
			}),
		}
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	fn dispatch(&self) {
		if self.inner.dispatching.replace(true) {
			return;
		}

		loop {
			let next = self.inner.queue.borrow_mut().pop_front();
			let Some(hash) = next else {
				break;
			};

			let mut listeners = std::mem::take(&mut *self.inner.listeners.borrow_mut());
			for listener in listeners.iter_mut() {
				listener(hash.clone());
			}

			// Listeners registered during delivery go after the existing ones.
			let mut slot = self.inner.listeners.borrow_mut();
			listeners.append(&mut slot);
			*slot = listeners;
		}

		self.inner.dispatching.set(false);
	}
}

impl Location for MemoryLocation {
	fn hash(&self) -> String {
		self.inner.hash.borrow().clone()
	}

	fn set_hash(&self, hash: &str) -> Result<(), RouterError> {
		let hash = normalize_hash(hash);
		if *self.inner.hash.borrow() == hash {
			return Ok(());
		}

		*self.inner.hash.borrow_mut() = hash.clone();
		self.inner.queue.borrow_mut().push_back(hash);
		self.dispatch();
		Ok(())
	}

	fn on_hash_change(&self, listener: HashChangeListener) -> Result<(), RouterError> {
		if self.inner.events_disabled {
			return Err(RouterError::EventSourceUnavailable(
				"memory location created without events".to_string(),
			));
		}
		self.inner.listeners.borrow_mut().push(listener);
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{HashChangeListener, Location};
	use crate::router::error::RouterError;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Event, Window};

	/// [`Location`] backed by `window.location` and the `hashchange` event.
	#[derive(Debug, Clone)]
	pub struct BrowserLocation {
		window: Window,
	}

	impl BrowserLocation {
		/// Binds to the global `window`.
		pub fn new() -> Result<Self, RouterError> {
			let window = web_sys::window().ok_or_else(|| {
				RouterError::EventSourceUnavailable("no global window".to_string())
			})?;
			Ok(Self { window })
		}
	}

	impl Location for BrowserLocation {
		fn hash(&self) -> String {
			self.window.location().hash().unwrap_or_default()
		}

		fn set_hash(&self, hash: &str) -> Result<(), RouterError> {
			self.window
				.location()
				.set_hash(hash)
				.map_err(|e| RouterError::NavigationFailed(format!("{:?}", e)))
		}

		fn on_hash_change(&self, mut listener: HashChangeListener) -> Result<(), RouterError> {
			let window = self.window.clone();
			let closure = Closure::wrap(Box::new(move |_event: Event| {
				let hash = window.location().hash().unwrap_or_default();
				listener(hash);
			}) as Box<dyn FnMut(_)>);

			self.window
				.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
				.map_err(|e| RouterError::EventSourceUnavailable(format!("{:?}", e)))?;

			// The listener lives as long as the page.
			closure.forget();
			Ok(())
		}
	}
}
