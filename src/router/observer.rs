//! Navigation observer.
//!
//! Bridges the environment's fragment into a reactive `current` path. The observer
//! is the only writer of that signal; everyone else gets a [`ReadSignal`].

use super::error::RouterError;
use super::location::Location;
use super::{DEFAULT_PATH, FRAGMENT_DELIMITER};
use crate::reactive::{ReadSignal, Signal};
use tracing::{debug, warn};

/// Strips the leading fragment delimiter, if present.
pub fn strip_delimiter(hash: &str) -> &str {
	hash.strip_prefix(FRAGMENT_DELIMITER).unwrap_or(hash)
}

/// Derives the startup path from a fragment: delimiter stripped, `"/"` when empty.
pub fn initial_path(hash: &str) -> String {
	match strip_delimiter(hash) {
		"" => DEFAULT_PATH.to_string(),
		path => path.to_string(),
	}
}

/// Owner of the reactive current path.
#[derive(Debug)]
pub struct NavigationObserver {
	current: Signal<String>,
	live: bool,
}

impl NavigationObserver {
	/// Seeds `current` from the location and subscribes to fragment changes.
	///
	/// Fails with [`RouterError::EventSourceUnavailable`] when the location cannot
	/// deliver fragment-change events.
	pub fn new(location: &dyn Location) -> Result<Self, RouterError> {
		let mut observer = Self::seeded(location);
		let current = observer.current.clone();

		location.on_hash_change(Box::new(move |hash: String| {
			let next = strip_delimiter(&hash).to_string();
			debug!(
				from = %current.get_untracked(),
				to = %next,
				"fragment changed"
			);
			current.set(next);
		}))?;

		observer.live = true;
		Ok(observer)
	}

	/// Like [`new`](Self::new), but keeps the initial path when the event source is
	/// unavailable instead of failing. Live updates are lost in that case.
	pub fn detached(location: &dyn Location) -> Self {
		match Self::new(location) {
			Ok(observer) => observer,
			Err(err) => {
				warn!(error = %err, "navigation observer running without live updates");
				Self::seeded(location)
			}
		}
	}

	fn seeded(location: &dyn Location) -> Self {
		Self {
			current: Signal::new(initial_path(&location.hash())),
			live: false,
		}
	}

	/// Returns a read-only handle to the current path.
	pub fn current(&self) -> ReadSignal<String> {
		self.current.read_only()
	}

	/// Returns the current path without tracking the read.
	pub fn path(&self) -> String {
		self.current.get_untracked()
	}

	/// Returns true when fragment-change events are being observed.
	pub fn is_live(&self) -> bool {
		self.live
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::MemoryLocation;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[case("", "/")]
	#[case("#", "/")]
	#[case("#/", "/")]
	#[case("#/about", "/about")]
	#[case("/about", "/about")]
	#[case("##x", "#x")]
	fn test_initial_path(#[case] hash: &str, #[case] expected: &str) {
		assert_eq!(initial_path(hash), expected);
	}

	#[rstest]
	#[serial]
	fn test_seeded_from_location() {
		let location = MemoryLocation::new("#/about");
		let observer = NavigationObserver::new(&location).unwrap();

		assert_eq!(observer.path(), "/about");
		assert!(observer.is_live());
		assert_eq!(location.listener_count(), 1);
	}

	#[rstest]
	#[serial]
	fn test_follows_fragment_changes() {
		let location = MemoryLocation::new("");
		let observer = NavigationObserver::new(&location).unwrap();
		let current = observer.current();

		location.set_hash("/a").unwrap();
		assert_eq!(current.get(), "/a");

		location.set_hash("/b").unwrap();
		assert_eq!(current.get(), "/b");
	}

	#[rstest]
	#[serial]
	fn test_cleared_fragment_is_empty_path() {
		let location = MemoryLocation::new("#/a");
		let observer = NavigationObserver::new(&location).unwrap();

		location.set_hash("").unwrap();

		assert_eq!(observer.path(), "");
	}

	#[rstest]
	#[serial]
	fn test_new_fails_without_event_source() {
		let location = MemoryLocation::without_events("#/a");

		let result = NavigationObserver::new(&location);

		assert!(matches!(result, Err(RouterError::EventSourceUnavailable(_))));
	}

	#[rstest]
	#[serial]
	fn test_detached_keeps_initial_path() {
		let location = MemoryLocation::without_events("#/a");

		let observer = NavigationObserver::detached(&location);

		assert_eq!(observer.path(), "/a");
		assert!(!observer.is_live());
	}
}
