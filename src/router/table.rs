//! Route table.
//!
//! An ordered, immutable list of path-to-view bindings. Paths are opaque keys
//! compared by exact string equality.

use crate::component::{Component, View};
use std::fmt;
use std::rc::Rc;

/// Shared factory producing the view bound to a route.
pub type ViewFactory = Rc<dyn Fn() -> View>;

/// A single path-to-view binding.
#[derive(Clone)]
pub struct RouteEntry {
	path: String,
	component: ViewFactory,
}

impl fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteEntry")
			.field("path", &self.path)
			.finish_non_exhaustive()
	}
}

impl RouteEntry {
	/// Binds `path` to a view function.
	pub fn new<F>(path: impl Into<String>, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			path: path.into(),
			component: Rc::new(component),
		}
	}

	/// Binds `path` to a component value, rendered on every outlet render.
	pub fn component<C: Component>(path: impl Into<String>, component: C) -> Self {
		Self::new(path, move || component.render())
	}

	/// Returns the route path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Renders the bound view.
	pub fn render(&self) -> View {
		(self.component)()
	}
}

/// Ordered list of routes.
///
/// Lookup is first-match: when several entries share a path, the one registered
/// first wins and the others are unreachable.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	entries: Vec<RouteEntry>,
}

impl RouteTable {
	/// Creates a table from entries, keeping their order.
	pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
		}
	}

	/// Returns the first entry whose path equals `path`.
	pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
		self.entries.iter().find(|entry| entry.path == path)
	}

	/// Renders the view bound to `path`, if any.
	pub fn render(&self, path: &str) -> Option<View> {
		self.lookup(path).map(RouteEntry::render)
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no routes are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn table() -> RouteTable {
		RouteTable::new([
			RouteEntry::new("/", || View::text("Home")),
			RouteEntry::new("/about", || View::text("About")),
			RouteEntry::new("/about", || View::text("About (shadowed)")),
		])
	}

	#[rstest]
	#[case("/", Some("Home"))]
	#[case("/about", Some("About"))]
	#[case("/missing", None)]
	#[case("", None)]
	#[case("/about/", None)]
	fn test_lookup(table: RouteTable, #[case] path: &str, #[case] expected: Option<&str>) {
		let rendered = table.render(path).map(|view| view.render_to_string());
		assert_eq!(rendered.as_deref(), expected);
	}

	#[rstest]
	fn test_duplicate_path_first_match_wins(table: RouteTable) {
		let entry = table.lookup("/about").unwrap();
		assert_eq!(entry.render(), View::text("About"));
	}

	#[rstest]
	fn test_order_and_len(table: RouteTable) {
		let paths: Vec<&str> = table.iter().map(RouteEntry::path).collect();
		assert_eq!(paths, vec!["/", "/about", "/about"]);
		assert_eq!(table.len(), 3);
		assert!(!table.is_empty());
	}

	#[rstest]
	fn test_empty_table() {
		let table = RouteTable::default();
		assert!(table.is_empty());
		assert!(table.lookup("/").is_none());
	}

	#[rstest]
	fn test_component_entry() {
		struct Banner;

		impl Component for Banner {
			fn render(&self) -> View {
				View::text("Banner")
			}

			fn name() -> &'static str {
				"Banner"
			}
		}

		let entry = RouteEntry::component("/banner", Banner);
		assert_eq!(entry.render(), View::text("Banner"));
		assert_eq!(format!("{:?}", entry), "RouteEntry { path: \"/banner\", .. }");
	}
}
