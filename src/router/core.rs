//! Core Router Implementation.
//!
//! The router owns the route table and the navigation observer. Views reach it
//! through an explicit [`RouterContext`].

use super::error::RouterError;
use super::location::Location;
use super::observer::NavigationObserver;
use super::table::{RouteEntry, RouteTable};
use super::FRAGMENT_DELIMITER;
use crate::component::{Component, View};
use crate::reactive::ReadSignal;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use tracing::{debug, info};

/// Router construction options.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
	/// Routes, in lookup order. Defaults to none.
	pub routes: Vec<RouteEntry>,
}

impl RouterOptions {
	/// Creates options with no routes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a route bound to a view function.
	pub fn route<F>(mut self, path: impl Into<String>, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(RouteEntry::new(path, component));
		self
	}

	/// Adds a route bound to a component value.
	pub fn component<C: Component>(mut self, path: impl Into<String>, component: C) -> Self {
		self.routes.push(RouteEntry::component(path, component));
		self
	}

	/// Adds a prebuilt entry.
	pub fn entry(mut self, entry: RouteEntry) -> Self {
		self.routes.push(entry);
		self
	}
}

/// The main router.
pub struct Router {
	routes: Rc<RouteTable>,
	observer: NavigationObserver,
	location: Rc<dyn Location>,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field("current_path", &self.observer.path())
			.field("live", &self.observer.is_live())
			.finish()
	}
}

impl Router {
	/// Creates a router bound to `location`.
	///
	/// Fails when the location cannot deliver fragment-change events.
	pub fn new(
		options: RouterOptions,
		location: impl Location + 'static,
	) -> Result<Self, RouterError> {
		let location: Rc<dyn Location> = Rc::new(location);
		let observer = NavigationObserver::new(location.as_ref())?;
		Ok(Self::assemble(options, observer, location))
	}

	/// Creates a router that keeps working, without live updates, when the location
	/// cannot deliver fragment-change events.
	pub fn detached(options: RouterOptions, location: impl Location + 'static) -> Self {
		let location: Rc<dyn Location> = Rc::new(location);
		let observer = NavigationObserver::detached(location.as_ref());
		Self::assemble(options, observer, location)
	}

	fn assemble(
		options: RouterOptions,
		observer: NavigationObserver,
		location: Rc<dyn Location>,
	) -> Self {
		let routes = Rc::new(RouteTable::new(options.routes));
		info!(
			routes = routes.len(),
			initial_path = %observer.path(),
			"router created"
		);
		Self {
			routes,
			observer,
			location,
		}
	}

	/// Returns the route table.
	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Returns a shared handle to the route table.
	pub fn shared_routes(&self) -> Rc<RouteTable> {
		Rc::clone(&self.routes)
	}

	/// Returns the current path signal.
	pub fn current_path(&self) -> ReadSignal<String> {
		self.observer.current()
	}

	/// Returns whether fragment changes are being observed.
	pub fn is_live(&self) -> bool {
		self.observer.is_live()
	}

	/// Navigates by writing the fragment.
	///
	/// `current` changes when the environment reports the fragment change, so the
	/// observer stays its only writer.
	pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
		debug!(to = %path, "navigating");
		self.location.set_hash(&format!("{FRAGMENT_DELIMITER}{path}"))
	}

	/// Renders the current route's component.
	///
	/// Reads `current` tracked, so calling this inside an effect re-renders on
	/// navigation. An unmatched path renders [`View::Empty`].
	pub fn render_current(&self) -> View {
		let path = self.observer.current().get();

		match self.routes.lookup(&path) {
			Some(entry) => entry.render(),
			None => {
				debug!(path = %path, "no route matches current path");
				View::Empty
			}
		}
	}

	/// Wraps the router into a shareable context.
	pub fn into_context(self) -> RouterContext {
		RouterContext(Rc::new(self))
	}
}

/// Explicit handle to an installed router.
///
/// Cloning is cheap; every clone refers to the same router.
#[derive(Clone)]
pub struct RouterContext(Rc<Router>);

impl RouterContext {
	/// Returns true when both handles refer to the same router.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Deref for RouterContext {
	type Target = Router;

	fn deref(&self) -> &Router {
		&self.0
	}
}

impl fmt::Debug for RouterContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("RouterContext").field(&*self.0).finish()
	}
}
