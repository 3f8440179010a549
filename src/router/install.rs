//! Installation into a host view layer.
//!
//! The host hands its capabilities to [`Router::install`] through the
//! [`ViewHost`] trait: component registration and a slot for the router context.
//! Installing registers the `router-link` and `router-view` tags.

use super::components::{Link, LinkProps, RouterOutlet};
use super::core::{Router, RouterContext};
use super::error::RouterError;
use crate::component::{Attrs, Component, IntoView, View};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::{error, info, warn};

/// Tag of the navigation-link component.
pub const LINK_TAG: &str = "router-link";
/// Tag of the route-outlet component.
pub const OUTLET_TAG: &str = "router-view";

/// Input handed to a [`TagFactory`].
pub struct TagInput<'a> {
	/// Attributes supplied at the call site.
	pub attrs: &'a Attrs,
	/// Child content supplied at the call site.
	pub children: View,
	/// The installed router, if any.
	pub router: Option<&'a RouterContext>,
}

/// Creates a view for a registered tag.
pub type TagFactory = Rc<dyn Fn(TagInput<'_>) -> Result<View, RouterError>>;

/// Capabilities a host view layer provides to the router.
pub trait ViewHost {
	/// Makes a component available under `tag` everywhere in the host.
	fn register_component(&mut self, tag: &'static str, factory: TagFactory);

	/// Makes the router reachable from every view the host creates.
	fn provide_router(&mut self, router: RouterContext);
}

impl Router {
	/// Installs the router into `host` and returns its context.
	///
	/// Must run before the host creates any view that uses the router.
	pub fn install<H: ViewHost + ?Sized>(self, host: &mut H) -> RouterContext {
		let ctx = self.into_context();
		host.provide_router(ctx.clone());
		host.register_component(LINK_TAG, Rc::new(create_link));
		host.register_component(OUTLET_TAG, Rc::new(create_outlet));
		info!(tags = ?[LINK_TAG, OUTLET_TAG], "router installed");
		ctx
	}
}

fn create_link(input: TagInput<'_>) -> Result<View, RouterError> {
	let props: LinkProps = input.attrs.build();
	if props.to.is_none() {
		warn!("{} created without a `to` target", LINK_TAG);
	}
	Ok(Link::from_props(props, input.children).render())
}

fn create_outlet(input: TagInput<'_>) -> Result<View, RouterError> {
	let router = require_router(input.router)?;
	Ok(RouterOutlet::new(router.clone()).render())
}

fn require_router(router: Option<&RouterContext>) -> Result<&RouterContext, RouterError> {
	router.ok_or_else(|| {
		error!("router used before Router::install");
		RouterError::NotInstalled
	})
}

/// In-memory [`ViewHost`]: creates registered components by tag name.
///
/// ```ignore
/// use hash_router::component::Attrs;
/// use hash_router::router::{ComponentRegistry, MemoryLocation, Router, RouterOptions};
///
/// let mut registry = ComponentRegistry::new();
/// Router::new(RouterOptions::default(), MemoryLocation::default())?
///     .install(&mut registry);
///
/// let link = registry.create("router-link", &Attrs::new().attr("to", "/about"), "About")?;
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
	components: BTreeMap<&'static str, TagFactory>,
	router: Option<RouterContext>,
}

impl fmt::Debug for ComponentRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentRegistry")
			.field("components", &self.components.keys().collect::<Vec<_>>())
			.field("router_installed", &self.router.is_some())
			.finish()
	}
}

impl ComponentRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the installed router.
	pub fn router(&self) -> Result<RouterContext, RouterError> {
		require_router(self.router.as_ref()).cloned()
	}

	/// Returns true when a component is registered under `tag`.
	pub fn has_component(&self, tag: &str) -> bool {
		self.components.contains_key(tag)
	}

	/// Creates the component registered under `tag`.
	pub fn create(
		&self,
		tag: &str,
		attrs: &Attrs,
		children: impl IntoView,
	) -> Result<View, RouterError> {
		let factory = self
			.components
			.get(tag)
			.ok_or_else(|| RouterError::UnknownComponent(tag.to_string()))?;

		factory(TagInput {
			attrs,
			children: children.into_view(),
			router: self.router.as_ref(),
		})
	}
}

impl ViewHost for ComponentRegistry {
	fn register_component(&mut self, tag: &'static str, factory: TagFactory) {
		self.components.insert(tag, factory);
	}

	fn provide_router(&mut self, router: RouterContext) {
		self.router = Some(router);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::{Location, MemoryLocation, RouterOptions};
	use rstest::rstest;
	use serial_test::serial;

	fn installed(hash: &str) -> (ComponentRegistry, MemoryLocation) {
		let location = MemoryLocation::new(hash);
		let mut registry = ComponentRegistry::new();
		Router::new(
			RouterOptions::new().route("/", || View::text("Home")),
			location.clone(),
		)
		.unwrap()
		.install(&mut registry);
		(registry, location)
	}

	#[rstest]
	#[serial]
	fn test_install_registers_tags_and_router() {
		let (registry, _location) = installed("");

		assert!(registry.has_component(LINK_TAG));
		assert!(registry.has_component(OUTLET_TAG));
		assert!(registry.router().is_ok());
	}

	#[rstest]
	#[serial]
	fn test_create_link() {
		let (registry, _location) = installed("");

		let view = registry
			.create(LINK_TAG, &Attrs::new().attr("to", "/about"), "About")
			.unwrap();

		assert_eq!(view.render_to_string(), "<a href=\"#/about\">About</a>");
	}

	#[rstest]
	#[serial]
	fn test_create_link_without_target_still_renders() {
		let (registry, _location) = installed("");

		let view = registry.create(LINK_TAG, &Attrs::new(), "About").unwrap();

		assert_eq!(view.render_to_string(), "<a>About</a>");
	}

	#[rstest]
	#[serial]
	fn test_create_outlet() {
		let (registry, location) = installed("");

		let home = registry.create(OUTLET_TAG, &Attrs::new(), View::Empty).unwrap();
		assert_eq!(home, View::text("Home"));

		location.set_hash("/missing").unwrap();
		let missing = registry.create(OUTLET_TAG, &Attrs::new(), View::Empty).unwrap();
		assert!(missing.is_empty());
	}

	#[rstest]
	fn test_router_before_install_fails_loudly() {
		let registry = ComponentRegistry::new();
		assert_eq!(registry.router().unwrap_err(), RouterError::NotInstalled);
	}

	#[rstest]
	fn test_outlet_factory_without_router_fails_loudly() {
		let mut registry = ComponentRegistry::new();
		registry.register_component(OUTLET_TAG, Rc::new(create_outlet));

		let result = registry.create(OUTLET_TAG, &Attrs::new(), View::Empty);

		assert_eq!(result.unwrap_err(), RouterError::NotInstalled);
	}

	#[rstest]
	fn test_unknown_tag() {
		let registry = ComponentRegistry::new();

		let result = registry.create("router-frame", &Attrs::new(), View::Empty);

		assert_eq!(
			result.unwrap_err(),
			RouterError::UnknownComponent("router-frame".to_string())
		);
	}
}
