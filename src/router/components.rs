//! Router Components for navigation.
//!
//! [`Link`] renders an anchor to a fragment path and [`RouterOutlet`] renders the
//! view bound to the current path.

use super::core::RouterContext;
use super::FRAGMENT_DELIMITER;
use crate::component::{Component, ElementView, IntoView, Props, View};
use crate::reactive::{Effect, EffectTiming};
use std::collections::HashMap;

/// A link to a fragment path.
///
/// Renders `<a href="#{to}">children</a>`. The target is not checked against the
/// route table and does not depend on the current route.
///
/// # Example
///
/// ```ignore
/// use hash_router::router::Link;
///
/// let link = Link::new("/about", "About");
/// assert_eq!(link.href().as_deref(), Some("#/about"));
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: Option<String>,
	/// Caller-supplied content, passed through untouched.
	children: View,
	/// Custom attributes.
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, children: impl IntoView) -> Self {
		Self {
			to: Some(to.into()),
			children: children.into_view(),
			attrs: Vec::new(),
		}
	}

	/// Creates a link from tag props; a missing `to` yields an anchor without `href`.
	pub fn from_props(props: LinkProps, children: impl IntoView) -> Self {
		Self {
			to: props.to,
			children: children.into_view(),
			attrs: Vec::new(),
		}
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> Option<&str> {
		self.to.as_deref()
	}

	/// Returns the activation target: the delimiter followed by `to`.
	pub fn href(&self) -> Option<String> {
		self.to.as_ref().map(|to| format!("{FRAGMENT_DELIMITER}{to}"))
	}
}

impl Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a");

		if let Some(href) = self.href() {
			el = el.attr("href", href);
		}

		for (name, value) in &self.attrs {
			el = el.attr(name.clone(), value.clone());
		}

		el.child(self.children.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// Props of the `router-link` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProps {
	/// Destination path. Required; a missing value is a call-site error.
	pub to: Option<String>,
}

impl Props for LinkProps {
	fn from_attrs(attrs: &HashMap<String, String>) -> Self {
		Self {
			to: attrs.get("to").cloned(),
		}
	}
}

/// Renders the view bound to the router's current path.
///
/// Rendering reads the current path tracked, so an outlet rendered inside an
/// effect follows navigation. See [`RouterOutlet::bind`].
#[derive(Debug, Clone)]
pub struct RouterOutlet {
	router: RouterContext,
}

impl RouterOutlet {
	/// Creates an outlet for `router`.
	pub fn new(router: RouterContext) -> Self {
		Self { router }
	}

	/// Renders now and again after every navigation, handing each view to `sink`.
	///
	/// Re-renders happen on the next flush of passive effects. Drop the returned
	/// effect to stop.
	pub fn bind<F>(self, sink: F) -> Effect
	where
		F: FnMut(View) + 'static,
	{
		self.bind_with_timing(sink, EffectTiming::Passive)
	}

	/// Like [`bind`](Self::bind) with an explicit effect timing.
	pub fn bind_with_timing<F>(self, mut sink: F, timing: EffectTiming) -> Effect
	where
		F: FnMut(View) + 'static,
	{
		Effect::new_with_timing(move || sink(self.render()), timing)
	}
}

impl Component for RouterOutlet {
	fn render(&self) -> View {
		self.router.render_current()
	}

	fn name() -> &'static str {
		"RouterOutlet"
	}
}
