//! Component trait definition.

use super::into_view::View;

/// Trait for renderable units.
///
/// A component turns its inputs, plus any signals it reads while rendering, into a
/// [`View`]. Rendering inside an [`Effect`](crate::reactive::Effect) makes the
/// output follow those signals.
///
/// # Example
///
/// ```ignore
/// use hash_router::component::{Component, View};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> View {
///         View::element("p")
///             .child(format!("Hello, {}!", self.name))
///             .into_view()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
