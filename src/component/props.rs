//! Props for components created by tag name.

use std::collections::HashMap;

/// Trait for component properties.
///
/// Components created through a [`ComponentRegistry`](crate::router::ComponentRegistry)
/// receive their inputs as string attributes. `from_attrs` turns those into typed props.
///
/// # Example
///
/// ```ignore
/// use hash_router::component::Props;
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct BadgeProps {
///     label: String,
/// }
///
/// impl Props for BadgeProps {
///     fn from_attrs(attrs: &HashMap<String, String>) -> Self {
///         Self {
///             label: attrs.get("label").cloned().unwrap_or_default(),
///         }
///     }
/// }
/// ```
pub trait Props: Default {
	/// Constructs props from attributes.
	fn from_attrs(attrs: &HashMap<String, String>) -> Self;
}

/// Builder for the attribute map passed to [`Props::from_attrs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	attrs: HashMap<String, String>,
}

impl Attrs {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute value.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	/// Builds typed props.
	pub fn build<P: Props>(&self) -> P {
		P::from_attrs(&self.attrs)
	}

	/// Returns the raw attributes.
	pub fn as_map(&self) -> &HashMap<String, String> {
		&self.attrs
	}
}
