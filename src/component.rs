//! Component System
//!
//! - **View / ElementView**: the render tree, with HTML string rendering
//! - **IntoView**: conversion of text, elements and options into views
//! - **Component**: a renderable unit
//! - **Props / Attrs**: typed inputs for components created by tag name
//!
//! ```ignore
//! use hash_router::component::{IntoView, View};
//!
//! let view = View::element("a").attr("href", "#/about").child("About").into_view();
//! assert_eq!(view.render_to_string(), "<a href=\"#/about\">About</a>");
//! ```

mod into_view;
mod props;
mod r#trait;

pub use into_view::{ElementView, IntoView, View, html_escape};
pub use props::{Attrs, Props};
pub use r#trait::Component;
