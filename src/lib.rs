//! hash-router - Fragment-based client-side router
//!
//! A minimal router for single-page applications. It tracks the navigation
//! fragment (`#/path`), exposes the current path as a reactive signal, and renders
//! the view registered for that path.
//!
//! ## Architecture
//!
//! - [`reactive`]: observable cells ([`Signal`], [`ReadSignal`]) and [`Effect`]s
//! - [`component`]: the render tree ([`View`]) and the [`Component`] trait
//! - [`router`]: route table, navigation observer, `Link` and `RouterOutlet`
//! - `launcher` (wasm32 only): binds a router to `window.location` and a DOM element
//!
//! Control flow: fragment change → the navigation observer writes the current path →
//! effects that rendered the outlet re-run → the outlet looks the path up in the
//! route table → the bound view is rendered.
//!
//! ## Example
//!
//! ```ignore
//! use hash_router::{ComponentRegistry, MemoryLocation, Router, RouterOptions, View};
//! use hash_router::component::Attrs;
//!
//! let location = MemoryLocation::new("");
//! let mut registry = ComponentRegistry::new();
//! Router::new(
//!     RouterOptions::new()
//!         .route("/", || View::text("Home"))
//!         .route("/about", || View::text("About")),
//!     location.clone(),
//! )?
//! .install(&mut registry);
//!
//! let nav = registry.create("router-link", &Attrs::new().attr("to", "/about"), "About")?;
//! assert_eq!(nav.render_to_string(), "<a href=\"#/about\">About</a>");
//!
//! location.set_hash("/about")?;
//! let page = registry.create("router-view", &Attrs::new(), View::Empty)?;
//! assert_eq!(page.render_to_string(), "About");
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod reactive;
pub mod router;

#[cfg(target_arch = "wasm32")]
pub mod launcher;

pub use component::{Component, IntoView, View};
pub use reactive::{Effect, ReadSignal, Signal};
pub use router::{
	ComponentRegistry, Link, MemoryLocation, RouteEntry, RouteTable, Router, RouterContext,
	RouterError, RouterOptions, RouterOutlet,
};
