//! Client-side fragment routing.
//!
//! - [`RouteTable`]: ordered, immutable path-to-view bindings (first match wins)
//! - [`NavigationObserver`]: the reactive current path, fed by fragment changes
//! - [`Link`] / [`RouterOutlet`]: the view binder
//! - [`Router`]: ties the three together; [`Router::install`] hands it to a host
//!
//! ```ignore
//! use hash_router::router::{MemoryLocation, Router, RouterOptions, RouterOutlet};
//! use hash_router::component::View;
//!
//! let location = MemoryLocation::new("");
//! let router = Router::new(
//!     RouterOptions::new()
//!         .route("/", || View::text("Home"))
//!         .route("/about", || View::text("About")),
//!     location.clone(),
//! )?
//! .into_context();
//!
//! let _effect = RouterOutlet::new(router).bind(|view| println!("{}", view.render_to_string()));
//! location.set_hash("/about")?;
//! ```

mod components;
mod core;
mod error;
mod install;
mod location;
mod observer;
mod table;

pub use components::{Link, LinkProps, RouterOutlet};
pub use self::core::{Router, RouterContext, RouterOptions};
pub use error::RouterError;
pub use install::{ComponentRegistry, LINK_TAG, OUTLET_TAG, TagFactory, TagInput, ViewHost};
#[cfg(target_arch = "wasm32")]
pub use location::BrowserLocation;
pub use location::{HashChangeListener, Location, MemoryLocation};
pub use observer::{NavigationObserver, initial_path, strip_delimiter};
pub use table::{RouteEntry, RouteTable, ViewFactory};

/// Marker separating the fragment from the rest of the navigation target.
pub const FRAGMENT_DELIMITER: &str = "#";

/// Path used when the fragment is empty at startup.
pub const DEFAULT_PATH: &str = "/";
