//! Browser entry point.
//!
//! Wires a router to `window.location`, schedules passive effects as microtasks
//! and keeps a DOM element in sync with the outlet.
//!
//! ```ignore
//! use hash_router::launcher;
//! use hash_router::router::RouterOptions;
//! use hash_router::component::View;
//! use wasm_bindgen::prelude::*;
//!
//! #[wasm_bindgen(start)]
//! pub fn main() -> Result<(), JsValue> {
//!     let options = RouterOptions::new()
//!         .route("/", || View::text("Home"))
//!         .route("/about", || View::text("About"));
//!     launcher::start(options, "app").map_err(|e| JsValue::from_str(&e.to_string()))?;
//!     Ok(())
//! }
//! ```

use crate::reactive::{has_scheduler, set_scheduler};
use crate::router::{
	BrowserLocation, Router, RouterContext, RouterError, RouterOptions, RouterOutlet,
};
use tracing::info;

/// Routes passive effect flushes through the microtask queue.
pub fn install_microtask_scheduler() {
	set_scheduler(|task| {
		wasm_bindgen_futures::spawn_local(async move { task() });
	});
}

/// Creates a router on `window.location` and mounts its outlet into `#element_id`.
pub fn start(options: RouterOptions, element_id: &str) -> Result<RouterContext, RouterError> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	install_microtask_scheduler();

	let router = Router::new(options, BrowserLocation::new()?)?.into_context();
	mount(router.clone(), element_id)?;
	Ok(router)
}

/// Renders the outlet into `#element_id` and re-renders it after every navigation.
///
/// Installs the microtask scheduler unless one is already installed.
pub fn mount(router: RouterContext, element_id: &str) -> Result<(), RouterError> {
	if !has_scheduler() {
		install_microtask_scheduler();
	}

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| RouterError::MountFailed("no document".to_string()))?;
	let target = document
		.get_element_by_id(element_id)
		.ok_or_else(|| RouterError::MountFailed(format!("no #{} element found", element_id)))?;

	// SAFETY(XSS): render_to_string() escapes all text content and attribute values.
	let effect = RouterOutlet::new(router).bind(move |view| {
		target.set_inner_html(&view.render_to_string());
	});
	// The outlet stays bound for the lifetime of the page.
	std::mem::forget(effect);

	info!(element_id, "outlet mounted");
	Ok(())
}
