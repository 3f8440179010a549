//! Browser tests for BrowserLocation and the launcher.
//!
//! Run with:
//!   wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use hash_router::component::View;
use hash_router::launcher;
use hash_router::reactive::{clear_scheduler, has_scheduler};
use hash_router::router::{BrowserLocation, Location, Router, RouterOptions};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn options() -> RouterOptions {
	RouterOptions::new()
		.route("/", || View::text("Home"))
		.route("/about", || View::text("About"))
}

fn reset_hash() {
	let location = BrowserLocation::new().unwrap();
	location.set_hash("").unwrap();
}

#[wasm_bindgen_test]
fn test_initial_path_from_window_hash() {
	let location = BrowserLocation::new().unwrap();
	location.set_hash("/about").unwrap();

	let router = Router::new(options(), location).unwrap();

	assert_eq!(router.current_path().get(), "/about");
	assert_eq!(router.render_current(), View::text("About"));
	reset_hash();
}

#[wasm_bindgen_test]
async fn test_hashchange_updates_current_path() {
	reset_hash();
	TimeoutFuture::new(0).await;

	let router = Router::new(options(), BrowserLocation::new().unwrap()).unwrap();
	router.navigate("/about").unwrap();

	// hashchange is delivered asynchronously
	TimeoutFuture::new(20).await;

	assert_eq!(router.current_path().get(), "/about");
	reset_hash();
}

#[wasm_bindgen_test]
async fn test_mount_keeps_element_in_sync() {
	reset_hash();
	TimeoutFuture::new(0).await;

	let document = web_sys::window().unwrap().document().unwrap();
	let app = document.create_element("div").unwrap();
	app.set_id("hash-router-test-app");
	document.body().unwrap().append_child(&app).unwrap();

	let router = launcher::start(options(), "hash-router-test-app").unwrap();
	assert_eq!(app.inner_html(), "Home");

	router.navigate("/about").unwrap();
	TimeoutFuture::new(20).await;

	assert_eq!(app.inner_html(), "About");
	reset_hash();
}

#[wasm_bindgen_test]
async fn test_mount_without_start_follows_navigation() {
	reset_hash();
	TimeoutFuture::new(0).await;
	clear_scheduler();

	let document = web_sys::window().unwrap().document().unwrap();
	let app = document.create_element("div").unwrap();
	app.set_id("hash-router-mount-app");
	document.body().unwrap().append_child(&app).unwrap();

	let router = Router::new(options(), BrowserLocation::new().unwrap())
		.unwrap()
		.into_context();
	launcher::mount(router.clone(), "hash-router-mount-app").unwrap();
	assert!(has_scheduler());
	assert_eq!(app.inner_html(), "Home");

	router.navigate("/about").unwrap();
	TimeoutFuture::new(20).await;

	assert_eq!(app.inner_html(), "About");
	reset_hash();
}

#[wasm_bindgen_test]
fn test_mount_missing_element_fails() {
	let router = Router::new(options(), BrowserLocation::new().unwrap())
		.unwrap()
		.into_context();

	assert!(launcher::mount(router, "no-such-element").is_err());
}
