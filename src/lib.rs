pub mod app;
pub mod backend;
pub mod config;
pub mod main_page;
pub mod session;
pub mod signup;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	console_error_panic_hook::set_once();
	leptos::mount::hydrate_islands();
}
