//! Leptos client-side app for exploring fractional matchings on small graphs.
//!
//! The edge-list handling in [`edges`] is plain Rust and runs anywhere; the
//! rest talks to the browser.

// undocumented public items fail unit-test builds
#![cfg_attr(test, deny(missing_docs))]

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// wasm32 entropy for `rand` comes from the `js` feature
use getrandom as _;

// Modules
pub(crate) mod api;
mod components;
pub(crate) mod config;
pub mod edges;
mod pages;
pub(crate) mod state;

// Top-Level pages
use crate::pages::about::About;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes the playground, the about page and 404's.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Matching playground" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/about") view=About />
			</Routes>
		</Router>
	}
}
