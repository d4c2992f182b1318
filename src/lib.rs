//! node-mesh: animated node-mesh background and page components for a
//! personal site.
//!
//! This crate provides a WASM-based page with a decorative particle animation
//! rendered on a canvas behind the content (drifting nodes linked by lines
//! that fade with distance), plus a grid of reference cards loaded from a
//! static JSON resource, a contact-details modal, and a contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::Level;

pub mod components;

pub use components::contact::ContactForm;
pub use components::network::{NetworkCanvas, NetworkConfig};
pub use components::references::{ContactModal, Reference, ReferenceGrid};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	log::info!("node-mesh: logging initialized");
}

/// Main application component.
/// Fullscreen animated background with the page content layered above it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NetworkCanvas />
		<main class="content">
			<ReferenceGrid />
			<section class="contact" id="contact">
				<h2>"Contact"</h2>
				<ContactForm />
			</section>
		</main>
	}
}
