//! Reference cards and the contact-details modal.
//!
//! The reference list is fetched once at page load from a static JSON
//! resource served next to the page. A failed fetch is logged and leaves the
//! grid empty; there is no retry.

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{MouseEvent, Response};

use super::types::Reference;

/// Path of the static reference list.
const REFERENCES_URL: &str = "assets/references.json";

async fn fetch_references() -> Result<Vec<Reference>, String> {
	let window = web_sys::window().ok_or("no window")?;
	let response: Response = JsFuture::from(window.fetch_with_str(REFERENCES_URL))
		.await
		.map_err(|e| format!("{e:?}"))?
		.dyn_into()
		.map_err(|e| format!("{e:?}"))?;
	let text = JsFuture::from(response.text().map_err(|e| format!("{e:?}"))?)
		.await
		.map_err(|e| format!("{e:?}"))?;
	let body = text.as_string().ok_or("response body is not text")?;
	serde_json::from_str(&body).map_err(|e| e.to_string())
}

/// Fetches the reference list once after mount and renders one card per
/// entry, each with a button opening the contact-details modal.
#[component]
pub fn ReferenceGrid() -> impl IntoView {
	let references = RwSignal::new(Vec::<Reference>::new());
	let selected = RwSignal::new(None::<Reference>);

	spawn_local(async move {
		match fetch_references().await {
			Ok(list) => {
				info!("node-mesh: loaded {} references", list.len());
				references.set(list);
			}
			Err(e) => warn!("node-mesh: failed to load references: {e}"),
		}
	});

	view! {
		<section class="references" id="references">
			<h2>"References"</h2>
			<div class="reference-grid">
				<For
					each=move || references.get()
					key=|reference| reference.name.clone()
					children=move |reference: Reference| {
						let entry = reference.clone();
						view! {
							<div class="reference-card">
								<h3>{reference.name}</h3>
								<p class="position">{reference.position}</p>
								<p class="relationship">{reference.relationship}</p>
								<button
									class="contact-btn"
									on:click=move |_| selected.set(Some(entry.clone()))
								>
									"Show Contact Info"
								</button>
							</div>
						}
					}
				/>
			</div>
			<ContactModal selected=selected />
		</section>
	}
}

/// Overlay showing the selected reference's contact details.
///
/// Closed by the close button or a click on the backdrop itself; clicks
/// inside the modal body bubble up but do not close it.
#[component]
pub fn ContactModal(
	/// The reference being shown, or `None` when the modal is hidden.
	selected: RwSignal<Option<Reference>>,
) -> impl IntoView {
	let on_backdrop = move |ev: MouseEvent| {
		if ev.target() == ev.current_target() {
			selected.set(None);
		}
	};

	view! {
		<div
			class="modal-overlay"
			class:active=move || selected.get().is_some()
			on:click=on_backdrop
		>
			{move || {
				selected
					.get()
					.map(|reference| {
						view! {
							<div class="modal">
								<button class="close-btn" on:click=move |_| selected.set(None)>
									"×"
								</button>
								<img src=reference.image alt=reference.name.clone() />
								<h3>{reference.name}</h3>
								<p class="position">{reference.position}</p>
								<p>{format!("Email: {}", reference.email)}</p>
								<p>{format!("Phone: {}", reference.phone)}</p>
							</div>
						}
					})
			}}
		</div>
	}
}
