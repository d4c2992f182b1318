//! Contact form.
//!
//! Three free-text fields. Submission is logged and the fields cleared; the
//! form never transmits anything over the network.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;

/// Contact form with name, email, and message fields.
#[component]
pub fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		info!(
			"node-mesh: contact form submitted: name={:?} email={:?} message={:?}",
			name.get_untracked(),
			email.get_untracked(),
			message.get_untracked()
		);
		name.set(String::new());
		email.set(String::new());
		message.set(String::new());
	};

	view! {
		<form class="contact-form" on:submit=on_submit>
			<input
				type="text"
				placeholder="Your Name"
				required
				prop:value=move || name.get()
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<input
				type="email"
				placeholder="Your Email"
				required
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
			/>
			<textarea
				placeholder="Your Message"
				required
				prop:value=move || message.get()
				on:input=move |ev| message.set(event_target_value(&ev))
			></textarea>
			<button type="submit">"Send Message"</button>
		</form>
	}
}
