//! Contact section: inert form markup and direct channels.
//!
//! The form performs no network I/O; submission is swallowed and logged.

use leptos::prelude::*;
use log::info;
use web_sys::SubmitEvent;

use crate::content::SocialLink;

/// Contact form plus the direct-channel links.
#[component]
pub fn ContactSection(socials: Vec<SocialLink>) -> impl IntoView {
	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		info!("contact: form submitted");
	};

	view! {
		<section id="contact" class="contact section">
			<h2 class="section-title">"Get In Touch"</h2>
			<div class="contact-grid">
				<form class="card glass contact-form" on:submit=on_submit>
					<label>
						"Name" <input type="text" name="name" placeholder="Your name" required />
					</label>
					<label>
						"Email"
						<input type="email" name="email" placeholder="you@example.com" required />
					</label>
					<label>
						"Message"
						<textarea name="message" rows="5" placeholder="Tell me about your project" />
					</label>
					<button class="button primary" type="submit">
						"Send Message"
					</button>
				</form>
				<div class="contact-channels">
					{socials
						.into_iter()
						.map(|s| {
							view! {
								<a class="card glass channel" href=s.url>
									{s.label}
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
