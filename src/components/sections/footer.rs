//! Footer: social links, copyright line, back-to-top.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::SocialLink;

fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Closing strip with social links and a smooth back-to-top button.
#[component]
pub fn Footer(name: String, socials: Vec<SocialLink>) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year() as u32;

	view! {
		<footer class="footer">
			<div class="footer-socials">
				{socials
					.into_iter()
					.map(|s| {
						view! {
							<a class="footer-link" href=s.url>
								{s.label}
							</a>
						}
					})
					.collect_view()}
			</div>
			<p class="footer-copy">{format!("\u{a9} {year} {name}. All rights reserved.")}</p>
			<button class="button outline to-top" on:click=move |_| scroll_to_top()>
				"Back to top"
			</button>
		</footer>
	}
}
