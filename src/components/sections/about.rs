//! About section: headline figures and principle cards.

use leptos::prelude::*;

use crate::content::{Stat, ValueCard};

/// Stat grid plus the principle cards.
#[component]
pub fn AboutSection(stats: Vec<Stat>, values: Vec<ValueCard>) -> impl IntoView {
	view! {
		<section id="about" class="about section">
			<h2 class="section-title">"About Me"</h2>
			<div class="stat-grid">
				{stats
					.into_iter()
					.map(|s| {
						view! {
							<div class="card glass stat-card">
								<div class="stat-value">{s.value}</div>
								<div class="stat-label">{s.label}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
			<div class="value-grid">
				{values
					.into_iter()
					.map(|v| {
						view! {
							<div class="card glass value-card">
								<h3>{v.title}</h3>
								<p>{v.description}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
