//! Landing section with headline, calls to action and avatar.

use leptos::prelude::*;

use crate::content::Profile;

/// Full-height hero with the availability badge, headline, primary links
/// and the framed avatar.
#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
	view! {
		<section id="home" class="hero section">
			<div class="hero-grid">
				<div class="hero-copy">
					<span class="badge glass">{profile.availability.clone()}</span>
					<h1 class="hero-headline">{profile.headline.clone()}</h1>
					<p class="hero-tagline">{profile.tagline.clone()}</p>
					<div class="hero-actions">
						<a class="button primary" href=profile.work_url.clone()>
							"View My Work"
						</a>
						<a class="button outline" href=profile.resume_url.clone()>
							"Download CV"
						</a>
					</div>
					<div class="hero-meta">
						<span class="status-dot" />
						<span>{profile.status.clone()}</span>
						<span>{profile.location.clone()}</span>
					</div>
				</div>
				<div class="hero-portrait glass">
					<img src=profile.avatar.clone() alt=profile.name.clone() />
				</div>
			</div>
		</section>
	}
}
