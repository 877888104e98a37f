//! Projects section: card grid with tags, badges and links.

use leptos::prelude::*;

use crate::content::Project;

/// Card grid over the project list.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
	view! {
		<section id="projects" class="projects section">
			<h2 class="section-title">"Featured Projects"</h2>
			<div class="project-grid">
				{projects
					.into_iter()
					.map(|p| {
						view! {
							<article class="card glass project-card">
								<div class="project-badges">
									<span class="badge">{p.category}</span>
									<span class="badge subtle">{p.status}</span>
								</div>
								<h3>{p.title}</h3>
								<p>{p.description}</p>
								<div class="project-tags">
									{p.tags
										.into_iter()
										.map(|t| view! { <span class="tag">{t}</span> })
										.collect_view()}
								</div>
								<div class="project-links">
									<a class="button outline" href=p.repo_url>
										"Source"
									</a>
									<a class="button primary" href=p.live_url>
										"Live"
									</a>
								</div>
							</article>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
