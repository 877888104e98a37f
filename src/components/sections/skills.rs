//! Skills section: grouped proficiency bars.

use leptos::prelude::*;

use crate::content::SkillGroup;

/// One card per skill group, each skill drawn as a labeled level bar.
#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> impl IntoView {
	view! {
		<section id="skills" class="skills section">
			<h2 class="section-title">"Skills & Expertise"</h2>
			<div class="skill-grid">
				{groups
					.into_iter()
					.map(|group| {
						view! {
							<div class="card glass skill-card">
								<h3>{group.title}</h3>
								{group
									.skills
									.into_iter()
									.map(|s| {
										let level = s.level.min(100);
										view! {
											<div class="skill-row">
												<div class="skill-row-head">
													<span>{s.name}</span>
													<span class="skill-level">
														{format!("{level}%")}
													</span>
												</div>
												<div class="skill-bar">
													<div
														class="skill-bar-fill"
														style=format!("width: {level}%;")
													/>
												</div>
											</div>
										}
									})
									.collect_view()}
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
