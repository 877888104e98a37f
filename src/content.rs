//! Static site content: profile, stats, skills and project data.
//!
//! Every type is `Deserialize` with a content-bearing `Default`, so the
//! page renders without any bootstrap data and a host page can override
//! any subset of fields through a JSON island (see `load_portfolio_data`).

use serde::Deserialize;

/// Identity and hero copy.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
	/// Display name.
	pub name: String,
	/// Hero headline.
	pub headline: String,
	/// Hero paragraph under the headline.
	pub tagline: String,
	/// Badge text above the headline.
	pub availability: String,
	/// Short status line in the hero footer.
	pub status: String,
	/// Location line in the hero footer.
	pub location: String,
	/// Avatar image path.
	pub avatar: String,
	/// Link behind the primary call-to-action.
	pub work_url: String,
	/// Link behind the resume button.
	pub resume_url: String,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Creative Developer".into(),
			headline: "Creative Developer & Designer".into(),
			tagline: "I craft exceptional digital experiences that blend creativity \
			          with cutting-edge technology."
				.into(),
			availability: "Available for new opportunities".into(),
			status: "Currently available".into(),
			location: "Based in India".into(),
			avatar: "/assets/avatar.png".into(),
			work_url: "#projects".into(),
			resume_url: "#".into(),
		}
	}
}

/// One headline figure on the about section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
	/// Caption under the figure.
	pub label: String,
	/// The figure itself, e.g. "150+".
	pub value: String,
}

/// One principle card on the about section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValueCard {
	/// Card title.
	pub title: String,
	/// Card body.
	pub description: String,
}

/// A single skill with a proficiency level.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
	/// Skill name.
	pub name: String,
	/// Proficiency in percent, drawn as a bar.
	pub level: u8,
}

/// A titled group of skills.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
	/// Group heading.
	pub title: String,
	/// Skills in display order.
	pub skills: Vec<Skill>,
}

/// A portfolio project card.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Project {
	/// Project title.
	pub title: String,
	/// One-paragraph description.
	pub description: String,
	/// Technology tags.
	pub tags: Vec<String>,
	/// Source link.
	pub repo_url: String,
	/// Deployment link.
	pub live_url: String,
	/// Category badge, e.g. "Full Stack".
	pub category: String,
	/// Status badge, e.g. "Completed".
	pub status: String,
}

/// A footer social link.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SocialLink {
	/// Visible label.
	pub label: String,
	/// Target URL.
	pub url: String,
}

/// Complete site content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
	/// Identity and hero copy.
	pub profile: Profile,
	/// About-section figures.
	pub stats: Vec<Stat>,
	/// About-section principle cards.
	pub values: Vec<ValueCard>,
	/// Skill groups in display order.
	pub skill_groups: Vec<SkillGroup>,
	/// Project cards in display order.
	pub projects: Vec<Project>,
	/// Footer social links.
	pub socials: Vec<SocialLink>,
}

fn stat(value: &str, label: &str) -> Stat {
	Stat {
		value: value.into(),
		label: label.into(),
	}
}

fn skill(name: &str, level: u8) -> Skill {
	Skill {
		name: name.into(),
		level,
	}
}

impl Default for PortfolioData {
	fn default() -> Self {
		Self {
			profile: Profile::default(),
			stats: vec![
				stat("150+", "Projects Completed"),
				stat("80+", "Happy Clients"),
				stat("2000+", "Cups of Coffee"),
				stat("8+", "Years Experience"),
			],
			values: vec![
				ValueCard {
					title: "Passion-Driven".into(),
					description: "I pour my heart into every project, ensuring exceptional \
					              quality and attention to detail."
						.into(),
				},
				ValueCard {
					title: "Innovation First".into(),
					description: "Always exploring cutting-edge technologies to deliver \
					              modern, future-proof solutions."
						.into(),
				},
				ValueCard {
					title: "User-Centric".into(),
					description: "Every design decision is made with the end user in mind, \
					              creating intuitive experiences."
						.into(),
				},
			],
			skill_groups: vec![
				SkillGroup {
					title: "Frontend".into(),
					skills: vec![
						skill("React & Next.js", 95),
						skill("TypeScript", 92),
						skill("Tailwind CSS", 90),
						skill("Rust & WebAssembly", 85),
					],
				},
				SkillGroup {
					title: "Backend".into(),
					skills: vec![
						skill("Node.js", 90),
						skill("Python", 85),
						skill("PostgreSQL", 88),
						skill("GraphQL", 80),
					],
				},
				SkillGroup {
					title: "Design".into(),
					skills: vec![
						skill("Figma", 92),
						skill("UI/UX Design", 88),
						skill("Prototyping", 90),
						skill("Design Tokens", 85),
					],
				},
				SkillGroup {
					title: "Mobile & Cloud".into(),
					skills: vec![
						skill("React Native", 82),
						skill("AWS", 78),
						skill("Docker", 80),
						skill("CI/CD", 85),
					],
				},
			],
			projects: vec![
				Project {
					title: "E-Commerce Platform".into(),
					description: "A full-stack e-commerce solution with real-time inventory \
					              management and advanced analytics."
						.into(),
					tags: vec!["React".into(), "Node.js".into(), "MongoDB".into(), "Stripe".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "Full Stack".into(),
					status: "Completed".into(),
				},
				Project {
					title: "AI Task Manager".into(),
					description: "An intelligent task management app with AI-powered \
					              scheduling and collaborative features."
						.into(),
					tags: vec!["Next.js".into(), "TypeScript".into(), "Prisma".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "AI/ML".into(),
					status: "In Progress".into(),
				},
				Project {
					title: "Creative Portfolio".into(),
					description: "A portfolio website with animated backgrounds, interactive \
					              elements, and responsive design."
						.into(),
					tags: vec!["Rust".into(), "Leptos".into(), "WebAssembly".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "Frontend".into(),
					status: "Completed".into(),
				},
				Project {
					title: "Crypto Dashboard".into(),
					description: "Real-time cryptocurrency tracking dashboard with advanced \
					              charts and portfolio management."
						.into(),
					tags: vec!["Vue.js".into(), "D3.js".into(), "WebSocket".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "Data Viz".into(),
					status: "Completed".into(),
				},
				Project {
					title: "Social Media App".into(),
					description: "A social platform with real-time messaging, content \
					              sharing, and engagement features."
						.into(),
					tags: vec!["React Native".into(), "Firebase".into(), "Redux".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "Mobile".into(),
					status: "Completed".into(),
				},
				Project {
					title: "Learning Management System".into(),
					description: "Comprehensive LMS with course creation, progress tracking, \
					              and interactive quizzes."
						.into(),
					tags: vec!["React".into(), "Django".into(), "PostgreSQL".into()],
					repo_url: "#".into(),
					live_url: "#".into(),
					category: "Full Stack".into(),
					status: "Completed".into(),
				},
			],
			socials: vec![
				SocialLink {
					label: "GitHub".into(),
					url: "#".into(),
				},
				SocialLink {
					label: "LinkedIn".into(),
					url: "#".into(),
				},
				SocialLink {
					label: "Email".into(),
					url: "mailto:hello@example.com".into(),
				},
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_render_a_complete_site() {
		let data = PortfolioData::default();
		assert_eq!(data.stats.len(), 4);
		assert_eq!(data.values.len(), 3);
		assert_eq!(data.skill_groups.len(), 4);
		assert_eq!(data.projects.len(), 6);
		assert!(!data.profile.headline.is_empty());
		for group in &data.skill_groups {
			assert!(!group.skills.is_empty());
			for s in &group.skills {
				assert!(s.level <= 100);
			}
		}
	}

	#[test]
	fn partial_overrides_keep_defaults_elsewhere() {
		let json = r#"{"profile": {"name": "Ada"}, "projects": []}"#;
		let data: PortfolioData = serde_json::from_str(json).unwrap();
		assert_eq!(data.profile.name, "Ada");
		// Unspecified profile fields keep their defaults.
		assert_eq!(data.profile.headline, "Creative Developer & Designer");
		assert!(data.projects.is_empty());
		// Unspecified sections keep their defaults.
		assert_eq!(data.stats.len(), 4);
	}
}
