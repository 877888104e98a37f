//! dev-portfolio: animated single-page developer portfolio.
//!
//! This crate renders a WASM-based portfolio page: hero, about, skills,
//! projects and contact sections over an animated canvas particle
//! background, with light/dark theming and scroll-driven navigation.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::particle_background::{ParticleBackground, ThemeMode};
pub use content::PortfolioData;

use components::cursor_follower::CursorFollower;
use components::floating_nav::FloatingNav;
use components::scroll_progress::ScrollProgress;
use components::sections::{
	AboutSection, ContactSection, Footer, HeroSection, ProjectsSection, SkillsSection,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("dev-portfolio: logging initialized");
}

/// Load site content from a script element with id="portfolio-data".
/// Expected format: JSON matching [`PortfolioData`]; absent fields keep
/// their built-in defaults.
fn load_portfolio_data() -> Option<PortfolioData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PortfolioData>(&json_text) {
		Ok(data) => {
			info!(
				"dev-portfolio: loaded content island ({} projects, {} skill groups)",
				data.projects.len(),
				data.skill_groups.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("dev-portfolio: failed to parse content island: {}", e);
			None
		}
	}
}

/// Initial theme from the `prefers-color-scheme` media query.
///
/// Dark when the query is unavailable; the choice is never persisted.
fn initial_theme() -> ThemeMode {
	let prefers_dark = web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.map(|query| query.matches())
		.unwrap_or(true);
	if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
}

/// Main application component.
/// Owns the theme signal and composes the background, chrome and sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = RwSignal::new(initial_theme());
	provide_context(theme);

	let data = load_portfolio_data().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.get().as_str() />
		<Title text=format!("{} \u{2014} Portfolio", data.profile.name) />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground />
		<CursorFollower />
		<FloatingNav />
		<ScrollProgress />

		<main class="page">
			<HeroSection profile=data.profile.clone() />
			<AboutSection stats=data.stats.clone() values=data.values.clone() />
			<SkillsSection groups=data.skill_groups.clone() />
			<ProjectsSection projects=data.projects.clone() />
			<ContactSection socials=data.socials.clone() />
		</main>
		<Footer name=data.profile.name.clone() socials=data.socials.clone() />
	}
}
