//! Light/dark mode toggle button.

use leptos::prelude::*;

use super::particle_background::ThemeMode;

/// Round button flipping the site theme between light and dark.
///
/// Reads and writes the `RwSignal<ThemeMode>` provided by the app shell;
/// everything theme-dependent (palettes, blend mode, CSS hooks) follows
/// the signal.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = expect_context::<RwSignal<ThemeMode>>();

	view! {
		<button
			class="theme-toggle"
			aria-label="Toggle theme"
			on:click=move |_| theme.update(|mode| *mode = mode.toggled())
		>
			{move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263d}" }}
		</button>
	}
}
