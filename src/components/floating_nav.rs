//! Floating pill navigation with scroll-driven section highlighting.
//!
//! A window scroll listener (throttled) probes a line 200px below the top
//! of the viewport against each section's offsets and highlights the match.
//! Clicking an item smooth-scrolls to its section. The listener is removed
//! when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use super::theme_toggle::ThemeToggle;

/// Section anchors in page order.
const NAV_ITEMS: [(&str, &str); 5] = [
	("home", "Home"),
	("about", "About"),
	("skills", "Skills"),
	("projects", "Projects"),
	("contact", "Contact"),
];

/// Minimum spacing between scroll-spy probes, in milliseconds.
const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Offset of the probe line below the viewport top, in px.
const PROBE_OFFSET: f64 = 200.0;

/// The section the probe line currently falls into.
fn active_section_at_scroll() -> Option<&'static str> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let probe = window.scroll_y().ok()? + PROBE_OFFSET;

	for (id, _) in NAV_ITEMS {
		let Some(element) = document.get_element_by_id(id) else {
			continue;
		};
		let Ok(element) = element.dyn_into::<HtmlElement>() else {
			continue;
		};
		let top = element.offset_top() as f64;
		let height = element.offset_height() as f64;
		if probe >= top && probe < top + height {
			return Some(id);
		}
	}
	None
}

fn scroll_to_section(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Fixed navigation pill listing the page sections, with the theme toggle.
#[component]
pub fn FloatingNav() -> impl IntoView {
	let active = RwSignal::new("home");
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let scroll_cb_init = scroll_cb.clone();
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let mut last_probe = 0.0f64;
		*scroll_cb_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			if now - last_probe < SCROLL_THROTTLE_MS {
				return;
			}
			last_probe = now;
			if let Some(section) = active_section_at_scroll() {
				if active.get_untracked() != section {
					active.set(section);
				}
			}
		}));
		if let Some(ref cb) = *scroll_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}
	});

	let scroll_cb = SendWrapper::new(scroll_cb);
	on_cleanup(move || {
		if let Some(cb) = scroll_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let _ =
					window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<nav class="floating-nav">
			<div class="floating-nav-pill">
				{NAV_ITEMS
					.into_iter()
					.map(|(id, label)| {
						view! {
							<button
								class="nav-item"
								class:active=move || active.get() == id
								on:click=move |_| scroll_to_section(id)
							>
								{label}
							</button>
						}
					})
					.collect_view()}
				<span class="nav-divider" />
				<ThemeToggle />
			</div>
		</nav>
	}
}
