//! Reading-progress bar pinned to the top of the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

/// Fraction of the page scrolled, in [0, 1].
fn scroll_fraction() -> Option<f64> {
	let window = web_sys::window()?;
	let document_element = window.document()?.document_element()?;
	let scroll_y = window.scroll_y().ok()?;
	let inner_height = window.inner_height().ok()?.as_f64()?;
	let total = document_element.scroll_height() as f64 - inner_height;
	if total <= 0.0 {
		return Some(0.0);
	}
	Some((scroll_y / total).clamp(0.0, 1.0))
}

/// Thin gradient bar whose width tracks scroll position.
#[component]
pub fn ScrollProgress() -> impl IntoView {
	let progress = RwSignal::new(0.0f64);
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let scroll_cb_init = scroll_cb.clone();
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		*scroll_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(fraction) = scroll_fraction() {
				progress.set(fraction);
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
		<div
			class="scroll-progress"
			style=move || format!("transform: scaleX({:.4});", progress.get())
		/>
	}
}
