//! Decorative cursor-following dot and glow.
//!
//! Tracks `mousemove` on the window and positions two fixed elements under
//! the pointer. Purely visual; the elements ignore pointer events.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

/// Dot and glow elements that trail the mouse cursor.
#[component]
pub fn CursorFollower() -> impl IntoView {
	let position = RwSignal::new((-100.0f64, -100.0f64));
	let move_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));

	let move_cb_init = move_cb.clone();
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		*move_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			position.set((ev.client_x() as f64, ev.client_y() as f64));
		}));
		if let Some(ref cb) = *move_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
	});

	let move_cb = SendWrapper::new(move_cb);
	on_cleanup(move || {
		if let Some(cb) = move_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<div
			class="cursor-dot"
			style=move || {
				let (x, y) = position.get();
				format!("transform: translate({:.0}px, {:.0}px);", x - 4.0, y - 4.0)
			}
		/>
		<div
			class="cursor-glow"
			style=move || {
				let (x, y) = position.get();
				format!("transform: translate({:.0}px, {:.0}px);", x - 24.0, y - 24.0)
			}
		/>
	}
}
