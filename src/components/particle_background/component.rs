//! Leptos component owning the background canvas and its animation loop.
//!
//! The component mounts a full-viewport canvas, generates a particle field
//! sized to the viewport, and drives an update-then-render loop via
//! `requestAnimationFrame`. A window resize regenerates the field at the
//! new dimensions; a theme change remaps particle colors in place. Tearing
//! the component down cancels the pending frame callback and removes the
//! resize listener, so no callback outlives the canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::{FieldConfig, ParticleField};
use super::render;
use super::theme::{Palette, ThemeMode};

/// Everything the frame loop mutates, behind one `RefCell`.
///
/// Dropped at cleanup; a frame callback that finds it gone skips its work.
struct SimContext {
	field: ParticleField,
	ctx: CanvasRenderingContext2d,
	mode: ThemeMode,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
		window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
	)
}

/// Size the backing store for the device pixel ratio and rescale the
/// context so all drawing happens in CSS pixels. Returns the CSS size.
///
/// Assigning `width`/`height` resets the context state, so the scale must
/// be reapplied on every call.
fn fit_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	window: &Window,
) -> (f64, f64) {
	let dpr = window.device_pixel_ratio().max(1.0);
	let (w, h) = viewport_size(window);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.scale(dpr, dpr);
	(w, h)
}

fn schedule_frame(window: &Window, cb: &Closure<dyn FnMut()>, handle: &Rc<Cell<Option<i32>>>) {
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(id) => handle.set(Some(id)),
		Err(_) => warn!("particle background: failed to schedule a frame"),
	}
}

/// Full-viewport animated particle canvas, rendered behind page content.
///
/// Reads the site theme from context; the canvas blend mode follows the
/// mode (additive over dark, subtractive over light) and particle colors
/// are remapped into the matching palette when it changes.
#[component]
pub fn ParticleBackground() -> impl IntoView {
	let theme = expect_context::<RwSignal<ThemeMode>>();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let sim: Rc<RefCell<Option<SimContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (sim_init, animate_init, resize_cb_init, raf_init) = (
		sim.clone(),
		animate.clone(),
		resize_cb.clone(),
		raf_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let ctx = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particle background: 2d context has an unexpected type");
					return;
				}
			},
			_ => {
				warn!("particle background: no 2d context, background disabled");
				return;
			}
		};

		let (w, h) = fit_canvas(&canvas, &ctx, &window);
		let mode = theme.get_untracked();
		let field = ParticleField::new(FieldConfig::default(), w, h, &Palette::for_mode(mode));
		info!(
			"particle background: {} particles over {:.0}x{:.0}",
			field.particles.len(),
			w,
			h
		);
		*sim_init.borrow_mut() = Some(SimContext { field, ctx, mode });

		let (sim_resize, canvas_resize) = (sim_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let window: Window = web_sys::window().unwrap();
			if let Some(ref mut c) = *sim_resize.borrow_mut() {
				let (nw, nh) = fit_canvas(&canvas_resize, &c.ctx, &window);
				c.field.regenerate(nw, nh, &Palette::for_mode(c.mode));
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (sim_anim, animate_inner, raf_anim) =
			(sim_init.clone(), animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// The surface can vanish mid-teardown; skip the frame and stop
			// rescheduling once the context is gone.
			match *sim_anim.borrow_mut() {
				Some(ref mut c) => {
					c.field.step();
					render::draw(&c.ctx, &c.field);
				}
				None => return,
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				schedule_frame(&web_sys::window().unwrap(), cb, &raf_anim);
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			schedule_frame(&window, cb, &raf_init);
		}
	});

	let sim_theme = sim.clone();
	Effect::new(move |_| {
		let mode = theme.get();
		if let Some(ref mut c) = *sim_theme.borrow_mut() {
			if c.mode != mode {
				c.field.retheme(&Palette::for_mode(mode));
				c.mode = mode;
			}
		}
	});

	let cleanup = SendWrapper::new((sim, animate, resize_cb, raf_handle));
	on_cleanup(move || {
		let (sim_cleanup, animate_cleanup, resize_cleanup, raf_cleanup) = &*cleanup;
		// Drop the context first so an already-queued frame skips its work,
		// then cancel the pending callback and detach the listener.
		*sim_cleanup.borrow_mut() = None;
		if let Some(window) = web_sys::window() {
			if let Some(handle) = raf_cleanup.take() {
				let _ = window.cancel_animation_frame(handle);
			}
			if let Some(cb) = resize_cleanup.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		*animate_cleanup.borrow_mut() = None;
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style=move || {
				format!(
					"position: fixed; inset: 0; width: 100vw; height: 100vh; z-index: -1; \
					 pointer-events: none; opacity: 0.8; mix-blend-mode: {};",
					theme.get().blend_mode()
				)
			}
		/>
	}
}
