//! Canvas rendering for the particle background.
//!
//! One pass per frame: clear, particle discs with proximity links, then
//! comet streaks on top. All coordinates are CSS pixels; the context is
//! pre-scaled for device-pixel-ratio by the component.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{ParticleField, linked};

/// Repaint the whole field onto `ctx`.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	draw_particles(ctx, field);
	draw_comets(ctx, field);
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
	let link_distance = field.config().link_distance;
	let link_alpha = field.config().link_alpha;

	for (i, p) in field.particles.iter().enumerate() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&p.color.with_alpha(p.opacity).to_css());
		ctx.fill();

		// Pairwise scan is quadratic; the field caps the population at 30.
		for other in &field.particles[i + 1..] {
			if linked(p, other, link_distance) {
				ctx.begin_path();
				ctx.move_to(p.x, p.y);
				ctx.line_to(other.x, other.y);
				ctx.set_stroke_style_str(&p.color.with_alpha(link_alpha).to_css());
				ctx.set_line_width(0.5);
				ctx.stroke();
			}
		}
	}
}

fn draw_comets(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
	for c in &field.comets {
		ctx.begin_path();
		ctx.move_to(c.x, c.y);
		ctx.line_to(c.x - c.length, c.y - c.length);
		ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", c.opacity));
		ctx.set_line_width(1.0);
		ctx.stroke();
	}
}
