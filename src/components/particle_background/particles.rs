//! Ambient particle field drawn behind the page content.
//!
//! The field owns every particle and comet between two regeneration events.
//! Generation is deterministic: the random sequence is seeded from the
//! viewport dimensions, so the same (config, width, height) inputs always
//! produce the same field.

use super::theme::{Color, Palette};

/// Tunable parameters of the particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Hard cap on the particle count regardless of viewport size.
	pub max_particles: usize,
	/// Viewport area (CSS px²) represented by one particle.
	pub area_per_particle: f64,
	/// Half-range of the initial per-axis velocity, in px per frame.
	pub max_speed: f64,
	/// Smallest particle radius.
	pub size_min: f64,
	/// Largest particle radius (exclusive).
	pub size_max: f64,
	/// Lowest particle opacity.
	pub opacity_min: f64,
	/// Highest particle opacity (exclusive).
	pub opacity_max: f64,
	/// Shortest initial/respawn lifetime, in ticks of decay.
	pub life_min: f64,
	/// Longest initial/respawn lifetime (exclusive).
	pub life_max: f64,
	/// Lifetime subtracted each tick.
	pub life_decay: f64,
	/// Maximum distance at which two particles get a connecting line.
	pub link_distance: f64,
	/// Stroke alpha of connecting lines.
	pub link_alpha: f64,
	/// Number of comet streaks.
	pub comet_count: usize,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 30,
			area_per_particle: 20_000.0,
			max_speed: 0.15,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.1,
			opacity_max: 0.4,
			life_min: 100.0,
			life_max: 200.0,
			life_decay: 0.5,
			link_distance: 100.0,
			link_alpha: 16.0 / 255.0,
			comet_count: 3,
		}
	}
}

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in CSS px.
	pub x: f64,
	/// Vertical position in CSS px.
	pub y: f64,
	/// Horizontal velocity in px per frame.
	pub vx: f64,
	/// Vertical velocity in px per frame.
	pub vy: f64,
	/// Radius, fixed at creation.
	pub size: f64,
	/// Opacity, fixed at creation.
	pub opacity: f64,
	/// Palette color.
	pub color: Color,
	/// Remaining lifetime; reaching zero respawns the particle in place.
	pub life: f64,
}

/// A streak sweeping diagonally across the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Comet {
	/// Head position, horizontal.
	pub x: f64,
	/// Head position, vertical.
	pub y: f64,
	/// Tail length in px.
	pub length: f64,
	/// Advance per frame on both axes.
	pub speed: f64,
	/// Stroke opacity.
	pub opacity: f64,
}

/// Owns the particle and comet collections between regeneration events.
///
/// Created once when the background component mounts, then mutated each
/// frame by the animation loop. The collection size only changes through
/// [`ParticleField::regenerate`]; expired particles are reset in place.
pub struct ParticleField {
	/// Particles, constant count between regenerations.
	pub particles: Vec<Particle>,
	/// Comet streaks.
	pub comets: Vec<Comet>,
	config: FieldConfig,
	width: f64,
	height: f64,
	entropy: f64,
}

/// Whether two particles are close enough for a connecting line.
pub fn linked(a: &Particle, b: &Particle, link_distance: f64) -> bool {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	(dx * dx + dy * dy).sqrt() < link_distance
}

/// Deterministic pseudo-random draw in [0, 1), advancing the sequence.
fn next_random(entropy: &mut f64) -> f64 {
	*entropy += 1.0;
	let x = (*entropy * 12.9898).sin() * 43758.5453;
	x - x.floor()
}

/// Deterministic pseudo-random draw in [lo, hi).
fn random_range(entropy: &mut f64, lo: f64, hi: f64) -> f64 {
	lo + next_random(entropy) * (hi - lo)
}

impl ParticleField {
	/// Build a field for the given viewport, colored from `palette`.
	pub fn new(config: FieldConfig, width: f64, height: f64, palette: &Palette) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			comets: Vec::new(),
			config,
			width,
			height,
			entropy: 0.0,
		};
		field.regenerate(width, height, palette);
		field
	}

	/// Particle count for a viewport: one per `area_per_particle`, capped.
	pub fn target_count(config: &FieldConfig, width: f64, height: f64) -> usize {
		let by_area = (width * height / config.area_per_particle).floor() as usize;
		by_area.min(config.max_particles)
	}

	/// Discard and rebuild every particle and comet for a new viewport.
	///
	/// Reseeds the random sequence from the dimensions, so regeneration at
	/// identical dimensions reproduces the field exactly.
	pub fn regenerate(&mut self, width: f64, height: f64, palette: &Palette) {
		self.width = width;
		self.height = height;
		self.entropy = width * 0.37 + height * 0.73;

		let count = Self::target_count(&self.config, width, height);
		self.particles.clear();
		for _ in 0..count {
			let color_index = (next_random(&mut self.entropy) * palette.len() as f64) as usize;
			self.particles.push(Particle {
				x: random_range(&mut self.entropy, 0.0, width),
				y: random_range(&mut self.entropy, 0.0, height),
				vx: random_range(&mut self.entropy, -self.config.max_speed, self.config.max_speed),
				vy: random_range(&mut self.entropy, -self.config.max_speed, self.config.max_speed),
				size: random_range(&mut self.entropy, self.config.size_min, self.config.size_max),
				opacity: random_range(
					&mut self.entropy,
					self.config.opacity_min,
					self.config.opacity_max,
				),
				color: palette.get(color_index),
				life: random_range(&mut self.entropy, self.config.life_min, self.config.life_max),
			});
		}

		self.comets.clear();
		for _ in 0..self.config.comet_count {
			self.comets.push(Comet {
				x: random_range(&mut self.entropy, 0.0, width),
				y: random_range(&mut self.entropy, 0.0, height),
				length: random_range(&mut self.entropy, 20.0, 70.0),
				speed: random_range(&mut self.entropy, 1.0, 4.0),
				opacity: random_range(&mut self.entropy, 0.3, 1.0),
			});
		}
	}

	/// Advance every particle and comet by one simulation tick.
	///
	/// Position moves by velocity, lifetime decays, and a velocity component
	/// flips sign when its axis crosses a viewport edge. Reflection is not a
	/// clamp: a particle may overshoot the edge for a frame before the
	/// flipped velocity carries it back. Expired particles respawn in place
	/// with a fresh position and lifetime, keeping velocity, size, opacity
	/// and color.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			p.life -= self.config.life_decay;
			if p.x < 0.0 || p.x > w {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > h {
				p.vy = -p.vy;
			}
			if p.life <= 0.0 {
				p.x = random_range(&mut self.entropy, 0.0, w);
				p.y = random_range(&mut self.entropy, 0.0, h);
				p.life = random_range(&mut self.entropy, self.config.life_min, self.config.life_max);
			}
		}

		for c in &mut self.comets {
			c.x += c.speed;
			c.y += c.speed;
			if c.x > w || c.y > h {
				c.x = -c.length;
				c.y = random_range(&mut self.entropy, 0.0, h * 0.5);
			}
		}
	}

	/// Remap every particle's color into a new palette, in place.
	///
	/// Theme-change path: positions, velocities and lifetimes are untouched,
	/// so motion stays continuous across a toggle.
	pub fn retheme(&mut self, palette: &Palette) {
		for (i, p) in self.particles.iter_mut().enumerate() {
			p.color = palette.get(i);
		}
	}

	/// Current viewport width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current viewport height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Field tunables.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_background::theme::Palette;

	fn field(width: f64, height: f64) -> ParticleField {
		ParticleField::new(FieldConfig::default(), width, height, &Palette::dark())
	}

	#[test]
	fn count_follows_area_with_a_cap() {
		// 800 * 600 / 20000 = 24, under the cap.
		assert_eq!(field(800.0, 600.0).particles.len(), 24);
		// Large viewports saturate at 30.
		assert_eq!(field(1920.0, 1080.0).particles.len(), 30);
		// Tiny viewports round down to zero.
		assert_eq!(field(100.0, 100.0).particles.len(), 0);
	}

	#[test]
	fn generation_is_reproducible_for_identical_inputs() {
		let a = field(800.0, 600.0);
		let b = field(800.0, 600.0);
		assert_eq!(a.particles, b.particles);
		assert_eq!(a.comets, b.comets);
	}

	#[test]
	fn generated_attributes_stay_in_range() {
		let f = field(1280.0, 720.0);
		for p in &f.particles {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
			assert!((1.0..3.0).contains(&p.size));
			assert!((0.1..0.4).contains(&p.opacity));
			assert!((100.0..200.0).contains(&p.life));
		}
		assert_eq!(f.comets.len(), 3);
		for c in &f.comets {
			assert!((20.0..70.0).contains(&c.length));
			assert!((1.0..4.0).contains(&c.speed));
			assert!((0.3..1.0).contains(&c.opacity));
		}
	}

	#[test]
	fn zero_ticks_is_the_identity() {
		let a = field(800.0, 600.0);
		let b = field(800.0, 600.0);
		// No step() calls on either: collections must match exactly.
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn one_tick_moves_by_velocity_and_decays_life() {
		let mut f = field(800.0, 600.0);
		let before = f.particles[0].clone();
		f.step();
		let after = &f.particles[0];
		assert!((after.x - (before.x + before.vx)).abs() < 1e-9);
		assert!((after.y - (before.y + before.vy)).abs() < 1e-9);
		assert!((after.life - (before.life - 0.5)).abs() < 1e-9);
	}

	#[test]
	fn crossing_an_edge_flips_that_axis_velocity() {
		let mut f = field(800.0, 600.0);
		f.particles[0].x = 799.95;
		f.particles[0].y = 300.0;
		f.particles[0].vx = 0.2;
		f.particles[0].vy = 0.0;
		f.particles[0].life = 500.0;
		f.step();
		// 799.95 + 0.2 = 800.15 > 800: the x component reflects.
		assert!(f.particles[0].x > 800.0);
		assert!((f.particles[0].vx - -0.2).abs() < 1e-9);
		assert_eq!(f.particles[0].vy, 0.0);
	}

	#[test]
	fn no_particle_escapes_permanently() {
		let mut f = field(800.0, 600.0);
		for _ in 0..10_000 {
			f.step();
		}
		for p in &f.particles {
			assert!(p.x.is_finite() && p.y.is_finite());
			assert!((-1.0..=801.0).contains(&p.x), "x escaped: {}", p.x);
			assert!((-1.0..=601.0).contains(&p.y), "y escaped: {}", p.y);
		}
	}

	#[test]
	fn expired_particles_respawn_keeping_identity() {
		let mut f = field(800.0, 600.0);
		f.particles[0].life = 0.4; // expires on the first tick
		f.particles[0].x = 400.0;
		f.particles[0].y = 300.0;
		let before = f.particles[0].clone();
		f.step();
		let after = &f.particles[0];
		assert!((100.0..200.0).contains(&after.life));
		assert!((0.0..800.0).contains(&after.x));
		assert!((0.0..600.0).contains(&after.y));
		assert_eq!(after.size, before.size);
		assert_eq!(after.opacity, before.opacity);
		assert_eq!(after.color, before.color);
		assert_eq!(after.vx, before.vx);
	}

	#[test]
	fn life_strictly_decreases_until_reset() {
		let mut f = field(800.0, 600.0);
		let mut last = f.particles[0].life;
		let mut saw_reset = false;
		for _ in 0..500 {
			f.step();
			let life = f.particles[0].life;
			if life > last {
				// A reset lands back in the configured respawn range.
				assert!((100.0..200.0).contains(&life));
				saw_reset = true;
			} else {
				assert!((last - life - 0.5).abs() < 1e-9);
			}
			last = life;
		}
		assert!(saw_reset, "500 ticks must exhaust an initial life of at most 200");
	}

	#[test]
	fn retheme_remaps_colors_in_place_only() {
		let mut f = ParticleField::new(
			FieldConfig::default(),
			800.0,
			600.0,
			&Palette::light(),
		);
		let positions: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();
		let dark = Palette::dark();
		f.retheme(&dark);
		for (i, p) in f.particles.iter().enumerate() {
			assert_eq!(p.color, dark.get(i));
			assert_eq!((p.x, p.y), positions[i]);
		}
	}

	#[test]
	fn links_form_inside_the_distance_threshold() {
		let mut f = field(800.0, 600.0);
		f.particles[0].x = 10.0;
		f.particles[0].y = 10.0;
		f.particles[1].x = 50.0;
		f.particles[1].y = 50.0;
		// Distance is about 56.6, inside the 100px threshold.
		assert!(linked(&f.particles[0], &f.particles[1], 100.0));
		f.particles[1].x = 150.0;
		f.particles[1].y = 150.0;
		// About 198 apart: no line.
		assert!(!linked(&f.particles[0], &f.particles[1], 100.0));
	}

	#[test]
	fn comets_wrap_past_the_far_edges() {
		let mut f = field(800.0, 600.0);
		f.comets[0].x = 801.0;
		f.comets[0].y = 100.0;
		let length = f.comets[0].length;
		f.step();
		assert_eq!(f.comets[0].x, -length);
		assert!((0.0..300.0).contains(&f.comets[0].y));
	}

	#[test]
	fn regenerate_resizes_the_population() {
		let mut f = field(800.0, 600.0);
		assert_eq!(f.particles.len(), 24);
		f.regenerate(400.0, 300.0, &Palette::dark());
		// 400 * 300 / 20000 = 6
		assert_eq!(f.particles.len(), 6);
		assert_eq!(f.width(), 400.0);
		assert_eq!(f.height(), 300.0);
	}
}
