//! Particle field data and per-tick motion rules.
//!
//! Pure geometry with no `web-sys` dependency: the field owns the particle
//! records and advances them; drawing is a separate pass in the render module.

use super::config::Attraction;

/// Drawing surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Surface width.
	pub width: f64,
	/// Surface height.
	pub height: f64,
}

/// Last known pointer location, absent when the pointer left the window or on
/// a touch-only layout where no mouse events ever fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
	position: Option<(f64, f64)>,
}

impl PointerState {
	/// Record the pointer at `(x, y)`.
	pub fn set(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	/// Mark the pointer absent.
	pub fn clear(&mut self) {
		self.position = None;
	}

	/// The pointer position, if present.
	pub fn get(&self) -> Option<(f64, f64)> {
		self.position
	}
}

/// A single animated point. Plain data in a contiguous sequence, mutated in
/// place every tick; created once at seeding and never destroyed.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity, applied once per tick.
	pub vx: f64,
	/// Vertical velocity, applied once per tick.
	pub vy: f64,
	/// Draw radius, also the bounce margin at viewport edges.
	pub radius: f64,
}

/// Deterministic pseudo-random in [0, 1) from a seed (sin-hash), so a given
/// count and viewport always produce the same field.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// Owns the particle collection and advances it once per animation tick.
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Seed `count` particles at uniformly random positions within the
	/// viewport, with velocity components drawn uniformly from [-1, 1].
	pub fn new(count: usize, viewport: Viewport, radius: f64) -> Self {
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			let seed = i as f64 + 1.0;
			particles.push(Particle {
				x: pseudo_random(seed * 1.1) * viewport.width,
				y: pseudo_random(seed * 2.3) * viewport.height,
				vx: pseudo_random(seed * 3.7) * 2.0 - 1.0,
				vy: pseudo_random(seed * 4.1) * 2.0 - 1.0,
				radius,
			});
		}

		Self { particles }
	}

	/// Discard the current particles and seed a fresh field. Called when a
	/// resize crosses the device breakpoint and the particle count changes.
	pub fn reseed(&mut self, count: usize, viewport: Viewport, radius: f64) {
		*self = Self::new(count, viewport, radius);
	}

	/// Current particles, in seeding order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Advance every particle by one tick:
	///
	/// 1. invert a velocity component when the particle sits outside the
	///    radius margin of an edge *and* is moving further out; the direction
	///    condition makes the inversion idempotent per crossing, so a particle
	///    inside the margin but already heading back in is left alone;
	/// 2. if the pointer is present within `attraction.radius`, nudge the
	///    position toward it by `attraction.pull` of the delta per axis, a
	///    soft pull that approaches the pointer without ever snapping to it;
	/// 3. add velocity to position.
	///
	/// Positions may overshoot the viewport by at most one step; they are
	/// never clamped.
	pub fn tick(&mut self, pointer: Option<(f64, f64)>, viewport: Viewport, attraction: &Attraction) {
		for p in &mut self.particles {
			if (p.x - p.radius < 0.0 && p.vx < 0.0)
				|| (p.x + p.radius > viewport.width && p.vx > 0.0)
			{
				p.vx = -p.vx;
			}
			if (p.y - p.radius < 0.0 && p.vy < 0.0)
				|| (p.y + p.radius > viewport.height && p.vy > 0.0)
			{
				p.vy = -p.vy;
			}

			if let Some((mx, my)) = pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				if (dx * dx + dy * dy).sqrt() < attraction.radius {
					p.x += dx * attraction.pull;
					p.y += dy * attraction.pull;
				}
			}

			p.x += p.vx;
			p.y += p.vy;
		}
	}

	#[cfg(test)]
	fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ATTRACTION: Attraction = Attraction {
		radius: 80.0,
		pull: 0.02,
	};

	fn viewport() -> Viewport {
		Viewport {
			width: 800.0,
			height: 600.0,
		}
	}

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 3.0,
		}
	}

	#[test]
	fn seeding_places_particles_inside_the_viewport() {
		let field = ParticleField::new(400, viewport(), 3.0);
		assert_eq!(field.particles().len(), 400);
		for p in field.particles() {
			assert!(p.x >= 0.0 && p.x <= 800.0, "x out of range: {}", p.x);
			assert!(p.y >= 0.0 && p.y <= 600.0, "y out of range: {}", p.y);
			assert!(p.vx >= -1.0 && p.vx <= 1.0, "vx out of range: {}", p.vx);
			assert!(p.vy >= -1.0 && p.vy <= 1.0, "vy out of range: {}", p.vy);
			assert_eq!(p.radius, 3.0);
		}
	}

	#[test]
	fn seeding_is_reproducible() {
		let a = ParticleField::new(50, viewport(), 3.0);
		let b = ParticleField::new(50, viewport(), 3.0);
		for (p, q) in a.particles().iter().zip(b.particles()) {
			assert_eq!((p.x, p.y, p.vx, p.vy), (q.x, q.y, q.vx, q.vy));
		}
	}

	#[test]
	fn positions_stay_bounded_over_many_ticks() {
		let mut field = ParticleField::new(100, viewport(), 3.0);
		for _ in 0..2000 {
			field.tick(None, viewport(), &ATTRACTION);
		}
		// One step of overshoot is tolerated; velocities stay in [-1, 1].
		for p in field.particles() {
			assert!(p.x >= -1.0 && p.x <= 801.0, "x escaped: {}", p.x);
			assert!(p.y >= -1.0 && p.y <= 601.0, "y escaped: {}", p.y);
		}
	}

	#[test]
	fn outward_motion_at_edge_flips_velocity_once() {
		let mut field = ParticleField::from_particles(vec![Particle {
			x: 0.0,
			y: 300.0,
			vx: -1.0,
			vy: 0.0,
			radius: 3.0,
		}]);

		field.tick(None, viewport(), &ATTRACTION);
		let p = field.particles()[0];
		assert_eq!(p.vx, 1.0);
		assert_eq!(p.x, 1.0);

		// Still inside the radius margin, but moving inward: no second flip.
		field.tick(None, viewport(), &ATTRACTION);
		let p = field.particles()[0];
		assert_eq!(p.vx, 1.0);
		assert_eq!(p.x, 2.0);
	}

	#[test]
	fn right_edge_flips_rightward_motion() {
		let mut field = ParticleField::from_particles(vec![Particle {
			x: 799.0,
			y: 300.0,
			vx: 1.0,
			vy: 0.0,
			radius: 3.0,
		}]);
		field.tick(None, viewport(), &ATTRACTION);
		let p = field.particles()[0];
		assert_eq!(p.vx, -1.0);
		assert_eq!(p.x, 798.0);
	}

	#[test]
	fn pointer_absent_applies_no_nudge() {
		let mut field = ParticleField::from_particles(vec![still_particle(100.0, 100.0)]);
		field.tick(None, viewport(), &ATTRACTION);
		let p = field.particles()[0];
		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn pointer_within_radius_pulls_softly() {
		let mut field = ParticleField::from_particles(vec![still_particle(100.0, 100.0)]);
		field.tick(Some((150.0, 100.0)), viewport(), &ATTRACTION);
		let p = field.particles()[0];
		// 2% of the 50-unit delta, velocity contributes nothing.
		assert!((p.x - 101.0).abs() < 1e-9);
		assert_eq!(p.y, 100.0);
	}

	#[test]
	fn pointer_beyond_radius_has_no_effect() {
		let mut field = ParticleField::from_particles(vec![still_particle(100.0, 100.0)]);
		field.tick(Some((200.0, 100.0)), viewport(), &ATTRACTION);
		let p = field.particles()[0];
		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn pull_never_snaps_to_the_pointer() {
		let mut field = ParticleField::from_particles(vec![still_particle(100.0, 100.0)]);
		for _ in 0..500 {
			field.tick(Some((140.0, 100.0)), viewport(), &ATTRACTION);
		}
		let p = field.particles()[0];
		assert!(p.x < 140.0, "particle snapped past the pointer: {}", p.x);
		assert!(p.x > 139.0, "particle should have closed most of the gap");
	}

	#[test]
	fn empty_field_tick_is_a_noop() {
		let mut field = ParticleField::from_particles(Vec::new());
		field.tick(Some((10.0, 10.0)), viewport(), &ATTRACTION);
		assert!(field.particles().is_empty());
	}

	#[test]
	fn pointer_state_round_trip() {
		let mut pointer = PointerState::default();
		assert_eq!(pointer.get(), None);
		pointer.set(12.0, 34.0);
		assert_eq!(pointer.get(), Some((12.0, 34.0)));
		pointer.clear();
		assert_eq!(pointer.get(), None);
	}
}
