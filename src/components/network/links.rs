//! Proximity links between particles.
//!
//! A pure pass over the current particle positions: every unordered pair
//! within the link threshold yields a segment whose alpha fades linearly with
//! distance. No state is retained between frames. The pass is O(n²) by
//! design: at the default 400 particles that is ~80k distance checks per
//! frame, which the canvas redraw cost already dominates.

use super::field::Particle;

/// Distance under which two particles are connected by a faded line.
pub const LINK_THRESHOLD: f64 = 100.0;

/// A line segment between two nearby particles.
#[derive(Clone, Copy, Debug)]
pub struct LinkSegment {
	/// First endpoint x.
	pub x1: f64,
	/// First endpoint y.
	pub y1: f64,
	/// Second endpoint x.
	pub x2: f64,
	/// Second endpoint y.
	pub y2: f64,
	/// Fade alpha in (0, 1].
	pub alpha: f64,
}

/// Fade alpha for a pair at `distance`: fully opaque at 0, exactly 0 at
/// `threshold`, and `None` at or beyond it (the pair is not linked).
pub fn link_alpha(distance: f64, threshold: f64) -> Option<f64> {
	if distance < threshold {
		Some(1.0 - distance / threshold)
	} else {
		None
	}
}

/// Visit every linked unordered pair `(i, j)`, `i < j`, in index order.
pub fn visit_links(particles: &[Particle], threshold: f64, mut f: impl FnMut(LinkSegment)) {
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let (a, b) = (&particles[i], &particles[j]);
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if let Some(alpha) = link_alpha(distance, threshold) {
				f(LinkSegment {
					x1: a.x,
					y1: a.y,
					x2: b.x,
					y2: b.y,
					alpha,
				});
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 3.0,
		}
	}

	fn collect(particles: &[Particle]) -> Vec<LinkSegment> {
		let mut segments = Vec::new();
		visit_links(particles, LINK_THRESHOLD, |seg| segments.push(seg));
		segments
	}

	#[test]
	fn alpha_is_linear_falloff() {
		assert_eq!(link_alpha(0.0, 100.0), Some(1.0));
		assert_eq!(link_alpha(5.0, 100.0), Some(0.95));
		assert_eq!(link_alpha(50.0, 100.0), Some(0.5));
	}

	#[test]
	fn alpha_is_monotonically_decreasing() {
		let mut previous = f64::INFINITY;
		for step in 0..100 {
			let alpha = link_alpha(step as f64, 100.0).unwrap();
			assert!(alpha < previous, "alpha not decreasing at d={step}");
			previous = alpha;
		}
	}

	#[test]
	fn alpha_vanishes_at_the_threshold() {
		// Approaches 0 from above, then the pair is no longer linked at all.
		assert!(link_alpha(99.999, 100.0).unwrap() > 0.0);
		assert!(link_alpha(99.999, 100.0).unwrap() < 1e-4);
		assert_eq!(link_alpha(100.0, 100.0), None);
		assert_eq!(link_alpha(250.0, 100.0), None);
	}

	#[test]
	fn two_close_particles_yield_one_segment() {
		// Distance 5 on an 800x600 surface: one segment, alpha 0.95.
		let segments = collect(&[particle(10.0, 10.0), particle(15.0, 10.0)]);
		assert_eq!(segments.len(), 1);
		let seg = &segments[0];
		assert!((seg.alpha - 0.95).abs() < 1e-9);
		assert_eq!((seg.x1, seg.y1), (10.0, 10.0));
		assert_eq!((seg.x2, seg.y2), (15.0, 10.0));
	}

	#[test]
	fn distant_particles_yield_nothing() {
		assert!(collect(&[particle(0.0, 0.0), particle(200.0, 0.0)]).is_empty());
	}

	#[test]
	fn no_particles_yield_nothing() {
		assert!(collect(&[]).is_empty());
		assert!(collect(&[particle(10.0, 10.0)]).is_empty());
	}

	#[test]
	fn every_unordered_pair_is_visited_once() {
		let segments = collect(&[
			particle(0.0, 0.0),
			particle(10.0, 0.0),
			particle(0.0, 10.0),
		]);
		assert_eq!(segments.len(), 3);
	}
}
