//! Animation tuning and the device-size branch.

use super::links::LINK_THRESHOLD;
use super::theme::NetworkTheme;

/// Pointer-attraction tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attraction {
	/// Distance within which the pointer pulls on a particle.
	pub radius: f64,
	/// Fraction of the pointer delta applied to position per axis each tick.
	pub pull: f64,
}

/// Particle count and attraction responsiveness for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
	/// Number of particles to seed.
	pub particle_count: usize,
	/// Pointer attraction for this class.
	pub attraction: Attraction,
}

/// Tuning for the whole animation. Defaults reproduce the original page:
/// 400 particles, 80-unit attraction with a 2% pull, 100-unit links, red
/// nodes and links.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	/// Width below which the narrow profile applies.
	pub breakpoint: f64,
	/// Profile for viewports at or above the breakpoint.
	pub wide: DeviceProfile,
	/// Reduced profile for narrow viewports, bounding per-frame cost.
	pub narrow: DeviceProfile,
	/// Distance under which two particles are linked.
	pub link_threshold: f64,
	/// Colors and stroke sizes.
	pub theme: NetworkTheme,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			breakpoint: 768.0,
			wide: DeviceProfile {
				particle_count: 400,
				attraction: Attraction {
					radius: 80.0,
					pull: 0.02,
				},
			},
			narrow: DeviceProfile {
				particle_count: 120,
				attraction: Attraction {
					radius: 80.0,
					pull: 0.01,
				},
			},
			link_threshold: LINK_THRESHOLD,
			theme: NetworkTheme::default(),
		}
	}
}

impl NetworkConfig {
	/// Select the device profile for a viewport width. An explicit branch,
	/// not a continuous function of width.
	pub fn profile_for_width(&self, width: f64) -> DeviceProfile {
		if width < self.breakpoint {
			self.narrow
		} else {
			self.wide
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_selection_is_a_step_function_of_width() {
		let config = NetworkConfig::default();

		let wide = config.profile_for_width(1920.0);
		assert_eq!(wide.particle_count, 400);
		assert_eq!(wide.attraction.pull, 0.02);

		let narrow = config.profile_for_width(480.0);
		assert_eq!(narrow.particle_count, 120);
		assert_eq!(narrow.attraction.pull, 0.01);

		// The breakpoint itself belongs to the wide class.
		assert_eq!(config.profile_for_width(768.0), config.wide);
		assert_eq!(config.profile_for_width(767.9), config.narrow);
	}

	#[test]
	fn attraction_radius_is_shared_across_profiles() {
		let config = NetworkConfig::default();
		assert_eq!(config.wide.attraction.radius, 80.0);
		assert_eq!(config.narrow.attraction.radius, 80.0);
	}
}
