//! Tunable parameters for the particle field.
//!
//! Every field has a default, so a partial JSON object (or none at all) is a
//! valid configuration.

use log::warn;
use serde::Deserialize;

use crate::components::theme::ThemeMode;

/// Hard ceiling on `max_particles`, whatever the page asks for.
pub const PARTICLE_LIMIT: usize = 1024;

/// Sizing, kinematics and color parameters for the particle field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Upper bound on the number of particles, regardless of viewport width.
	pub max_particles: usize,
	/// Horizontal pixels per particle (count = width / spacing).
	pub spacing: f64,
	/// Largest absolute per-frame displacement on each axis.
	pub max_speed: f64,
	/// Radius range `(min, max)` in pixels.
	pub radius: (f64, f64),
	/// Opacity range `(min, max)`.
	pub opacity: (f64, f64),
	/// Hue used while the page is in dark mode.
	pub dark_hue: f64,
	/// Hue used while the page is in light mode.
	pub light_hue: f64,
	/// HSL saturation, in percent.
	pub saturation: f64,
	/// HSL lightness, in percent.
	pub lightness: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 160,
			spacing: 12.0,
			max_speed: 0.15,
			radius: (0.5, 2.0),
			opacity: (0.1, 0.6),
			dark_hue: 215.0,
			light_hue: 230.0,
			saturation: 80.0,
			lightness: 70.0,
		}
	}
}

impl FieldConfig {
	/// Number of particles for a viewport of the given width.
	pub fn particle_count(&self, width: f64) -> usize {
		if width.is_nan() || width <= 0.0 || self.spacing <= 0.0 {
			return 0;
		}
		let fitted = (width / self.spacing).floor() as usize;
		fitted.min(self.max_particles)
	}

	/// Clamp page-supplied values into ranges the field can draw.
	///
	/// `max_particles` is capped at [`PARTICLE_LIMIT`], ranges are reordered
	/// so `min <= max`, radii are floored at zero, opacities are clamped to
	/// `[0, 1]`, and non-finite numbers fall back to their defaults.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
		let ordered = |(a, b): (f64, f64)| if a <= b { (a, b) } else { (b, a) };

		let radius = ordered((
			finite_or(self.radius.0, defaults.radius.0).max(0.0),
			finite_or(self.radius.1, defaults.radius.1).max(0.0),
		));
		let opacity = ordered((
			finite_or(self.opacity.0, defaults.opacity.0).clamp(0.0, 1.0),
			finite_or(self.opacity.1, defaults.opacity.1).clamp(0.0, 1.0),
		));
		let sanitized = Self {
			max_particles: self.max_particles.min(PARTICLE_LIMIT),
			spacing: finite_or(self.spacing, defaults.spacing),
			max_speed: finite_or(self.max_speed, defaults.max_speed).abs(),
			radius,
			opacity,
			dark_hue: finite_or(self.dark_hue, defaults.dark_hue),
			light_hue: finite_or(self.light_hue, defaults.light_hue),
			saturation: finite_or(self.saturation, defaults.saturation).clamp(0.0, 100.0),
			lightness: finite_or(self.lightness, defaults.lightness).clamp(0.0, 100.0),
		};

		if sanitized != self {
			warn!(
				"particle field: config values out of range, clamped to {:?}",
				sanitized
			);
		}
		sanitized
	}

	/// Hue for the given theme mode.
	pub fn hue_for(&self, mode: ThemeMode) -> f64 {
		match mode {
			ThemeMode::Dark => self.dark_hue,
			ThemeMode::Light => self.light_hue,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_follows_viewport_width() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(1200.0), 100);
		assert_eq!(config.particle_count(100.0), 8);
		assert_eq!(config.particle_count(11.0), 0);
	}

	#[test]
	fn count_is_capped() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(1920.0), 160);
		assert_eq!(config.particle_count(100_000.0), 160);
	}

	#[test]
	fn non_positive_width_gives_empty_field() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(0.0), 0);
		assert_eq!(config.particle_count(-640.0), 0);
		assert_eq!(config.particle_count(f64::NAN), 0);
	}

	#[test]
	fn hue_depends_on_theme() {
		let config = FieldConfig::default();
		assert_eq!(config.hue_for(ThemeMode::Dark), 215.0);
		assert_eq!(config.hue_for(ThemeMode::Light), 230.0);
	}

	#[test]
	fn defaults_survive_sanitizing() {
		assert_eq!(FieldConfig::default().sanitized(), FieldConfig::default());
	}

	#[test]
	fn particle_budget_is_capped() {
		let config = FieldConfig {
			max_particles: usize::MAX,
			spacing: 0.001,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!(config.max_particles, PARTICLE_LIMIT);
		assert_eq!(config.particle_count(1_000_000.0), PARTICLE_LIMIT);
	}

	#[test]
	fn inverted_and_negative_ranges_are_normalised() {
		let config = FieldConfig {
			radius: (3.0, -1.0),
			opacity: (1.5, -0.2),
			max_speed: -0.4,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!(config.radius, (0.0, 3.0));
		assert_eq!(config.opacity, (0.0, 1.0));
		assert_eq!(config.max_speed, 0.4);
	}

	#[test]
	fn non_finite_values_fall_back_to_defaults() {
		let config = FieldConfig {
			spacing: f64::NAN,
			radius: (f64::INFINITY, 2.0),
			dark_hue: f64::NAN,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!(config.spacing, 12.0);
		assert_eq!(config.radius, (0.5, 2.0));
		assert_eq!(config.dark_hue, 215.0);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: FieldConfig =
			serde_json::from_str(r#"{ "max_particles": 40, "dark_hue": 200 }"#).unwrap();
		assert_eq!(config.max_particles, 40);
		assert_eq!(config.dark_hue, 200.0);
		assert_eq!(config.spacing, 12.0);
		assert_eq!(config.opacity, (0.1, 0.6));
	}
}
