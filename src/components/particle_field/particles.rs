//! Ambient particle records and their per-frame kinematics.

use rand::Rng;

use super::config::FieldConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal displacement per frame.
	pub vx: f64,
	/// Vertical displacement per frame.
	pub vy: f64,
	/// Circle radius in pixels.
	pub radius: f64,
	/// Fill alpha.
	pub opacity: f64,
}

impl Particle {
	/// Move by one frame's velocity, then bounce off the bounds.
	///
	/// The bounce test runs on the moved position and does not clamp, so a
	/// particle can sit just outside the bounds until the next frame carries
	/// it back in.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}
}

/// One generation of particles, sized to the surface it was built for.
///
/// A store is never resized in place: a resize builds a new one with
/// [`ParticleStore::regenerate`] and the old generation is dropped.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleStore {
	/// Build a fresh generation for a `width` x `height` surface.
	///
	/// Negative dimensions are treated as zero.
	pub fn regenerate<R: Rng + ?Sized>(
		width: f64,
		height: f64,
		config: &FieldConfig,
		rng: &mut R,
	) -> Self {
		let (width, height) = (width.max(0.0), height.max(0.0));
		let count = config.particle_count(width);
		let speed = config.max_speed;
		let (radius_min, radius_max) = config.radius;
		let (opacity_min, opacity_max) = config.opacity;

		let particles = (0..count)
			.map(|_| Particle {
				x: rng.r#gen::<f64>() * width,
				y: rng.r#gen::<f64>() * height,
				vx: (rng.r#gen::<f64>() * 2.0 - 1.0) * speed,
				vy: (rng.r#gen::<f64>() * 2.0 - 1.0) * speed,
				radius: radius_min + rng.r#gen::<f64>() * (radius_max - radius_min),
				opacity: opacity_min + rng.r#gen::<f64>() * (opacity_max - opacity_min),
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Wrap an explicit set of particles.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance every particle by one frame.
	pub fn advance(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// Particles of the current generation.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the generation has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Bounds `(width, height)` the particles bounce within.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}
}
