//! Per-frame update and paint of the particle field.
//!
//! [`RenderLoop`] owns the surface and the current particle generation. It is
//! driven from outside, once per display refresh, by calling
//! [`RenderLoop::frame`]; a resize swaps in a new generation wholesale.

use std::ops::ControlFlow;

use log::debug;
use rand::Rng;

use super::config::FieldConfig;
use super::particles::ParticleStore;
use super::surface::DrawSurface;
use crate::components::theme::{Hsla, ThemeSource};
use crate::frame_loop::CancelToken;

/// What happened during one call to [`RenderLoop::frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// Particles were advanced and painted.
	Drawn,
	/// The surface was unavailable; nothing moved or painted.
	Skipped,
	/// The loop was cancelled; nothing will run again.
	Cancelled,
}

/// Advances and paints a particle field, one frame at a time.
pub struct RenderLoop<S, T, R> {
	surface: S,
	theme: T,
	rng: R,
	config: FieldConfig,
	store: ParticleStore,
	token: CancelToken,
}

impl<S, T, R> RenderLoop<S, T, R>
where
	S: DrawSurface,
	T: ThemeSource,
	R: Rng,
{
	/// Build a loop over `surface`, populated for the surface's current size.
	///
	/// `config` is passed through [`FieldConfig::sanitized`] first.
	pub fn new(surface: S, theme: T, config: FieldConfig, mut rng: R) -> Self {
		let config = config.sanitized();
		let (width, height) = surface.size();
		let store = ParticleStore::regenerate(width, height, &config, &mut rng);
		Self {
			surface,
			theme,
			rng,
			config,
			store,
			token: CancelToken::new(),
		}
	}

	/// Resize the surface and replace the particle generation.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.surface.resize_to(width, height);
		self.store = ParticleStore::regenerate(
			width as f64,
			height as f64,
			&self.config,
			&mut self.rng,
		);
		debug!(
			"particle field: resized to {}x{}, {} particles",
			width,
			height,
			self.store.len()
		);
	}

	/// Run one frame: read the theme, clear, advance and paint every particle.
	pub fn step(&mut self) -> FrameOutcome {
		if self.token.is_cancelled() {
			return FrameOutcome::Cancelled;
		}
		if !self.surface.is_available() {
			return FrameOutcome::Skipped;
		}

		let hue = self.config.hue_for(self.theme.current());
		self.surface.clear();
		self.store.advance();

		for p in self.store.particles() {
			let fill = Hsla::new(hue, self.config.saturation, self.config.lightness, p.opacity);
			self.surface.fill_circle(p.x, p.y, p.radius, &fill.to_css());
		}

		FrameOutcome::Drawn
	}

	/// Frame body for a scheduler: keep going until cancelled.
	pub fn frame(&mut self) -> ControlFlow<()> {
		match self.step() {
			FrameOutcome::Cancelled => ControlFlow::Break(()),
			FrameOutcome::Drawn | FrameOutcome::Skipped => ControlFlow::Continue(()),
		}
	}

	/// Token that stops this loop when cancelled.
	pub fn cancel_token(&self) -> CancelToken {
		self.token.clone()
	}

	/// The current particle generation.
	pub fn store(&self) -> &ParticleStore {
		&self.store
	}

	/// Swap in a specific particle generation.
	pub fn install(&mut self, store: ParticleStore) {
		self.store = store;
	}

	/// The surface being painted.
	pub fn surface(&self) -> &S {
		&self.surface
	}
}
