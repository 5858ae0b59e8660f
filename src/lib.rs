//! particle-backdrop: animated decorative layer for a single-page portfolio.
//!
//! This crate provides WASM components that render a drifting particle field
//! behind the page, a pointer-follow glow, tilt cards, and the light/dark theme
//! controller whose signal the particle colors follow.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to switch on the `js` entropy backend for wasm builds.
use getrandom as _;

pub mod components;
pub mod dom;
pub mod frame_loop;

pub use components::blur_fade::{BlurFade, Reveal};
pub use components::magic_card::{MagicCard, Tilt};
pub use components::particle_field::{
	CanvasSurface, DrawSurface, FieldConfig, FrameOutcome, Particle, ParticleField, ParticleStore,
	RenderLoop,
};
pub use components::pointer_glow::{PointerGlow, PointerTrail};
pub use components::theme::{
	DocumentTheme, Hsla, ThemeContext, ThemeMode, ThemeSource, ThemeToggle, provide_theme,
};
pub use frame_loop::{AnimationFrameLoop, CancelToken};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Parse a particle field configuration from JSON, falling back to defaults.
///
/// Only a JSON object is accepted; values are clamped with
/// [`FieldConfig::sanitized`].
pub fn parse_field_config(json_text: &str) -> FieldConfig {
	let value = match serde_json::from_str::<serde_json::Value>(json_text) {
		Ok(value) => value,
		Err(e) => {
			warn!("particle-backdrop: failed to parse particle config: {}", e);
			return FieldConfig::default();
		}
	};
	if !value.is_object() {
		warn!("particle-backdrop: particle config must be a JSON object, using defaults");
		return FieldConfig::default();
	}

	match FieldConfig::deserialize(value) {
		Ok(config) => {
			let config = config.sanitized();
			info!(
				"particle-backdrop: loaded config (max {} particles)",
				config.max_particles
			);
			config
		}
		Err(e) => {
			warn!("particle-backdrop: invalid particle config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Load field configuration from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_field_config(&json_text))
}

/// Main application component.
/// Provides the theme and mounts the background effects behind the page shell.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let theme = provide_theme();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html
			attr:lang="en"
			attr:dir="ltr"
			attr:data-theme=move || theme.mode.get().as_str()
		/>
		<Body attr:data-theme=move || theme.mode.get().as_str() />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleField config=config />
		<PointerGlow />
		<div class="app-shell">
			<header class="header">
				<ThemeToggle />
			</header>
			<main>
				<BlurFade class="hero">
					<MagicCard class="hero__card">
						<h1 class="hero__title">"Portfolio"</h1>
					</MagicCard>
				</BlurFade>
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_config_falls_back_to_defaults() {
		assert_eq!(parse_field_config("not json"), FieldConfig::default());
		assert_eq!(parse_field_config("[1, 2]"), FieldConfig::default());
	}

	#[test]
	fn non_object_json_falls_back_to_defaults() {
		assert_eq!(parse_field_config("[160, 2]"), FieldConfig::default());
		assert_eq!(parse_field_config("42"), FieldConfig::default());
		assert_eq!(parse_field_config("null"), FieldConfig::default());
		assert_eq!(parse_field_config(r#""max_particles""#), FieldConfig::default());
	}

	#[test]
	fn wrongly_typed_field_falls_back_to_defaults() {
		assert_eq!(
			parse_field_config(r#"{ "max_particles": "lots" }"#),
			FieldConfig::default()
		);
	}

	#[test]
	fn parsed_config_is_clamped() {
		let config = parse_field_config(r#"{ "max_particles": 1000000, "radius": [2.5, 0.5] }"#);
		assert_eq!(config.max_particles, components::particle_field::config::PARTICLE_LIMIT);
		assert_eq!(config.radius, (0.5, 2.5));
	}

	#[test]
	fn empty_object_is_default_config() {
		assert_eq!(parse_field_config("{}"), FieldConfig::default());
	}
}
