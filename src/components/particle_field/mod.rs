//! Frame-driven particle field.
//!
//! Draws a drifting field of small translucent circles on a canvas that fills
//! the viewport:
//! - Particle count scales with viewport width and is capped
//! - Particles bounce off the viewport edges
//! - Every resize replaces the whole particle set
//! - Color hue follows the page's light/dark theme
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{FieldConfig, ParticleField};
//!
//! view! { <ParticleField config=FieldConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod render;
pub mod surface;

pub use component::ParticleField;
pub use config::FieldConfig;
pub use particles::{Particle, ParticleStore};
pub use render::{FrameOutcome, RenderLoop};
pub use surface::{CanvasSurface, DrawSurface};
