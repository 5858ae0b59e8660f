//! UI components for the decorative page layer.

pub mod blur_fade;
pub mod magic_card;
pub mod particle_field;
pub mod pointer_glow;
pub mod theme;
