//! Animated particle background.
//!
//! Renders a full-viewport canvas behind the page content with:
//! - A drifting particle field sized to the viewport area
//! - Proximity lines between nearby particles
//! - Diagonal comet streaks
//! - Light/dark palettes that follow the site theme
//!
//! The field is regenerated on resize and recolored in place on theme
//! change; the frame loop is cancelled when the component unmounts.

mod component;
mod particles;
mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use theme::{Palette, ThemeMode};
