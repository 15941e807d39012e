//! Pixel-exact hexagon tiles
//!
//! This crate draws the images used to tile a hex map:
//! - [`surface`] - CPU 8-bit RGBA canvas
//! - [`geometry`] - Tile dimensions from one of width, height or side
//! - [`validation`] - Precondition checks and even rounding
//! - [`rasterizer`] - Integer outline drawing (the template image)
//! - [`mask`] - Quadrant lookup image derived from the template
//! - [`export`] - PNG output through the `image` crate

pub mod constants;
pub mod export;
pub mod geometry;
pub mod mask;
pub mod rasterizer;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use export::*;
pub use geometry::*;
pub use mask::*;
pub use rasterizer::*;
pub use surface::*;
pub use types::*;
pub use validation::*;

pub use hexagon_config::{Palette, Rgba};
