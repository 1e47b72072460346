//! CPU-only software rasterizer.
//!
//! Bresenham lines, barycentric and scanline triangle filling, flat
//! shading against a directional light, and a one-dimensional y-buffer.
//! Every routine draws through [`canvas::RasterTarget`]; nothing is global.

pub mod args;
pub mod canvas;
pub mod color_utils;
pub mod config;
pub mod line;
pub mod loaders;
pub mod renderer;
pub mod shading;
pub mod transform;
pub mod triangle;
pub mod ybuffer;
