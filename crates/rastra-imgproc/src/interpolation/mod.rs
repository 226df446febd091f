//! Pixel interpolation methods for raster resampling.
//!
//! This module provides the interpolation algorithms used when resampling
//! an image from one resolution to another.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the nearest pixel value (no blending)
//! - **Bilinear**: Linear blend of the four surrounding pixels
//! - **Bicubic**: Cubic convolution over a 4x4 neighborhood
//! - **Lanczos**: Windowed sinc over a 2n x 2n neighborhood

mod bicubic;
mod bilinear;
mod lanczos;
mod nearest;

pub(crate) mod grid;
pub(crate) mod interpolate;

pub use interpolate::{BicubicParams, InterpolationMode, LanczosParams};

pub use interpolate::interpolate_pixel;
