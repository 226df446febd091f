use std::num::NonZeroUsize;

use rastra_image::Image;

use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::lanczos::lanczos_interpolation;
use super::nearest::nearest_neighbor_interpolation;

/// Default support radius of the Lanczos kernel.
const DEFAULT_LANCZOS_SUPPORT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Parameters of the bicubic convolution kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BicubicParams {
    /// Free parameter `a` of the two-piece cubic.
    pub a: f64,
}

impl Default for BicubicParams {
    /// `a = -1.0`
    fn default() -> Self {
        Self { a: -1.0 }
    }
}

/// Parameters of the Lanczos windowed sinc kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanczosParams {
    /// Support radius `n`; the kernel weight is zero at distances >= `n`.
    pub support: NonZeroUsize,
}

impl Default for LanczosParams {
    /// `n = 3`
    fn default() -> Self {
        Self {
            support: DEFAULT_LANCZOS_SUPPORT,
        }
    }
}

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic convolution with the given kernel parameters
    Bicubic(BicubicParams),
    /// Lanczos windowed sinc with the given support radius
    Lanczos(LanczosParams),
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f64, C>,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
) -> [f64; C] {
    match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Bicubic(params) => bicubic_interpolation(image, u, v, params),
        InterpolationMode::Lanczos(params) => lanczos_interpolation(image, u, v, params),
    }
}

#[cfg(test)]
mod tests {
    use super::{BicubicParams, LanczosParams};

    #[test]
    fn default_params() {
        assert_eq!(BicubicParams::default().a, -1.0);
        assert_eq!(LanczosParams::default().support.get(), 3);
    }
}
