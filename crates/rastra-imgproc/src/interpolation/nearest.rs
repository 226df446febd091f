use rastra_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The pixel values copied from the nearest source pixel.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f64, C>,
    u: f64,
    v: f64,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());

    // half-pixel rounding can land one past the last row/column for
    // non-integral scale ratios, so the index is clamped
    let iu = ((u + 0.5).floor() as usize).min(cols - 1);
    let iv = ((v + 0.5).floor() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;

    let mut pixel = [0.0; C];
    unsafe {
        let src = image.as_slice().get_unchecked(base..base + C);
        pixel.copy_from_slice(src);
    }

    pixel
}
