use crate::interpolation::grid::source_coords;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;
use rastra_image::{Image, ImageError};

/// Resize an image to a new size.
///
/// The function resamples the source image into the destination image using
/// the specified interpolation mode. The destination image carries the
/// target size and is allocated by the caller. Output samples are left
/// unclamped; callers needing a fixed range must round and clip downstream.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns an error if any source or destination dimension is zero.
///
/// # Example
///
/// ```
/// use rastra_image::{Image, ImageSize};
/// use rastra_imgproc::interpolation::InterpolationMode;
/// use rastra_imgproc::resize::resize;
///
/// let image = Image::<f64, 4>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0.0; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<f64, 4>::from_size_val(new_size, 0.0).unwrap();
///
/// resize(&image, &mut image_resized, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 4);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<f64, C>,
    dst: &mut Image<f64, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 || dst.width() == 0 || dst.height() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // continuous source coordinate for every destination column and row
    let map_x = source_coords(src.width(), dst.width());
    let map_y = source_coords(src.height(), dst.height());

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |u, v, dst_pixel| {
        dst_pixel.copy_from_slice(&interpolate_pixel(src, u, v, interpolation));
    });

    Ok(())
}
