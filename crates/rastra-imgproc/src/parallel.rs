use rayon::prelude::*;

use rastra_image::Image;

/// Apply a function to each destination pixel for grid resampling in parallel.
///
/// `map_x` holds one continuous source x coordinate per destination column
/// and `map_y` one continuous source y coordinate per destination row. Rows
/// are processed on the global rayon pool, each worker owning a disjoint
/// destination row slice.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f64, C>,
    map_x: &[f64],
    map_y: &[f64],
    f: impl Fn(f64, f64, &mut [f64]) + Send + Sync,
) {
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_y.par_iter())
        .for_each(|(dst_chunk, &v)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x.iter())
                .for_each(|(dst_pixel, &u)| {
                    f(u, v, dst_pixel);
                });
        });
}

/// Sequential twin of [`par_iter_rows_resample`].
///
/// Runs on the current thread; useful for small destinations where the
/// parallel dispatch overhead outweighs the work.
pub fn iter_rows_resample<const C: usize>(
    dst: &mut Image<f64, C>,
    map_x: &[f64],
    map_y: &[f64],
    f: impl Fn(f64, f64, &mut [f64]),
) {
    let cols = dst.cols();
    dst.as_slice_mut()
        .chunks_exact_mut(C * cols)
        .zip(map_y.iter())
        .for_each(|(dst_chunk, &v)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x.iter())
                .for_each(|(dst_pixel, &u)| {
                    f(u, v, dst_pixel);
                });
        });
}
