use rastra_image::Image;

use super::interpolate::BicubicParams;

/// Cubic convolution weight for a sample at signed distance `t`.
///
/// Two-piece cubic with free parameter `a`; the support is `[-2, 2]`.
#[inline]
pub(crate) fn cubic_weight(t: f64, a: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        (a + 2.0) * t * t * t - (a + 3.0) * t * t + 1.0
    } else if t <= 2.0 {
        a * t * t * t - 5.0 * a * t * t + 8.0 * a * t - 4.0 * a
    } else {
        0.0
    }
}

/// Kernel for bicubic convolution interpolation
///
/// Accumulates a 4x4 source neighborhood anchored at `floor(u) - 1`,
/// `floor(v) - 1`, weighting each tap by the product of the two 1D cubic
/// weights. Taps falling outside the source are skipped entirely and the
/// remaining weights are not renormalized, so output whose footprint
/// crosses the image border carries less than full weight mass.
pub(crate) fn bicubic_interpolation<const C: usize>(
    image: &Image<f64, C>,
    u: f64,
    v: f64,
    params: BicubicParams,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());
    let data = image.as_slice();

    let x0 = u.floor() as i64 - 1;
    let y0 = v.floor() as i64 - 1;

    let mut pixel = [0.0; C];
    for i in 0..4 {
        let xi = x0 + i;
        if xi < 0 || xi >= cols as i64 {
            continue;
        }
        let wx = cubic_weight(u - xi as f64, params.a);
        for j in 0..4 {
            let yj = y0 + j;
            if yj < 0 || yj >= rows as i64 {
                continue;
            }
            let wy = cubic_weight(v - yj as f64, params.a);

            let base = (yj as usize * cols + xi as usize) * C;
            let src = &data[base..base + C];
            for k in 0..C {
                pixel[k] += src[k] * wx * wy;
            }
        }
    }

    pixel
}

#[cfg(test)]
mod tests {
    use rastra_image::{Image, ImageError, ImageSize};

    use super::super::interpolate::BicubicParams;
    use super::{bicubic_interpolation, cubic_weight};

    #[test]
    fn weight_at_knots() {
        let a = -1.0;
        assert_eq!(cubic_weight(0.0, a), 1.0);
        assert_eq!(cubic_weight(1.0, a), 0.0);
        assert_eq!(cubic_weight(-1.0, a), 0.0);
        assert_eq!(cubic_weight(2.0, a), 0.0);
        assert_eq!(cubic_weight(2.5, a), 0.0);
    }

    #[test]
    fn weights_partition_unity() {
        // the four taps covering a fractional offset sum to one
        let a = -1.0;
        for &d in &[0.25, 0.5, 0.75] {
            let sum = cubic_weight(1.0 + d, a)
                + cubic_weight(d, a)
                + cubic_weight(1.0 - d, a)
                + cubic_weight(2.0 - d, a);
            assert!((sum - 1.0).abs() < 1e-12, "offset {d}: sum {sum}");
        }
    }

    #[test]
    fn integer_coordinate_is_exact() -> Result<(), ImageError> {
        let image = Image::<f64, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|i| i as f64).collect(),
        )?;

        let pixel = bicubic_interpolation(&image, 1.0, 1.0, BicubicParams::default());
        assert!((pixel[0] - 5.0).abs() < 1e-12);

        Ok(())
    }
}
