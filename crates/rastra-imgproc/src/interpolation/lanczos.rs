use std::f64::consts::PI;

use rastra_image::Image;

use super::interpolate::LanczosParams;

/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`.
#[inline]
pub(crate) fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Lanczos weight for a sample at signed distance `dx`.
///
/// Zero at and beyond the support radius `n`, `sinc(dx) * sinc(dx / n)`
/// inside it.
#[inline]
pub(crate) fn lanczos_weight(dx: f64, n: usize) -> f64 {
    let n = n as f64;
    if dx.abs() >= n {
        0.0
    } else {
        sinc(dx) * sinc(dx / n)
    }
}

/// Kernel for Lanczos windowed sinc interpolation
///
/// Accumulates a `2n x 2n` source neighborhood anchored at
/// `floor(u) - n + 1`, `floor(v) - n + 1`. Same border policy as the
/// bicubic kernel: out-of-range taps are skipped without renormalizing
/// the remaining weights.
pub(crate) fn lanczos_interpolation<const C: usize>(
    image: &Image<f64, C>,
    u: f64,
    v: f64,
    params: LanczosParams,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());
    let data = image.as_slice();
    let n = params.support.get();

    let x0 = u.floor() as i64 - n as i64 + 1;
    let y0 = v.floor() as i64 - n as i64 + 1;

    let mut pixel = [0.0; C];
    for i in 0..2 * n as i64 {
        let xi = x0 + i;
        if xi < 0 || xi >= cols as i64 {
            continue;
        }
        let wx = lanczos_weight(u - xi as f64, n);
        for j in 0..2 * n as i64 {
            let yj = y0 + j;
            if yj < 0 || yj >= rows as i64 {
                continue;
            }
            let wy = lanczos_weight(v - yj as f64, n);

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

    use super::super::interpolate::LanczosParams;
    use super::{lanczos_interpolation, lanczos_weight, sinc};

    #[test]
    fn sinc_values() {
        assert_eq!(sinc(0.0), 1.0);
        // sin(pi) is not exactly zero in floating point, only close
        assert!(sinc(1.0).abs() < 1e-15);
        assert!(sinc(2.0).abs() < 1e-15);
    }

    #[test]
    fn weight_support() {
        assert_eq!(lanczos_weight(0.0, 3), 1.0);
        assert_eq!(lanczos_weight(3.0, 3), 0.0);
        assert_eq!(lanczos_weight(-3.0, 3), 0.0);
        assert_eq!(lanczos_weight(4.7, 3), 0.0);
        assert!(lanczos_weight(0.5, 3) > 0.0);
        assert!(lanczos_weight(1.5, 3) < 0.0);
    }

    #[test]
    fn integer_coordinate_is_close() -> Result<(), ImageError> {
        let image = Image::<f64, 1>::new(
            ImageSize {
                width: 8,
                height: 8,
            },
            (0..64).map(|i| i as f64).collect(),
        )?;

        // neighbor weights collapse to sinc at integer distances, which is
        // only zero up to floating point accuracy
        let pixel = lanczos_interpolation(&image, 3.0, 3.0, LanczosParams::default());
        assert!((pixel[0] - 27.0).abs() < 1e-12);

        Ok(())
    }
}
