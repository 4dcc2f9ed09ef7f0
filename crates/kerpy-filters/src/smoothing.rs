//! Gaussian smoothing kernels.

use kerpy_kernel::{Kernel, KernelSize};

use crate::error::FilterError;

fn ensure_std(std: (f64, f64)) -> Result<(), FilterError> {
    // reject non-positive and NaN values
    if !(std.0 > 0.0 && std.1 > 0.0) {
        log::warn!("rejected standard deviation ({}, {})", std.0, std.1);
        return Err(FilterError::InvalidStd(std.0, std.1));
    }
    Ok(())
}

/// Create a gaussian kernel.
///
/// Evaluates `exp(-(x² / 2σx² + y² / 2σy²))` at the offset of every coefficient from the
/// kernel center.
///
/// # Arguments
///
/// * `size` - The size of the kernel.
/// * `std` - The standard deviation along x and y.
/// * `normalize` - Divide the coefficients by their sum so that they sum to one.
///
/// # Errors
///
/// Returns [`FilterError::InvalidStd`] if a component of `std` is not strictly positive.
///
/// # Example
///
/// ```
/// use kerpy_filters::smoothing::gaussian;
/// use kerpy_kernel::KernelSize;
///
/// let k = gaussian(KernelSize::square(3), (1.0, 1.0), false).unwrap();
/// assert_eq!(k[[1, 1]], 1.0);
/// ```
pub fn gaussian(
    size: KernelSize,
    std: (f64, f64),
    normalize: bool,
) -> Result<Kernel<f64>, FilterError> {
    ensure_std(std)?;
    log::debug!("gaussian kernel: size {size}, std {std:?}, normalize {normalize}");

    let [cy, cx] = size.center();
    let (vx, vy) = (2.0 * std.0 * std.0, 2.0 * std.1 * std.1);
    let ker = Kernel::from_shape_fn(size.shape(), |[r, c]| {
        let x = c as f64 - cx as f64;
        let y = r as f64 - cy as f64;
        (-(x * x / vx + y * y / vy)).exp()
    });

    if !normalize {
        return Ok(ker);
    }

    let norm = ker.sum();
    Ok(ker.into_map(|v| v / norm))
}

/// Create a normalized 1D gaussian kernel.
///
/// The separable factor of [`gaussian`]: the outer product of the row and column factors
/// is the normalized 2D kernel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidStd`] if `std` is not strictly positive.
pub fn gaussian_1d(len: usize, std: f64) -> Result<Vec<f64>, FilterError> {
    ensure_std((std, std))?;

    let center = len.saturating_sub(1) / 2;
    let var = 2.0 * std * std;

    // compute the kernel
    let mut kernel = (0..len)
        .map(|i| {
            let x = i as f64 - center as f64;
            (-(x * x) / var).exp()
        })
        .collect::<Vec<_>>();

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn gaussian_3x3() -> Result<(), FilterError> {
        let k = gaussian(KernelSize::square(3), (1.0, 1.0), true)?;
        assert_relative_eq!(k[[1, 1]], 0.2041799555716581, epsilon = 1e-12);
        assert_relative_eq!(k[[0, 1]], 0.12384140315297397, epsilon = 1e-12);
        assert_relative_eq!(k[[2, 2]], 0.07511360795411151, epsilon = 1e-12);
        assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn gaussian_unnormalized_peak() -> Result<(), FilterError> {
        let k = gaussian(KernelSize::new(7, 5), (2.0, 0.5), false)?;
        assert_eq!(k.shape(), [5, 7]);
        assert_eq!(k[[2, 3]], 1.0);
        assert!(k.iter().all(|&v| v > 0.0 && v <= 1.0));
        // narrower along y
        assert!(k[[1, 3]] < k[[2, 2]]);
        Ok(())
    }

    #[test]
    fn gaussian_invalid_std() {
        let size = KernelSize::square(3);
        assert_eq!(
            gaussian(size, (0.0, 1.0), true),
            Err(FilterError::InvalidStd(0.0, 1.0))
        );
        assert!(gaussian(size, (1.0, -2.0), true).is_err());
        assert!(gaussian(size, (f64::NAN, 1.0), true).is_err());
        assert!(gaussian_1d(3, 0.0).is_err());
    }

    #[test]
    fn gaussian_1d_values() -> Result<(), FilterError> {
        let k = gaussian_1d(3, 1.0)?;
        let expected = [0.274068619061197, 0.45186276187760605, 0.274068619061197];
        for (a, b) in k.iter().zip(expected) {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn gaussian_is_separable() -> Result<(), FilterError> {
        let size = KernelSize::new(5, 7);
        let std = (1.5, 0.8);
        let k = gaussian(size, std, true)?;
        let gx = gaussian_1d(size.width, std.0)?;
        let gy = gaussian_1d(size.height, std.1)?;
        for r in 0..size.height {
            for c in 0..size.width {
                assert_relative_eq!(k[[r, c]], gy[r] * gx[c], epsilon = 1e-12);
            }
        }
        Ok(())
    }
}
