//! Image processing kernels: blurring and sharpening.

use kerpy_kernel::{Kernel, KernelSize};

use crate::{diff, error::FilterError};

pub use crate::smoothing::gaussian;

/// Create a box blur kernel where every coefficient is `1 / (width * height)`.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is zero.
pub fn mean(size: KernelSize) -> Result<Kernel<f64>, FilterError> {
    crate::error::ensure_min_size(size, 1)?;
    log::debug!("mean kernel: size {size}");
    Ok(Kernel::from_shape_val(size.shape(), 1.0 / size.numel() as f64))
}

/// Create a sharpening kernel, the identity plus the [`diff::laplacian`].
///
/// At 3x3:
///
/// ```text
///  0 -1  0
/// -1  5 -1
///  0 -1  0
/// ```
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is zero.
pub fn sharpen(size: KernelSize) -> Result<Kernel<f64>, FilterError> {
    log::debug!("sharpen kernel: size {size}");
    let mut ker = diff::laplacian(size)?;
    let center = ker.center();
    ker[center] += 1.0;
    Ok(ker)
}

/// Create an unsharp masking kernel, twice the identity minus the normalized [`gaussian`].
///
/// # Errors
///
/// Returns [`FilterError::InvalidStd`] if a component of `std` is not strictly positive.
pub fn unsharp(size: KernelSize, std: (f64, f64)) -> Result<Kernel<f64>, FilterError> {
    log::debug!("unsharp kernel: size {size}, std {std:?}");
    let mut ker = gaussian(size, std, true)?;
    let center = ker.center();
    ker[center] -= 2.0;
    Ok(-ker)
}
