//! Differential kernels.
//!
//! Gradient kernels are complex: the real part holds the x stencil (along the columns) and
//! the imaginary part the y stencil (along the rows). Use [`kerpy_kernel::ToReals`] to split
//! them, or `divergence` to sum both directions into one real kernel.
//!
//! The orientation of each axis sets the sign `s = 2 * flag - 1` of the stencil: the
//! coefficient before the center gets `s` and the one after it gets `-s`.

use std::str::FromStr;

use kerpy_kernel::{ops, Complex64, Kernel, KernelSize};

use crate::{
    error::{ensure_min_size, FilterError},
    orientation::Orientation,
    shapes::{self, ShapeMode},
};

fn re(v: f64) -> Complex64 {
    Complex64::new(v, 0.0)
}

fn im(v: f64) -> Complex64 {
    Complex64::new(0.0, v)
}

/// Returns a complex kernel with a signed line of ones on each side of the center.
///
/// Column `cx - 1` gets `sx` and column `cx + 1` gets `-sx` on every row (real part); row
/// `cy - 1` gets `i * sy` and row `cy + 1` gets `-i * sy` on every column (imaginary part).
/// Averaging along the whole line lowers the noise of the gradient estimate.
///
/// # Arguments
///
/// * `orient_x` - Orientation of the x difference.
/// * `orient_y` - Orientation of the y difference.
/// * `size` - The size of the kernel, at least 3x3.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is shorter than 3.
pub fn lines(
    orient_x: Orientation,
    orient_y: Orientation,
    size: KernelSize,
) -> Result<Kernel<Complex64>, FilterError> {
    ensure_min_size(size, 3)?;
    log::debug!("lines kernel: size {size}, orient ({orient_x:?}, {orient_y:?})");
    let (sx, sy) = (orient_x.sign(), orient_y.sign());
    let mut ker = Kernel::<Complex64>::zeros(size.shape());
    let [cy, cx] = ker.center();

    for r in 0..ker.rows() {
        ker[[r, cx - 1]] += re(sx);
        ker[[r, cx + 1]] -= re(sx);
    }
    for c in 0..ker.cols() {
        ker[[cy - 1, c]] += im(sy);
        ker[[cy + 1, c]] -= im(sy);
    }

    Ok(ker)
}

/// Returns the minimal central difference stencil.
///
/// Same signs as [`lines`], restricted to the center row (real part) and the center column
/// (imaginary part).
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is shorter than 3.
pub fn central(
    orient_x: Orientation,
    orient_y: Orientation,
    size: KernelSize,
) -> Result<Kernel<Complex64>, FilterError> {
    ensure_min_size(size, 3)?;
    log::debug!("central kernel: size {size}, orient ({orient_x:?}, {orient_y:?})");
    let (sx, sy) = (orient_x.sign(), orient_y.sign());
    let mut ker = Kernel::<Complex64>::zeros(size.shape());
    let [cy, cx] = ker.center();

    ker[[cy, cx - 1]] += re(sx);
    ker[[cy, cx + 1]] -= re(sx);
    ker[[cy - 1, cx]] += im(sy);
    ker[[cy + 1, cx]] -= im(sy);

    Ok(ker)
}

/// Returns the Prewitt operator as a complex kernel.
///
/// The [`lines`] layout restricted to the three rows (x stencil) and three columns
/// (y stencil) through the center. At 3x3, with forward orientations:
///
/// ```text
/// real: -1 0 1      imag: -1 -1 -1
///       -1 0 1             0  0  0
///       -1 0 1             1  1  1
/// ```
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is shorter than 3.
pub fn prewitt(
    orient_x: Orientation,
    orient_y: Orientation,
    size: KernelSize,
) -> Result<Kernel<Complex64>, FilterError> {
    ensure_min_size(size, 3)?;
    log::debug!("prewitt kernel: size {size}, orient ({orient_x:?}, {orient_y:?})");
    let (sx, sy) = (orient_x.sign(), orient_y.sign());
    let mut ker = Kernel::<Complex64>::zeros(size.shape());
    let [cy, cx] = ker.center();

    for r in cy - 1..=cy + 1 {
        ker[[r, cx - 1]] += re(sx);
        ker[[r, cx + 1]] -= re(sx);
    }
    for c in cx - 1..=cx + 1 {
        ker[[cy - 1, c]] += im(sy);
        ker[[cy + 1, c]] -= im(sy);
    }

    Ok(ker)
}

/// Returns the Sobel operator, defined as `prewitt + central`.
///
/// The central stencil doubles the weight of the center row and column of the Prewitt
/// operator, giving the classic `[1, 2, 1]` smoothing profile.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is shorter than 3.
pub fn sobel(
    orient_x: Orientation,
    orient_y: Orientation,
    size: KernelSize,
) -> Result<Kernel<Complex64>, FilterError> {
    let prewitt = prewitt(orient_x, orient_y, size)?;
    let central = central(orient_x, orient_y, size)?;
    Ok(ops::add(&prewitt, &central)?)
}

/// Returns the 2x2 Robert's cross operator.
///
/// The real part is `[[sx, 0], [0, -sx]]` and the imaginary part `[[0, sy], [-sy, 0]]`.
pub fn robert_cross(orient_x: Orientation, orient_y: Orientation) -> Kernel<Complex64> {
    log::debug!("robert cross kernel: orient ({orient_x:?}, {orient_y:?})");
    let (sx, sy) = (orient_x.sign(), orient_y.sign());
    let mut ker = Kernel::<Complex64>::zeros([2, 2]);
    ker[[0, 0]] += re(sx);
    ker[[1, 1]] -= re(sx);
    ker[[0, 1]] += im(sy);
    ker[[1, 0]] -= im(sy);
    ker
}

/// Returns a complex 3x3 kernel computing the first order finite difference.
///
/// The center holds `-sx - i * sy`, the right neighbour `sx` and the bottom neighbour
/// `i * sy`. With `flip` the grid is rotated by 180 degrees, moving the neighbours to the
/// left and top of the center.
pub fn finite(orient_x: Orientation, orient_y: Orientation, flip: bool) -> Kernel<Complex64> {
    log::debug!("finite difference kernel: orient ({orient_x:?}, {orient_y:?}), flip {flip}");
    let (sx, sy) = (orient_x.sign(), orient_y.sign());
    let mut ker = Kernel::<Complex64>::zeros([3, 3]);
    ker[[1, 1]] = Complex64::new(-sx, -sy);
    ker[[2, 1]] += im(sy);
    ker[[1, 2]] += re(sx);
    if flip {
        ker.flip()
    } else {
        ker
    }
}

/// Alias of [`finite`].
pub fn dual(orient_x: Orientation, orient_y: Orientation, flip: bool) -> Kernel<Complex64> {
    finite(orient_x, orient_y, flip)
}

/// Returns the discrete Laplacian.
///
/// The center row and column are filled with `-1` and the center holds the number of other
/// `-1` cells, so the coefficients always sum to zero. At 3x3:
///
/// ```text
///  0 -1  0
/// -1  4 -1
///  0 -1  0
/// ```
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is zero.
pub fn laplacian(size: KernelSize) -> Result<Kernel<f64>, FilterError> {
    ensure_min_size(size, 1)?;
    log::debug!("laplacian kernel: size {size}");
    let mut ker = Kernel::<f64>::zeros(size.shape());
    let [cy, cx] = ker.center();

    for c in 0..ker.cols() {
        ker[[cy, c]] = -1.0;
    }
    for r in 0..ker.rows() {
        ker[[r, cx]] = -1.0;
    }
    ker[[cy, cx]] = -ker.sum() - 1.0;

    Ok(ker)
}

/// Neighbourhood used by [`laplacian_shaped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaplacianShape {
    /// 4-connectivity.
    #[default]
    Diamond,
    /// 8-connectivity.
    Square,
}

impl FromStr for LaplacianShape {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diamond" => Ok(Self::Diamond),
            "square" => Ok(Self::Square),
            other => Err(FilterError::invalid_mode(other, "['diamond', 'square']")),
        }
    }
}

/// Returns a Laplacian built from a shape mask of scale `(1, 1)`.
///
/// Every cell of the mask but the center becomes `-1` and the center holds the number of
/// those cells, so the coefficients sum to zero. The diamond gives the 4-connected
/// Laplacian, the square the 8-connected one.
///
/// # Errors
///
/// Returns [`FilterError::KernelTooSmall`] if a side is zero.
pub fn laplacian_shaped(
    size: KernelSize,
    shape: LaplacianShape,
    mode: ShapeMode,
) -> Result<Kernel<f64>, FilterError> {
    ensure_min_size(size, 1)?;
    log::debug!("shaped laplacian kernel: size {size}, shape {shape:?}, mode {mode}");
    let mask = match shape {
        LaplacianShape::Diamond => shapes::diamond(size, (1.0, 1.0), mode)?,
        LaplacianShape::Square => shapes::square(size, (1.0, 1.0), mode)?,
    };

    let mut ker = mask.into_map(f64::from);
    let center = ker.center();
    ker[center] = 0.0;
    ker[center] = -ker.sum();
    Ok(-ker)
}
