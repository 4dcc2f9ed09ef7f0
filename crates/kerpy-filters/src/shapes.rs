//! Shape masks for mathematical morphology.
//!
//! A mask is rasterized by evaluating a membership predicate at every grid coordinate,
//! expressed as the offset `(x, y)` from the kernel center: `x` grows along the columns and
//! `y` along the rows. The predicate of each [`Shape`] is scaled per axis by `scale`.

use std::str::FromStr;

use kerpy_kernel::{Kernel, KernelSize};

use crate::error::FilterError;

/// Scale of a shape along x and y.
pub type Scale = (f64, f64);

/// Geometric shapes that can be rasterized into a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Ellipse with half-axes `1 + scale`.
    Circle,
    /// L1 ball with half-diagonals `1 + scale`.
    Diamond,
    /// Rectangle with half-extents `scale`.
    Square,
    /// Upward triangle with its base on the row `y = scale.1`.
    Triangle,
    /// Plus sign with arms of length `scale`.
    Cross,
}

impl Shape {
    /// Name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Cross => "cross",
        }
    }

    /// Returns true if the shape has a boundary definition, i.e. supports [`ShapeMode::Outline`].
    pub fn supports_outline(self) -> bool {
        matches!(self, Self::Circle | Self::Diamond | Self::Square)
    }

    /// Membership predicate at the offset `(x, y)` from the center.
    pub fn contains(self, x: f64, y: f64, scale: Scale) -> bool {
        let (sx, sy) = scale;
        match self {
            Self::Circle => (x / (1.0 + sx)).powi(2) + (y / (1.0 + sy)).powi(2) <= 1.0,
            Self::Diamond => x.abs() / (1.0 + sx) + y.abs() / (1.0 + sy) < 1.0,
            Self::Square => x.abs() <= sx && y.abs() <= sy,
            Self::Triangle => {
                let (u, v) = (x / sx, y / sy);
                v < 2.0 && u - v < 2.0 && u + v > -2.0
            }
            Self::Cross => (x == 0.0 || y == 0.0) && x.abs() <= sx && y.abs() <= sy,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "diamond" => Ok(Self::Diamond),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "cross" => Ok(Self::Cross),
            other => Err(FilterError::invalid_mode(
                other,
                "['circle', 'diamond', 'square', 'triangle', 'cross']",
            )),
        }
    }
}

/// Rasterization mode of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Every cell inside the shape.
    #[default]
    Fill,
    /// Only the outer ring: inside at `scale` but outside at `scale - 1`.
    Outline,
}

impl ShapeMode {
    /// Name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Outline => "outline",
        }
    }
}

impl std::fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(Self::Fill),
            "outline" => Ok(Self::Outline),
            other => Err(FilterError::invalid_mode(other, "['fill', 'outline']")),
        }
    }
}

fn fill_mask(shape: Shape, size: KernelSize, scale: Scale) -> Kernel<bool> {
    let [cy, cx] = size.center();
    Kernel::from_shape_fn(size.shape(), |[r, c]| {
        shape.contains(c as f64 - cx as f64, r as f64 - cy as f64, scale)
    })
}

/// Rasterize `shape` into a 0/1 mask.
///
/// # Arguments
///
/// * `shape` - The membership predicate.
/// * `size` - The size of the mask.
/// * `scale` - The per-axis scale of the shape.
/// * `mode` - Fill the shape or keep only its outline.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedMode`] when the outline of a triangle or cross is
/// requested.
///
/// # Example
///
/// ```
/// use kerpy_filters::shapes::{rasterize, Shape, ShapeMode};
/// use kerpy_kernel::KernelSize;
///
/// let mask = rasterize(Shape::Square, KernelSize::square(5), (1.0, 1.0), ShapeMode::Outline).unwrap();
/// assert_eq!(mask.sum(), 8);
/// assert_eq!(mask[[2, 2]], 0);
/// ```
pub fn rasterize(
    shape: Shape,
    size: KernelSize,
    scale: Scale,
    mode: ShapeMode,
) -> Result<Kernel<u8>, FilterError> {
    log::debug!("rasterizing {shape} mask: size {size}, scale {scale:?}, mode {mode}");
    let mask = match mode {
        ShapeMode::Fill => fill_mask(shape, size, scale),
        ShapeMode::Outline => {
            if !shape.supports_outline() {
                log::warn!("rejected outline mode for shape {shape}");
                return Err(FilterError::UnsupportedMode {
                    shape: shape.name(),
                    mode: mode.name(),
                });
            }
            let outer = fill_mask(shape, size, scale);
            let inner = fill_mask(shape, size, (scale.0 - 1.0, scale.1 - 1.0));
            outer.zip_map(&inner, |&o, &i| o && !i)?
        }
    };
    Ok(mask.into_map(u8::from))
}

/// Returns a circle mask of the given scale.
///
/// With `scale = (1, 1)` the circle spans a radius of 2 cells:
///
/// ```text
/// 0 0 1 0 0
/// 0 1 1 1 0
/// 1 1 1 1 1
/// 0 1 1 1 0
/// 0 0 1 0 0
/// ```
pub fn circle(size: KernelSize, scale: Scale, mode: ShapeMode) -> Result<Kernel<u8>, FilterError> {
    rasterize(Shape::Circle, size, scale, mode)
}

/// Returns a diamond mask of the given scale.
///
/// With `scale = (1, 1)` the diamond covers the center and its 4-neighbourhood.
pub fn diamond(size: KernelSize, scale: Scale, mode: ShapeMode) -> Result<Kernel<u8>, FilterError> {
    rasterize(Shape::Diamond, size, scale, mode)
}

/// Returns a square mask of the given scale.
///
/// With `scale = (1, 1)`:
///
/// ```text
/// 0 0 0 0 0
/// 0 1 1 1 0
/// 0 1 1 1 0
/// 0 1 1 1 0
/// 0 0 0 0 0
/// ```
pub fn square(size: KernelSize, scale: Scale, mode: ShapeMode) -> Result<Kernel<u8>, FilterError> {
    rasterize(Shape::Square, size, scale, mode)
}

/// Returns a filled triangle mask of the given scale.
///
/// With `scale = (1, 1)`:
///
/// ```text
/// 0 0 0 0 0
/// 0 0 1 0 0
/// 0 1 1 1 0
/// 1 1 1 1 1
/// 0 0 0 0 0
/// ```
pub fn triangle(size: KernelSize, scale: Scale) -> Kernel<u8> {
    log::debug!("rasterizing triangle mask: size {size}, scale {scale:?}");
    fill_mask(Shape::Triangle, size, scale).into_map(u8::from)
}

/// Returns a filled cross mask of the given scale.
///
/// With `scale = (2, 2)`:
///
/// ```text
/// 0 0 1 0 0
/// 0 0 1 0 0
/// 1 1 1 1 1
/// 0 0 1 0 0
/// 0 0 1 0 0
/// ```
pub fn cross(size: KernelSize, scale: Scale) -> Kernel<u8> {
    log::debug!("rasterizing cross mask: size {size}, scale {scale:?}");
    fill_mask(Shape::Cross, size, scale).into_map(u8::from)
}
