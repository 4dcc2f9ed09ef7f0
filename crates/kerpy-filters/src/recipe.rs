//! Serializable kernel descriptions.
//!
//! A [`KernelRecipe`] names a constructor together with its parameters, so kernels can be
//! described in configuration files:
//!
//! ```
//! use kerpy_filters::recipe::{BuiltKernel, KernelRecipe};
//!
//! let recipe: KernelRecipe = serde_json::from_str(
//!     r#"{"kind": "circle", "size": {"width": 5, "height": 5}, "scale": [1.0, 1.0]}"#,
//! )
//! .unwrap();
//! let BuiltKernel::Mask(mask) = recipe.build().unwrap() else {
//!     panic!("circle recipes build masks");
//! };
//! assert_eq!(mask.sum(), 13);
//! ```
//!
//! Missing fields take the defaults of the constructors.

use kerpy_kernel::{Complex64, Kernel, KernelSize};
use serde::{Deserialize, Serialize};

use crate::{
    diff::{self, LaplacianShape},
    error::FilterError,
    orientation::Orientation,
    processing,
    shapes::{self, Scale, Shape, ShapeMode},
};

/// Parameters of the gradient constructors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientParams {
    /// Orientation of the x difference.
    pub orient_x: Orientation,
    /// Orientation of the y difference.
    pub orient_y: Orientation,
    /// Kernel size.
    pub size: KernelSize,
}

/// Parameters of the fixed size 2x2 Robert's cross.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientParams {
    /// Orientation of the x difference.
    pub orient_x: Orientation,
    /// Orientation of the y difference.
    pub orient_y: Orientation,
}

/// Parameters of the finite difference constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiniteParams {
    /// Orientation of the x difference.
    pub orient_x: Orientation,
    /// Orientation of the y difference.
    pub orient_y: Orientation,
    /// Rotate the stencil by 180 degrees.
    pub flip: bool,
}

impl Default for FiniteParams {
    fn default() -> Self {
        Self {
            orient_x: Orientation::default(),
            orient_y: Orientation::default(),
            flip: true,
        }
    }
}

/// Parameters of the constructors that only take a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeParams {
    /// Kernel size.
    pub size: KernelSize,
}

/// Parameters of [`diff::laplacian_shaped`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaplacianParams {
    /// Kernel size.
    pub size: KernelSize,
    /// Neighbourhood of the operator.
    pub shape: LaplacianShape,
    /// Rasterization mode of the neighbourhood.
    pub mode: ShapeMode,
}

/// Parameters of the shape masks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Kernel size, 21x21 by default.
    pub size: KernelSize,
    /// Scale of the shape along x and y.
    pub scale: Scale,
    /// Rasterization mode.
    pub mode: ShapeMode,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            size: KernelSize::square(21),
            scale: (1.0, 1.0),
            mode: ShapeMode::Fill,
        }
    }
}

/// Parameters of [`processing::gaussian`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianParams {
    /// Kernel size.
    pub size: KernelSize,
    /// Standard deviation along x and y.
    pub std: (f64, f64),
    /// Divide the coefficients by their sum.
    pub normalize: bool,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            size: KernelSize::default(),
            std: (1.0, 1.0),
            normalize: true,
        }
    }
}

/// Parameters of [`processing::unsharp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsharpParams {
    /// Kernel size.
    pub size: KernelSize,
    /// Standard deviation of the subtracted gaussian.
    pub std: (f64, f64),
}

impl Default for UnsharpParams {
    fn default() -> Self {
        Self {
            size: KernelSize::default(),
            std: (1.0, 1.0),
        }
    }
}

/// A kernel constructor and its parameters.
///
/// Serialized as a map with a `kind` tag naming the constructor in snake case, next to the
/// parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KernelRecipe {
    /// [`diff::lines`]
    Lines(GradientParams),
    /// [`diff::central`]
    Central(GradientParams),
    /// [`diff::prewitt`]
    Prewitt(GradientParams),
    /// [`diff::sobel`]
    Sobel(GradientParams),
    /// [`diff::robert_cross`]
    RobertCross(OrientParams),
    /// [`diff::finite`]
    Finite(FiniteParams),
    /// [`diff::dual`]
    Dual(FiniteParams),
    /// [`diff::laplacian`]
    Laplacian(SizeParams),
    /// [`diff::laplacian_shaped`]
    LaplacianShaped(LaplacianParams),
    /// [`shapes::circle`]
    Circle(ShapeParams),
    /// [`shapes::diamond`]
    Diamond(ShapeParams),
    /// [`shapes::square`]
    Square(ShapeParams),
    /// [`shapes::triangle`], fill mode only
    Triangle(ShapeParams),
    /// [`shapes::cross`], fill mode only
    Cross(ShapeParams),
    /// [`processing::gaussian`]
    Gaussian(GaussianParams),
    /// [`processing::mean`]
    Mean(SizeParams),
    /// [`processing::sharpen`]
    Sharpen(SizeParams),
    /// [`processing::unsharp`]
    Unsharp(UnsharpParams),
}

/// The output of [`KernelRecipe::build`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltKernel {
    /// Real kernel.
    Real(Kernel<f64>),
    /// Complex gradient kernel.
    Complex(Kernel<Complex64>),
    /// 0/1 shape mask.
    Mask(Kernel<u8>),
}

impl BuiltKernel {
    /// Row-major shape of the built kernel.
    pub fn shape(&self) -> [usize; 2] {
        match self {
            Self::Real(k) => k.shape(),
            Self::Complex(k) => k.shape(),
            Self::Mask(k) => k.shape(),
        }
    }

    /// Returns the real kernel, if any.
    pub fn into_real(self) -> Option<Kernel<f64>> {
        match self {
            Self::Real(k) => Some(k),
            _ => None,
        }
    }

    /// Returns the complex kernel, if any.
    pub fn into_complex(self) -> Option<Kernel<Complex64>> {
        match self {
            Self::Complex(k) => Some(k),
            _ => None,
        }
    }

    /// Returns the mask, if any.
    pub fn into_mask(self) -> Option<Kernel<u8>> {
        match self {
            Self::Mask(k) => Some(k),
            _ => None,
        }
    }
}

fn mask(shape: Shape, p: ShapeParams) -> Result<BuiltKernel, FilterError> {
    shapes::rasterize(shape, p.size, p.scale, p.mode).map(BuiltKernel::Mask)
}

impl KernelRecipe {
    /// Name of the constructor, as written in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lines(_) => "lines",
            Self::Central(_) => "central",
            Self::Prewitt(_) => "prewitt",
            Self::Sobel(_) => "sobel",
            Self::RobertCross(_) => "robert_cross",
            Self::Finite(_) => "finite",
            Self::Dual(_) => "dual",
            Self::Laplacian(_) => "laplacian",
            Self::LaplacianShaped(_) => "laplacian_shaped",
            Self::Circle(_) => "circle",
            Self::Diamond(_) => "diamond",
            Self::Square(_) => "square",
            Self::Triangle(_) => "triangle",
            Self::Cross(_) => "cross",
            Self::Gaussian(_) => "gaussian",
            Self::Mean(_) => "mean",
            Self::Sharpen(_) => "sharpen",
            Self::Unsharp(_) => "unsharp",
        }
    }

    /// Run the constructor.
    ///
    /// # Errors
    ///
    /// Forwards the error of the constructor, e.g. [`FilterError::KernelTooSmall`] or
    /// [`FilterError::UnsupportedMode`] for an outlined triangle.
    pub fn build(&self) -> Result<BuiltKernel, FilterError> {
        use BuiltKernel::{Complex, Real};

        log::debug!("building {} kernel", self.kind());

        match *self {
            Self::Lines(p) => diff::lines(p.orient_x, p.orient_y, p.size).map(Complex),
            Self::Central(p) => diff::central(p.orient_x, p.orient_y, p.size).map(Complex),
            Self::Prewitt(p) => diff::prewitt(p.orient_x, p.orient_y, p.size).map(Complex),
            Self::Sobel(p) => diff::sobel(p.orient_x, p.orient_y, p.size).map(Complex),
            Self::RobertCross(p) => Ok(Complex(diff::robert_cross(p.orient_x, p.orient_y))),
            Self::Finite(p) | Self::Dual(p) => {
                Ok(Complex(diff::finite(p.orient_x, p.orient_y, p.flip)))
            }
            Self::Laplacian(p) => diff::laplacian(p.size).map(Real),
            Self::LaplacianShaped(p) => diff::laplacian_shaped(p.size, p.shape, p.mode).map(Real),
            Self::Circle(p) => mask(Shape::Circle, p),
            Self::Diamond(p) => mask(Shape::Diamond, p),
            Self::Square(p) => mask(Shape::Square, p),
            Self::Triangle(p) => mask(Shape::Triangle, p),
            Self::Cross(p) => mask(Shape::Cross, p),
            Self::Gaussian(p) => processing::gaussian(p.size, p.std, p.normalize).map(Real),
            Self::Mean(p) => processing::mean(p.size).map(Real),
            Self::Sharpen(p) => processing::sharpen(p.size).map(Real),
            Self::Unsharp(p) => processing::unsharp(p.size, p.std).map(Real),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<KernelRecipe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn defaults() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            parse(r#"{"kind": "sobel"}"#)?,
            KernelRecipe::Sobel(GradientParams::default())
        );
        assert_eq!(
            parse(r#"{"kind": "dual"}"#)?,
            KernelRecipe::Dual(FiniteParams {
                orient_x: Orientation::Forward,
                orient_y: Orientation::Forward,
                flip: true,
            })
        );

        let built = parse(r#"{"kind": "square"}"#)?.build()?;
        assert_eq!(built.shape(), [21, 21]);
        assert_eq!(built.into_mask().map(|m| m.count_nonzero()), Some(9));
        Ok(())
    }

    #[test]
    fn build_matches_constructors() -> Result<(), Box<dyn std::error::Error>> {
        let recipe = parse(
            r#"{"kind": "prewitt", "orient_x": 1, "orient_y": 0, "size": {"width": 5, "height": 3}}"#,
        )?;
        let expected = diff::prewitt(
            Orientation::Backward,
            Orientation::Forward,
            KernelSize::new(5, 3),
        )?;
        assert_eq!(recipe.build()?.into_complex(), Some(expected));

        let recipe = parse(r#"{"kind": "gaussian", "std": [2.0, 0.5], "normalize": false}"#)?;
        let expected = processing::gaussian(KernelSize::square(3), (2.0, 0.5), false)?;
        assert_eq!(recipe.build()?, BuiltKernel::Real(expected));

        let recipe = parse(r#"{"kind": "laplacian_shaped", "shape": "square"}"#)?;
        let lap = recipe.build()?.into_real();
        assert_eq!(lap.map(|k| k[[1, 1]]), Some(8.0));
        Ok(())
    }

    #[test]
    fn rejected_fields() {
        let err = parse(r#"{"kind": "lines", "orient_x": 2}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid orientation 2"));

        assert!(parse(r#"{"kind": "circle", "mode": "triangle"}"#).is_err());
        assert!(parse(r#"{"kind": "hexagon"}"#).is_err());
    }

    #[test]
    fn build_errors() -> Result<(), serde_json::Error> {
        let recipe = parse(r#"{"kind": "triangle", "mode": "outline"}"#)?;
        assert!(matches!(
            recipe.build(),
            Err(FilterError::UnsupportedMode { shape: "triangle", mode: "outline" })
        ));

        let recipe = parse(r#"{"kind": "central", "size": {"width": 1, "height": 1}}"#)?;
        assert!(matches!(recipe.build(), Err(FilterError::KernelTooSmall { min: 3, .. })));
        Ok(())
    }

    #[test]
    fn serialize_recipe() -> Result<(), serde_json::Error> {
        let recipe = KernelRecipe::RobertCross(OrientParams {
            orient_x: Orientation::Backward,
            orient_y: Orientation::Forward,
        });
        let json = serde_json::to_value(recipe)?;
        assert_eq!(
            json,
            serde_json::json!({"kind": "robert_cross", "orient_x": 1, "orient_y": 0})
        );
        assert_eq!(recipe.kind(), "robert_cross");
        Ok(())
    }
}
