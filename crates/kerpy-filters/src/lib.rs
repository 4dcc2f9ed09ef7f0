#![deny(missing_docs)]
//! Kernel constructors for image processing and mathematical morphology.
//!
//! Gradient operators return complex kernels holding the x stencil in the real part and the
//! y stencil in the imaginary part. Laplacians and blurs are real, shape masks are 0/1
//! kernels of `u8`.

pub mod diff;

/// Error types for the kernel constructors.
pub mod error;

mod orientation;

pub mod processing;

pub mod recipe;

pub mod shapes;

pub mod smoothing;

pub use crate::error::FilterError;
pub use crate::orientation::Orientation;
pub use crate::recipe::{BuiltKernel, KernelRecipe};
