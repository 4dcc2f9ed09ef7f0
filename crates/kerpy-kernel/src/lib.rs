#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kerpy-kernel` provides [`Kernel`], the small dense 2D grid of real or complex
//! coefficients produced by every kernel constructor of the workspace.
//!
//! - **Kernel**: rectangular row-major grid with a fixed center convention, `(n - 1) / 2`.
//! - **ops**: element-wise algebra. Fallible functions plus the std operators.
//! - **transforms**: pad, stride, rotate, flip and crop, all consuming `self`.
//! - **ToReals**: real/imaginary decomposition of complex gradient kernels.
//!
//! # Quick Start
//!
//! ```rust
//! use kerpy_kernel::{ops, Complex64, Kernel, ToReals};
//!
//! let a = Kernel::from_shape_val([3, 3], 1.0);
//! let b = Kernel::from_shape_fn([3, 3], |[r, c]| (r * 3 + c) as f64);
//!
//! // element-wise algebra returns new kernels
//! let c = ops::add(&a, &b).unwrap();
//! assert_eq!(c[[2, 2]], 9.0);
//! assert_eq!((&c * 2.0)[[0, 0]], 2.0);
//!
//! // comparisons return 0/1 masks
//! assert_eq!(c.gt_scalar(5.0).sum(), 4);
//!
//! // complex kernels split into their x/y components
//! let g = Kernel::from_shape_val([1, 2], Complex64::new(1.0, -1.0));
//! let reals = g.to_reals();
//! assert_eq!(reals.x.as_slice(), &[1.0, 1.0]);
//! ```

mod complex;
mod error;
mod kernel;
mod size;
mod transform;

pub mod ops;

#[cfg(feature = "serde")]
mod serde;

pub use crate::complex::{Reals, ToReals};
pub use crate::error::KernelError;
pub use crate::kernel::Kernel;
pub use crate::ops::ScalarOperand;
pub use crate::size::KernelSize;

pub use num_complex::{Complex, Complex32, Complex64};
