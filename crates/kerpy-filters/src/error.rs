use kerpy_kernel::{KernelError, KernelSize};
use thiserror::Error;

/// An error type for the kernel constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// An orientation flag outside of `{0, 1}`.
    #[error("Invalid orientation {0}: orient must belong to {{0, 1}}")]
    InvalidOrientation(i64),

    /// A mode string that does not name any known mode.
    #[error("Invalid mode '{mode}': expected one of {expected}")]
    InvalidMode {
        /// The rejected mode string
        mode: String,
        /// The accepted values
        expected: &'static str,
    },

    /// The shape has no boundary definition for the requested mode.
    #[error("Shape '{shape}' does not support the '{mode}' mode")]
    UnsupportedMode {
        /// Name of the shape
        shape: &'static str,
        /// Name of the requested mode
        mode: &'static str,
    },

    /// The operator stencil does not fit in the requested size.
    #[error("Kernel size {size} is too small: the operator requires at least {min}x{min}")]
    KernelTooSmall {
        /// The requested size
        size: KernelSize,
        /// Minimal side length of the operator
        min: usize,
    },

    /// A standard deviation that is not strictly positive.
    #[error("Invalid standard deviation ({0}, {1}): both components must be strictly positive")]
    InvalidStd(f64, f64),

    /// Error from the underlying kernel operation.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

impl FilterError {
    /// Returns true if the error comes from a rejected argument rather than from a kernel
    /// operation.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Kernel(_))
    }

    pub(crate) fn invalid_mode(mode: &str, expected: &'static str) -> Self {
        log::warn!("rejected mode '{mode}', expected one of {expected}");
        Self::InvalidMode {
            mode: mode.to_string(),
            expected,
        }
    }
}

/// Check that both sides of `size` are at least `min`.
pub(crate) fn ensure_min_size(size: KernelSize, min: usize) -> Result<(), FilterError> {
    if size.width < min || size.height < min {
        log::warn!("rejected kernel size {size}, the operator requires at least {min}x{min}");
        return Err(FilterError::KernelTooSmall { size, min });
    }
    Ok(())
}
