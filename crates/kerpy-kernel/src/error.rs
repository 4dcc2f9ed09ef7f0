use thiserror::Error;

/// Error type for kernel construction and element-wise operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Kernel shape does not match the provided data.
    ///
    /// # Example
    /// ```ignore
    /// // Error: shape [2, 3] expects 6 elements, but got 5
    /// let kernel = Kernel::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5])?;
    /// ```
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The element count of the shape does not fit in `usize`.
    #[error("Shape overflow: {shape:?} holds more elements than usize can count")]
    ShapeOverflow {
        /// The rejected shape
        shape: [usize; 2],
    },

    /// The nested rows handed to [`crate::Kernel::from_rows`] are ragged.
    #[error("Content is not a 2D array: row {row} has {actual} elements, expected {expected}")]
    NonRectangular {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Kernels combined element-wise do not share the same shape.
    #[error("Dimension mismatch: element-wise operations require identical shapes. Expected shape: {expected:?}, got: {actual:?}")]
    DimensionMismatch {
        /// Shape of the left-hand side kernel
        expected: [usize; 2],
        /// Shape of the right-hand side kernel
        actual: [usize; 2],
    },

    /// The requested crop window does not fit in the kernel.
    #[error("Crop window (top: {top}, left: {left}, rows: {rows}, cols: {cols}) out of bounds for shape {shape:?}")]
    CropOutOfBounds {
        /// First row of the window
        top: usize,
        /// First column of the window
        left: usize,
        /// Number of rows of the window
        rows: usize,
        /// Number of columns of the window
        cols: usize,
        /// Shape of the cropped kernel
        shape: [usize; 2],
    },
}

impl KernelError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates a DimensionMismatch error from the two operand shapes.
    pub fn dimension_mismatch(expected: [usize; 2], actual: [usize; 2]) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::InvalidShape { .. } => {
                "Ensure the product of shape dimensions equals the number of data elements"
            }
            Self::ShapeOverflow { .. } => "Use a shape whose rows * cols fits in memory",
            Self::NonRectangular { .. } => "Ensure every row holds the same number of coefficients",
            Self::DimensionMismatch { .. } => {
                "Pad or crop one operand so both kernels share the same shape"
            }
            Self::CropOutOfBounds { .. } => "Keep top + rows and left + cols within the kernel shape",
        }
    }
}
