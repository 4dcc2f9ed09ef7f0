//! Structural transforms.
//!
//! Every transform consumes the kernel and returns the transformed value. Keep a `clone()`
//! around if the input grid is still needed afterwards.

use crate::{error::KernelError, kernel::Kernel};

impl<T: Clone> Kernel<T> {
    /// Surround the grid with borders filled with `value`.
    ///
    /// # Arguments
    ///
    /// * `top` - Number of rows added above.
    /// * `right` - Number of columns added on the right.
    /// * `bottom` - Number of rows added below.
    /// * `left` - Number of columns added on the left.
    /// * `value` - Fill value of the borders.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_val([1, 1], 5).pad(1, 0, 0, 2, 0);
    /// assert_eq!(k.shape(), [2, 3]);
    /// assert_eq!(k.as_slice(), &[0, 0, 0, 0, 0, 5]);
    /// ```
    pub fn pad(self, top: usize, right: usize, bottom: usize, left: usize, value: T) -> Self {
        let [rows, cols] = self.shape;
        let shape = [rows + top + bottom, cols + left + right];
        let mut data = vec![value; shape[0] * shape[1]];

        if cols > 0 {
            for (r, row) in self.data.chunks_exact(cols).enumerate() {
                let start = (r + top) * shape[1] + left;
                data[start..start + cols].clone_from_slice(row);
            }
        }

        Self { data, shape }
    }

    /// Insert `strides` rows and columns of `value` between neighbouring coefficients.
    ///
    /// The new shape is `n * (strides + 1) + strides` per axis and the coefficient at
    /// `[r, c]` lands at `[(strides + 1) * r + strides, (strides + 1) * c + strides]`, so the
    /// grid is also framed by `strides` rows and columns of `value` on the top and left edges.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_vec([1, 2], vec![1, 2]).unwrap().stride(1, 0);
    /// assert_eq!(k.shape(), [3, 5]);
    /// assert_eq!(k.row(1), Some(&[0, 1, 0, 2, 0][..]));
    /// ```
    pub fn stride(self, strides: usize, value: T) -> Self {
        let [rows, cols] = self.shape;
        let step = strides + 1;
        let shape = [rows * step + strides, cols * step + strides];
        let mut data = vec![value; shape[0] * shape[1]];

        for (i, v) in self.data.into_iter().enumerate() {
            let (r, c) = (i / cols, i % cols);
            data[(step * r + strides) * shape[1] + step * c + strides] = v;
        }

        Self { data, shape }
    }

    /// Rotate the grid by 90 degrees counter-clockwise.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap().rot90();
    /// assert_eq!(k.shape(), [3, 2]);
    /// assert_eq!(k.as_slice(), &[3, 6, 2, 5, 1, 4]);
    /// ```
    pub fn rot90(self) -> Self {
        let [rows, cols] = self.shape;
        Self::from_shape_fn([cols, rows], |[i, j]| {
            self.data[j * cols + (cols - 1 - i)].clone()
        })
    }

    /// Crop the window of `rows` x `cols` coefficients starting at `[top, left]`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::CropOutOfBounds`] if the window does not fit in the kernel.
    pub fn crop(&self, top: usize, left: usize, rows: usize, cols: usize) -> Result<Self, KernelError> {
        if top + rows > self.rows() || left + cols > self.cols() {
            return Err(KernelError::CropOutOfBounds {
                top,
                left,
                rows,
                cols,
                shape: self.shape,
            });
        }
        Ok(Self::from_shape_fn([rows, cols], |[r, c]| {
            self.data[(top + r) * self.cols() + left + c].clone()
        }))
    }
}

impl<T> Kernel<T> {
    /// Reverse the order of the coefficients along both axes.
    ///
    /// Equivalent to a rotation by 180 degrees.
    pub fn flip(mut self) -> Self {
        self.data.reverse();
        self
    }

    /// Reverse the order of the coefficients within every row.
    pub fn flip_horizontal(mut self) -> Self {
        let cols = self.cols();
        if cols > 0 {
            self.data.chunks_exact_mut(cols).for_each(|row| row.reverse());
        }
        self
    }

    /// Reverse the order of the rows.
    pub fn flip_vertical(self) -> Self {
        let shape = self.shape;
        let cols = shape[1];
        if cols == 0 {
            return self;
        }
        let mut rows: Vec<Vec<T>> = Vec::with_capacity(shape[0]);
        let mut data = self.data.into_iter();
        for _ in 0..shape[0] {
            rows.push(data.by_ref().take(cols).collect());
        }
        Self {
            data: rows.into_iter().rev().flatten().collect(),
            shape,
        }
    }
}
