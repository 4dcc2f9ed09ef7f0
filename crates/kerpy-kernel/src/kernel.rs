use num_traits::Zero;

use crate::{error::KernelError, size::KernelSize};

/// A dense 2D grid of coefficients stored in row-major order.
///
/// `Kernel` is the value produced by every constructor of the workspace. It owns its data;
/// operations either return a new kernel or consume `self` and return the transformed one.
///
/// # Type Parameters
///
/// * `T` - The coefficient type: a real float, a complex number, or an integer/bool for masks.
///
/// # Examples
///
/// ```rust
/// use kerpy_kernel::Kernel;
///
/// let k = Kernel::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(k.shape(), [2, 3]);
/// assert_eq!(k[[1, 2]], 6);
/// assert_eq!(k.center(), [0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T> Kernel<T> {
    /// Creates a new `Kernel` with the given shape and data.
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape `[rows, cols]` of the kernel.
    /// * `data` - The coefficients in row-major order.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    /// A shape whose element count overflows `usize` is rejected with
    /// [`KernelError::ShapeOverflow`].
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, KernelError> {
        let numel = shape[0]
            .checked_mul(shape[1])
            .ok_or(KernelError::ShapeOverflow { shape })?;
        if numel != data.len() {
            return Err(KernelError::invalid_shape(numel, data.len()));
        }
        Ok(Self { data, shape })
    }

    /// Creates a new `Kernel` from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::NonRectangular`] if the rows do not all have the same length.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::{Kernel, KernelError};
    ///
    /// let k = Kernel::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
    /// assert_eq!(k.as_slice(), &[0, 1, 2, 3]);
    ///
    /// let err = Kernel::from_rows(vec![vec![0, 1], vec![2]]).unwrap_err();
    /// assert!(matches!(err, KernelError::NonRectangular { row: 1, .. }));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, KernelError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(KernelError::NonRectangular {
                row,
                expected: cols,
                actual,
            });
        }
        let shape = [rows.len(), cols];
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, shape })
    }

    /// Create a new `Kernel` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the `[row, col]` index of the element to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(k.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; 2], f: F) -> Self
    where
        F: Fn([usize; 2]) -> T,
    {
        let [rows, cols] = shape;
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| [i, j]))
            .map(f)
            .collect();
        Self { data, shape }
    }

    /// Creates a new `Kernel` with the given shape filled with `value`.
    pub fn from_shape_val(shape: [usize; 2], value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; shape[0] * shape[1]],
            shape,
        }
    }

    /// Create a new kernel with all elements set to zero.
    pub fn zeros(shape: [usize; 2]) -> Self
    where
        T: Clone + Zero,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// The shape `[rows, cols]` of the kernel.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// The size of the kernel as width and height.
    #[inline]
    pub fn size(&self) -> KernelSize {
        KernelSize {
            width: self.cols(),
            height: self.rows(),
        }
    }

    /// Returns the number of elements in the kernel.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the kernel has no coefficient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The center index `[(rows - 1) / 2, (cols - 1) / 2]`.
    ///
    /// Every constructor anchors its stencil on this index, so a 3x3 kernel centers at `[1, 1]`
    /// and a 4x4 kernel at `[1, 1]` as well.
    #[inline]
    pub fn center(&self) -> [usize; 2] {
        self.size().center()
    }

    /// Get the data of the kernel as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the data of the kernel as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the kernel and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the coefficients in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a mutable iterator over the coefficients in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the coefficients of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols();
        Some(&self.data[start..start + self.cols()])
    }

    #[inline]
    fn offset(&self, index: [usize; 2]) -> Option<usize> {
        let [r, c] = index;
        (r < self.shape[0] && c < self.shape[1]).then(|| r * self.shape[1] + c)
    }

    /// Get the element at the given index, checking if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(k.get([1, 0]), Some(&3));
    /// assert!(k.get([2, 0]).is_none());
    /// ```
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        self.offset(index).map(|i| &self.data[i])
    }

    /// Get a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        self.offset(index).map(move |i| &mut self.data[i])
    }

    /// Apply a function to each element of the kernel.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let k = Kernel::from_shape_vec([1, 3], vec![1u8, 0, 1]).unwrap();
    /// let k = k.map(|&v| f64::from(v) * 0.5);
    /// assert_eq!(k.as_slice(), &[0.5, 0.0, 0.5]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Kernel<U>
    where
        F: FnMut(&T) -> U,
    {
        Kernel {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
        }
    }

    /// Consume the kernel and apply a function to each element.
    pub fn into_map<U, F>(self, f: F) -> Kernel<U>
    where
        F: FnMut(T) -> U,
    {
        Kernel {
            data: self.data.into_iter().map(f).collect(),
            shape: self.shape,
        }
    }

    /// Combine two kernels of identical shape element by element.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::DimensionMismatch`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use kerpy_kernel::Kernel;
    ///
    /// let a = Kernel::from_shape_vec([1, 3], vec![1, 2, 3]).unwrap();
    /// let b = Kernel::from_shape_vec([1, 3], vec![3, 2, 1]).unwrap();
    /// let c = a.zip_map(&b, |&x, &y| x.max(y)).unwrap();
    /// assert_eq!(c.as_slice(), &[3, 2, 3]);
    /// ```
    pub fn zip_map<U, V, F>(&self, other: &Kernel<U>, mut f: F) -> Result<Kernel<V>, KernelError>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.shape != other.shape {
            return Err(KernelError::dimension_mismatch(self.shape, other.shape));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Kernel {
            data,
            shape: self.shape,
        })
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> T
    where
        T: Zero + Clone,
    {
        self.data.iter().cloned().fold(T::zero(), |acc, v| acc + v)
    }

    /// Number of coefficients different from zero.
    pub fn count_nonzero(&self) -> usize
    where
        T: Zero,
    {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }
}

impl<T> std::ops::Index<[usize; 2]> for Kernel<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn index(&self, index: [usize; 2]) -> &T {
        match self.offset(index) {
            Some(i) => &self.data[i],
            None => panic!("index {index:?} out of bounds for kernel of shape {:?}", self.shape),
        }
    }
}

impl<T> std::ops::IndexMut<[usize; 2]> for Kernel<T> {
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn index_mut(&mut self, index: [usize; 2]) -> &mut T {
        match self.offset(index) {
            Some(i) => &mut self.data[i],
            None => panic!("index {index:?} out of bounds for kernel of shape {:?}", self.shape),
        }
    }
}

/// Prints one row per line with right-aligned cells.
///
/// A precision given to the formatter, as in `{:.4}`, is forwarded to every coefficient.
impl<T> std::fmt::Display for Kernel<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision();
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|v| match precision {
                Some(p) => format!("{v:.p$}"),
                None => format!("{v}"),
            })
            .collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        write!(f, "[")?;
        for (r, row) in cells.chunks(self.cols().max(1)).enumerate() {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
