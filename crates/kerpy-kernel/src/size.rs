/// Grid dimensions of a kernel.
///
/// `width` counts columns (the x axis) and `height` counts rows (the y axis).
///
/// # Example
///
/// ```
/// use kerpy_kernel::KernelSize;
///
/// let size = KernelSize { width: 5, height: 3 };
/// assert_eq!(size.shape(), [3, 5]);
/// assert_eq!(size.numel(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelSize {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl KernelSize {
    /// Create a new kernel size.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create a square kernel size.
    pub const fn square(side: usize) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Row-major shape `[rows, cols]` of a kernel with this size.
    pub const fn shape(&self) -> [usize; 2] {
        [self.height, self.width]
    }

    /// Number of coefficients.
    pub const fn numel(&self) -> usize {
        self.width * self.height
    }

    /// Center index `[row, col]`, computed as `(n - 1) / 2` per axis.
    pub const fn center(&self) -> [usize; 2] {
        [
            self.height.saturating_sub(1) / 2,
            self.width.saturating_sub(1) / 2,
        ]
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self::square(3)
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for KernelSize {
    fn from(size: [usize; 2]) -> Self {
        KernelSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<(usize, usize)> for KernelSize {
    fn from((width, height): (usize, usize)) -> Self {
        KernelSize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::KernelSize;

    #[test]
    fn center_convention() {
        assert_eq!(KernelSize::square(3).center(), [1, 1]);
        assert_eq!(KernelSize::square(4).center(), [1, 1]);
        assert_eq!(KernelSize::new(5, 2).center(), [0, 2]);
        assert_eq!(KernelSize::square(0).center(), [0, 0]);
    }

    #[test]
    fn from_tuple_is_width_height() {
        let size: KernelSize = (7, 2).into();
        assert_eq!(size.shape(), [2, 7]);
        assert_eq!(size.to_string(), "7x2");
    }
}
