//! Element-wise operations for kernels.
//!
//! The functions of this module combine two kernels of identical shape and return a new
//! kernel, or a [`KernelError::DimensionMismatch`] when the shapes differ. The std operator
//! traits are implemented on top of them for kernel/kernel and kernel/scalar operands.
//!
//! Comparisons never collapse to a single `bool`: they return a `Kernel<u8>` holding `1`
//! where the relation holds and `0` elsewhere, so comparison results can be fed back into
//! the kernel algebra (masking, counting, summing).

use num_complex::Complex;
use num_traits::{Float, Pow};

use crate::{error::KernelError, kernel::Kernel};

/// Marker for the types accepted as the scalar operand of the kernel operators.
///
/// `Kernel<T> + T`, `Kernel<T> * T`, ... are implemented for every `T: ScalarOperand`.
pub trait ScalarOperand: Copy + 'static {}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(impl ScalarOperand for $t {})*
    };
}

impl_scalar_operand!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt, $doc:literal) => {
        #[doc = concat!($doc, " two kernels element-wise.")]
        ///
        /// # Errors
        ///
        /// Returns [`KernelError::DimensionMismatch`] if the shapes differ.
        pub fn $method<T>(lhs: &Kernel<T>, rhs: &Kernel<T>) -> Result<Kernel<T>, KernelError>
        where
            T: Copy + std::ops::$trait<Output = T>,
        {
            lhs.zip_map(rhs, |&a, &b| a $op b)
        }

        impl<T> std::ops::$trait<&Kernel<T>> for &Kernel<T>
        where
            T: Copy + std::ops::$trait<Output = T>,
        {
            type Output = Kernel<T>;

            /// # Panics
            ///
            /// Panics if the shapes differ. Use the fallible function of [`crate::ops`]
            /// to get an error instead.
            fn $method(self, rhs: &Kernel<T>) -> Kernel<T> {
                match $method(self, rhs) {
                    Ok(k) => k,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<T> std::ops::$trait<Kernel<T>> for Kernel<T>
        where
            T: Copy + std::ops::$trait<Output = T>,
        {
            type Output = Kernel<T>;

            /// # Panics
            ///
            /// Panics if the shapes differ.
            fn $method(self, rhs: Kernel<T>) -> Kernel<T> {
                &self $op &rhs
            }
        }

        impl<T> std::ops::$trait<&Kernel<T>> for Kernel<T>
        where
            T: Copy + std::ops::$trait<Output = T>,
        {
            type Output = Kernel<T>;

            /// # Panics
            ///
            /// Panics if the shapes differ.
            fn $method(self, rhs: &Kernel<T>) -> Kernel<T> {
                &self $op rhs
            }
        }

        impl<T> std::ops::$trait<T> for Kernel<T>
        where
            T: ScalarOperand + std::ops::$trait<Output = T>,
        {
            type Output = Kernel<T>;

            fn $method(self, rhs: T) -> Kernel<T> {
                self.into_map(|a| a $op rhs)
            }
        }

        impl<T> std::ops::$trait<T> for &Kernel<T>
        where
            T: ScalarOperand + std::ops::$trait<Output = T>,
        {
            type Output = Kernel<T>;

            fn $method(self, rhs: T) -> Kernel<T> {
                self.map(|&a| a $op rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, +, "Add");
impl_binary_op!(Sub, sub, -, "Subtract");
impl_binary_op!(Mul, mul, *, "Multiply");
impl_binary_op!(Div, div, /, "Divide");
impl_binary_op!(Rem, rem, %, "Compute the remainder of");
impl_binary_op!(BitAnd, bitand, &, "Bitwise AND");
impl_binary_op!(BitOr, bitor, |, "Bitwise OR");
impl_binary_op!(BitXor, bitxor, ^, "Bitwise XOR");
impl_binary_op!(Shl, shl, <<, "Shift left");
impl_binary_op!(Shr, shr, >>, "Shift right");

impl<T> std::ops::Neg for Kernel<T>
where
    T: std::ops::Neg<Output = T>,
{
    type Output = Kernel<T>;

    fn neg(self) -> Kernel<T> {
        self.into_map(|a| -a)
    }
}

impl<T> std::ops::Neg for &Kernel<T>
where
    T: Copy + std::ops::Neg<Output = T>,
{
    type Output = Kernel<T>;

    fn neg(self) -> Kernel<T> {
        self.map(|&a| -a)
    }
}

impl<T> std::ops::Not for Kernel<T>
where
    T: std::ops::Not<Output = T>,
{
    type Output = Kernel<T>;

    fn not(self) -> Kernel<T> {
        self.into_map(|a| !a)
    }
}

/// Raise every coefficient of `lhs` to the power of the matching coefficient of `rhs`.
///
/// # Errors
///
/// Returns [`KernelError::DimensionMismatch`] if the shapes differ.
pub fn pow<T>(lhs: &Kernel<T>, rhs: &Kernel<T>) -> Result<Kernel<T>, KernelError>
where
    T: Copy + Pow<T, Output = T>,
{
    lhs.zip_map(rhs, |&a, &b| a.pow(b))
}

/// Divide two float kernels element-wise and round the quotient toward negative infinity.
///
/// # Errors
///
/// Returns [`KernelError::DimensionMismatch`] if the shapes differ.
pub fn floor_div<T: Float>(lhs: &Kernel<T>, rhs: &Kernel<T>) -> Result<Kernel<T>, KernelError> {
    lhs.zip_map(rhs, |&a, &b| (a / b).floor())
}

macro_rules! impl_comparison {
    ($name:ident, $scalar:ident, $bound:ident, $op:tt, $doc:literal) => {
        #[doc = concat!("Element-wise `", stringify!($op), "`: ", $doc, ".")]
        ///
        /// Returns a 0/1 mask of the same shape.
        ///
        /// # Errors
        ///
        /// Returns [`KernelError::DimensionMismatch`] if the shapes differ.
        pub fn $name<T: $bound>(lhs: &Kernel<T>, rhs: &Kernel<T>) -> Result<Kernel<u8>, KernelError> {
            lhs.zip_map(rhs, |a, b| u8::from(a $op b))
        }

        impl<T: $bound> Kernel<T> {
            #[doc = concat!("Compare every coefficient with `value` using `", stringify!($op), "`.")]
            ///
            /// Returns a 0/1 mask of the same shape.
            pub fn $scalar(&self, value: T) -> Kernel<u8> {
                self.map(|a| u8::from(*a $op value))
            }
        }
    };
}

impl_comparison!(eq, eq_scalar, PartialEq, ==, "1 where both coefficients are equal");
impl_comparison!(ne, ne_scalar, PartialEq, !=, "1 where the coefficients differ");
impl_comparison!(lt, lt_scalar, PartialOrd, <, "1 where the left coefficient is smaller");
impl_comparison!(gt, gt_scalar, PartialOrd, >, "1 where the left coefficient is greater");
impl_comparison!(le, le_scalar, PartialOrd, <=, "1 where the left coefficient is smaller or equal");
impl_comparison!(ge, ge_scalar, PartialOrd, >=, "1 where the left coefficient is greater or equal");

impl<T> Kernel<T> {
    /// Raise every coefficient to the power `exp`.
    pub fn pow_scalar<E>(&self, exp: E) -> Kernel<T>
    where
        T: Copy + Pow<E, Output = T>,
        E: Copy,
    {
        self.map(|&a| a.pow(exp))
    }

    /// Divide every coefficient by `value` and round toward negative infinity.
    pub fn floor_div_scalar(&self, value: T) -> Kernel<T>
    where
        T: Float,
    {
        self.map(|&a| (a / value).floor())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    use crate::{ops, Kernel, KernelError};

    fn k3(data: [f64; 9]) -> Result<Kernel<f64>, KernelError> {
        Kernel::from_shape_vec([3, 3], data.to_vec())
    }

    #[test]
    fn add_kernels() -> Result<(), KernelError> {
        let a = k3([1.0; 9])?;
        let b = k3([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])?;
        let c = ops::add(&a, &b)?;
        assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(&a + &b, c);
        assert_eq!(a.clone() + b.clone(), c);
        assert_eq!(a + &b, c);
        Ok(())
    }

    #[test]
    fn add_shape_mismatch() {
        let a = Kernel::<f64>::zeros([3, 3]);
        let b = Kernel::<f64>::zeros([2, 3]);
        assert_eq!(
            ops::add(&a, &b),
            Err(KernelError::dimension_mismatch([3, 3], [2, 3]))
        );
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch")]
    fn operator_shape_mismatch_panics() {
        let a = Kernel::<f64>::zeros([3, 3]);
        let b = Kernel::<f64>::zeros([3, 2]);
        let _ = &a - &b;
    }

    #[test]
    fn scalar_operands() -> Result<(), KernelError> {
        let a = Kernel::from_shape_vec([1, 4], vec![1.0, 2.0, 3.0, 4.0])?;
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((&a - 1.0).as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!((&a / 2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        assert_eq!((a.clone() % 2.0).as_slice(), &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!((-a).as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
        Ok(())
    }

    #[test]
    fn bitwise_ops() -> Result<(), KernelError> {
        let a = Kernel::from_shape_vec([1, 3], vec![0b1100u8, 0b1010, 1])?;
        let b = Kernel::from_shape_vec([1, 3], vec![0b1010u8, 0b0110, 2])?;
        assert_eq!(ops::bitand(&a, &b)?.as_slice(), &[0b1000, 0b0010, 0]);
        assert_eq!(ops::bitor(&a, &b)?.as_slice(), &[0b1110, 0b1110, 3]);
        assert_eq!(ops::bitxor(&a, &b)?.as_slice(), &[0b0110, 0b1100, 3]);
        assert_eq!((&a << 1u8).as_slice(), &[0b11000, 0b10100, 2]);
        assert_eq!((a >> 1u8).as_slice(), &[0b110, 0b101, 0]);
        let mask = Kernel::from_shape_vec([1, 2], vec![true, false])?;
        assert_eq!((!mask).as_slice(), &[false, true]);
        Ok(())
    }

    #[test]
    fn comparisons_return_masks() -> Result<(), KernelError> {
        let a = Kernel::from_shape_vec([1, 3], vec![1.0, 2.0, 3.0])?;
        let b = Kernel::from_shape_vec([1, 3], vec![3.0, 2.0, 1.0])?;
        assert_eq!(ops::lt(&a, &b)?.as_slice(), &[1, 0, 0]);
        assert_eq!(ops::le(&a, &b)?.as_slice(), &[1, 1, 0]);
        assert_eq!(ops::gt(&a, &b)?.as_slice(), &[0, 0, 1]);
        assert_eq!(ops::ge(&a, &b)?.as_slice(), &[0, 1, 1]);
        assert_eq!(ops::eq(&a, &b)?.as_slice(), &[0, 1, 0]);
        assert_eq!(ops::ne(&a, &b)?.as_slice(), &[1, 0, 1]);
        assert_eq!(a.ge_scalar(2.0).as_slice(), &[0, 1, 1]);
        assert_eq!(a.eq_scalar(3.0).sum(), 1);
        Ok(())
    }

    #[test]
    fn complex_comparison() -> Result<(), KernelError> {
        let a = Kernel::from_shape_vec([1, 2], vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, 1.0)])?;
        assert_eq!(a.eq_scalar(Complex64::new(0.0, 1.0)).as_slice(), &[0, 1]);
        Ok(())
    }

    #[test]
    fn pow_and_floor_div() -> Result<(), KernelError> {
        let a = Kernel::from_shape_vec([1, 3], vec![2.0, -3.0, 9.0])?;
        let b = Kernel::from_shape_vec([1, 3], vec![3.0, 2.0, 0.5])?;
        let p = ops::pow(&a, &b)?;
        assert_relative_eq!(p[[0, 0]], 8.0);
        assert_relative_eq!(p[[0, 1]], 9.0);
        assert_relative_eq!(p[[0, 2]], 3.0);
        assert_eq!(ops::floor_div(&a, &b)?.as_slice(), &[0.0, -2.0, 18.0]);
        assert_eq!(a.floor_div_scalar(2.0).as_slice(), &[1.0, -2.0, 4.0]);
        let sq = a.pow_scalar(2.0);
        assert_relative_eq!(sq[[0, 0]], 4.0);
        assert_relative_eq!(sq[[0, 1]], 9.0);
        assert_relative_eq!(sq[[0, 2]], 81.0);
        Ok(())
    }
}
