use num_complex::Complex;

use crate::kernel::Kernel;

/// Real components of a kernel, keyed by axis.
///
/// Gradient kernels store the x stencil in the real part and the y stencil in the
/// imaginary part of a complex kernel; `Reals` splits them back apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Reals<F> {
    /// Real part, or the kernel itself for real kernels.
    pub x: Kernel<F>,
    /// Imaginary part, `None` for real kernels.
    pub y: Option<Kernel<F>>,
}

impl<F> Reals<F> {
    /// Look a component up by its key, `"x"` or `"y"`.
    pub fn get(&self, key: &str) -> Option<&Kernel<F>> {
        match key {
            "x" => Some(&self.x),
            "y" => self.y.as_ref(),
            _ => None,
        }
    }

    /// Iterate over the `(key, component)` pairs that are present.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Kernel<F>)> {
        std::iter::once(("x", &self.x)).chain(self.y.as_ref().map(|y| ("y", y)))
    }
}

/// Decomposition of a kernel into real components.
pub trait ToReals {
    /// The real scalar type of the components.
    type Real;

    /// Split the kernel into its real and imaginary parts.
    ///
    /// A real kernel yields itself as `x` and no `y`.
    fn to_reals(&self) -> Reals<Self::Real>;

    /// Collapse the kernel into the real kernel `re + im`.
    ///
    /// This sums the x and y stencils of a gradient kernel into one scalar field. A real
    /// kernel is returned unchanged.
    fn divergence(self) -> Kernel<Self::Real>;
}

macro_rules! impl_to_reals {
    ($($f:ty),*) => {
        $(
            impl ToReals for Kernel<$f> {
                type Real = $f;

                fn to_reals(&self) -> Reals<$f> {
                    Reals {
                        x: self.clone(),
                        y: None,
                    }
                }

                fn divergence(self) -> Kernel<$f> {
                    self
                }
            }

            impl ToReals for Kernel<Complex<$f>> {
                type Real = $f;

                fn to_reals(&self) -> Reals<$f> {
                    Reals {
                        x: self.map(|c| c.re),
                        y: Some(self.map(|c| c.im)),
                    }
                }

                fn divergence(self) -> Kernel<$f> {
                    self.into_map(|c| c.re + c.im)
                }
            }
        )*
    };
}

impl_to_reals!(f32, f64);

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use crate::{Kernel, KernelError, ToReals};

    #[test]
    fn complex_to_reals() -> Result<(), KernelError> {
        let k = Kernel::from_shape_vec(
            [1, 3],
            vec![
                Complex64::new(1.0, -1.0),
                Complex64::new(0.0, 2.0),
                Complex64::new(3.0, 0.0),
            ],
        )?;
        let reals = k.to_reals();
        assert_eq!(reals.x.as_slice(), &[1.0, 0.0, 3.0]);
        assert_eq!(reals.get("y").map(Kernel::as_slice), Some(&[-1.0, 2.0, 0.0][..]));
        assert!(reals.get("z").is_none());
        assert_eq!(reals.iter().map(|(key, _)| key).collect::<Vec<_>>(), ["x", "y"]);
        Ok(())
    }

    #[test]
    fn real_to_reals() {
        let k = Kernel::<f32>::from_shape_val([2, 2], 0.5);
        let reals = k.to_reals();
        assert_eq!(reals.x, k);
        assert!(reals.y.is_none());
        assert_eq!(reals.iter().count(), 1);
    }

    #[test]
    fn divergence_sums_components() -> Result<(), KernelError> {
        let k = Kernel::from_shape_vec([1, 2], vec![Complex64::new(1.0, -3.0), Complex64::new(0.5, 0.5)])?;
        assert_eq!(k.divergence().as_slice(), &[-2.0, 1.0]);

        let real = Kernel::from_shape_vec([1, 2], vec![1.0f64, 2.0])?;
        assert_eq!(real.clone().divergence(), real);
        Ok(())
    }
}
