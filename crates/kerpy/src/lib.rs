#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use kerpy_kernel as kernel;

#[doc(inline)]
pub use kerpy_filters as filters;
