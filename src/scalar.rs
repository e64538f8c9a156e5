use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point types an expression can be evaluated in.
///
/// Everything numeric comes from `num_traits::Float`; the extra bounds let
/// results be printed and shared across threads.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
  /// Converts an `f64` literal, giving NaN when it cannot be represented.
  fn from_f64_lossy(value: f64) -> Self {
    <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::nan)
  }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
