//! Integer powers by repeated squaring.

use num_traits::One;
use std::ops::Mul;

/// Raises `base` to a non-negative integer power in `O(log exponent)`
/// multiplications.
///
/// `powi(b, 0)` is one for every `b`, including zero.
pub fn powi<T>(base: T, exponent: u32) -> T
where
  T: Copy + One + Mul<Output = T>,
{
  if exponent == 0 {
    return T::one();
  }
  let highest_bit = u32::BITS - 1 - exponent.leading_zeros();
  let mut result = base;
  for bit in (0..highest_bit).rev() {
    result = result * result;
    if exponent & (1 << bit) != 0 {
      result = result * base;
    }
  }
  result
}
