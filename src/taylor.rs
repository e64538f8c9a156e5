//! Truncated Taylor series built from the derivative chain.
//!
//! ```text
//! f(x) ≈ Σ_{n=0}^{N-1} f⁽ⁿ⁾(a) / n! · (x - a)ⁿ
//! ```

use num_traits::Float;
use tracing::debug;

use crate::Scalar;
use crate::derive::derivative_chain;
use crate::node::Node;
use crate::powi::powi;

/// `n!` computed iteratively in `T`.
pub fn factorial<T: Float>(n: usize) -> T {
  let mut result = T::one();
  let mut k = T::one();
  for _ in 1..n {
    k = k + T::one();
    result = result * k;
  }
  result
}

/// Sums the first `order` terms of the Taylor series of `node` around
/// `expansion_point`, evaluated at `x`.
///
/// The derivative chain is built once. An order of zero sums no terms.
pub fn taylor_eval<T: Scalar>(
  node: &Node,
  expansion_point: T,
  x: T,
  order: usize,
) -> T {
  let offset = x - expansion_point;
  derivative_chain(node, order).iter().enumerate().fold(
    T::zero(),
    |sum, (n, derivative)| {
      let coefficient = derivative.eval(expansion_point) / factorial::<T>(n);
      sum + coefficient * powi(offset, n as u32)
    },
  )
}

/// A Taylor series with its expansion point and order fixed up front.
///
/// The coefficients `f⁽ⁿ⁾(a) / n!` are evaluated once, so [`eval`](Self::eval)
/// only pays for the powers of `x - a`.
#[derive(Debug, Clone)]
pub struct TaylorExpansion<T> {
  chain: Vec<Node>,
  coefficients: Vec<T>,
  expansion_point: T,
}

impl<T: Scalar> TaylorExpansion<T> {
  pub fn new(node: &Node, expansion_point: T, order: usize) -> Self {
    let chain = derivative_chain(node, order);
    debug!(
      order,
      sizes = ?chain.iter().map(Node::size).collect::<Vec<_>>(),
      "built derivative chain"
    );
    let coefficients = chain
      .iter()
      .enumerate()
      .map(|(n, derivative)| {
        derivative.eval(expansion_point) / factorial::<T>(n)
      })
      .collect();
    TaylorExpansion {
      chain,
      coefficients,
      expansion_point,
    }
  }

  /// Evaluates the truncated series at `x`.
  pub fn eval(&self, x: T) -> T {
    let offset = x - self.expansion_point;
    self
      .coefficients
      .iter()
      .enumerate()
      .fold(T::zero(), |sum, (n, coefficient)| {
        sum + *coefficient * powi(offset, n as u32)
      })
  }

  /// Number of terms in the series.
  pub fn order(&self) -> usize {
    self.coefficients.len()
  }

  pub fn expansion_point(&self) -> T {
    self.expansion_point
  }

  pub fn coefficients(&self) -> &[T] {
    &self.coefficients
  }

  /// The derivatives `D^0 .. D^(order-1)` the coefficients came from.
  pub fn chain(&self) -> &[Node] {
    &self.chain
  }
}
