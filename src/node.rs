//! Expression nodes.
//!
//! A [`Node`] is an immutable expression tree over a single free variable.
//! Children are reference counted, so derivative rules that mention an
//! operand more than once share it instead of copying it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::Scalar;

/// The constant π as an expression.
pub const PI: Node = Node::Constant(std::f64::consts::PI);

/// Euler's number as an expression.
pub const E: Node = Node::Constant(std::f64::consts::E);

/// A scalar expression in one variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
  Zero,
  One,
  Constant(f64),
  Variable,
  Add(Arc<Node>, Arc<Node>),
  Sub(Arc<Node>, Arc<Node>),
  Mul(Arc<Node>, Arc<Node>),
  Div(Arc<Node>, Arc<Node>),
  Exp(Arc<Node>),
  Ln(Arc<Node>),
  /// `base ^ exponent`, both arbitrary expressions.
  Pow(Arc<Node>, Arc<Node>),
}

impl Node {
  pub fn constant(value: f64) -> Node {
    Node::Constant(value)
  }

  pub fn add(a: Node, b: Node) -> Node {
    Node::Add(Arc::new(a), Arc::new(b))
  }

  pub fn sub(a: Node, b: Node) -> Node {
    Node::Sub(Arc::new(a), Arc::new(b))
  }

  pub fn mul(a: Node, b: Node) -> Node {
    Node::Mul(Arc::new(a), Arc::new(b))
  }

  pub fn div(a: Node, b: Node) -> Node {
    Node::Div(Arc::new(a), Arc::new(b))
  }

  pub fn exp(a: Node) -> Node {
    Node::Exp(Arc::new(a))
  }

  pub fn ln(a: Node) -> Node {
    Node::Ln(Arc::new(a))
  }

  pub fn pow(base: Node, exponent: Node) -> Node {
    Node::Pow(Arc::new(base), Arc::new(exponent))
  }

  /// Evaluates the expression with the variable bound to `point`.
  ///
  /// Follows IEEE 754 throughout: division by zero gives an infinity or
  /// NaN and the logarithm of a non-positive value gives NaN (or -inf at
  /// zero). Nothing here fails.
  pub fn eval<T: Scalar>(&self, point: T) -> T {
    match self {
      Node::Zero => T::zero(),
      Node::One => T::one(),
      Node::Constant(value) => T::from_f64_lossy(*value),
      Node::Variable => point,
      Node::Add(a, b) => a.eval(point) + b.eval(point),
      Node::Sub(a, b) => a.eval(point) - b.eval(point),
      Node::Mul(a, b) => a.eval(point) * b.eval(point),
      Node::Div(a, b) => a.eval(point) / b.eval(point),
      Node::Exp(a) => a.eval(point).exp(),
      Node::Ln(a) => a.eval(point).ln(),
      Node::Pow(base, exponent) => base.eval(point).powf(exponent.eval(point)),
    }
  }

  /// True for `Zero`, `One` and `Constant`.
  pub fn is_constant(&self) -> bool {
    matches!(self, Node::Zero | Node::One | Node::Constant(_))
  }

  /// Number of nodes in the expression, counting shared children once per use.
  pub fn size(&self) -> usize {
    match self {
      Node::Zero | Node::One | Node::Constant(_) | Node::Variable => 1,
      Node::Exp(a) | Node::Ln(a) => 1 + a.size(),
      Node::Add(a, b)
      | Node::Sub(a, b)
      | Node::Mul(a, b)
      | Node::Div(a, b)
      | Node::Pow(a, b) => 1 + a.size() + b.size(),
    }
  }

  /// Length of the longest root-to-leaf path; a leaf has depth 1.
  pub fn depth(&self) -> usize {
    match self {
      Node::Zero | Node::One | Node::Constant(_) | Node::Variable => 1,
      Node::Exp(a) | Node::Ln(a) => 1 + a.depth(),
      Node::Add(a, b)
      | Node::Sub(a, b)
      | Node::Mul(a, b)
      | Node::Div(a, b)
      | Node::Pow(a, b) => 1 + a.depth().max(b.depth()),
    }
  }

  /// Binding strength used when printing.
  fn precedence(&self) -> u8 {
    match self {
      Node::Constant(value) if value.is_sign_negative() => 1,
      Node::Add(..) | Node::Sub(..) => 1,
      Node::Mul(..) | Node::Div(..) => 2,
      Node::Pow(..) => 3,
      _ => 4,
    }
  }
}

impl From<f64> for Node {
  fn from(value: f64) -> Self {
    Node::Constant(value)
  }
}

/// Writes `child`, parenthesized when it binds looser than its parent.
fn fmt_operand(
  f: &mut fmt::Formatter<'_>,
  child: &Node,
  needs_parens: bool,
) -> fmt::Result {
  if needs_parens {
    write!(f, "({child})")
  } else {
    write!(f, "{child}")
  }
}

fn fmt_binary(
  f: &mut fmt::Formatter<'_>,
  parent: &Node,
  a: &Node,
  op: &str,
  b: &Node,
) -> fmt::Result {
  let prec = parent.precedence();
  // `^` groups to the right, everything else to the left.
  let (left_parens, right_parens) = match parent {
    Node::Pow(..) => (a.precedence() <= prec, b.precedence() < prec),
    Node::Sub(..) | Node::Div(..) => {
      (a.precedence() < prec, b.precedence() <= prec)
    }
    _ => (a.precedence() < prec, b.precedence() < prec),
  };
  fmt_operand(f, a, left_parens)?;
  write!(f, "{op}")?;
  fmt_operand(f, b, right_parens)
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Node::Zero => write!(f, "0"),
      Node::One => write!(f, "1"),
      Node::Constant(value) if *value == std::f64::consts::PI => write!(f, "π"),
      Node::Constant(value) if *value == std::f64::consts::E => write!(f, "e"),
      Node::Constant(value) => write!(f, "{value}"),
      Node::Variable => write!(f, "x"),
      Node::Add(a, b) => fmt_binary(f, self, a, " + ", b),
      Node::Sub(a, b) => fmt_binary(f, self, a, " - ", b),
      Node::Mul(a, b) => fmt_binary(f, self, a, "*", b),
      Node::Div(a, b) => fmt_binary(f, self, a, "/", b),
      Node::Pow(a, b) => fmt_binary(f, self, a, "^", b),
      Node::Exp(a) => write!(f, "exp({a})"),
      Node::Ln(a) => write!(f, "ln({a})"),
    }
  }
}

macro_rules! impl_binary_op {
  ($trait:ident, $method:ident, $ctor:ident) => {
    impl ops::$trait for Node {
      type Output = Node;
      fn $method(self, rhs: Node) -> Node {
        Node::$ctor(self, rhs)
      }
    }

    impl ops::$trait<f64> for Node {
      type Output = Node;
      fn $method(self, rhs: f64) -> Node {
        Node::$ctor(self, Node::Constant(rhs))
      }
    }

    impl ops::$trait<Node> for f64 {
      type Output = Node;
      fn $method(self, rhs: Node) -> Node {
        Node::$ctor(Node::Constant(self), rhs)
      }
    }
  };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);
