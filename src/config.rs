//! Approximation settings and the `exact`/`approx` pair built from them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::derive::derive_n;
use crate::node::{Node, PI};
use crate::taylor::TaylorExpansion;
use crate::{Scalar, TaylorError};

/// Deepest derivative an approximation may request.
///
/// Derivatives are never simplified and the tree roughly multiplies in size
/// with each order, so this bounds both memory and evaluation time.
pub const MAX_DERIVATIVE_DEPTH: usize = 8;

pub const PRESET_NAMES: [&str; 4] =
  ["log-power", "exp", "self-power", "reciprocal"];

/// Looks up one of the built-in expressions by name.
pub fn preset(name: &str) -> Result<Node, TaylorError> {
  let x = || Node::Variable;
  match name {
    // ln(x)^(π/x)
    "log-power" => Ok(Node::pow(Node::ln(x()), PI / x())),
    "exp" => Ok(Node::exp(x())),
    "self-power" => Ok(Node::pow(x(), x())),
    // 1/(1 + x)
    "reciprocal" => Ok(Node::div(Node::One, Node::One + x())),
    other => Err(TaylorError::UnknownPreset(other.to_string())),
  }
}

fn default_expression() -> Node {
  Node::pow(Node::ln(Node::Variable), PI / Node::Variable)
}

fn default_expansion_point() -> f64 {
  2.0
}

fn default_taylor_order() -> usize {
  4
}

/// What to approximate and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// The root expression.
  #[serde(default = "default_expression")]
  pub expression: Node,
  /// How many times the root is differentiated before comparing.
  #[serde(default)]
  pub derivative_order: usize,
  /// The point `a` the series is expanded around.
  #[serde(default = "default_expansion_point")]
  pub expansion_point: f64,
  /// Number of series terms `N`.
  #[serde(default = "default_taylor_order")]
  pub taylor_order: usize,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      expression: default_expression(),
      derivative_order: 0,
      expansion_point: default_expansion_point(),
      taylor_order: default_taylor_order(),
    }
  }
}

impl Config {
  pub fn from_json(json: &str) -> Result<Config, TaylorError> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_file(path: &Path) -> Result<Config, TaylorError> {
    let contents = std::fs::read_to_string(path)?;
    Config::from_json(&contents)
  }

  pub fn to_json(&self) -> Result<String, TaylorError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Checks the settings without building anything.
  pub fn validate(&self) -> Result<(), TaylorError> {
    if self.taylor_order == 0 {
      return Err(TaylorError::ZeroTaylorOrder);
    }
    let deepest = self.derivative_order.saturating_add(self.taylor_order - 1);
    if deepest > MAX_DERIVATIVE_DEPTH {
      return Err(TaylorError::DepthTooLarge {
        derivative_order: self.derivative_order,
        taylor_order: self.taylor_order,
        max: MAX_DERIVATIVE_DEPTH,
      });
    }
    if !self.expansion_point.is_finite() {
      return Err(TaylorError::NonFiniteExpansionPoint(self.expansion_point));
    }
    Ok(())
  }

  /// Differentiates the root and prepares its expansion in precision `T`.
  pub fn build<T: Scalar>(&self) -> Result<Approximation<T>, TaylorError> {
    self.validate()?;
    let reference = derive_n(&self.expression, self.derivative_order);
    let approximation = Approximation::new(
      reference,
      T::from_f64_lossy(self.expansion_point),
      self.taylor_order,
    );
    info!(
      expression = %self.expression,
      derivative_order = self.derivative_order,
      expansion_point = self.expansion_point,
      taylor_order = self.taylor_order,
      reference_size = approximation.reference().size(),
      "prepared approximation"
    );
    Ok(approximation)
  }
}

/// An expression paired with its prepared Taylor expansion.
#[derive(Debug, Clone)]
pub struct Approximation<T> {
  reference: Node,
  expansion: TaylorExpansion<T>,
}

impl<T: Scalar> Approximation<T> {
  /// Builds an approximation of `reference` itself, with no further
  /// differentiation. The depth limit is not checked here.
  pub fn new(reference: Node, expansion_point: T, order: usize) -> Self {
    let expansion = TaylorExpansion::new(&reference, expansion_point, order);
    Approximation {
      reference,
      expansion,
    }
  }

  /// The reference expression evaluated directly.
  pub fn exact(&self, x: T) -> T {
    self.reference.eval(x)
  }

  /// The truncated Taylor series evaluated at `x`.
  pub fn approx(&self, x: T) -> T {
    self.expansion.eval(x)
  }

  pub fn reference(&self) -> &Node {
    &self.reference
  }

  pub fn expansion(&self) -> &TaylorExpansion<T> {
    &self.expansion
  }
}
