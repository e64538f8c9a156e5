use thiserror::Error;

pub mod config;
pub mod derive;
pub mod node;
pub mod powi;
pub mod report;
pub mod scalar;
pub mod taylor;

pub use config::{Approximation, Config, MAX_DERIVATIVE_DEPTH};
pub use derive::{derivative_chain, derive, derive_n};
pub use node::{E, Node, PI};
pub use powi::powi;
pub use scalar::Scalar;
pub use taylor::{TaylorExpansion, factorial, taylor_eval};

#[derive(Error, Debug)]
pub enum TaylorError {
  #[error("Taylor order must be at least 1")]
  ZeroTaylorOrder,
  #[error(
    "derivative order {derivative_order} with Taylor order \
     {taylor_order} needs derivatives deeper than {max}"
  )]
  DepthTooLarge {
    derivative_order: usize,
    taylor_order: usize,
    max: usize,
  },
  #[error("Expansion point must be finite, got {0}")]
  NonFiniteExpansionPoint(f64),
  #[error("Sweep step must be positive and finite, got {0}")]
  InvalidStep(f64),
  #[error("Sweep range from {start} to {stop} is empty")]
  EmptyRange { start: f64, stop: f64 },
  #[error("Sweep would produce {count} points, more than {max}")]
  TooManyPoints { count: f64, max: usize },
  #[error("Unknown preset: {0}")]
  UnknownPreset(String),
  #[error("Config error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}
