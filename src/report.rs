//! Comma-separated comparison of `exact` and `approx` over a range of `x`.

use std::io::Write;
use tracing::warn;

use crate::config::Approximation;
use crate::{Scalar, TaylorError};

/// Most sample points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// Evenly spaced sample points from `start` to `stop`, both inclusive when
/// `stop` lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
  start: f64,
  step: f64,
  point_count: usize,
}

impl Sweep {
  pub fn new(start: f64, stop: f64, step: f64) -> Result<Sweep, TaylorError> {
    if !(step.is_finite() && step > 0.0) {
      return Err(TaylorError::InvalidStep(step));
    }
    if !(start.is_finite() && stop.is_finite() && start <= stop) {
      return Err(TaylorError::EmptyRange { start, stop });
    }
    // Tolerate rounding in the division so `stop` itself is kept.
    let count = ((stop - start) / step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_SWEEP_POINTS as f64 {
      return Err(TaylorError::TooManyPoints {
        count,
        max: MAX_SWEEP_POINTS,
      });
    }
    Ok(Sweep {
      start,
      step,
      point_count: count as usize,
    })
  }

  /// Number of sample points.
  pub fn point_count(&self) -> usize {
    self.point_count
  }

  /// The sample points, computed by index rather than by accumulation.
  pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
    (0..self.point_count).map(move |i| self.start + i as f64 * self.step)
  }
}

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow<T> {
  pub x: T,
  pub exact: T,
  pub approx: T,
}

impl<T: Scalar> ReportRow<T> {
  pub fn error(&self) -> T {
    (self.exact - self.approx).abs()
  }

  fn is_finite(&self) -> bool {
    self.exact.is_finite() && self.approx.is_finite()
  }
}

/// Evaluates both sides at every point of `range`, lazily.
pub fn sweep<'a, T: Scalar>(
  approximation: &'a Approximation<T>,
  range: &'a Sweep,
) -> impl Iterator<Item = ReportRow<T>> + 'a {
  range.points().map(move |point| {
    let x = T::from_f64_lossy(point);
    let row = ReportRow {
      x,
      exact: approximation.exact(x),
      approx: approximation.approx(x),
    };
    if !row.is_finite() {
      warn!(
        x = %row.x,
        exact = %row.exact,
        approx = %row.approx,
        "non-finite value in report"
      );
    }
    row
  })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
  /// Print a `x,exact,approx` header line first.
  pub header: bool,
  /// Append `|exact - approx|` as a fourth column.
  pub error: bool,
}

/// Writes `rows` one line at a time as they are produced.
pub fn write_csv<T, W, I>(
  out: &mut W,
  rows: I,
  options: CsvOptions,
) -> std::io::Result<()>
where
  T: Scalar,
  W: Write,
  I: IntoIterator<Item = ReportRow<T>>,
{
  if options.header {
    if options.error {
      writeln!(out, "x,exact,approx,error")?;
    } else {
      writeln!(out, "x,exact,approx")?;
    }
  }
  for row in rows {
    if options.error {
      let error = row.error();
      writeln!(out, "{},{},{},{}", row.x, row.exact, row.approx, error)?;
    } else {
      writeln!(out, "{},{},{}", row.x, row.exact, row.approx)?;
    }
  }
  Ok(())
}
