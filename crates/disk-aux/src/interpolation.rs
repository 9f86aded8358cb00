//! Piecewise-linear interpolation in log-log space.
//!
//! A tabulated profile y(x) is stored as (log10 x, log10 y) pairs and
//! queries are interpolated linearly between neighbouring knots, then
//! exponentiated back. Power laws y = A x^p are reproduced exactly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DerivativeError, Result};

/// What to return for queries outside the knot range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Boundary {
    /// Continue the first/last log-log segment.
    #[default]
    Extrapolate,
    /// Hold the first/last sampled value.
    Clamp,
}

/// A tabulated profile interpolated linearly in log10 x and log10 y.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLogInterpolant {
    domain: (f64, f64),
    log_x: Arc<[f64]>,
    log_y: Vec<f64>,
    boundary: Boundary,
}

impl LogLogInterpolant {
    /// Build an interpolant from knots `x` and samples `y`.
    ///
    /// # Errors
    /// - `InvalidInput` if fewer than 2 knots, lengths differ, or `x` is not
    ///   strictly increasing
    /// - `InvalidDomain` if any value is not a finite positive number
    pub fn new(x: &[f64], y: &[f64], boundary: Boundary) -> Result<Self> {
        let knots = Knots::new(x)?;
        Self::from_knots(&knots, y, "y", boundary)
    }

    /// Build from knots that were already validated.
    pub(crate) fn from_knots(
        knots: &Knots,
        y: &[f64],
        series: &str,
        boundary: Boundary,
    ) -> Result<Self> {
        if y.len() != knots.log_x.len() {
            return Err(reject(DerivativeError::invalid_input(format!(
                "{series} has {} samples but x has {} knots",
                y.len(),
                knots.log_x.len()
            ))));
        }
        check_positive(series, y)?;

        let log_y = y.iter().map(|v| v.log10()).collect();
        Ok(Self {
            domain: knots.domain,
            log_x: Arc::clone(&knots.log_x),
            log_y,
            boundary,
        })
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.log_x.len()
    }

    /// Always false; an interpolant holds at least two knots.
    pub fn is_empty(&self) -> bool {
        self.log_x.is_empty()
    }

    /// Boundary policy for out-of-range queries.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Smallest and largest knot.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Whether `x` lies within the knot range (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.domain.0 && x <= self.domain.1
    }

    /// Interpolated value at `x`.
    ///
    /// # Errors
    /// `InvalidDomain` if `x` is not a finite positive number.
    pub fn eval(&self, x: f64) -> Result<f64> {
        if !is_positive(x) {
            return Err(reject(DerivativeError::InvalidDomain {
                series: "x_q".to_string(),
                index: 0,
                value: x,
            }));
        }
        Ok(self.eval_unchecked(x))
    }

    /// Interpolated value at a query already known to be positive.
    pub(crate) fn eval_unchecked(&self, x: f64) -> f64 {
        10f64.powf(self.interpolate_log(x.log10()))
    }

    fn interpolate_log(&self, log_q: f64) -> f64 {
        let n = self.log_x.len();

        if self.boundary == Boundary::Clamp {
            if log_q <= self.log_x[0] {
                return self.log_y[0];
            }
            if log_q >= self.log_x[n - 1] {
                return self.log_y[n - 1];
            }
        }

        // Bracketing segment; the end segments also serve extrapolation
        let i = self
            .log_x
            .partition_point(|&lx| lx <= log_q)
            .saturating_sub(1)
            .min(n - 2);

        let t = (log_q - self.log_x[i]) / (self.log_x[i + 1] - self.log_x[i]);
        self.log_y[i] + t * (self.log_y[i + 1] - self.log_y[i])
    }
}

/// Validated knot positions with their base-10 logarithms.
///
/// The logs are shared by every interpolant built on the same knots.
#[derive(Debug, Clone)]
pub(crate) struct Knots {
    pub(crate) domain: (f64, f64),
    pub(crate) log_x: Arc<[f64]>,
}

impl Knots {
    pub(crate) fn new(x: &[f64]) -> Result<Self> {
        if x.len() < 2 {
            return Err(reject(DerivativeError::invalid_input(format!(
                "need at least 2 knots, got {}",
                x.len()
            ))));
        }
        check_positive("x", x)?;
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(reject(DerivativeError::invalid_input(format!(
                "x must be strictly increasing, but x[{}] = {} follows x[{}] = {}",
                i + 1,
                x[i + 1],
                i,
                x[i]
            ))));
        }

        Ok(Self {
            domain: (x[0], x[x.len() - 1]),
            log_x: x.iter().map(|v| v.log10()).collect(),
        })
    }
}

/// Reject the first value that cannot go through `log10`.
pub(crate) fn check_positive(series: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|&v| !is_positive(v)) {
        Some(index) => Err(reject(DerivativeError::InvalidDomain {
            series: series.to_string(),
            index,
            value: values[index],
        })),
        None => Ok(()),
    }
}

pub(crate) fn reject(err: DerivativeError) -> DerivativeError {
    tracing::debug!(error = %err, "rejected input");
    err
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
