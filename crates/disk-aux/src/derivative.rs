//! Logarithmic derivative of sampled profiles.
//!
//! For a profile R sampled on knots x, the local power-law slope is
//!
//! ```text
//! d log R     x    dR     x_i    R(x_i + h) - R(x_i - h)
//! ------- = ----- ---- ≈ ------ ------------------------,   h = x_i / 100
//! d log x     R    dx    R(x_i)            2h
//! ```
//!
//! where R(x_i ± h) comes from a [`LogLogInterpolant`] over the knots and
//! R(x_i) is the sampled value itself.
//!
//! # Boundaries
//!
//! At the first and last knot one probe falls outside the sampled range.
//! [`Boundary::Extrapolate`] (the default) continues the end segment in
//! log-log space, so a power law returns its exponent at every knot.
//! [`Boundary::Clamp`] holds the end value instead, which roughly halves the
//! slope at the end knots.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{DerivativeError, Result};
use crate::interpolation::{check_positive, reject, Boundary, Knots, LogLogInterpolant};

/// Default finite-difference step as a fraction of x.
pub const DEFAULT_STEP_FRACTION: f64 = 0.01;

/// Options for estimating d log R / d log x.
///
/// ```rust
/// use disk_aux::{Boundary, LogDerivative};
///
/// let x = [1.0, 10.0, 100.0, 1000.0];
/// let r = [1.0, 100.0, 1e4, 1e6];
///
/// let slopes = LogDerivative::new().curve(&x, &r).unwrap();
/// assert!(slopes.iter().all(|s| (s - 2.0).abs() < 1e-6));
///
/// let clamped = LogDerivative::new()
///     .with_boundary(Boundary::Clamp)
///     .curve(&x, &r)
///     .unwrap();
/// assert!(clamped[0] < 1.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogDerivative {
    /// Step h as a fraction of the evaluation point, in (0, 1)
    pub step_fraction: f64,
    /// Policy for probes outside the knot range
    pub boundary: Boundary,
}

impl Default for LogDerivative {
    fn default() -> Self {
        Self {
            step_fraction: DEFAULT_STEP_FRACTION,
            boundary: Boundary::Extrapolate,
        }
    }
}

impl LogDerivative {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_fraction(mut self, step_fraction: f64) -> Self {
        self.step_fraction = step_fraction;
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Slope of a single curve at each knot of `x`.
    ///
    /// # Errors
    /// - `InvalidInput` for bad options, fewer than 2 knots, unsorted `x`,
    ///   or `r.len() != x.len()`
    /// - `InvalidDomain` for any value that is not a finite positive number
    pub fn curve(&self, x: &[f64], r: &[f64]) -> Result<Vec<f64>> {
        self.check_options()?;
        let knots = Knots::new(x)?;
        self.curve_on(&knots, x, r, "R")
    }

    /// Slope of each row at each knot of `x`, in row order.
    ///
    /// Errors name the offending row, e.g. `R[2]`.
    pub fn rows<R: AsRef<[f64]>>(&self, x: &[f64], rows: &[R]) -> Result<Vec<Vec<f64>>> {
        self.check_options()?;
        let knots = Knots::new(x)?;
        rows.iter()
            .enumerate()
            .map(|(i, row)| self.curve_on(&knots, x, row.as_ref(), &format!("R[{i}]")))
            .collect()
    }

    /// Slope of each matrix row, where row i is a curve sampled on `x`.
    ///
    /// The result has the same shape as `r`.
    pub fn matrix(&self, x: &[f64], r: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        if r.ncols() != x.len() {
            return Err(reject(DerivativeError::invalid_input(format!(
                "matrix has {} columns but x has {} knots",
                r.ncols(),
                x.len()
            ))));
        }

        let rows: Vec<Vec<f64>> = r
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        let slopes = self.rows(x, &rows)?;

        Ok(DMatrix::from_fn(r.nrows(), r.ncols(), |i, j| slopes[i][j]))
    }

    /// Slope of a single curve at arbitrary positive points.
    ///
    /// Points need not be knots. The prefactor uses the interpolated
    /// R(x_q), so at a knot this agrees with [`LogDerivative::curve`].
    pub fn at(&self, x: &[f64], r: &[f64], x_eval: &[f64]) -> Result<Vec<f64>> {
        self.check_options()?;
        let knots = Knots::new(x)?;
        let interp = LogLogInterpolant::from_knots(&knots, r, "R", self.boundary)?;
        check_positive("x_eval", x_eval)?;

        x_eval
            .iter()
            .map(|&xq| self.slope(&interp, xq, interp.eval_unchecked(xq)))
            .collect()
    }

    fn curve_on(&self, knots: &Knots, x: &[f64], r: &[f64], series: &str) -> Result<Vec<f64>> {
        let interp = LogLogInterpolant::from_knots(knots, r, series, self.boundary)?;

        x.iter()
            .zip(r)
            .map(|(&xi, &ri)| self.slope(&interp, xi, ri))
            .collect()
    }

    /// Centered difference of the interpolant around `x`, scaled by x/R.
    ///
    /// Fails when the step underflows or overflows, or when the estimate
    /// itself is not finite.
    fn slope(&self, interp: &LogLogInterpolant, x: f64, r: f64) -> Result<f64> {
        let h = x * self.step_fraction;
        let (lo, hi) = (x - h, x + h);

        if h == 0.0 || !hi.is_finite() {
            return Err(reject(DerivativeError::invalid_input(format!(
                "finite-difference step around x = {x} is not representable"
            ))));
        }

        if !interp.contains(lo) || !interp.contains(hi) {
            tracing::trace!(
                x,
                lo,
                hi,
                boundary = ?self.boundary,
                "finite-difference probe outside knot range"
            );
        }

        let slope = x / r * (interp.eval_unchecked(hi) - interp.eval_unchecked(lo)) / (2.0 * h);
        if !slope.is_finite() {
            return Err(reject(DerivativeError::invalid_input(format!(
                "log-derivative at x = {x} is not finite ({slope})"
            ))));
        }
        Ok(slope)
    }

    fn check_options(&self) -> Result<()> {
        let f = self.step_fraction;
        if !(f.is_finite() && f > 0.0 && f < 1.0) {
            return Err(reject(DerivativeError::invalid_input(format!(
                "step fraction must lie in (0, 1), got {f}"
            ))));
        }
        Ok(())
    }
}

/// d log R / d log x at each knot, with default options.
pub fn dlydlx(x: &[f64], r: &[f64]) -> Result<Vec<f64>> {
    LogDerivative::default().curve(x, r)
}

/// d log R / d log x for each row, with default options.
pub fn dlydlx_rows<R: AsRef<[f64]>>(x: &[f64], rows: &[R]) -> Result<Vec<Vec<f64>>> {
    LogDerivative::default().rows(x, rows)
}
