//! Numerical helpers for protoplanetary disk models.
//!
//! - [`constants`]: physical constants in CGS units
//! - [`LogLogInterpolant`]: piecewise-linear interpolation in log-log space
//! - [`LogDerivative`]: the local power-law slope d log y / d log x of sampled profiles

pub mod constants;
pub mod derivative;
pub mod error;
pub mod interpolation;


pub use derivative::{dlydlx, dlydlx_rows, LogDerivative};
pub use error::{DerivativeError, Result};
pub use interpolation::{Boundary, LogLogInterpolant};
