use thiserror::Error;

/// Errors raised while validating knots, curves, or estimator options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivativeError {
    /// A value that goes through `log10` is not a finite positive number.
    #[error("invalid domain: {series}[{index}] = {value} is not a finite positive number")]
    InvalidDomain {
        series: String,
        index: usize,
        value: f64,
    },
    /// Mismatched lengths, unsorted knots, or out-of-range options.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DerivativeError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T, E = DerivativeError> = std::result::Result<T, E>;
