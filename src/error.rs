//! Construction-time configuration errors.

use thiserror::Error;

/// Invalid numeric parameter passed to a schedule or driver constructor.
///
/// Configuration errors are programming errors: they are reported
/// synchronously at construction and never deferred to first use.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was zero or negative.
    #[error("{name} must be strictly positive, got {value}")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A count or length parameter that must be at least 1 was zero.
    #[error("{name} must be at least 1")]
    Zero {
        /// Parameter name.
        name: &'static str,
    },

    /// A factor that must lie in an open interval was outside it.
    #[error("{name} must be in the open interval ({low}, {high}), got {value}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Exclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
        /// Offending value.
        value: f64,
    },
}
