use thiserror::Error;

/// Errors raised when simulation parameters are validated strictly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter is not a finite number.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Parameter name.
        field: &'static str,
    },
    /// A parameter lies outside its accepted range.
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        field: &'static str,
        /// Supplied value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
    /// The option period must cover at least one trading day.
    #[error("option_period_days must be at least 1")]
    EmptyOptionPeriod,
}
