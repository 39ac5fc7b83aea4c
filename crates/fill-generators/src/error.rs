//! Error type for generator construction.

/// Error type for building generators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Lower bound of a range exceeds its upper bound
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// Probability outside of [0, 1]
    #[error("Invalid weight {0}: must be between 0 and 1")]
    InvalidWeight(f64),

    /// A pool-based generator was given no values
    #[error("Value pool must not be empty")]
    EmptyPool,

    /// Timestamp bound that is neither RFC 3339 nor YYYY-MM-DD
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// YAML value with no `Value` counterpart
    #[error("Unsupported YAML value: {0}")]
    UnsupportedValue(String),
}

impl GeneratorError {
    pub(crate) fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
