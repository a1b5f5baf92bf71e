use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Insufficient data: {context} needs at least {required} values, got {got}")]
    InsufficientData {
        context: &'static str,
        required: usize,
        got: usize,
    },

    #[error("Mismatched sample sizes in {context}: {len_a} vs {len_b}")]
    MismatchedSampleSize {
        context: &'static str,
        len_a: usize,
        len_b: usize,
    },

    #[error("Too many values to rank: {n} (limit {limit}, high-volume ranking not enabled)")]
    TooManyValues { n: usize, limit: usize },

    #[error("Invalid parameter {name} = {value} in {context}")]
    InvalidParameter {
        context: &'static str,
        name: &'static str,
        value: f64,
    },

    #[error("Unable to convert value {0} to a decimal")]
    Conversion(String),

    // Statistical preconditions
    #[error("Inadequate variability: {0}")]
    InadequateVariability(String),

    #[error("Degenerate group: {0}")]
    DegenerateGroup(String),

    // Numerical errors
    #[error("{context} failed to converge (tolerance: {tolerance})")]
    Convergence {
        context: &'static str,
        tolerance: f64,
    },

    #[error("Numeric overflow during {operation} in high-precision arithmetic")]
    NumericOverflow { operation: &'static str },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

impl StatsError {
    pub(crate) fn insufficient(context: &'static str, required: usize, got: usize) -> Self {
        StatsError::InsufficientData {
            context,
            required,
            got,
        }
    }

    pub(crate) fn invalid(context: &'static str, name: &'static str, value: f64) -> Self {
        StatsError::InvalidParameter {
            context,
            name,
            value,
        }
    }
}
