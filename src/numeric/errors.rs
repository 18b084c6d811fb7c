// ============================================================================
// Compensation Errors
// Error types for policy-driven batch accumulation
// ============================================================================

use std::fmt;

/// Errors reported by the fallible accumulation entry points.
///
/// The compensation update itself never fails. These only arise when a
/// caller asks [`try_accumulate`](crate::CompensatedValue::try_accumulate)
/// to enforce an [`AccumulateConfig`](crate::accumulate::AccumulateConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompensatedError {
    /// A NaN or infinite value was met under the `Reject` policy
    NonFinite {
        /// Position of the offending value in the input sequence
        index: usize,
    },
    /// The input yielded more values than the configured limit
    ItemLimitExceeded {
        /// The configured `max_items`
        limit: usize,
    },
    /// The configuration failed validation
    InvalidConfig(&'static str),
}

impl fmt::Display for CompensatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompensatedError::NonFinite { index } => {
                write!(f, "non-finite value at index {}", index)
            },
            CompensatedError::ItemLimitExceeded { limit } => {
                write!(f, "input exceeded the limit of {} values", limit)
            },
            CompensatedError::InvalidConfig(reason) => {
                write!(f, "invalid accumulate configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for CompensatedError {}

/// Result type alias for fallible accumulation
pub type CompensatedResult<T> = Result<T, CompensatedError>;
