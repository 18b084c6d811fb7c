// ============================================================================
// Accumulate Configuration
// Policies for fallible batch accumulation
// ============================================================================

use crate::numeric::{CompensatedError, CompensatedResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Non-Finite Policy
// ============================================================================

/// What to do with NaN or infinite values in an input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonFinitePolicy {
    /// Fold them in like any other value and flag the report.
    /// The result is then non-finite too, as with plain `accumulate`.
    #[default]
    Propagate,

    /// Leave them out and count them in the report
    Skip,

    /// Fail on the first one; the target value is left unchanged
    Reject,
}

// ============================================================================
// Accumulate Configuration
// ============================================================================

/// Configuration for [`try_accumulate`](crate::CompensatedValue::try_accumulate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccumulateConfig {
    /// Handling of NaN and infinite inputs
    pub non_finite: NonFinitePolicy,

    /// Optional: Maximum number of values the input may yield.
    /// None means unlimited
    pub max_items: Option<usize>,
}

impl AccumulateConfig {
    /// Create a configuration that behaves like plain `accumulate`
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the non-finite policy
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Builder method: Set the maximum number of input values
    pub fn with_max_items(mut self, limit: usize) -> Self {
        self.max_items = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CompensatedResult<()> {
        if self.max_items == Some(0) {
            return Err(CompensatedError::InvalidConfig("max_items must be positive"));
        }

        Ok(())
    }

    /// Rejects non-finite input
    pub fn strict() -> Self {
        Self::new().with_non_finite(NonFinitePolicy::Reject)
    }

    /// Skips non-finite input
    pub fn lenient() -> Self {
        Self::new().with_non_finite(NonFinitePolicy::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AccumulateConfig::new();
        assert_eq!(config.non_finite, NonFinitePolicy::Propagate);
        assert_eq!(config.max_items, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AccumulateConfig::new()
            .with_non_finite(NonFinitePolicy::Skip)
            .with_max_items(100);

        assert_eq!(config.non_finite, NonFinitePolicy::Skip);
        assert_eq!(config.max_items, Some(100));
    }

    #[test]
    fn test_validation() {
        let config = AccumulateConfig::new().with_max_items(0);
        assert_eq!(
            config.validate(),
            Err(CompensatedError::InvalidConfig("max_items must be positive"))
        );
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(AccumulateConfig::strict().non_finite, NonFinitePolicy::Reject);
        assert_eq!(AccumulateConfig::lenient().non_finite, NonFinitePolicy::Skip);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = AccumulateConfig::lenient().with_max_items(8);
        let json = serde_json::to_string(&config).unwrap();
        let restored: AccumulateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
