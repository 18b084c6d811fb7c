// ============================================================================
// Classification
// Runtime-readable label for the statically selected update rule
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which update rule a raw type was classified into.
///
/// The choice itself is made at compile time through
/// [`Compensable::Kind`](super::Compensable::Kind). This enum only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    /// Ordered type with a magnitude: Kahan-Neumaier
    Real,
    /// Two real components: componentwise Kahan-Neumaier
    Complex,
    /// Anything else admissible: plain Kahan
    Generic,
}

impl Classification {
    /// Whether the update rule compares magnitudes before cancelling.
    #[inline]
    pub const fn is_magnitude_adaptive(self) -> bool {
        matches!(self, Classification::Real | Classification::Complex)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Real => write!(f, "real (Kahan-Neumaier)"),
            Classification::Complex => write!(f, "complex (componentwise Kahan-Neumaier)"),
            Classification::Generic => write!(f, "generic (Kahan)"),
        }
    }
}
