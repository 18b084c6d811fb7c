// ============================================================================
// Generic Variant
// Plain Kahan update for admissible types without an ordering
// ============================================================================

use super::Variant;
use crate::classify::{Admissible, Classification};

/// Plain Kahan update rule.
///
/// Without a magnitude the running sum is always the anchor, which loses
/// accuracy when the increment dominates the sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericVariant;

impl<V: Admissible> Variant<V> for GenericVariant {
    const CLASSIFICATION: Classification = Classification::Generic;

    #[inline]
    fn step(sum: V, increment: V) -> (V, V) {
        let naive = sum + increment;
        (naive, (sum - naive) + increment)
    }
}
