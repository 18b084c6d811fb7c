// ============================================================================
// Finiteness
// Detection of NaN and infinite raw values for policy-driven accumulation
// ============================================================================

/// Whether a raw value is finite (neither NaN nor infinite).
///
/// Only needed by [`try_accumulate`](crate::CompensatedValue::try_accumulate).
/// Types that cannot represent non-finite values return `true`.
pub trait Finite {
    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite(&self) -> bool;
}
