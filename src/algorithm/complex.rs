// ============================================================================
// Complex Variant
// Componentwise Kahan-Neumaier update for complex-shaped types
// ============================================================================

use super::{neumaier_delta, Variant};
use crate::classify::{Classification, ComplexLike};

/// Componentwise Kahan-Neumaier update rule.
///
/// The real and imaginary residuals are computed independently, each with
/// its own magnitude comparison, and recombined into one value of `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexVariant;

impl<V: ComplexLike> Variant<V> for ComplexVariant {
    const CLASSIFICATION: Classification = Classification::Complex;

    #[inline]
    fn step(sum: V, increment: V) -> (V, V) {
        let naive = sum + increment;
        let real = neumaier_delta(sum.real(), naive.real(), increment.real());
        let imag = neumaier_delta(sum.imag(), naive.imag(), increment.imag());
        (naive, V::from_parts(real, imag))
    }
}
