// ============================================================================
// Compensated Value
// Running sum paired with its running rounding compensation
// ============================================================================

use crate::algorithm::Variant;
use crate::classify::{Classification, Compensable, ComplexLike};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw value with compensated addition.
///
/// Stores `sum`, the dominant running total, and `compensation`, the
/// residual lost to rounding while building it. The represented value is
/// `sum + compensation`. Both fields change together on every update.
///
/// The update rule is chosen by `V::Kind` when the crate is compiled:
/// Kahan-Neumaier for real types, componentwise Kahan-Neumaier for complex
/// types and plain Kahan for everything else.
///
/// With the `serde` feature both fields are serialized as they are. The
/// compensation is usually many orders of magnitude below the sum, so the
/// deserializer must parse floats with exact rounding (for `serde_json`,
/// enable its `float_roundtrip` feature) or the carried error is lost.
///
/// # Example
/// ```
/// use compensated::CompensatedValue;
///
/// let huge = 1.0e30_f64;
/// let tiny = 1.0e-30_f64;
/// assert_ne!(huge + tiny - huge - tiny, 0.0);
///
/// let mut value = CompensatedValue::new(huge);
/// value += tiny;
/// value -= huge;
/// value -= tiny;
/// assert_eq!(value.to_raw(), 0.0);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompensatedValue<V> {
    sum: V,
    compensation: V,
}

impl<V: Compensable> CompensatedValue<V> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a value representing zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sum: V::zero(),
            compensation: V::zero(),
        }
    }

    /// Creates a value from a raw value, with no compensation.
    #[inline]
    pub fn new(raw: V) -> Self {
        Self {
            sum: raw,
            compensation: V::zero(),
        }
    }

    /// Builds a value from both fields at once.
    #[inline]
    pub(crate) fn from_fields(sum: V, compensation: V) -> Self {
        Self { sum, compensation }
    }

    /// Replaces the represented value with `raw`, discarding the
    /// compensation.
    #[inline]
    pub fn assign(&mut self, raw: V) {
        *self = Self::new(raw);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The running sum.
    #[inline]
    pub fn sum(&self) -> V {
        self.sum
    }

    /// The running compensation.
    #[inline]
    pub fn compensation(&self) -> V {
        self.compensation
    }

    /// The update rule selected for `V`.
    #[inline]
    pub fn classification() -> Classification {
        <V::Kind as Variant<V>>::CLASSIFICATION
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Materializes the value as `sum + compensation`.
    ///
    /// This is one ordinary addition, so it may still round. Use
    /// [`error`](Self::error) to estimate what was lost.
    #[inline]
    pub fn to_raw(&self) -> V {
        self.sum + self.compensation
    }

    /// Estimates the rounding error of [`to_raw`](Self::to_raw).
    ///
    /// Computed as `(sum - to_raw()) + compensation`. Diagnostic only.
    #[inline]
    pub fn error(&self) -> V {
        (self.sum - self.to_raw()) + self.compensation
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Adds one raw increment with the update rule of `V`.
    ///
    /// Both fields are computed before either is written.
    #[inline]
    pub(crate) fn absorb(&mut self, increment: V) {
        let (naive, delta) = <V::Kind as Variant<V>>::step(self.sum, increment);
        *self = Self::from_fields(naive, self.compensation + delta);
    }
}

impl<V: Compensable + ComplexLike> CompensatedValue<V> {
    /// Real component, `sum.real() + compensation.real()`.
    #[inline]
    pub fn real(&self) -> V::Part {
        self.sum.real() + self.compensation.real()
    }

    /// Imaginary component, `sum.imag() + compensation.imag()`.
    #[inline]
    pub fn imag(&self) -> V::Part {
        self.sum.imag() + self.compensation.imag()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<V: Compensable> Default for CompensatedValue<V> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<V: Compensable> From<V> for CompensatedValue<V> {
    #[inline]
    fn from(raw: V) -> Self {
        Self::new(raw)
    }
}

impl<V: fmt::Debug> fmt::Debug for CompensatedValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompensatedValue")
            .field("sum", &self.sum)
            .field("compensation", &self.compensation)
            .finish()
    }
}

impl<V: Compensable + fmt::Display> fmt::Display for CompensatedValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_raw(), f)
    }
}
