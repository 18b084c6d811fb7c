// ============================================================================
// Arithmetic Surface
// Operators on compensated values, all routed through one update step
// ============================================================================
//
// Subtraction is addition of the negation. Adding another compensated value
// absorbs its sum and then its compensation, two single-increment steps.

use super::CompensatedValue;
use crate::classify::Compensable;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl<V: Compensable> Neg for CompensatedValue<V> {
    type Output = Self;

    /// Negates both fields.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_fields(self.sum().negate(), self.compensation().negate())
    }
}

// ============================================================================
// Raw Operands
// ============================================================================

impl<V: Compensable> AddAssign<V> for CompensatedValue<V> {
    #[inline]
    fn add_assign(&mut self, increment: V) {
        self.absorb(increment);
    }
}

impl<V: Compensable> SubAssign<V> for CompensatedValue<V> {
    #[inline]
    fn sub_assign(&mut self, decrement: V) {
        self.absorb(decrement.negate());
    }
}

impl<V: Compensable> Add<V> for CompensatedValue<V> {
    type Output = Self;

    #[inline]
    fn add(mut self, increment: V) -> Self::Output {
        self += increment;
        self
    }
}

impl<V: Compensable> Sub<V> for CompensatedValue<V> {
    type Output = Self;

    #[inline]
    fn sub(mut self, decrement: V) -> Self::Output {
        self -= decrement;
        self
    }
}

// ============================================================================
// Compensated Operands
// ============================================================================

impl<V: Compensable> AddAssign for CompensatedValue<V> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        let mut updated = *self;
        updated.absorb(other.sum());
        updated.absorb(other.compensation());
        *self = updated;
    }
}

impl<V: Compensable> SubAssign for CompensatedValue<V> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self += -other;
    }
}

impl<V: Compensable> Add for CompensatedValue<V> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl<V: Compensable> Sub for CompensatedValue<V> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self::Output {
        self -= other;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    const HUGE: f64 = 1.0e30;
    const TINY: f64 = 1.0e-30;

    // 2^16 and 2^-16: their sum does not fit in an f32 mantissa
    const HUGE_F32: f32 = 65536.0;
    const TINY_F32: f32 = 1.0 / 65536.0;

    #[test]
    fn test_lossy_values() {
        assert_ne!(HUGE + TINY - HUGE - TINY, 0.0);
        assert_ne!(HUGE_F32 + TINY_F32 - HUGE_F32 - TINY_F32, 0.0);
    }

    #[test]
    fn test_in_place_double() {
        let mut value = CompensatedValue::new(HUGE);
        value += TINY;
        value -= HUGE;
        value -= TINY;
        assert_eq!(value.to_raw(), 0.0);
    }

    #[test]
    fn test_binary_double() {
        let value = CompensatedValue::new(HUGE);
        let value = value + TINY;
        let value = value - HUGE;
        let value = value - TINY;
        assert_eq!(value.to_raw(), 0.0);
    }

    #[test]
    fn test_in_place_float() {
        let mut value = CompensatedValue::new(HUGE_F32);
        value += TINY_F32;
        value -= HUGE_F32;
        value -= TINY_F32;
        assert_eq!(value.to_raw(), 0.0f32);
    }

    #[test]
    fn test_complex_in_place() {
        let z = Complex64::new(HUGE, TINY);
        let w = Complex64::new(TINY, HUGE);
        let mut value = CompensatedValue::new(z);
        value += w;
        value -= z;
        value -= w;
        assert_eq!(value.real(), 0.0);
        assert_eq!(value.imag(), 0.0);
    }

    #[test]
    fn test_complex_value_operands() {
        let kz = CompensatedValue::new(Complex64::new(HUGE, TINY));
        let kw = CompensatedValue::new(Complex64::new(TINY, HUGE));
        let result = kz + kw - kz - kw;
        assert_eq!(result.real(), 0.0);
        assert_eq!(result.imag(), 0.0);
    }

    #[test]
    fn test_complex_float() {
        let z = Complex32::new(HUGE_F32, TINY_F32);
        let w = Complex32::new(TINY_F32, HUGE_F32);
        let result = ((CompensatedValue::new(z) + w) - z) - w;
        assert_eq!(result.to_raw(), Complex32::new(0.0, 0.0));
    }

    #[test]
    fn test_negation_inverse() {
        let value = CompensatedValue::new(HUGE_F32);
        assert_eq!((value + -value).to_raw(), 0.0f32);

        let mut carried = CompensatedValue::new(HUGE);
        carried += TINY;
        assert_eq!(carried.compensation(), TINY);
        assert_eq!((carried + -carried).to_raw(), 0.0);
        assert_eq!((carried - carried).to_raw(), 0.0);
    }

    #[test]
    fn test_negation_negates_both_fields() {
        let mut value = CompensatedValue::new(HUGE);
        value += TINY;
        let negated = -value;
        assert_eq!(negated.sum(), -HUGE);
        assert_eq!(negated.compensation(), -TINY);
    }

    #[test]
    fn test_complex_negation_inverse() {
        let value = CompensatedValue::new(Complex64::new(1.0, 2.0));
        let sum = value + -value;
        assert_eq!(sum.real(), 0.0);
        assert_eq!(sum.imag(), 0.0);
    }

    #[test]
    fn test_value_addition_absorbs_compensation() {
        let mut left = CompensatedValue::new(HUGE);
        left += TINY;
        let right = CompensatedValue::new(-HUGE);
        let combined = right + left;
        assert_eq!(combined.to_raw(), TINY);
    }

    #[test]
    fn test_add_assign_matches_add() {
        let base = CompensatedValue::new(3.0f64) + 0.125;
        let other = CompensatedValue::new(-1.0e20f64) + 7.0;

        let mut in_place = base;
        in_place += other;
        let binary = base + other;
        assert_eq!(in_place.sum(), binary.sum());
        assert_eq!(in_place.compensation(), binary.compensation());
    }

    #[test]
    fn test_accuracy_exceeds_naive() {
        let mut naive = 0.0f64;
        let mut value = CompensatedValue::<f64>::zero();
        for _ in 0..10_000 {
            naive += 0.1;
            value += 0.1;
        }
        let expected = 1000.0f64;
        assert!((value.to_raw() - expected).abs() < (naive - expected).abs());
        assert!((value.to_raw() - expected).abs() <= 1.0e-12);
    }
}
