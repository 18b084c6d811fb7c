// ============================================================================
// Real Variant
// Kahan-Neumaier update for ordered types with a magnitude
// ============================================================================

use super::Variant;
use crate::classify::{Classification, RealLike};

/// Kahan-Neumaier update rule.
///
/// The naive sum is cancelled against whichever operand has the larger
/// magnitude, so the residual holds exactly the low-order bits lost by the
/// addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealVariant;

impl<V: RealLike> Variant<V> for RealVariant {
    const CLASSIFICATION: Classification = Classification::Real;

    #[inline]
    fn step(sum: V, increment: V) -> (V, V) {
        let naive = sum + increment;
        (naive, neumaier_delta(sum, naive, increment))
    }
}

/// Rounding residual of `naive = sum + increment`.
///
/// The comparison is strict: on a magnitude tie the increment is the anchor.
/// This tie-break is observable and must stay `>`.
#[inline]
pub(crate) fn neumaier_delta<P: RealLike>(sum: P, naive: P, increment: P) -> P {
    if sum.magnitude() > increment.magnitude() {
        (sum - naive) + increment
    } else {
        (increment - naive) + sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Magnitude;
    use num_traits::Zero;
    use std::ops::{Add, Sub};

    /// Records the minuend of the first subtraction that produced it.
    ///
    /// Addition keeps the tag of the left operand unless that operand is
    /// untagged, so the tag of a residual `(a - b) + c` is the tag of `a`.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Probe {
        value: f64,
        tag: u8,
    }

    impl Probe {
        fn new(value: f64, tag: u8) -> Self {
            Self { value, tag }
        }
    }

    impl Add for Probe {
        type Output = Probe;
        fn add(self, rhs: Probe) -> Probe {
            let tag = if self.tag == 0 { rhs.tag } else { self.tag };
            Probe::new(self.value + rhs.value, tag)
        }
    }

    impl Sub for Probe {
        type Output = Probe;
        fn sub(self, rhs: Probe) -> Probe {
            Probe::new(self.value - rhs.value, self.tag)
        }
    }

    impl Zero for Probe {
        fn zero() -> Probe {
            Probe::new(0.0, 0)
        }
        fn is_zero(&self) -> bool {
            self.value == 0.0 && self.tag == 0
        }
    }

    impl Magnitude for Probe {
        type Output = f64;
        fn magnitude(&self) -> f64 {
            self.value.abs()
        }
    }

    const SUM: u8 = 1;
    const INCREMENT: u8 = 2;

    #[test]
    fn test_larger_sum_anchors_on_sum() {
        let (_, delta) = RealVariant::step(Probe::new(2.0, SUM), Probe::new(1.0, INCREMENT));
        assert_eq!(delta.tag, SUM);
    }

    #[test]
    fn test_larger_increment_anchors_on_increment() {
        let (_, delta) = RealVariant::step(Probe::new(1.0, SUM), Probe::new(-2.0, INCREMENT));
        assert_eq!(delta.tag, INCREMENT);
    }

    #[test]
    fn test_tie_anchors_on_increment() {
        let (_, delta) = RealVariant::step(Probe::new(1.0, SUM), Probe::new(-1.0, INCREMENT));
        assert_eq!(delta.tag, INCREMENT);

        let (_, delta) = RealVariant::step(Probe::new(3.0, SUM), Probe::new(3.0, INCREMENT));
        assert_eq!(delta.tag, INCREMENT);
    }

    #[test]
    fn test_recovers_tiny_increment() {
        let (naive, delta) = RealVariant::step(1.0e30f64, 1.0e-30);
        assert_eq!(naive, 1.0e30);
        assert_eq!(delta, 1.0e-30);
    }

    #[test]
    fn test_recovers_tiny_sum() {
        // A plain Kahan step would lose the tiny sum here
        let (naive, delta) = RealVariant::step(1.0e-30f64, 1.0e30);
        assert_eq!(naive, 1.0e30);
        assert_eq!(delta, 1.0e-30);
    }

    #[test]
    fn test_neumaier_delta_f32() {
        let huge = 65536.0f32;
        let tiny = 1.0f32 / 65536.0;
        let naive = huge + tiny;
        assert_eq!(naive, huge);
        assert_eq!(neumaier_delta(huge, naive, tiny), tiny);
    }
}
