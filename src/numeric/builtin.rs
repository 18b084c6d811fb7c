// ============================================================================
// Built-in Raw Types
// Registrations for floats, complex floats and decimals
// ============================================================================
//
// f32, f64, Decimal        -> Real
// Complex<f32>, Complex<f64> -> Complex

use super::Finite;
use crate::classify::{ComplexLike, Magnitude};
use num_complex::Complex;
use rust_decimal::Decimal;

macro_rules! register_float {
    ($($float:ty),+) => {
        $(
            impl Magnitude for $float {
                type Output = $float;

                #[inline]
                fn magnitude(&self) -> $float {
                    self.abs()
                }
            }

            impl Finite for $float {
                #[inline]
                fn is_finite(&self) -> bool {
                    <$float>::is_finite(*self)
                }
            }

            crate::compensable!(real $float, neg);
            crate::left_operators!($float);

            impl ComplexLike for Complex<$float> {
                type Part = $float;

                #[inline]
                fn real(&self) -> $float {
                    self.re
                }

                #[inline]
                fn imag(&self) -> $float {
                    self.im
                }

                #[inline]
                fn from_parts(real: $float, imag: $float) -> Self {
                    Complex::new(real, imag)
                }
            }

            impl Finite for Complex<$float> {
                #[inline]
                fn is_finite(&self) -> bool {
                    self.re.is_finite() && self.im.is_finite()
                }
            }

            crate::compensable!(complex Complex<$float>, neg);
            crate::left_operators!(Complex<$float>);
        )+
    };
}

register_float!(f32, f64);

// ============================================================================
// Decimal
// ============================================================================

impl Magnitude for Decimal {
    type Output = Decimal;

    #[inline]
    fn magnitude(&self) -> Decimal {
        self.abs()
    }
}

impl Finite for Decimal {
    #[inline]
    fn is_finite(&self) -> bool {
        true
    }
}

crate::compensable!(real Decimal, neg);
crate::left_operators!(Decimal);
