// ============================================================================
// Capability Traits
// Compile-time contracts a raw type must satisfy to be compensated
// ============================================================================

use crate::algorithm::Variant;
use num_traits::Zero;
use std::ops::Sub;

/// Minimum contract for a raw value type.
///
/// A type is admissible when it has a zero value and closed binary `+` and
/// `-`. `num_traits::Zero` supplies both the zero and the addition. This is a
/// blanket trait: every type meeting the bounds is admissible, and every type
/// missing one of them is rejected when it is named in `CompensatedValue<V>`.
pub trait Admissible: Copy + Zero + Sub<Output = Self> {}

impl<T> Admissible for T where T: Copy + Zero + Sub<Output = T> {}

/// Magnitude of a value, used to pick the cancellation anchor.
///
/// Built-in real types implement this with their `abs`. User types implement
/// it with whatever their absolute value is, as long as the result can be
/// compared.
pub trait Magnitude {
    /// Comparable magnitude type (usually `Self`)
    type Output: PartialOrd;

    /// Returns the magnitude of `self`.
    fn magnitude(&self) -> Self::Output;
}

/// A raw type that behaves like a real number: admissible, ordered, and
/// with a magnitude.
pub trait RealLike: Admissible + PartialOrd + Magnitude {}

impl<T> RealLike for T where T: Admissible + PartialOrd + Magnitude {}

/// A raw type that behaves like a complex number.
///
/// Each component must itself be [`RealLike`], and the value must be
/// reconstructible from its two components.
pub trait ComplexLike: Admissible {
    /// Component type of the real and imaginary parts
    type Part: RealLike;

    /// Real component.
    fn real(&self) -> Self::Part;

    /// Imaginary component.
    fn imag(&self) -> Self::Part;

    /// Builds a value from its real and imaginary components.
    fn from_parts(real: Self::Part, imag: Self::Part) -> Self;
}

/// A raw type registered for compensated arithmetic.
///
/// `Kind` names the update rule used for the type and is resolved when the
/// crate is compiled, so the classification costs nothing per call. The
/// bound `Kind: Variant<Self>` makes an impossible declaration a compile
/// error: `RealVariant` needs [`RealLike`], `ComplexVariant` needs
/// [`ComplexLike`], and `GenericVariant` accepts any admissible type.
///
/// Precedence is Real, then Complex, then Generic. A type that is both
/// `RealLike` and `ComplexLike` must declare `RealVariant`. Declaring a
/// weaker rule than the type supports is accepted and silently gives the
/// less accurate update.
///
/// # Example
/// ```
/// use compensated::classify::{Compensable, Magnitude};
/// use compensated::algorithm::RealVariant;
/// use compensated::CompensatedValue;
/// use num_traits::Zero;
/// use std::ops::{Add, Sub};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl Add for Meters {
///     type Output = Meters;
///     fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
/// }
/// impl Sub for Meters {
///     type Output = Meters;
///     fn sub(self, rhs: Meters) -> Meters { Meters(self.0 - rhs.0) }
/// }
/// impl Zero for Meters {
///     fn zero() -> Meters { Meters(0.0) }
///     fn is_zero(&self) -> bool { self.0 == 0.0 }
/// }
/// impl Magnitude for Meters {
///     type Output = f64;
///     fn magnitude(&self) -> f64 { self.0.abs() }
/// }
/// impl Compensable for Meters {
///     type Kind = RealVariant;
/// }
///
/// let mut total = CompensatedValue::new(Meters(1.0e30));
/// total += Meters(1.0e-30);
/// total -= Meters(1.0e30);
/// assert_eq!(total.to_raw(), Meters(1.0e-30));
/// ```
pub trait Compensable: Admissible {
    /// Update rule selected for this type
    type Kind: Variant<Self>;

    /// Negates a raw value.
    ///
    /// The default subtracts from zero so that unary negation is not part of
    /// the minimum contract. Types with `Neg` should override this with
    /// `-self`.
    #[inline]
    fn negate(self) -> Self {
        Self::zero() - self
    }
}
