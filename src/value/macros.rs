// ============================================================================
// Registration Macros
// Declaring a raw type's update rule and its raw-on-the-left operators
// ============================================================================

/// Registers a raw type for compensated arithmetic.
///
/// The first token names the update rule: `real`, `complex` or `generic`.
/// A trailing `, neg` routes negation through the type's `Neg` impl instead
/// of subtracting from zero.
///
/// Classification precedence is Real, then Complex, then Generic: register
/// a type as `real` whenever it is `RealLike`, even if it is also
/// `ComplexLike`. Only the requested rule is checked. A `RealLike` type
/// registered as `complex` or `generic` compiles without error and gets the
/// weaker update rule.
///
/// # Example
/// ```ignore
/// compensable!(real Meters, neg);
/// compensable!(complex Phasor);
/// compensable!(generic Point3);
/// ```
#[macro_export]
macro_rules! compensable {
    (real $raw:ty, neg) => {
        $crate::compensable!(@negating $crate::algorithm::RealVariant, $raw);
    };
    (complex $raw:ty, neg) => {
        $crate::compensable!(@negating $crate::algorithm::ComplexVariant, $raw);
    };
    (generic $raw:ty, neg) => {
        $crate::compensable!(@negating $crate::algorithm::GenericVariant, $raw);
    };
    (real $raw:ty) => {
        $crate::compensable!(@plain $crate::algorithm::RealVariant, $raw);
    };
    (complex $raw:ty) => {
        $crate::compensable!(@plain $crate::algorithm::ComplexVariant, $raw);
    };
    (generic $raw:ty) => {
        $crate::compensable!(@plain $crate::algorithm::GenericVariant, $raw);
    };
    (@plain $kind:ty, $raw:ty) => {
        impl $crate::classify::Compensable for $raw {
            type Kind = $kind;
        }
    };
    (@negating $kind:ty, $raw:ty) => {
        impl $crate::classify::Compensable for $raw {
            type Kind = $kind;

            #[inline]
            fn negate(self) -> Self {
                -self
            }
        }
    };
}

/// Implements the raw-on-the-left operators for concrete raw types.
///
/// Coherence rules do not allow a blanket `impl<V> Add<CompensatedValue<V>>
/// for V`, so each raw type gets its own impls:
///
/// - `raw + value` is `value + raw`
/// - `raw - value` is `(-value) + raw`
/// - `raw == value` is `value == raw` (omitted with the `arith:` prefix,
///   for types without `PartialEq`)
/// - `V::from(value)` is `value.to_raw()`
///
/// # Example
/// ```ignore
/// left_operators!(Meters, Phasor);
/// left_operators!(arith: Point3);
/// ```
#[macro_export]
macro_rules! left_operators {
    (arith: $($raw:ty),+ $(,)?) => {
        $(
            impl ::core::ops::Add<$crate::CompensatedValue<$raw>> for $raw {
                type Output = $crate::CompensatedValue<$raw>;

                #[inline]
                fn add(self, value: $crate::CompensatedValue<$raw>) -> Self::Output {
                    value + self
                }
            }

            impl ::core::ops::Sub<$crate::CompensatedValue<$raw>> for $raw {
                type Output = $crate::CompensatedValue<$raw>;

                #[inline]
                fn sub(self, value: $crate::CompensatedValue<$raw>) -> Self::Output {
                    (-value) + self
                }
            }

            impl ::core::convert::From<$crate::CompensatedValue<$raw>> for $raw {
                #[inline]
                fn from(value: $crate::CompensatedValue<$raw>) -> Self {
                    value.to_raw()
                }
            }
        )+
    };
    ($($raw:ty),+ $(,)?) => {
        $crate::left_operators!(arith: $($raw),+);
        $(
            impl ::core::cmp::PartialEq<$crate::CompensatedValue<$raw>> for $raw {
                #[inline]
                fn eq(&self, value: &$crate::CompensatedValue<$raw>) -> bool {
                    value == self
                }
            }
        )+
    };
}
