// ============================================================================
// Compensated Summation Library
// Kahan / Kahan-Neumaier summation over generic raw value types
// ============================================================================

//! # Compensated
//!
//! A value wrapper that tracks the rounding error discarded by each addition
//! and adds it back, so long summations stay accurate.
//!
//! ## Features
//!
//! - **Compile-time variant selection**: Kahan-Neumaier for real types,
//!   componentwise Kahan-Neumaier for complex types, plain Kahan otherwise
//! - **Generic raw types**: floats, `num_complex::Complex`,
//!   `rust_decimal::Decimal`, or any type registered with [`compensable!`]
//! - **Full operator surface**: `+`, `-`, `+=`, `-=`, unary `-`, equality,
//!   raw values on either side
//! - **Batch accumulation** with optional non-finite policies
//!
//! ## Floating-point semantics
//!
//! The update rules depend on the exact evaluation order of expressions like
//! `(sum - naive) + increment`. rustc preserves IEEE-754 semantics and never
//! reassociates or contracts float arithmetic on its own; do not build this
//! crate with flags that relax them.
//!
//! ## Example
//!
//! ```rust
//! use compensated::prelude::*;
//! use num_complex::Complex64;
//!
//! let huge = 1.0e30_f64;
//! let tiny = 1.0e-30_f64;
//!
//! // Real numbers use Kahan-Neumaier
//! let mut value = CompensatedValue::new(huge);
//! value += tiny;
//! value -= huge;
//! value -= tiny;
//! assert_eq!(value.to_raw(), 0.0);
//!
//! // Complex numbers use it on each component
//! let z = Complex64::new(huge, tiny);
//! let w = Complex64::new(tiny, huge);
//! let mut value = CompensatedValue::new(z);
//! value += w;
//! value -= z;
//! value -= w;
//! assert_eq!((value.real(), value.imag()), (0.0, 0.0));
//!
//! assert_eq!(
//!     CompensatedValue::<Complex64>::classification(),
//!     Classification::Complex
//! );
//! ```

pub mod accumulate;
pub mod algorithm;
pub mod classify;
pub mod numeric;
mod value;

pub use value::CompensatedValue;

// Re-exports for convenience
pub mod prelude {
    pub use crate::accumulate::{AccumulateConfig, AccumulateReport, NonFinitePolicy};
    pub use crate::algorithm::{ComplexVariant, GenericVariant, RealVariant, Variant};
    pub use crate::classify::{
        Admissible, Classification, Compensable, ComplexLike, Magnitude, RealLike,
    };
    pub use crate::numeric::{CompensatedError, CompensatedResult, Finite};
    pub use crate::{compensable, left_operators, CompensatedValue};
}
