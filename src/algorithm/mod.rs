// ============================================================================
// Algorithm Module
// Compensated update rules, one per classification
// ============================================================================
//
// Supported rules:
// - RealVariant: Kahan-Neumaier, anchors on the larger magnitude
// - ComplexVariant: Kahan-Neumaier applied to each component
// - GenericVariant: plain Kahan, always anchors on the running sum
//
// The arithmetic below must be evaluated exactly as written. rustc never
// reassociates float expressions or fuses them into FMA on its own; do not
// build this crate with codegen flags that relax IEEE-754 semantics.

mod complex;
mod generic;
mod real;

pub use complex::ComplexVariant;
pub use generic::GenericVariant;
pub use real::RealVariant;

pub(crate) use real::neumaier_delta;

use crate::classify::{Admissible, Classification};

/// A compensated update rule for raw type `V`.
///
/// Implemented by zero-sized marker types. A raw type picks its rule through
/// [`Compensable::Kind`](crate::classify::Compensable::Kind).
pub trait Variant<V: Admissible> {
    /// Label reported by `CompensatedValue::classification`
    const CLASSIFICATION: Classification;

    /// Combines `sum` with `increment`.
    ///
    /// # Returns
    /// `(naive, delta)`: the uncompensated sum that becomes the new running
    /// sum, and the rounding residual to add to the running compensation.
    fn step(sum: V, increment: V) -> (V, V);
}
