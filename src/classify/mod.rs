// ============================================================================
// Classify Module
// Capability classification of raw value types
// ============================================================================
//
// This module provides:
// - Admissible: the minimum contract (zero, binary +, binary -)
// - Magnitude / RealLike: ordered types with an absolute value
// - ComplexLike: types with real and imaginary components
// - Compensable: registration of a type with its update rule
// - Classification: runtime label of the selected rule
//
// Selection order is Real, then Complex, then Generic, and is fixed per type
// at compile time through the associated type `Compensable::Kind`.

mod classification;
mod traits;

pub use classification::Classification;
pub use traits::{Admissible, Compensable, ComplexLike, Magnitude, RealLike};
