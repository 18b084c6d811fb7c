// ============================================================================
// Numeric Module
// Raw value types and errors shared by the compensated arithmetic
// ============================================================================
//
// This module provides:
// - CompensatedError: errors of policy-driven batch accumulation
// - Finite: NaN / infinity detection for raw values
// - Registrations of f32, f64, Complex<f32>, Complex<f64> and Decimal
//
// Design principles:
// - The compensation update itself is infallible
// - Built-in types use their own negation and absolute value

mod builtin;
mod errors;
mod finite;

pub use errors::{CompensatedError, CompensatedResult};
pub use finite::Finite;
