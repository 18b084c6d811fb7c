// ============================================================================
// Value Module
// The compensated value and its arithmetic surface
// ============================================================================
//
// This module provides:
// - CompensatedValue<V>: running sum plus running compensation
// - Operators: +, -, +=, -=, unary -, against raw values and other values
// - Equality against raw values and other values
// - compensable! / left_operators!: registration of raw types

mod arithmetic;
mod compensated;
mod equality;
mod macros;

pub use compensated::CompensatedValue;
