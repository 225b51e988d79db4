// ============================================================================
// Numeric Module
// Arbitrary-precision decimal boundary and fixed-point scaling rules
// ============================================================================
//
// This module provides:
// - to_decimal / DecimalInput / NumericInput: the validated decimal boundary
// - scale helpers: powers of ten, rounding policies, fixed-point rendering
// - NumericError: Error types for conversion and arithmetic
//
// Design principles:
// - No floating-point arithmetic; native floats are only parsed at the boundary
// - All fallible arithmetic returns Result (no panics)
// - Rounding direction is always explicit at the call site

mod errors;
mod input;
pub mod scale;

pub use errors::{NumericError, NumericResult};
pub use input::{to_decimal, DecimalInput, NumericInput};
pub use rust_decimal::Decimal;
