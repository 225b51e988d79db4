// ============================================================================
// Numeric Errors
// Error types for the decimal boundary and fixed-point scaling
// ============================================================================

use thiserror::Error;

/// Errors that can occur while converting or scaling decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input could not be parsed into a decimal, or parsed to NaN
    #[error("invalid numeric value: {0:?}")]
    InvalidNumericValue(String),
    /// Input parsed to +/- infinity or lies outside the representable range
    #[error("non-finite numeric value: {0:?}")]
    NonFiniteValue(String),
    /// Input is neither a string, a number nor a decimal
    #[error("invalid input type: expected string, number or decimal, got {0}")]
    InvalidInputType(&'static str),
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Result exceeded the representable decimal range
    #[error("arithmetic overflow: result exceeded maximum decimal value")]
    Overflow,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
