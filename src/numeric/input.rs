// ============================================================================
// Decimal Boundary
// Converts raw text / number / decimal input into a validated Decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scale::scale_by_pow10;
use rust_decimal::Decimal;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw numeric input as received from a caller, before validation.
///
/// Construction inputs (asset and candle fields) keep values in this form so
/// that remap hooks see exactly what the caller supplied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DecimalInput {
    /// Decimal text, e.g. `"100.5"` or `"1e-8"`
    Text(String),
    /// Native floating point number
    Number(f64),
    /// Already-validated decimal, passed through unchanged
    Decimal(Decimal),
}

impl DecimalInput {
    /// Validate and convert into a `Decimal`.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        match self {
            DecimalInput::Decimal(value) => Ok(*value),
            DecimalInput::Text(text) => parse_text(text),
            DecimalInput::Number(number) => parse_number(*number),
        }
    }
}

impl Default for DecimalInput {
    fn default() -> Self {
        DecimalInput::Decimal(Decimal::ZERO)
    }
}

impl From<&str> for DecimalInput {
    fn from(value: &str) -> Self {
        DecimalInput::Text(value.to_string())
    }
}

impl From<String> for DecimalInput {
    fn from(value: String) -> Self {
        DecimalInput::Text(value)
    }
}

impl From<f64> for DecimalInput {
    fn from(value: f64) -> Self {
        DecimalInput::Number(value)
    }
}

impl From<f32> for DecimalInput {
    /// Kept as the f32's own shortest digits; widening to f64 would expose
    /// its binary error (`0.1f32` is not `0.1f64`).
    fn from(value: f32) -> Self {
        DecimalInput::Text(value.to_string())
    }
}

impl From<Decimal> for DecimalInput {
    fn from(value: Decimal) -> Self {
        DecimalInput::Decimal(value)
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalInput {
                fn from(value: $ty) -> Self {
                    DecimalInput::Decimal(Decimal::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

// ============================================================================
// NumericInput
// ============================================================================

/// Anything that can cross the decimal boundary.
///
/// Statically typed inputs (strings, numbers, decimals) always produce a
/// `DecimalInput`; dynamic values (`serde_json::Value`) are checked and
/// rejected with `InvalidInputType` when they are not a string or number.
pub trait NumericInput {
    fn into_numeric(self) -> NumericResult<DecimalInput>;
}

impl NumericInput for DecimalInput {
    fn into_numeric(self) -> NumericResult<DecimalInput> {
        Ok(self)
    }
}

impl NumericInput for &DecimalInput {
    fn into_numeric(self) -> NumericResult<DecimalInput> {
        Ok(self.clone())
    }
}

macro_rules! numeric_input {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn into_numeric(self) -> NumericResult<DecimalInput> {
                    Ok(DecimalInput::from(self))
                }
            }
        )*
    };
}

numeric_input!(
    &str, String, f64, f32, Decimal, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize
);

impl NumericInput for &String {
    fn into_numeric(self) -> NumericResult<DecimalInput> {
        Ok(DecimalInput::Text(self.clone()))
    }
}

#[cfg(feature = "serde")]
impl NumericInput for &serde_json::Value {
    fn into_numeric(self) -> NumericResult<DecimalInput> {
        use serde_json::Value;

        match self {
            Value::String(text) => Ok(DecimalInput::Text(text.clone())),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(DecimalInput::Decimal(Decimal::from(int)))
                } else if let Some(uint) = number.as_u64() {
                    Ok(DecimalInput::Decimal(Decimal::from(uint)))
                } else {
                    Ok(DecimalInput::Text(number.to_string()))
                }
            }
            Value::Null => Err(NumericError::InvalidInputType("null")),
            Value::Bool(_) => Err(NumericError::InvalidInputType("bool")),
            Value::Array(_) => Err(NumericError::InvalidInputType("array")),
            Value::Object(_) => Err(NumericError::InvalidInputType("object")),
        }
    }
}

#[cfg(feature = "serde")]
impl NumericInput for serde_json::Value {
    fn into_numeric(self) -> NumericResult<DecimalInput> {
        (&self).into_numeric()
    }
}

/// Convert any supported input into a validated `Decimal`.
///
/// A `Decimal` input is returned unchanged.
///
/// # Errors
/// - `InvalidNumericValue` if the input does not parse or is NaN
/// - `NonFiniteValue` if the input is infinite or out of the decimal range
/// - `InvalidInputType` for dynamic values that are not strings or numbers
pub fn to_decimal(input: impl NumericInput) -> NumericResult<Decimal> {
    input.into_numeric()?.to_decimal()
}

// ============================================================================
// Parsing
// ============================================================================

fn parse_number(number: f64) -> NumericResult<Decimal> {
    if number.is_nan() {
        return Err(NumericError::InvalidNumericValue(number.to_string()));
    }
    if number.is_infinite() {
        return Err(NumericError::NonFiniteValue(number.to_string()));
    }

    // f64 Display yields the shortest round-tripping digits, never exponent form
    parse_text(&number.to_string())
}

fn parse_text(raw: &str) -> NumericResult<Decimal> {
    let invalid = || NumericError::InvalidNumericValue(raw.to_string());
    let non_finite = || NumericError::NonFiniteValue(raw.to_string());

    let trimmed = raw.trim();
    let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    if body.eq_ignore_ascii_case("nan") {
        return Err(invalid());
    }
    if body.eq_ignore_ascii_case("infinity") || body.eq_ignore_ascii_case("inf") {
        return Err(non_finite());
    }

    let (mantissa, exponent) = split_literal(body).ok_or_else(invalid)?;

    // The literal is well-formed; a failure from here on is a range problem
    let mut value = Decimal::from_str(&mantissa).map_err(|_| non_finite())?;
    if exponent != 0 {
        value = scale_by_pow10(value, exponent).map_err(|_| non_finite())?;
    }
    // Below the smallest representable step: a non-zero literal must not become zero
    if value.is_zero() && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(non_finite());
    }
    if negative {
        value.set_sign_negative(true);
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }

    Ok(value)
}

/// Split an unsigned literal into its mantissa text and decimal exponent.
///
/// Accepts `digits[.digits][e[+-]digits]` where at least one mantissa digit
/// is present (`.5` and `5.` are both valid).
fn split_literal(body: &str) -> Option<(String, i32)> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_digits, frac_digits) = match mantissa.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return None;
    }

    let exponent = match exponent {
        None => 0,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            // Absurd exponents saturate; scaling then reports the range error
            exp.parse::<i32>()
                .unwrap_or(if exp.starts_with('-') { i32::MIN / 2 } else { i32::MAX / 2 })
        }
    };

    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let mantissa = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{int_digits}.{frac_digits}")
    };
    Some((mantissa, exponent))
}
