// ============================================================================
// Fixed-Point Scaling
// Powers of ten, rounding policies and string rendering for Decimal values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale (number of fractional digits) a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

/// Compute 10^exp as a Decimal.
///
/// Negative exponents produce fractional powers (`10^-2 == 0.01`).
///
/// # Errors
/// Returns `Overflow` if |exp| exceeds [`MAX_SCALE`].
pub fn pow10(exp: i32) -> NumericResult<Decimal> {
    let magnitude = exp.unsigned_abs();
    if magnitude > MAX_SCALE {
        return Err(NumericError::Overflow);
    }

    if exp >= 0 {
        Ok(Decimal::from_i128_with_scale(10i128.pow(magnitude), 0))
    } else {
        Ok(Decimal::new(1, magnitude))
    }
}

/// Multiply `value` by 10^exp without limiting `exp` to [`MAX_SCALE`].
///
/// Large exponents are applied in steps; shrinking past the smallest
/// representable digit rounds toward zero.
///
/// # Errors
/// Returns `Overflow` if the result exceeds the representable range.
pub fn scale_by_pow10(value: Decimal, exp: i32) -> NumericResult<Decimal> {
    let mut result = value;
    let mut remaining = exp;

    while remaining != 0 {
        let step = remaining.clamp(-(MAX_SCALE as i32), MAX_SCALE as i32);
        result = if step > 0 {
            result
                .checked_mul(pow10(step)?)
                .ok_or(NumericError::Overflow)?
        } else {
            result
                .checked_div(pow10(-step)?)
                .ok_or(NumericError::Overflow)?
        };
        remaining -= step;

        if result.is_zero() {
            break;
        }
    }

    Ok(result)
}

/// Round toward negative infinity to an integer.
#[inline]
pub fn floor(value: Decimal) -> Decimal {
    value.floor()
}

/// Round toward zero to an integer.
#[inline]
pub fn round_toward_zero(value: Decimal) -> Decimal {
    value.trunc()
}

/// Round to `dp` fractional digits, halves away from zero.
#[inline]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Render with exactly `dp` fractional digits (half-up rounding, zero padding).
///
/// Negative zero is printed without a sign.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let dp = dp.min(MAX_SCALE);
    let mut rounded = round_half_up(value, dp);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Render like [`to_fixed`] with the integer digits grouped in threes
/// (`1234567.5` -> `1,234,567.50` at two places).
pub fn to_grouped(value: Decimal, dp: u32) -> String {
    let fixed = to_fixed(value, dp);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
