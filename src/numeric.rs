//! Closeness checks for inexact numbers and fixed-point conversion.
//!
//! Token amounts are 18-decimal fixed-point integers that routinely exceed
//! `u128` once multiplied, so they are handled as [`BigInt`].

use crate::config::{
    BIG_EPSILON_EXPONENT, DEFAULT_FIXED_POINT_PRECISION, FIXED_POINT_DECIMALS, SMALL_EPSILON,
};
use crate::{MultitoolError, Result};
use num_bigint::BigInt;
use num_traits::{pow, Num, Signed, Zero};

/// Default tolerance for [`big_close`]: 10^15.
pub fn big_epsilon() -> BigInt {
    pow(BigInt::from(10u8), BIG_EPSILON_EXPONENT)
}

/// Returns true if `a` and `b` are within [`SMALL_EPSILON`].
pub fn close(a: f64, b: f64) -> bool {
    close_within(a, b, SMALL_EPSILON)
}

/// Returns true if `|a - b| < epsilon`.
pub fn close_within(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Returns true if `a` and `b` are within [`big_epsilon`].
pub fn big_close(a: &BigInt, b: &BigInt) -> bool {
    big_close_within(a, b, &big_epsilon())
}

/// Returns true if `|a - b| < epsilon`. Pass `epsilon = 1` to test for equality.
pub fn big_close_within(a: &BigInt, b: &BigInt, epsilon: &BigInt) -> bool {
    let diff = (a - b).abs();
    tracing::trace!(%a, %b, %diff, %epsilon, "big_close");
    diff < *epsilon
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer, optionally negative.
pub fn parse_amount(s: &str) -> Result<BigInt> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    // from_str_radix accepts its own sign; a second one here is an error.
    if digits.starts_with(['-', '+']) {
        return Err(MultitoolError::InvalidAmount(format!(
            "unexpected sign in {:?}",
            s
        )));
    }

    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => BigInt::from_str_radix(hex, 16),
        None => BigInt::from_str_radix(digits, 10),
    };

    let value = parsed
        .map_err(|e| MultitoolError::InvalidAmount(format!("{:?}: {}", s, e)))?;
    Ok(if negative { -value } else { value })
}

/// Converts `value` to an 18-decimal fixed-point integer, keeping
/// [`DEFAULT_FIXED_POINT_PRECISION`] decimal places.
pub fn to_wei(value: f64) -> Result<BigInt> {
    to_fixed_point(value, DEFAULT_FIXED_POINT_PRECISION, FIXED_POINT_DECIMALS)
}

/// Converts `value` to a fixed-point integer with denominator `10^decimals`.
///
/// The shortest decimal representation of `value` is rounded half away from
/// zero to `precision` decimal places, then scaled in integer arithmetic, so
/// the result is exact for any decimal literal with at most that many places.
pub fn to_fixed_point(value: f64, precision: u32, decimals: u32) -> Result<BigInt> {
    if !value.is_finite() {
        return Err(MultitoolError::InvalidAmount(format!(
            "cannot convert non-finite value {}",
            value
        )));
    }

    // f64 Display never uses exponent notation.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let digits = BigInt::from_str_radix(&format!("{}{}", int_part, frac_part), 10)
        .map_err(|e| MultitoolError::InvalidAmount(format!("{}: {}", value, e)))?;

    let ten = BigInt::from(10u8);
    let places = frac_part.len();
    let precision = precision as usize;
    let mantissa = if places <= precision {
        digits * pow(ten.clone(), precision - places)
    } else {
        let divisor = pow(ten.clone(), places - precision);
        let remainder = &digits % &divisor;
        let quotient = digits / &divisor;
        if remainder * 2u8 >= divisor {
            quotient + 1u8
        } else {
            quotient
        }
    };

    let scaled = mantissa * pow(ten.clone(), decimals as usize) / pow(ten, precision);
    Ok(if value.is_sign_negative() && !scaled.is_zero() {
        -scaled
    } else {
        scaled
    })
}
