//! Exact decimal arithmetic shared by the numeric scalars.

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::value::Value;

/// Plain decimal or scientific notation, no surrounding whitespace.
static DECIMAL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("Invalid decimal regex")
});

/// Integers wider than this many digits are rejected instead of expanded.
const MAX_INTEGER_DIGITS: i64 = 4_096;

/// Largest accepted power of ten, in either direction, for parsed text.
const MAX_DECIMAL_MAGNITUDE: i64 = 4_096;

/// Parses decimal text such as `42`, `-1.5`, `.5` or `1e3`.
///
/// Values whose leading digit lies beyond [`MAX_DECIMAL_MAGNITUDE`] are
/// rejected, so `1e10000000` never reaches code that rescales it.
pub(crate) fn parse_decimal(text: &str) -> Option<BigDecimal> {
    if !DECIMAL_REGEX.is_match(text) {
        return None;
    }
    let value = BigDecimal::from_str(text.strip_prefix('+').unwrap_or(text)).ok()?;
    if is_zero(&value) {
        return Some(BigDecimal::from(0u8));
    }
    (magnitude(&value).abs() <= MAX_DECIMAL_MAGNITUDE).then_some(value)
}

fn is_zero(value: &BigDecimal) -> bool {
    value.as_bigint_and_exponent().0 == BigInt::from(0u8)
}

fn digit_count(digits: &BigInt) -> i64 {
    digits.magnitude().to_string().len() as i64
}

/// Power of ten of the leading digit, computed without rescaling:
/// `1.5e3` has magnitude 3, `0.02` has magnitude -2. Zero has magnitude 0.
pub(crate) fn magnitude(value: &BigDecimal) -> i64 {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits == BigInt::from(0u8) {
        return 0;
    }
    (digit_count(&digits) - 1).saturating_sub(scale)
}

/// Decimal text that stays short for any exponent: plain notation within
/// [`MAX_DECIMAL_MAGNITUDE`], `<digits>E<exponent>` beyond it.
pub(crate) fn to_bounded_string(value: &BigDecimal) -> String {
    if is_zero(value) {
        return "0".to_string();
    }
    if magnitude(value).abs() <= MAX_DECIMAL_MAGNITUDE {
        return value.to_string();
    }
    let (digits, scale) = value.as_bigint_and_exponent();
    format!("{digits}E{}", scale.saturating_neg())
}

/// Exact decimal form of a number or numeric string.
pub(crate) fn number_ish(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::String(s) => parse_decimal(s),
        other => other.to_big_decimal(),
    }
}

/// Exact decimal form of a numeric variant; strings are not accepted.
pub(crate) fn number(value: &Value) -> Option<BigDecimal> {
    value.to_big_decimal()
}

/// The integer equal to `value`, or `None` when it has a fractional part.
pub(crate) fn to_exact_integer(value: &BigDecimal) -> Option<BigInt> {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits == BigInt::from(0u8) {
        return Some(digits);
    }
    if scale <= 0 {
        let exponent = scale.checked_neg()?;
        if exponent > MAX_INTEGER_DIGITS {
            return None;
        }
        let factor = BigInt::from(10u8).pow(u32::try_from(exponent).ok()?);
        return Some(digits * factor);
    }
    if scale > digit_count(&digits) {
        return None;
    }
    let divisor = BigInt::from(10u8).pow(u32::try_from(scale).ok()?);
    if &digits % &divisor == BigInt::from(0u8) {
        Some(digits / divisor)
    } else {
        None
    }
}

/// Truncates toward zero, the way an integer cast drops the fraction.
pub(crate) fn truncate(value: &BigDecimal) -> BigDecimal {
    if value.as_bigint_and_exponent().1 <= 0 {
        return value.clone();
    }
    if magnitude(value) < 0 {
        return BigDecimal::from(0u8);
    }
    value.with_scale(0)
}
