//! Raw caller input and the normalization that turns it into a 2-decimal amount.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::LedgerError;

/// Number of fractional digits every balance and amount is kept at
pub const SCALE: u32 = 2;

/// Untyped value handed to the ledger by a caller (a prompt, a CSV cell, a literal)
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Integer(i64),
    Number(f64),
    Decimal(Decimal),
    Text(String),
    Missing,
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => RawValue::Integer(n),
            Err(_) => RawValue::Decimal(Decimal::from(value)),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Decimal(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// Scale by 100, round half away from zero, descale
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Check that a value carries exactly 2 fractional digits, dropping a negative zero sign
///
/// Values too large to keep 2 fractional digits are out of range.
pub fn ensure_cents(mut value: Decimal) -> Result<Decimal, LedgerError> {
    if value.scale() != SCALE {
        return Err(LedgerError::AmountOutOfRange);
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    Ok(value)
}

/// Parse and round a raw amount
///
/// Negative values pass; rejecting them is up to the operation using the amount.
pub fn normalize_amount(raw: &RawValue) -> Result<Decimal, LedgerError> {
    let parsed = match raw {
        RawValue::Integer(n) => *n as f64,
        RawValue::Number(n) => *n,
        RawValue::Decimal(d) => d.to_f64().ok_or(LedgerError::AmountOutOfRange)?,
        RawValue::Text(s) => parse_leading_float(s).ok_or(LedgerError::InvalidAmount)?,
        RawValue::Missing => return Err(LedgerError::InvalidAmount),
    };
    if !parsed.is_finite() {
        return Err(LedgerError::InvalidAmount);
    }
    to_cents(round2(parsed))
}

// The 2-digit rendering of a rounded f64 is the decimal it stands for
fn to_cents(rounded: f64) -> Result<Decimal, LedgerError> {
    let cents = Decimal::from_str(&format!("{:.*}", SCALE as usize, rounded))
        .map_err(|_| LedgerError::AmountOutOfRange)?;
    ensure_cents(cents)
}

/// Longest numeric prefix after leading whitespace: sign, digits, fraction, exponent
///
/// Whatever follows the prefix is ignored ("12abc" reads as 12, "1_000" as 1).
fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
