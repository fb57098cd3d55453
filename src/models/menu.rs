//! Validation of raw menu input for an interactive front end.

use rust_decimal::prelude::ToPrimitive;

use super::amount::RawValue;

const INVALID_CHOICE: &str = "Invalid choice, please select 1-4.";

/// Actions offered by the menu, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance = 1,
    CreditAccount = 2,
    DebitAccount = 3,
    Exit = 4,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::ViewBalance),
            2 => Ok(MenuChoice::CreditAccount),
            3 => Ok(MenuChoice::DebitAccount),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Result of validating a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuValidation {
    pub is_valid: bool,
    pub choice: Option<u8>,
    pub error: Option<String>,
}

impl MenuValidation {
    /// Validate arbitrary input; fractional parts are truncated before the range check
    pub fn validate(input: impl Into<RawValue>) -> Self {
        match parse_menu_choice(&input.into()).and_then(|n| MenuChoice::try_from(n).ok()) {
            Some(choice) => Self {
                is_valid: true,
                choice: Some(choice as u8),
                error: None,
            },
            None => Self {
                is_valid: false,
                choice: None,
                error: Some(INVALID_CHOICE.to_string()),
            },
        }
    }

    pub fn menu_choice(&self) -> Option<MenuChoice> {
        self.choice
            .and_then(|n| MenuChoice::try_from(i64::from(n)).ok())
    }
}

/// Integer value of a raw input, truncated toward zero
///
/// Text is scanned like a leading integer: optional sign, then digits; anything after is ignored.
pub fn parse_menu_choice(raw: &RawValue) -> Option<i64> {
    match raw {
        RawValue::Integer(n) => Some(*n),
        RawValue::Number(n) if n.is_finite() => n.trunc().to_i64(),
        RawValue::Number(_) => None,
        RawValue::Decimal(d) => d.trunc().to_i64(),
        RawValue::Text(s) => parse_leading_integer(s),
        RawValue::Missing => None,
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
