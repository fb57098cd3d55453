use std::env;

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::ledger::{Ledger, DEFAULT_INITIAL_BALANCE};
use crate::models::normalize_amount;

/// Environment variable holding the starting balance
pub const INITIAL_BALANCE_VAR: &str = "LEDGER_INITIAL_BALANCE";

/// Settings used to open a ledger
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub initial_balance: Decimal,
}

impl LedgerConfig {
    /// Read settings from the environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, LedgerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LedgerConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LedgerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_balance = match lookup(INITIAL_BALANCE_VAR) {
            Some(raw) => normalize_amount(&raw.into())?,
            None => DEFAULT_INITIAL_BALANCE,
        };
        Ok(Self { initial_balance })
    }

    pub fn build(&self) -> Result<Ledger, LedgerError> {
        Ledger::new(self.initial_balance)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_INITIAL_BALANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unset_variable_uses_default() {
        let config = LedgerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.build().unwrap().balance(), dec!(1000.00));
    }

    #[test]
    fn variable_is_normalized() {
        let config = LedgerConfig::from_lookup(|key| {
            assert_eq!(key, INITIAL_BALANCE_VAR);
            Some(" 250.556 ".to_string())
        })
        .unwrap();
        assert_eq!(config.initial_balance, dec!(250.56));
    }

    #[test]
    fn invalid_variable_is_an_error() {
        let err = LedgerConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        assert_eq!(err, LedgerError::InvalidAmount);
    }
}
