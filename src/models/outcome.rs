use rust_decimal::Decimal;

use super::transaction::TransactionKind;
use crate::error::LedgerError;

/// Outcome of a credit or debit
///
/// Failures always carry the current, unchanged balance.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub success: bool,
    pub amount: Option<Decimal>,
    pub balance: Decimal,
    pub message: Option<String>,
    pub error: Option<LedgerError>,
}

impl OperationResult {
    pub(crate) fn succeeded(kind: TransactionKind, amount: Decimal, balance: Decimal) -> Self {
        let verb = match kind {
            TransactionKind::Credit => "credited",
            TransactionKind::Debit => "debited",
        };
        Self {
            success: true,
            amount: Some(amount),
            balance,
            message: Some(format!("Amount {}. New balance: {:.2}", verb, balance)),
            error: None,
        }
    }

    pub(crate) fn failed(error: LedgerError, balance: Decimal) -> Self {
        let message = match error {
            LedgerError::InsufficientFunds => Some("Insufficient funds for this debit.".to_string()),
            _ => None,
        };
        Self {
            success: false,
            amount: None,
            balance,
            message,
            error: Some(error),
        }
    }

    /// Error text, if the operation failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
