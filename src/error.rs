use thiserror::Error;

use crate::models::TransactionKind;

/// Business rule violations raised while normalizing or applying an amount
///
/// Credit and debit never return these as `Err`; they are folded into an
/// `OperationResult` together with the unchanged balance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: must be a number")]
    InvalidAmount,

    #[error("{} amount cannot be negative", .0.label())]
    NegativeAmount(TransactionKind),

    #[error("Insufficient funds for this debit")]
    InsufficientFunds,

    #[error("Amount exceeds the supported range")]
    AmountOutOfRange,
}

/// Errors that can occur while replaying a batch of operations
/// These are system-level errors (I/O, parsing, bad configuration)
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
