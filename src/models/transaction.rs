use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    #[serde(alias = "credit")]
    Credit,
    #[serde(alias = "debit")]
    Debit,
}

impl TransactionKind {
    /// Capitalized name used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
        }
    }
}

/// Record of one applied credit or debit
///
/// Only the ledger creates these, and only after the balance has moved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Decimal,
    previous_balance: Decimal,
    new_balance: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        kind: TransactionKind,
        amount: Decimal,
        previous_balance: Decimal,
        new_balance: Decimal,
    ) -> Self {
        Self {
            kind,
            amount,
            previous_balance,
            new_balance,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn previous_balance(&self) -> Decimal {
        self.previous_balance
    }

    pub fn new_balance(&self) -> Decimal {
        self.new_balance
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Signed effect on the balance: positive for credits, negative for debits
    pub fn delta(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }
}
