use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::{OperationResult, RawValue, Transaction};

/// Ledger handle that can be shared across tokio tasks
///
/// `Ledger` assumes exclusive, sequential access. This wrapper provides it:
/// every mutation holds the write lock across the whole balance + history
/// update, and queries take the read lock so concurrent readers never see
/// a half-applied transaction.
///
/// # Example
///
/// ```no_run
/// use account_ledger::shared_ledger::SharedLedger;
///
/// #[tokio::main]
/// async fn main() {
///     let ledger = SharedLedger::default();
///
///     let handle = ledger.clone_handle();
///     tokio::spawn(async move {
///         handle.credit(100).await;
///     })
///     .await
///     .unwrap();
///
///     println!("balance: {}", ledger.balance().await);
/// }
/// ```
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub async fn credit(&self, amount: impl Into<RawValue>) -> OperationResult {
        let amount = amount.into();
        self.inner.write().await.credit(amount)
    }

    pub async fn debit(&self, amount: impl Into<RawValue>) -> OperationResult {
        let amount = amount.into();
        self.inner.write().await.debit(amount)
    }

    pub async fn balance(&self) -> Decimal {
        self.inner.read().await.balance()
    }

    pub async fn transaction_history(&self) -> Vec<Transaction> {
        self.inner.read().await.transaction_history()
    }

    pub async fn reset(&self, initial_balance: impl Into<RawValue>) -> Result<(), LedgerError> {
        let initial_balance = initial_balance.into();
        self.inner.write().await.reset(initial_balance)
    }

    /// Clone handle for sharing across tasks
    ///
    /// All handles point at the same ledger.
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedLedger {
    fn default() -> Self {
        Self::new(Ledger::default())
    }
}
