pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod shared_ledger;

use std::io::{Read, Write};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use error::Result;
use ledger::Ledger;
use models::{OperationResult, TransactionKind};

/// One requested credit or debit from CSV input
#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Kept as text so malformed amounts reach the ledger's own validation
    #[serde(default)]
    pub amount: String,
}

/// Per-operation output row
#[derive(Debug, Serialize)]
struct Receipt<'a> {
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: &'a str,
    success: bool,
    balance: Decimal,
    detail: String,
}

impl<'a> Receipt<'a> {
    fn new(op: &'a Operation, result: &OperationResult) -> Self {
        let detail = match (&result.message, result.error_message()) {
            (_, Some(error)) => error,
            (Some(message), None) => message.clone(),
            (None, None) => String::new(),
        };
        Self {
            kind: op.kind,
            amount: op.amount.trim(),
            success: result.success,
            balance: result.balance,
            detail,
        }
    }
}

/// Replay operations from a CSV reader against a fresh ledger, writing one receipt per operation
///
/// Returns the ledger so callers can inspect the final state.
pub fn process_operations<R: Read, W: Write>(
    reader: R,
    writer: W,
    initial_balance: Decimal,
) -> Result<Ledger> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut ledger = Ledger::new(initial_balance)?;

    for (index, record) in csv_reader.deserialize::<Operation>().enumerate() {
        let op = match record {
            Ok(op) => op,
            Err(err) => {
                warn!(row = index + 1, error = %err, "Skipping malformed operation");
                continue;
            }
        };

        let result = match op.kind {
            TransactionKind::Credit => ledger.credit(op.amount.as_str()),
            TransactionKind::Debit => ledger.debit(op.amount.as_str()),
        };

        csv_writer.serialize(Receipt::new(&op, &result))?;
    }

    csv_writer.flush()?;
    Ok(ledger)
}
