pub mod amount;
pub mod menu;
pub mod outcome;
pub mod transaction;

pub use amount::{ensure_cents, normalize_amount, round2, RawValue};
pub use menu::{MenuChoice, MenuValidation};
pub use outcome::OperationResult;
pub use transaction::{Transaction, TransactionKind};
