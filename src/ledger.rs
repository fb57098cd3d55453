use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::models::{
    ensure_cents, normalize_amount, MenuValidation, OperationResult, RawValue, Transaction,
    TransactionKind,
};

/// Balance a ledger starts from when none is given
pub const DEFAULT_INITIAL_BALANCE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);

/// Single-account ledger with overdraft protection
pub struct Ledger {
    /// Current balance, always 2 fractional digits and never negative
    balance: Decimal,
    /// Applied transactions in the order they happened
    history: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger from an initial balance
    ///
    /// Fails if the balance cannot be read as a finite number.
    pub fn new(initial_balance: impl Into<RawValue>) -> Result<Self, LedgerError> {
        let balance = normalize_amount(&initial_balance.into())?;
        Ok(Self {
            balance,
            history: Vec::new(),
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add funds
    pub fn credit(&mut self, amount: impl Into<RawValue>) -> OperationResult {
        self.apply(TransactionKind::Credit, amount.into())
    }

    /// Withdraw funds; rejected if it would overdraw the account
    pub fn debit(&mut self, amount: impl Into<RawValue>) -> OperationResult {
        self.apply(TransactionKind::Debit, amount.into())
    }

    /// Copy of the transaction history, oldest first
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    /// Replace the balance and discard all history
    ///
    /// On error the ledger is left untouched.
    pub fn reset(&mut self, initial_balance: impl Into<RawValue>) -> Result<(), LedgerError> {
        let balance = normalize_amount(&initial_balance.into())?;
        debug!(
            previous_balance = %self.balance,
            balance = %balance,
            discarded = self.history.len(),
            "ledger reset"
        );
        self.balance = balance;
        self.history.clear();
        Ok(())
    }

    /// Validate a menu entry; see [`MenuValidation::validate`]
    pub fn validate_menu_choice(choice: impl Into<RawValue>) -> MenuValidation {
        MenuValidation::validate(choice)
    }

    fn apply(&mut self, kind: TransactionKind, raw: RawValue) -> OperationResult {
        match self.try_apply(kind, &raw) {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    kind = kind.label(),
                    amount = ?raw,
                    balance = %self.balance,
                    %error,
                    "Ignoring operation"
                );
                OperationResult::failed(error, self.balance)
            }
        }
    }

    /// Every check runs before the first write, so an `Err` leaves state unchanged
    fn try_apply(
        &mut self,
        kind: TransactionKind,
        raw: &RawValue,
    ) -> Result<OperationResult, LedgerError> {
        let amount = normalize_amount(raw)?;

        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(kind));
        }

        // Sums of 2-digit values stay at 2 digits unless the Decimal range is exceeded
        let new_balance = match kind {
            TransactionKind::Credit => self.balance.checked_add(amount),
            TransactionKind::Debit => {
                // Overdraft protection: exact balance is allowed
                if amount > self.balance {
                    return Err(LedgerError::InsufficientFunds);
                }
                self.balance.checked_sub(amount)
            }
        }
        .ok_or(LedgerError::AmountOutOfRange)
        .and_then(ensure_cents)?;

        let previous_balance = self.balance;
        self.balance = new_balance;
        self.history
            .push(Transaction::new(kind, amount, previous_balance, new_balance));

        debug!(
            kind = kind.label(),
            amount = %amount,
            previous_balance = %previous_balance,
            balance = %new_balance,
            "transaction applied"
        );

        Ok(OperationResult::succeeded(kind, amount, new_balance))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            balance: DEFAULT_INITIAL_BALANCE,
            history: Vec::new(),
        }
    }
}
