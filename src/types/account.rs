//! Account type for the teaching library
//!
//! An [`Account`] holds a single balance and enforces that withdrawals never
//! drive it below zero.

use super::error::LibraryError;
use rust_decimal::Decimal;

/// A single-owner bank account
///
/// Each account is an independent value. Transfers borrow both sides
/// mutably, so an account can never be transferred into itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    /// Current balance in currency units
    balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new() -> Self {
        Account {
            balance: Decimal::ZERO,
        }
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit `amount` to the account
    ///
    /// The sign of `amount` is not checked: a negative deposit lowers the
    /// balance without going through the insufficient funds check.
    ///
    /// The balance saturates at `Decimal::MAX` / `Decimal::MIN` instead of
    /// overflowing.
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance = self.balance.saturating_add(amount);
        tracing::debug!(%amount, balance = %self.balance, "deposit");
    }

    /// Debit `amount` from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` exceeds the balance ([`LibraryError::InsufficientFunds`])
    /// - A negative `amount` would push the balance past `Decimal::MAX`
    ///   ([`LibraryError::ArithmeticOverflow`])
    ///
    /// The balance is unchanged in both cases.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LibraryError> {
        if self.balance < amount {
            return Err(LibraryError::insufficient_funds(self.balance, amount));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LibraryError::arithmetic_overflow("withdraw"))?;
        tracing::debug!(%amount, balance = %self.balance, "withdraw");

        Ok(())
    }

    /// Move `amount` from this account into `to`
    ///
    /// The credit to `to` is computed before anything is debited, then the
    /// withdrawal happens; `to` is only updated once it succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - This account cannot cover `amount` ([`LibraryError::InsufficientFunds`])
    /// - Crediting `to` would overflow its balance ([`LibraryError::ArithmeticOverflow`])
    ///
    /// Neither account is modified in either case.
    pub fn transfer(&mut self, to: &mut Account, amount: Decimal) -> Result<(), LibraryError> {
        let credited = to
            .balance
            .checked_add(amount)
            .ok_or_else(|| LibraryError::arithmetic_overflow("transfer"))?;

        self.withdraw(amount)?;
        to.balance = credited;
        tracing::debug!(%amount, balance = %to.balance, "transfer credited");

        Ok(())
    }
}
