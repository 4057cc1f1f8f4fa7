use serde::{Deserialize, Serialize};

use crate::errors::{BankError, Result};

use super::transaction::{Transaction, TransactionKind};

/// A balance plus its ordered transaction history.
///
/// The balance always equals the net effect of the recorded transactions:
/// deposits add, withdrawals and transfers out subtract. A rejected
/// operation touches neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub number: u32,
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an account with a zero balance and empty history.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            balance: 0.0,
            transactions: Vec::new(),
        }
    }

    /// Increases the balance and records a deposit. The amount has already
    /// been validated by the bank; this cannot fail.
    pub(crate) fn deposit(&mut self, amount: f64) {
        self.balance += amount;
        self.transactions
            .push(Transaction::new(TransactionKind::Deposit, amount));
    }

    /// Decreases the balance and records a withdrawal, or rejects the
    /// operation outright when funds are short.
    pub(crate) fn withdraw(&mut self, amount: f64) -> Result<()> {
        self.ensure_covered(amount)?;
        self.balance -= amount;
        self.transactions
            .push(Transaction::new(TransactionKind::Withdrawal, amount));
        Ok(())
    }

    /// Debits the sender side of a transfer, recording the recipient.
    pub(crate) fn transfer_out(&mut self, recipient: u32, amount: f64) -> Result<()> {
        self.ensure_covered(amount)?;
        self.balance -= amount;
        self.transactions.push(Transaction::new(
            TransactionKind::TransferOut { recipient },
            amount,
        ));
        Ok(())
    }

    pub(crate) fn ensure_covered(&self, amount: f64) -> Result<()> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                account: self.number,
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(())
    }
}
