use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BankError, Result};

use super::{account::Account, client::Client, transaction::Transaction};

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The complete ledger for one deployment: every client, every account,
/// and the unit of persistence.
///
/// Clients and accounts are keyed by account number. The two maps always
/// hold exactly the same keys: `add_client` is the only operation that
/// inserts entries, and it inserts into both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub clients: BTreeMap<u32, Client>,
    #[serde(default)]
    pub accounts: BTreeMap<u32, Account>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Bank::schema_version_default")]
    pub schema_version: u8,
}

impl Bank {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            clients: BTreeMap::new(),
            accounts: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Registers a client together with a zero-balance account sharing the
    /// number, returning the number on success. A taken number is rejected
    /// and the ledger is left exactly as it was.
    pub fn add_client(&mut self, name: impl Into<String>, number: u32) -> Result<u32> {
        if self.accounts.contains_key(&number) {
            return Err(BankError::DuplicateAccount(number));
        }
        self.clients.insert(number, Client::new(name, number));
        self.accounts.insert(number, Account::new(number));
        self.touch();
        tracing::debug!(account = number, "client added");
        Ok(number)
    }

    pub fn client(&self, number: u32) -> Option<&Client> {
        self.clients.get(&number)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn deposit(&mut self, number: u32, amount: f64) -> Result<()> {
        ensure_valid_amount(amount)?;
        self.account_mut(number)?.deposit(amount);
        self.touch();
        Ok(())
    }

    pub fn withdraw(&mut self, number: u32, amount: f64) -> Result<()> {
        ensure_valid_amount(amount)?;
        self.account_mut(number)?.withdraw(amount)?;
        self.touch();
        Ok(())
    }

    /// Moves funds between two accounts atomically: every check runs before
    /// the first mutation, so a failure leaves both sides untouched. A
    /// successful transfer records a transfer out on the sender and a
    /// deposit on the recipient.
    ///
    /// Sender and recipient may be the same account; the round trip has no
    /// net effect but both records are still appended.
    pub fn transfer(&mut self, from: u32, to: u32, amount: f64) -> Result<()> {
        ensure_valid_amount(amount)?;
        self.account(from)
            .ok_or(BankError::AccountNotFound(from))?
            .ensure_covered(amount)?;
        if !self.accounts.contains_key(&to) {
            return Err(BankError::AccountNotFound(to));
        }
        self.account_mut(from)?.transfer_out(to, amount)?;
        self.account_mut(to)?.deposit(amount);
        self.touch();
        tracing::debug!(from, to, amount, "transfer settled");
        Ok(())
    }

    /// Account number, owning client's name, balance, and the full ordered
    /// history in one view.
    pub fn account_summary(&self, number: u32) -> Result<AccountSummary<'_>> {
        let account = self
            .account(number)
            .ok_or(BankError::AccountNotFound(number))?;
        let client = self
            .client(number)
            .ok_or(BankError::AccountNotFound(number))?;
        Ok(AccountSummary {
            number,
            client_name: &client.name,
            balance: account.balance,
            transactions: &account.transactions,
        })
    }

    /// Transactions strictly inside the window (exclusive on both ends),
    /// original order preserved. An account with no matching records
    /// yields an empty list, which is distinct from the account not
    /// existing at all.
    pub fn transactions_between(
        &self,
        number: u32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<&Transaction>> {
        let account = self
            .account(number)
            .ok_or(BankError::AccountNotFound(number))?;
        Ok(account
            .transactions
            .iter()
            .filter(|txn| txn.timestamp > start && txn.timestamp < end)
            .collect())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn account_mut(&mut self, number: u32) -> Result<&mut Account> {
        self.accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound(number))
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of one account joined with its owning client.
#[derive(Debug)]
pub struct AccountSummary<'a> {
    pub number: u32,
    pub client_name: &'a str,
    pub balance: f64,
    pub transactions: &'a [Transaction],
}

fn ensure_valid_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(BankError::InvalidAmount(amount));
    }
    Ok(())
}
