use thiserror::Error;

/// Unified error type for the ledger core and storage layers.
///
/// Every variant except [`BankError::Storage`] is an expected, recoverable
/// condition: the operation reports it and mutates nothing.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("account {0} not found")]
    AccountNotFound(u32),
    #[error("account {0} already exists")]
    DuplicateAccount(u32),
    #[error("insufficient funds on account {account}: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds {
        account: u32,
        balance: f64,
        requested: f64,
    },
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, BankError>;

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}
