pub mod json_backend;

use crate::{errors::BankError, ledger::Bank};

pub type Result<T> = std::result::Result<T, BankError>;

/// Abstraction over persistence backends capable of storing the whole
/// ledger between runs.
pub trait StorageBackend {
    /// Persists the complete ledger, replacing any previous snapshot.
    fn save(&self, bank: &Bank) -> Result<()>;

    /// Restores the ledger. A missing snapshot is the first-run condition
    /// and produces an empty ledger; an unreadable one is an error.
    fn load(&self) -> Result<Bank>;
}

pub use json_backend::JsonStore;
