pub mod account;
pub mod bank;
pub mod client;
pub mod transaction;

pub use account::Account;
pub use bank::{AccountSummary, Bank};
pub use client::Client;
pub use transaction::{Transaction, TransactionKind};
