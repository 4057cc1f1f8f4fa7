use serde::{Deserialize, Serialize};

/// Identity record binding a name to an account number. Holds no money
/// itself; the account with the same number carries the balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub name: String,
    pub account_number: u32,
}

impl Client {
    pub fn new(name: impl Into<String>, account_number: u32) -> Self {
        Self {
            name: name.into(),
            account_number,
        }
    }
}
