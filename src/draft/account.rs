use serde::{Deserialize, Serialize};

/// A money-holding account involved in a transaction.
///
/// Populated from the externally supplied account list; the balance is the
/// value reported at selection time, not a live figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub balance: f64,
}

impl AccountRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bank_name: None,
            account_number: None,
            balance,
        }
    }
}
