use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The counterparty of a transaction.
///
/// Selection always replaces the whole record; the wizard never patches
/// individual sub-fields of a previously selected party.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Party {
    pub id: String,
    pub kind: PartyKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
}

impl Party {
    pub fn new(id: impl Into<String>, kind: PartyKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            phone: None,
            email: None,
            bank_account: None,
        }
    }

    pub fn with_bank_account(mut self, bank_account: BankAccount) -> Self {
        self.bank_account = Some(bank_account);
        self
    }
}

/// Supported party kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PartyKind {
    Customer,
    Vendor,
    Agent,
    Haji,
    Umrah,
    Loan,
}

impl PartyKind {
    /// Backend-recognized tag for this party kind.
    pub fn backend_tag(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customer",
            PartyKind::Vendor => "vendor",
            PartyKind::Agent => "agent",
            PartyKind::Haji => "haji",
            PartyKind::Umrah => "umrah",
            PartyKind::Loan => "loan",
        }
    }
}

/// Bank details of a counterparty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
}

impl BankAccount {
    pub fn new(bank_name: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_number: account_number.into(),
        }
    }
}

/// Read-only due/deposit snapshot fetched when an agent party is selected.
///
/// Display-only; the wizard never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentDueInfo {
    pub total_due: f64,
    pub haj_due: f64,
    pub umrah_due: f64,
    pub total_deposit: f64,
    pub fetched_on: NaiveDate,
}

/// Ledger disambiguation required for agent-type credit transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceOption {
    Hajj,
    Umrah,
    Others,
}

impl ServiceOption {
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceOption::Hajj => "hajj",
            ServiceOption::Umrah => "umrah",
            ServiceOption::Others => "others",
        }
    }
}

/// An approving or responsible staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl StaffRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: None,
            email: None,
        }
    }
}
