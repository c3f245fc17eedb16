//! Inbound reference data consumed by the wizard.
//!
//! Every list is supplied by the surrounding application from its own data
//! source; an empty list is a valid state, not an error. Invoices alone may
//! be substituted with a clearly flagged fallback set so the selection UI
//! stays populated while no live data exists.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::draft::{AccountRef, BankAccount, Party, PartyKind, StaffRef};

/// Provenance of the invoice list.
///
/// Validators key off this flag: fallback invoices never make invoice
/// selection mandatory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceSource {
    #[default]
    Live,
    Fallback,
}

/// A selectable money-holding account with its reported balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub balance: f64,
    /// Marks the designated business/default account used when a credit
    /// submission names no account explicitly.
    #[serde(default)]
    pub is_business_default: bool,
}

impl AccountRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bank_name: None,
            account_number: None,
            balance,
            is_business_default: false,
        }
    }

    pub fn business_default(mut self) -> Self {
        self.is_business_default = true;
        self
    }

    /// Draft-side reference to this account.
    pub fn to_ref(&self) -> AccountRef {
        AccountRef {
            id: self.id.clone(),
            name: self.name.clone(),
            bank_name: self.bank_name.clone(),
            account_number: self.account_number.clone(),
            balance: self.balance,
        }
    }
}

/// A selectable invoice belonging to a party.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceRecord {
    pub id: String,
    pub invoice_number: String,
    pub party_id: String,
    pub amount: f64,
    pub issued_on: NaiveDate,
}

/// A selectable service category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
}

impl CategoryRecord {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Reference data the wizard reads; never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    pub parties: Vec<Party>,
    pub accounts: Vec<AccountRecord>,
    pub invoices: Vec<InvoiceRecord>,
    pub categories: Vec<CategoryRecord>,
    pub staff: Vec<StaffRef>,
    #[serde(default)]
    pub invoice_source: InvoiceSource,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes the demo invoice set and flags it as fallback data.
    pub fn with_fallback_invoices(mut self) -> Self {
        self.invoices = FALLBACK_INVOICES.clone();
        self.invoice_source = InvoiceSource::Fallback;
        self
    }

    /// Whether invoice selection is mandatory for credit flows.
    ///
    /// Fallback or empty invoice lists relax the requirement so users are
    /// never blocked on data that does not exist.
    pub fn requires_invoice(&self) -> bool {
        self.invoice_source == InvoiceSource::Live && !self.invoices.is_empty()
    }

    /// The designated default account: first business-flagged entry, else
    /// the first account in the list.
    pub fn default_account(&self) -> Option<&AccountRecord> {
        self.accounts
            .iter()
            .find(|account| account.is_business_default)
            .or_else(|| self.accounts.first())
    }

    /// A populated catalog for demos and tests.
    pub fn demo() -> Self {
        let mut hajj_agency = Party::new("AG-100", PartyKind::Agent, "Al-Noor Travels");
        hajj_agency.phone = Some("+8801700000001".into());
        let vendor = Party::new("VN-200", PartyKind::Vendor, "Madinah Hotel Supplies")
            .with_bank_account(BankAccount::new("Islami Bank", "2050-1144-7789"));
        let customer = Party::new("CU-300", PartyKind::Customer, "Rahim Uddin")
            .with_bank_account(BankAccount::new("City Bank", "1011-5566-3321"));
        let haji = Party::new("HJ-400", PartyKind::Haji, "Abdul Karim");

        Self {
            parties: vec![hajj_agency, vendor, customer, haji],
            accounts: vec![
                AccountRecord::new("AC-01", "Main Business Account", 250_000.0)
                    .business_default(),
                AccountRecord::new("AC-02", "Petty Cash", 18_500.0),
                AccountRecord::new("AC-03", "Hajj Escrow", 96_000.0),
            ],
            invoices: vec![InvoiceRecord {
                id: "INV-9001".into(),
                invoice_number: "2026/HAJ/041".into(),
                party_id: "CU-300".into(),
                amount: 185_000.0,
                issued_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default(),
            }],
            categories: vec![
                CategoryRecord::new("CAT-1", "hajj", "Hajj Package"),
                CategoryRecord::new("CAT-2", "umrah", "Umrah Package"),
                CategoryRecord::new("CAT-3", "office-expense", "Office Expense"),
            ],
            staff: vec![StaffRef::new("ST-1", "Nasir Ahmed")],
            invoice_source: InvoiceSource::Live,
        }
    }
}

/// Hardcoded substitute invoices shown while no live invoice data exists.
static FALLBACK_INVOICES: Lazy<Vec<InvoiceRecord>> = Lazy::new(|| {
    vec![
        InvoiceRecord {
            id: "DEMO-INV-1".into(),
            invoice_number: "DEMO/0001".into(),
            party_id: "DEMO-PARTY".into(),
            amount: 50_000.0,
            issued_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
        },
        InvoiceRecord {
            id: "DEMO-INV-2".into(),
            invoice_number: "DEMO/0002".into(),
            party_id: "DEMO-PARTY".into(),
            amount: 72_500.0,
            issued_on: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default(),
        },
    ]
});
