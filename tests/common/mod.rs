#![allow(dead_code)]

use safar_core::catalog::{AccountRecord, Catalog};
use safar_core::draft::{
    AccountRef, Party, PartyKind, PaymentMethod, TransactionDraft, TransactionType,
};
use safar_core::wizard::SubmissionContext;

/// Catalog with live invoices, accounts, and parties.
pub fn live_catalog() -> Catalog {
    Catalog::demo()
}

/// Catalog with no reference data at all.
pub fn bare_catalog() -> Catalog {
    Catalog::new()
}

/// Catalog whose invoice list is the flagged demo set.
pub fn fallback_catalog() -> Catalog {
    let mut catalog = Catalog::demo();
    catalog.invoices.clear();
    catalog.with_fallback_invoices()
}

pub fn context() -> SubmissionContext {
    SubmissionContext {
        recorded_by: "tester".into(),
        branch_id: "dhaka-1".into(),
    }
}

pub fn account(id: &str, balance: f64) -> AccountRef {
    AccountRef::new(id, format!("Account {id}"), balance)
}

pub fn account_record(id: &str, balance: f64) -> AccountRecord {
    AccountRecord::new(id, format!("Account {id}"), balance)
}

/// A debit draft settled in cash against a vendor, valid end to end.
pub fn vendor_cash_debit() -> TransactionDraft {
    let mut draft = TransactionDraft::new();
    draft.transaction_type = Some(TransactionType::Debit);
    draft.category = Some("fuel".into());
    draft.party = Some(Party::new("V1", PartyKind::Vendor, "Acme Fuel"));
    draft.payment_method = Some(PaymentMethod::Cash);
    draft.payment_details.insert("amount".into(), "500".into());
    draft.payment_details.insert("reference".into(), "R1".into());
    draft.source_account = Some(account("A1", 1000.0));
    draft
}

/// A transfer draft between two distinct accounts.
pub fn transfer_draft(amount: &str) -> TransactionDraft {
    let mut draft = TransactionDraft::new();
    draft.transaction_type = Some(TransactionType::Transfer);
    draft.debit_account = Some(account("A1", 100.0));
    draft.credit_account = Some(account("A2", 50.0));
    draft.transfer_amount = Some(amount.into());
    draft
}

/// A credit draft for an agent party, before disambiguation.
pub fn agent_credit_draft() -> TransactionDraft {
    let mut draft = TransactionDraft::new();
    draft.transaction_type = Some(TransactionType::Credit);
    draft.category = Some("c1".into());
    draft.party = Some(Party::new("AG1", PartyKind::Agent, "Al-Noor Travels"));
    draft
}
