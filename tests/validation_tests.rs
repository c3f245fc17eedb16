mod common;

use common::{
    account, agent_credit_draft, bare_catalog, fallback_catalog, live_catalog, transfer_draft,
    vendor_cash_debit,
};
use safar_core::draft::{
    BankAccount, Party, PartyKind, PaymentMethod, ServiceOption, TransactionDraft, TransactionType,
};
use safar_core::wizard::{validate_step, StepRole};

#[test]
fn type_selection_requires_a_type() {
    let catalog = bare_catalog();
    let draft = TransactionDraft::new();
    let errors = validate_step(&draft, &catalog, StepRole::TypeSelection);
    assert!(errors.contains_key("transaction_type"));

    let mut chosen = TransactionDraft::new();
    chosen.transaction_type = Some(TransactionType::Debit);
    assert!(validate_step(&chosen, &catalog, StepRole::TypeSelection).is_empty());
}

#[test]
fn identical_transfer_accounts_are_rejected() {
    let mut draft = transfer_draft("10");
    draft.credit_account = Some(account("A1", 50.0));
    let errors = validate_step(&draft, &bare_catalog(), StepRole::CreditAccountSelection);
    assert!(errors.contains_key("credit_account"));

    let distinct = transfer_draft("10");
    assert!(validate_step(&distinct, &bare_catalog(), StepRole::CreditAccountSelection).is_empty());
}

#[test]
fn transfer_over_debit_balance_is_rejected() {
    // debit account holds 100
    let draft = transfer_draft("150");
    let errors = validate_step(&draft, &bare_catalog(), StepRole::TransferDetails);
    assert!(errors.contains_key("transfer_amount"));
}

#[test]
fn transfer_within_balance_passes() {
    let draft = transfer_draft("75");
    assert!(validate_step(&draft, &bare_catalog(), StepRole::TransferDetails).is_empty());
}

#[test]
fn transfer_amount_must_be_positive() {
    for bad in ["0", "-5", "abc", ""] {
        let draft = transfer_draft(bad);
        let errors = validate_step(&draft, &bare_catalog(), StepRole::TransferDetails);
        assert!(
            errors.contains_key("transfer_amount"),
            "expected rejection for amount {bad:?}"
        );
    }
}

#[test]
fn agent_credit_without_disambiguation_fails_then_clears() {
    let catalog = bare_catalog();
    let mut draft = agent_credit_draft();
    let errors = validate_step(&draft, &catalog, StepRole::AgentBalance);
    assert!(errors.contains_key("selected_option"));

    draft.selected_option = Some(ServiceOption::Hajj);
    assert!(validate_step(&draft, &catalog, StepRole::AgentBalance).is_empty());
}

#[test]
fn invoice_required_only_for_live_invoice_data() {
    let mut draft = TransactionDraft::new();
    draft.transaction_type = Some(TransactionType::Credit);
    draft.party = Some(Party::new("C1", PartyKind::Customer, "Rahim"));

    let live = live_catalog();
    let errors = validate_step(&draft, &live, StepRole::InvoiceSelection);
    assert!(errors.contains_key("invoice"));

    // fallback/demo invoices relax the requirement
    let fallback = fallback_catalog();
    assert!(validate_step(&draft, &fallback, StepRole::InvoiceSelection).is_empty());

    // so does a plain empty list
    let empty = bare_catalog();
    assert!(validate_step(&draft, &empty, StepRole::InvoiceSelection).is_empty());
}

#[test]
fn cash_debit_payment_step_is_valid() {
    let draft = vendor_cash_debit();
    assert!(validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod).is_empty());
}

#[test]
fn payment_amount_must_be_positive() {
    let mut draft = vendor_cash_debit();
    draft
        .payment_details
        .insert("amount".into(), "0".into());
    let errors = validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod);
    assert!(errors.contains_key("amount"));
}

#[test]
fn method_specific_fields_are_enforced() {
    let mut draft = vendor_cash_debit();
    draft.payment_method = Some(PaymentMethod::BankTransfer);
    draft.party = Some(
        Party::new("V1", PartyKind::Vendor, "Acme Fuel")
            .with_bank_account(BankAccount::new("City Bank", "991-22")),
    );
    draft.payment_details.remove("reference");
    let errors = validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod);
    assert!(errors.contains_key("bank_name"));
    assert!(errors.contains_key("account_number"));
    assert!(errors.contains_key("reference"));

    draft.payment_details.insert("bank_name".into(), "City Bank".into());
    draft
        .payment_details
        .insert("account_number".into(), "991-22".into());
    draft.payment_details.insert("reference".into(), "TRX-7".into());
    assert!(validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod).is_empty());
}

#[test]
fn bank_transfer_requires_counterparty_bank_details() {
    let mut draft = vendor_cash_debit();
    draft.payment_method = Some(PaymentMethod::BankTransfer);
    draft.payment_details.insert("bank_name".into(), "City Bank".into());
    draft
        .payment_details
        .insert("account_number".into(), "991-22".into());
    draft.payment_details.insert("reference".into(), "TRX-7".into());
    // party has no bank account on file
    let errors = validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod);
    assert!(errors.contains_key("party_bank_name"));
    assert!(errors.contains_key("party_account_number"));

    // the same missing details are irrelevant for cash
    let mut cash = vendor_cash_debit();
    cash.payment_method = Some(PaymentMethod::Cash);
    let errors = validate_step(&cash, &bare_catalog(), StepRole::PaymentMethod);
    assert!(!errors.contains_key("party_bank_name"));
}

#[test]
fn payment_step_requires_an_account_selection() {
    let mut draft = vendor_cash_debit();
    draft.source_account = None;
    let errors = validate_step(&draft, &bare_catalog(), StepRole::PaymentMethod);
    assert!(errors.contains_key("source_account"));
}

#[test]
fn validation_is_step_scoped() {
    // draft with an invalid payment amount must not leak that error into
    // the category step
    let mut draft = vendor_cash_debit();
    draft.payment_details.insert("amount".into(), "nope".into());
    let errors = validate_step(&draft, &bare_catalog(), StepRole::CategorySelection);
    assert!(errors.is_empty());

    let mut missing_category = vendor_cash_debit();
    missing_category.category = None;
    let errors = validate_step(&missing_category, &bare_catalog(), StepRole::PaymentMethod);
    assert!(!errors.contains_key("category"));
}

#[test]
fn confirmation_step_has_no_field_rules() {
    let draft = TransactionDraft::new();
    assert!(validate_step(&draft, &bare_catalog(), StepRole::Confirmation).is_empty());
}
