mod common;

use common::{
    account, account_record, agent_credit_draft, bare_catalog, context, transfer_draft,
    vendor_cash_debit,
};
use safar_core::catalog::Catalog;
use safar_core::draft::{Party, PartyKind, ServiceOption, TransactionType};
use safar_core::errors::WizardError;
use safar_core::wizard::assemble;

#[test]
fn cash_debit_scenario_maps_to_the_expected_payload() {
    let draft = vendor_cash_debit();
    let payload = assemble(&draft, &bare_catalog(), &context()).expect("payload");

    assert_eq!(payload.transaction_type, "debit");
    assert_eq!(payload.party_type, "vendor");
    assert_eq!(payload.party_id.as_deref(), Some("V1"));
    assert_eq!(payload.target_account_id, "A1");
    assert_eq!(payload.amount, 500.0);
    assert_eq!(payload.payment_method, Some("cash"));
    assert!(payload.debit_account.is_some());
    assert!(payload.credit_account.is_none());
    assert_eq!(payload.service_category.as_deref(), Some("fuel"));
    assert_eq!(payload.recorded_by, "tester");
    assert_eq!(payload.branch_id, "dhaka-1");
}

#[test]
fn assembly_is_deterministic_for_an_unchanged_draft() {
    let draft = vendor_cash_debit();
    let catalog = bare_catalog();
    let first = assemble(&draft, &catalog, &context()).expect("payload");
    let second = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(first, second);

    let first_json = serde_json::to_vec(&first).expect("serialize");
    let second_json = serde_json::to_vec(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn unset_party_defaults_to_customer_tag() {
    let mut draft = vendor_cash_debit();
    draft.party = None;
    let payload = assemble(&draft, &bare_catalog(), &context()).expect("payload");
    assert_eq!(payload.party_type, "customer");
    assert!(payload.party_id.is_none());
}

#[test]
fn credit_prefers_source_then_destination_then_catalog_default() {
    let mut catalog = Catalog::new();
    catalog.accounts = vec![
        account_record("PLAIN", 10.0),
        account_record("FLAGGED", 20.0).business_default(),
    ];

    let mut draft = vendor_cash_debit();
    draft.transaction_type = Some(TransactionType::Credit);

    // source wins
    let payload = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(payload.target_account_id, "A1");

    // then destination
    draft.source_account = None;
    draft.destination_account = Some(account("D9", 0.0));
    let payload = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(payload.target_account_id, "D9");

    // then the business-flagged default from the catalog
    draft.destination_account = None;
    let payload = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(payload.target_account_id, "FLAGGED");
}

#[test]
fn credit_with_no_account_anywhere_is_an_error() {
    let mut draft = vendor_cash_debit();
    draft.transaction_type = Some(TransactionType::Credit);
    draft.source_account = None;
    let result = assemble(&draft, &bare_catalog(), &context());
    assert!(matches!(result, Err(WizardError::NoTargetAccount)));
}

#[test]
fn direction_specific_accounts_are_mutually_exclusive() {
    let mut credit = vendor_cash_debit();
    credit.transaction_type = Some(TransactionType::Credit);
    let payload = assemble(&credit, &bare_catalog(), &context()).expect("payload");
    assert!(payload.credit_account.is_some());
    assert!(payload.debit_account.is_none());

    let debit = vendor_cash_debit();
    let payload = assemble(&debit, &bare_catalog(), &context()).expect("payload");
    assert!(payload.debit_account.is_some());
    assert!(payload.credit_account.is_none());
}

#[test]
fn transfer_payload_carries_both_ends_and_the_amount() {
    let mut draft = transfer_draft("75");
    draft.transfer_reference = Some("TRX-42".into());
    let payload = assemble(&draft, &bare_catalog(), &context()).expect("payload");
    assert_eq!(payload.transaction_type, "transfer");
    assert_eq!(payload.target_account_id, "A1");
    assert_eq!(payload.amount, 75.0);
    assert_eq!(
        payload.debit_account.as_ref().map(|a| a.id.as_str()),
        Some("A1")
    );
    assert_eq!(
        payload.credit_account.as_ref().map(|a| a.id.as_str()),
        Some("A2")
    );
    assert_eq!(payload.transfer_reference.as_deref(), Some("TRX-42"));
}

#[test]
fn service_category_precedence_is_respected() {
    let catalog = bare_catalog();

    // explicit override wins over everything
    let mut draft = agent_credit_draft();
    draft.selected_option = Some(ServiceOption::Umrah);
    draft.category_override = Some("special-offer".into());
    draft.source_account = Some(account("A1", 10.0));
    let payload = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("special-offer"));

    // agent's selected option
    draft.category_override = None;
    let payload = assemble(&draft, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("umrah"));

    // haji parties map to the hajj ledger
    let mut haji = vendor_cash_debit();
    haji.party = Some(Party::new("H1", PartyKind::Haji, "Abdul Karim"));
    let payload = assemble(&haji, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("hajj"));

    // loan direction derives from the transaction type
    let mut loan = vendor_cash_debit();
    loan.party = Some(Party::new("L1", PartyKind::Loan, "Staff Loan"));
    let payload = assemble(&loan, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("loan-giving"));

    loan.transaction_type = Some(TransactionType::Credit);
    let payload = assemble(&loan, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("loan-repayment"));

    // plain parties fall back to the generic category
    let generic = vendor_cash_debit();
    let payload = assemble(&generic, &catalog, &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("fuel"));
}

#[test]
fn agent_without_selected_option_falls_back_to_generic_category() {
    let mut draft = agent_credit_draft();
    draft.source_account = Some(account("A1", 10.0));
    let payload = assemble(&draft, &bare_catalog(), &context()).expect("payload");
    assert_eq!(payload.service_category.as_deref(), Some("c1"));
}
