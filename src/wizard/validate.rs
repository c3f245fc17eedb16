//! Step-scoped validation.
//!
//! Each rule belongs to exactly one [`StepRole`]; validating a step never
//! reports fields owned by another step, so users are not shown errors for
//! screens they have not reached yet.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::draft::{PaymentMethod, TransactionDraft, AMOUNT_FIELD};

use super::steps::StepRole;

/// Field name to human-readable message. Empty map means the step is valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Validates the rules belonging to one step of the wizard.
pub fn validate_step(draft: &TransactionDraft, catalog: &Catalog, role: StepRole) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match role {
        StepRole::TypeSelection => {
            if draft.transaction_type.is_none() {
                errors.insert(
                    "transaction_type".into(),
                    "Select credit, debit, or transfer".into(),
                );
            }
        }
        StepRole::CategorySelection => {
            if draft
                .category
                .as_deref()
                .map_or(true, |slug| slug.trim().is_empty())
            {
                errors.insert("category".into(), "Select a category".into());
            }
        }
        StepRole::PartySelection => {
            if draft
                .party
                .as_ref()
                .map_or(true, |party| party.id.trim().is_empty())
            {
                errors.insert("party".into(), "Select a party".into());
            }
        }
        StepRole::DebitAccountSelection => {
            if draft.debit_account.is_none() {
                errors.insert(
                    "debit_account".into(),
                    "Select the account the money leaves".into(),
                );
            }
        }
        StepRole::CreditAccountSelection => match (&draft.debit_account, &draft.credit_account) {
            (_, None) => {
                errors.insert(
                    "credit_account".into(),
                    "Select the account the money enters".into(),
                );
            }
            (Some(debit), Some(credit)) if debit.id == credit.id => {
                errors.insert(
                    "credit_account".into(),
                    "Debit and credit accounts must differ".into(),
                );
            }
            _ => {}
        },
        StepRole::AgentBalance => {
            if draft.selected_option.is_none() {
                errors.insert(
                    "selected_option".into(),
                    "Choose Hajj, Umrah, or Others".into(),
                );
            }
        }
        StepRole::InvoiceSelection => {
            // Deliberate relaxation: fallback/demo invoices never block the
            // user, only live invoice data makes selection mandatory.
            if catalog.requires_invoice() && draft.invoice_id.is_none() {
                errors.insert("invoice".into(), "Select the invoice being settled".into());
            }
        }
        StepRole::PaymentMethod => validate_payment(draft, &mut errors),
        StepRole::TransferDetails => validate_transfer(draft, &mut errors),
        StepRole::Confirmation => {
            // No field rules; navigation gates on all prior steps being valid.
        }
    }
    errors
}

fn validate_payment(draft: &TransactionDraft, errors: &mut ErrorMap) {
    let Some(method) = draft.payment_method else {
        errors.insert("payment_method".into(), "Select a payment method".into());
        return;
    };

    match parse_amount(draft.payment_details.get(AMOUNT_FIELD)) {
        Some(value) if value > 0.0 => {}
        _ => {
            errors.insert(
                AMOUNT_FIELD.into(),
                "Enter an amount greater than zero".into(),
            );
        }
    }

    for field in method.required_fields() {
        let filled = draft
            .payment_details
            .get(*field)
            .is_some_and(|value| !value.trim().is_empty());
        if !filled {
            errors.insert(
                (*field).into(),
                format!("{} is required for {} payments", field, method.slug()),
            );
        }
    }

    if method == PaymentMethod::BankTransfer {
        let bank = draft.party.as_ref().and_then(|party| party.bank_account.as_ref());
        let bank_name_filled = bank.is_some_and(|account| !account.bank_name.trim().is_empty());
        if !bank_name_filled {
            errors.insert(
                "party_bank_name".into(),
                "Counterparty bank name is required for bank transfers".into(),
            );
        }
        let number_filled = bank.is_some_and(|account| !account.account_number.trim().is_empty());
        if !number_filled {
            errors.insert(
                "party_account_number".into(),
                "Counterparty account number is required for bank transfers".into(),
            );
        }
    }

    if draft.source_account.is_none() && draft.destination_account.is_none() {
        errors.insert(
            "source_account".into(),
            "Select an account for this transaction".into(),
        );
    }
}

fn validate_transfer(draft: &TransactionDraft, errors: &mut ErrorMap) {
    match parse_amount(draft.transfer_amount.as_ref()) {
        Some(amount) if amount > 0.0 => {
            if let Some(debit) = &draft.debit_account {
                if amount > debit.balance {
                    errors.insert(
                        "transfer_amount".into(),
                        "Transfer amount exceeds the debit account balance".into(),
                    );
                }
            }
        }
        _ => {
            errors.insert(
                "transfer_amount".into(),
                "Enter an amount greater than zero".into(),
            );
        }
    }
}

fn parse_amount(raw: Option<&String>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
}
