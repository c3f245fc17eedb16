//! Maps a completed draft into the backend-shaped submission payload.
//!
//! Pure mapping: no I/O, no clock reads. The same draft, catalog, and
//! context always assemble to an identical payload, so a failed submission
//! can be retried verbatim.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::draft::{
    AccountRef, PartyKind, TransactionDraft, TransactionType, AMOUNT_FIELD,
};
use crate::errors::WizardError;

/// Caller-supplied identifiers attached to every submission.
///
/// The engine never generates these; they identify the acting session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmissionContext {
    pub recorded_by: String,
    pub branch_id: String,
}

/// Account snapshot embedded in a payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadAccount {
    pub id: String,
    pub name: String,
}

impl From<&AccountRef> for PayloadAccount {
    fn from(account: &AccountRef) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
        }
    }
}

/// Flat record handed to the outbound HTTP collaborator.
///
/// `debit_account` appears only on debit submissions and `credit_account`
/// only on credit submissions; transfers carry both ends.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmissionPayload {
    pub transaction_type: &'static str,
    pub party_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub target_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<&'static str>,
    pub amount: f64,
    pub payment_details: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_account: Option<PayloadAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_account: Option<PayloadAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    pub recorded_by: String,
    pub branch_id: String,
}

/// Assembles the outbound payload from a validated draft.
///
/// Assumes step validation has already passed; unparseable amounts are not
/// re-checked here. Fails only when no target account can be resolved at
/// all, which is treated as a required-field failure rather than a silent
/// null-account submission.
pub fn assemble(
    draft: &TransactionDraft,
    catalog: &Catalog,
    context: &SubmissionContext,
) -> Result<SubmissionPayload, WizardError> {
    let transaction_type = draft
        .transaction_type
        .ok_or_else(|| WizardError::NotReady("transaction type not chosen".into()))?;

    let party_type = draft
        .party
        .as_ref()
        .map(|party| party.kind.backend_tag())
        .unwrap_or("customer");

    let (target_account_id, debit_account, credit_account) =
        resolve_accounts(draft, catalog, transaction_type)?;

    let amount = match transaction_type {
        TransactionType::Transfer => parse_amount(draft.transfer_amount.as_ref()),
        _ => parse_amount(draft.payment_details.get(AMOUNT_FIELD)),
    };

    Ok(SubmissionPayload {
        transaction_type: transaction_type.slug(),
        party_type,
        party_id: draft.party.as_ref().map(|party| party.id.clone()),
        party_name: draft.party.as_ref().map(|party| party.name.clone()),
        service_category: resolve_service_category(draft, transaction_type),
        invoice_id: draft.invoice_id.clone(),
        target_account_id,
        payment_method: draft.payment_method.map(|method| method.slug()),
        amount,
        payment_details: draft.payment_details.clone(),
        debit_account,
        credit_account,
        transfer_reference: draft.transfer_reference.clone(),
        notes: draft.notes.clone().or_else(|| draft.transfer_notes.clone()),
        approved_by: draft.account_manager.as_ref().map(|staff| staff.id.clone()),
        recorded_by: context.recorded_by.clone(),
        branch_id: context.branch_id.clone(),
    })
}

/// Resolves the effective target account plus the direction-specific
/// account snapshots.
fn resolve_accounts(
    draft: &TransactionDraft,
    catalog: &Catalog,
    transaction_type: TransactionType,
) -> Result<(String, Option<PayloadAccount>, Option<PayloadAccount>), WizardError> {
    match transaction_type {
        TransactionType::Debit => {
            let source = draft
                .source_account
                .as_ref()
                .ok_or(WizardError::NoTargetAccount)?;
            Ok((source.id.clone(), Some(PayloadAccount::from(source)), None))
        }
        TransactionType::Credit => {
            let chosen = draft
                .source_account
                .as_ref()
                .or(draft.destination_account.as_ref());
            let account = match chosen {
                Some(account) => PayloadAccount::from(account),
                None => {
                    let fallback = catalog
                        .default_account()
                        .ok_or(WizardError::NoTargetAccount)?;
                    PayloadAccount {
                        id: fallback.id.clone(),
                        name: fallback.name.clone(),
                    }
                }
            };
            Ok((account.id.clone(), None, Some(account)))
        }
        TransactionType::Transfer => {
            let debit = draft
                .debit_account
                .as_ref()
                .ok_or(WizardError::NoTargetAccount)?;
            let credit = draft
                .credit_account
                .as_ref()
                .ok_or(WizardError::NoTargetAccount)?;
            Ok((
                debit.id.clone(),
                Some(PayloadAccount::from(debit)),
                Some(PayloadAccount::from(credit)),
            ))
        }
    }
}

/// Single service-category slug, resolved by precedence: explicit override,
/// agent's chosen option, haji/umrah literals, loan direction, generic
/// category.
fn resolve_service_category(
    draft: &TransactionDraft,
    transaction_type: TransactionType,
) -> Option<String> {
    if let Some(explicit) = draft
        .category_override
        .as_deref()
        .filter(|slug| !slug.trim().is_empty())
    {
        return Some(explicit.to_string());
    }

    if let Some(party) = &draft.party {
        match party.kind {
            PartyKind::Agent => {
                if let Some(option) = draft.selected_option {
                    return Some(option.slug().to_string());
                }
            }
            PartyKind::Haji => return Some("hajj".to_string()),
            PartyKind::Umrah => return Some("umrah".to_string()),
            PartyKind::Loan => {
                let slug = if transaction_type == TransactionType::Debit {
                    "loan-giving"
                } else {
                    "loan-repayment"
                };
                return Some(slug.to_string());
            }
            _ => {}
        }
    }

    draft.category.clone()
}

fn parse_amount(raw: Option<&String>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
