//! Resolves which steps a draft flows through.
//!
//! Step meaning is carried by [`StepRole`], not by position: validation and
//! navigation key off the role, so "step 4" never silently changes meaning
//! between flows.

use serde::{Deserialize, Serialize};

use crate::draft::{TransactionDraft, TransactionType};

/// Semantic identity of a wizard step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepRole {
    TypeSelection,
    CategorySelection,
    PartySelection,
    DebitAccountSelection,
    CreditAccountSelection,
    AgentBalance,
    InvoiceSelection,
    PaymentMethod,
    TransferDetails,
    Confirmation,
}

impl StepRole {
    pub fn title(&self) -> &'static str {
        match self {
            StepRole::TypeSelection => "Transaction type",
            StepRole::CategorySelection => "Category",
            StepRole::PartySelection => "Party",
            StepRole::DebitAccountSelection => "Debit account",
            StepRole::CreditAccountSelection => "Credit account",
            StepRole::AgentBalance => "Agent balance",
            StepRole::InvoiceSelection => "Invoice",
            StepRole::PaymentMethod => "Payment",
            StepRole::TransferDetails => "Transfer details",
            StepRole::Confirmation => "Confirm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepRole::TypeSelection => "Choose credit, debit, or transfer",
            StepRole::CategorySelection => "Pick the service category",
            StepRole::PartySelection => "Select the counterparty",
            StepRole::DebitAccountSelection => "Account the money leaves",
            StepRole::CreditAccountSelection => "Account the money enters",
            StepRole::AgentBalance => "Review dues and pick Hajj, Umrah, or Others",
            StepRole::InvoiceSelection => "Attach the invoice being settled",
            StepRole::PaymentMethod => "Payment method, amount, and accounts",
            StepRole::TransferDetails => "Amount, reference, and approver",
            StepRole::Confirmation => "Review and submit",
        }
    }
}

/// A resolved wizard step with display metadata.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Step {
    pub number: usize,
    pub role: StepRole,
    pub title: &'static str,
    pub description: &'static str,
}

/// Computes the ordered step list for the given draft.
///
/// Pure: the same draft always resolves to the same list, and the draft is
/// never mutated. Agent-credit flows never contain an invoice step; the
/// balance/disambiguation step takes its slot.
pub fn resolve_steps(draft: &TransactionDraft) -> Vec<Step> {
    resolve_roles(draft)
        .into_iter()
        .enumerate()
        .map(|(index, role)| Step {
            number: index + 1,
            role,
            title: role.title(),
            description: role.description(),
        })
        .collect()
}

fn resolve_roles(draft: &TransactionDraft) -> Vec<StepRole> {
    match draft.transaction_type {
        None => vec![StepRole::TypeSelection],
        Some(TransactionType::Transfer) => vec![
            StepRole::TypeSelection,
            StepRole::DebitAccountSelection,
            StepRole::CreditAccountSelection,
            StepRole::TransferDetails,
            StepRole::Confirmation,
        ],
        Some(TransactionType::Debit) => vec![
            StepRole::TypeSelection,
            StepRole::CategorySelection,
            StepRole::PartySelection,
            StepRole::PaymentMethod,
            StepRole::Confirmation,
        ],
        Some(TransactionType::Credit) => {
            let middle = if draft.has_agent_party() {
                StepRole::AgentBalance
            } else {
                StepRole::InvoiceSelection
            };
            vec![
                StepRole::TypeSelection,
                StepRole::CategorySelection,
                StepRole::PartySelection,
                middle,
                StepRole::PaymentMethod,
                StepRole::Confirmation,
            ]
        }
    }
}
