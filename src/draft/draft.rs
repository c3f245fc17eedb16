use serde::{Deserialize, Serialize};

use super::account::AccountRef;
use super::party::{AgentDueInfo, Party, ServiceOption, StaffRef};
use super::payment::{PaymentDetails, PaymentMethod};

/// Direction of the transaction being entered.
///
/// Chosen once in step 1 and immutable for the rest of the session; the
/// field store clears flow-specific fields if it is ever re-chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
    Transfer,
}

impl TransactionType {
    pub fn slug(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
            TransactionType::Transfer => "transfer",
        }
    }
}

/// The in-progress, unsaved transaction assembled by the wizard.
///
/// Has no persisted identity until submission succeeds; discarded on reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub transaction_type: Option<TransactionType>,
    pub party: Option<Party>,
    pub category: Option<String>,
    /// Explicit service-category override; wins over every derived slug.
    pub category_override: Option<String>,
    pub invoice_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_details: PaymentDetails,
    pub source_account: Option<AccountRef>,
    pub destination_account: Option<AccountRef>,
    pub debit_account: Option<AccountRef>,
    pub credit_account: Option<AccountRef>,
    pub account_manager: Option<StaffRef>,
    pub transfer_amount: Option<String>,
    pub transfer_reference: Option<String>,
    pub transfer_notes: Option<String>,
    pub agent_due_info: Option<AgentDueInfo>,
    pub selected_option: Option<ServiceOption>,
    pub notes: Option<String>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the selected party is an agent.
    pub fn has_agent_party(&self) -> bool {
        self.party
            .as_ref()
            .is_some_and(|party| party.kind == super::party::PartyKind::Agent)
    }
}
