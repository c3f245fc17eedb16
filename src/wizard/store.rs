//! Owned storage for the in-progress transaction draft.
//!
//! All wizard mutations flow through this store so the dependent-field
//! clearing rules live in exactly one place instead of at every call site.

use crate::draft::{
    AccountRef, AgentDueInfo, Party, PaymentDetails, PaymentMethod, ServiceOption, StaffRef,
    TransactionDraft, TransactionType,
};

/// Partial update applied to the draft.
///
/// Present keys replace the stored value wholesale (nested objects are never
/// merged with stale sub-fields); absent keys are untouched.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub transaction_type: Option<TransactionType>,
    pub party: Option<Party>,
    pub category: Option<String>,
    pub category_override: Option<String>,
    pub invoice_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_details: Option<PaymentDetails>,
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

impl DraftPatch {
    /// A patch carrying every populated field of the given draft.
    ///
    /// Applying it back to the store it came from is a no-op.
    pub fn from_draft(draft: &TransactionDraft) -> Self {
        Self {
            transaction_type: draft.transaction_type,
            party: draft.party.clone(),
            category: draft.category.clone(),
            category_override: draft.category_override.clone(),
            invoice_id: draft.invoice_id.clone(),
            payment_method: draft.payment_method,
            payment_details: if draft.payment_details.is_empty() {
                None
            } else {
                Some(draft.payment_details.clone())
            },
            source_account: draft.source_account.clone(),
            destination_account: draft.destination_account.clone(),
            debit_account: draft.debit_account.clone(),
            credit_account: draft.credit_account.clone(),
            account_manager: draft.account_manager.clone(),
            transfer_amount: draft.transfer_amount.clone(),
            transfer_reference: draft.transfer_reference.clone(),
            transfer_notes: draft.transfer_notes.clone(),
            agent_due_info: draft.agent_due_info.clone(),
            selected_option: draft.selected_option,
            notes: draft.notes.clone(),
        }
    }
}

/// Single owned aggregate holding the wizard's mutable state.
#[derive(Debug, Default)]
pub struct FieldStore {
    draft: TransactionDraft,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &TransactionDraft {
        &self.draft
    }

    /// Discards the draft. Idempotent; no side effect beyond the clear.
    pub fn reset(&mut self) {
        self.draft = TransactionDraft::new();
    }

    /// Shallow-merges the patch, routing through the explicit setters so
    /// dependent-field clearing applies regardless of how a key arrives.
    ///
    /// Type and party land first: their clearing must not wipe sibling keys
    /// supplied by the same patch.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(value) = patch.transaction_type {
            self.set_transaction_type(value);
        }
        if let Some(party) = patch.party {
            self.select_party(party);
        }
        if let Some(value) = patch.category {
            self.draft.category = Some(value);
        }
        if let Some(value) = patch.category_override {
            self.draft.category_override = Some(value);
        }
        if let Some(value) = patch.invoice_id {
            self.draft.invoice_id = Some(value);
        }
        if let Some(value) = patch.payment_method {
            self.draft.payment_method = Some(value);
        }
        if let Some(details) = patch.payment_details {
            self.draft.payment_details = details;
        }
        if let Some(account) = patch.source_account {
            self.draft.source_account = Some(account);
        }
        if let Some(account) = patch.destination_account {
            self.draft.destination_account = Some(account);
        }
        if let Some(account) = patch.debit_account {
            self.draft.debit_account = Some(account);
        }
        if let Some(account) = patch.credit_account {
            self.draft.credit_account = Some(account);
        }
        if let Some(staff) = patch.account_manager {
            self.draft.account_manager = Some(staff);
        }
        if let Some(value) = patch.transfer_amount {
            self.draft.transfer_amount = Some(value);
        }
        if let Some(value) = patch.transfer_reference {
            self.draft.transfer_reference = Some(value);
        }
        if let Some(value) = patch.transfer_notes {
            self.draft.transfer_notes = Some(value);
        }
        if let Some(info) = patch.agent_due_info {
            self.draft.agent_due_info = Some(info);
        }
        if let Some(option) = patch.selected_option {
            self.draft.selected_option = Some(option);
        }
        if let Some(value) = patch.notes {
            self.draft.notes = Some(value);
        }
    }

    /// Sets the transaction type, clearing flow-specific fields when the
    /// type actually changes. Party and category survive a credit/debit
    /// flip; everything downstream of them is flow-specific.
    pub fn set_transaction_type(&mut self, value: TransactionType) {
        if self.draft.transaction_type != Some(value) && self.draft.transaction_type.is_some() {
            self.clear_flow_fields();
        }
        self.draft.transaction_type = Some(value);
    }

    /// Replaces the party wholesale. Changing to a different kind clears
    /// the invoice, the service option, and the agent due snapshot.
    pub fn select_party(&mut self, party: Party) {
        let kind_changed = self
            .draft
            .party
            .as_ref()
            .is_some_and(|current| current.kind != party.kind);
        if kind_changed {
            self.draft.invoice_id = None;
            self.draft.selected_option = None;
            self.draft.agent_due_info = None;
        }
        self.draft.party = Some(party);
    }

    pub fn set_category(&mut self, slug: impl Into<String>) {
        self.draft.category = Some(slug.into());
    }

    pub fn set_category_override(&mut self, slug: Option<String>) {
        self.draft.category_override = slug;
    }

    pub fn select_invoice(&mut self, invoice_id: Option<String>) {
        self.draft.invoice_id = invoice_id;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.draft.payment_method = Some(method);
    }

    pub fn set_payment_detail(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.draft.payment_details.insert(field.into(), value.into());
    }

    pub fn select_source_account(&mut self, account: AccountRef) {
        self.draft.source_account = Some(account);
    }

    pub fn select_destination_account(&mut self, account: AccountRef) {
        self.draft.destination_account = Some(account);
    }

    pub fn select_debit_account(&mut self, account: AccountRef) {
        self.draft.debit_account = Some(account);
    }

    pub fn select_credit_account(&mut self, account: AccountRef) {
        self.draft.credit_account = Some(account);
    }

    pub fn set_account_manager(&mut self, staff: Option<StaffRef>) {
        self.draft.account_manager = staff;
    }

    pub fn set_transfer_amount(&mut self, amount: impl Into<String>) {
        self.draft.transfer_amount = Some(amount.into());
    }

    pub fn set_transfer_reference(&mut self, reference: impl Into<String>) {
        self.draft.transfer_reference = Some(reference.into());
    }

    pub fn set_transfer_notes(&mut self, notes: impl Into<String>) {
        self.draft.transfer_notes = Some(notes.into());
    }

    pub fn set_agent_due_info(&mut self, info: Option<AgentDueInfo>) {
        self.draft.agent_due_info = info;
    }

    pub fn set_selected_option(&mut self, option: ServiceOption) {
        self.draft.selected_option = Some(option);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = Some(notes.into());
    }

    fn clear_flow_fields(&mut self) {
        self.draft.invoice_id = None;
        self.draft.selected_option = None;
        self.draft.agent_due_info = None;
        self.draft.payment_method = None;
        self.draft.payment_details.clear();
        self.draft.source_account = None;
        self.draft.destination_account = None;
        self.draft.debit_account = None;
        self.draft.credit_account = None;
        self.draft.transfer_amount = None;
        self.draft.transfer_reference = None;
        self.draft.transfer_notes = None;
    }
}
