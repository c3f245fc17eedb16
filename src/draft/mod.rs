//! Domain models for the in-progress transaction draft.

pub mod account;
#[allow(clippy::module_inception)]
pub mod draft;
pub mod party;
pub mod payment;

pub use account::AccountRef;
pub use draft::{TransactionDraft, TransactionType};
pub use party::{AgentDueInfo, BankAccount, Party, PartyKind, ServiceOption, StaffRef};
pub use payment::{PaymentDetails, PaymentMethod, AMOUNT_FIELD};
