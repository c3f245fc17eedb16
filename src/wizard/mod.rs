//! Step-sequencing engine behind the transaction entry wizard.
//!
//! The flow is: user input mutates the [`store::FieldStore`], navigation asks
//! the validator for the active step's verdict, and the validator asks the
//! topology resolver which rules apply. Once the confirmation step is reached
//! the assembler maps the draft into a backend-shaped payload.

pub mod navigation;
pub mod steps;
pub mod store;
pub mod submit;
pub mod validate;

pub use navigation::{AdvanceOutcome, JumpOutcome, Phase, WizardSession};
pub use steps::{resolve_steps, Step, StepRole};
pub use store::{DraftPatch, FieldStore};
pub use submit::{assemble, PayloadAccount, SubmissionContext, SubmissionPayload};
pub use validate::{validate_step, ErrorMap};
