//! Step navigation and the wizard session lifecycle.
//!
//! A session moves through `Collecting -> Submitting -> Done | Failed`.
//! Forward motion always passes through validation of the active step;
//! failure of the outbound call preserves the draft so the identical
//! payload can be resent.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::draft::TransactionDraft;
use crate::errors::WizardError;

use super::steps::{resolve_steps, Step, StepRole};
use super::store::FieldStore;
use super::submit::{assemble, SubmissionContext, SubmissionPayload};
use super::validate::{validate_step, ErrorMap};

/// Lifecycle phase of a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Submitting,
    Done,
    Failed(String),
}

/// Result of a forward navigation attempt.
///
/// When `errors` is non-empty the step did not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub step: usize,
    pub errors: ErrorMap,
}

/// Result of a step-indicator jump attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpOutcome {
    pub allowed: bool,
    pub errors: ErrorMap,
}

/// One interactive wizard session: owned draft, current step, and phase.
///
/// Single-writer by construction; there is no cross-session coordination.
pub struct WizardSession {
    session_id: Uuid,
    store: FieldStore,
    current: usize,
    phase: Phase,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            store: FieldStore::new(),
            current: 1,
            phase: Phase::Collecting,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }

    pub fn draft(&self) -> &TransactionDraft {
        self.store.snapshot()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// 1-based number of the active step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// The step list resolved from the current draft.
    pub fn steps(&self) -> Vec<Step> {
        resolve_steps(self.draft())
    }

    /// Role of the active step.
    pub fn current_role(&self) -> StepRole {
        let steps = self.steps();
        let index = self.current.min(steps.len()).saturating_sub(1);
        steps[index].role
    }

    /// Validates the active step and moves forward one step on success.
    pub fn advance(&mut self, catalog: &Catalog) -> AdvanceOutcome {
        let steps = self.steps();
        let index = self.current.min(steps.len()).saturating_sub(1);
        let role = steps[index].role;

        let errors = validate_step(self.draft(), catalog, role);
        if !errors.is_empty() {
            tracing::debug!(
                session = %self.session_id,
                step = self.current,
                fields = errors.len(),
                "step blocked by validation"
            );
            return AdvanceOutcome {
                step: self.current,
                errors,
            };
        }

        // The topology may have grown since the last call (picking a type
        // turns the single-step list into the full flow), so re-resolve
        // against the validated draft before moving.
        let total = resolve_steps(self.draft()).len();
        if self.current < total {
            self.current += 1;
        }
        self.phase = Phase::Collecting;
        AdvanceOutcome {
            step: self.current,
            errors: ErrorMap::new(),
        }
    }

    /// Moves back one step, clamping at the first.
    pub fn retreat(&mut self) -> usize {
        if self.current > 1 {
            self.current -= 1;
        }
        self.current
    }

    /// Jumps to a step indicator: backward unconditionally, forward only
    /// when every intervening step validates.
    pub fn jump_to(&mut self, target: usize, catalog: &Catalog) -> JumpOutcome {
        let steps = self.steps();
        if target == 0 || target > steps.len() {
            let mut errors = ErrorMap::new();
            errors.insert("step".into(), format!("No step {} in this flow", target));
            return JumpOutcome {
                allowed: false,
                errors,
            };
        }

        if target <= self.current {
            self.current = target;
            return JumpOutcome {
                allowed: true,
                errors: ErrorMap::new(),
            };
        }

        for step in &steps[self.current - 1..target - 1] {
            let errors = validate_step(self.draft(), catalog, step.role);
            if !errors.is_empty() {
                return JumpOutcome {
                    allowed: false,
                    errors,
                };
            }
        }
        self.current = target;
        JumpOutcome {
            allowed: true,
            errors: ErrorMap::new(),
        }
    }

    /// Clears the draft and returns to step 1. Idempotent; the store clear
    /// is the only side effect.
    pub fn reset(&mut self) {
        self.store.reset();
        self.current = 1;
        self.phase = Phase::Collecting;
    }

    /// Assembles the payload and enters the submitting phase.
    ///
    /// Allowed only on the confirmation step with every prior step valid.
    pub fn begin_submission(
        &mut self,
        catalog: &Catalog,
        context: &SubmissionContext,
    ) -> Result<SubmissionPayload, WizardError> {
        let steps = self.steps();
        let last = steps.len();
        let on_confirmation = self.current == last
            && steps.last().map(|step| step.role) == Some(StepRole::Confirmation);
        if !on_confirmation {
            return Err(WizardError::NotReady(
                "confirmation step not reached".into(),
            ));
        }

        for step in &steps[..last - 1] {
            let errors = validate_step(self.draft(), catalog, step.role);
            if !errors.is_empty() {
                return Err(WizardError::NotReady(format!(
                    "step {} ({}) has unresolved fields",
                    step.number, step.title
                )));
            }
        }

        let payload = assemble(self.draft(), catalog, context)?;
        self.phase = Phase::Submitting;
        tracing::info!(session = %self.session_id, "submission payload assembled");
        Ok(payload)
    }

    /// Records the backend's verdict.
    ///
    /// Success discards the draft; failure preserves it verbatim and
    /// surfaces the message instead of pretending success.
    pub fn record_outcome(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.store.reset();
                self.current = 1;
                self.phase = Phase::Done;
                tracing::info!(session = %self.session_id, "submission confirmed");
            }
            Err(message) => {
                tracing::warn!(session = %self.session_id, %message, "submission failed");
                self.phase = Phase::Failed(message);
            }
        }
    }
}
