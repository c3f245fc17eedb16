use thiserror::Error;

/// Error type that captures wizard engine failures.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid step: {0}")]
    InvalidStep(String),
    #[error("no account available to receive this transaction")]
    NoTargetAccount,
    #[error("draft is not ready for submission: {0}")]
    NotReady(String),
    #[error("submission rejected by the backend: {0}")]
    SubmissionRejected(String),
}
