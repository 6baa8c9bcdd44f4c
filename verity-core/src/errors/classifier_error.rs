use super::error_code::{self, VerityErrorCode};

/// Errors raised by the classifier itself.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Article text must be at least {minimum} characters long (got {length})")]
    InputTooShort { length: usize, minimum: usize },

    #[error("invalid verdict: {reason}")]
    InvalidVerdict { reason: String },
}

impl VerityErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputTooShort { .. } => error_code::INPUT_TOO_SHORT,
            Self::InvalidVerdict { .. } => error_code::INVALID_VERDICT,
        }
    }
}
