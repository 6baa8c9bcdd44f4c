use super::error_code::{self, VerityErrorCode};

/// Failures reported by components that wrap the classifier: request
/// handlers, third-party analyzers, and persistence layers.
///
/// The core never produces these.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("upstream {service} unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },

    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    #[error("persistence failure: {reason}")]
    PersistenceFailure { reason: String },
}

impl VerityErrorCode for CollaboratorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable { .. } => error_code::UPSTREAM_UNAVAILABLE,
            Self::MalformedRequest { .. } => error_code::MALFORMED_REQUEST,
            Self::PersistenceFailure { .. } => error_code::PERSISTENCE_FAILURE,
        }
    }
}
