mod classifier_error;
mod collaborator_error;
mod config_error;
pub mod error_code;

pub use classifier_error::ClassifierError;
pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;
pub use error_code::VerityErrorCode;

/// Top-level error for the Verity workspace.
///
/// Classifier failures, configuration failures, and failures reported by
/// external collaborators stay in separate variants so callers can map each
/// kind to its own transport-level representation.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("classifier error: {0}")]
    ClassifierError(#[from] ClassifierError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("collaborator error: {0}")]
    CollaboratorError(#[from] CollaboratorError),

    /// Verdict JSON that failed to parse or validate, see
    /// `AnalysisVerdict::from_json`.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VerityErrorCode for VerityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ClassifierError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::CollaboratorError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type VerityResult<T> = Result<T, VerityError>;
