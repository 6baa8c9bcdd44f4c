//! VerityErrorCode trait for transport-level mapping.

/// Every error enum implements this to provide a stable error code string
/// that request handlers can map onto their own error representation.
pub trait VerityErrorCode {
    /// Returns the error code string (e.g., "INPUT_TOO_SHORT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INPUT_TOO_SHORT: &str = "INPUT_TOO_SHORT";
pub const INVALID_VERDICT: &str = "INVALID_VERDICT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";
pub const PERSISTENCE_FAILURE: &str = "PERSISTENCE_FAILURE";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
