//! API errors and failure payloads
//!
//! Every modeled failure is a simulation artifact, recovered at the boundary
//! nearest its origin; none is fatal, and no distinction is drawn between
//! transient and permanent failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CourseId, UserId};

/// Errors surfaced by facade operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Email, role, and password did not match a seeded credential
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Scanned code lacks the required attendance marker prefix
    #[error("Invalid QR code")]
    InvalidQrCode,

    /// Simulated biometric match fell below the acceptance threshold
    #[error("Face recognition failed. Please try again or use alternative method.")]
    FaceRecognitionFailed {
        /// Confidence the simulated match produced
        confidence: f64,
    },

    /// Operation referenced a user the store does not know
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// Operation referenced a course the store does not know
    #[error("Unknown course: {0}")]
    UnknownCourse(CourseId),
}

impl ApiError {
    /// User-facing message for this failure
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Wire-format failure payload: `{ "success": false, "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailurePayload {
    /// Always false
    pub success: bool,
    /// User-facing failure message
    pub message: String,
}

impl From<&ApiError> for FailurePayload {
    fn from(error: &ApiError) -> Self {
        Self { success: false, message: error.message() }
    }
}

/// Result type for facade operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::InvalidCredentials.message(), "Invalid credentials");
        assert_eq!(ApiError::InvalidQrCode.message(), "Invalid QR code");
        assert_eq!(
            ApiError::FaceRecognitionFailed { confidence: 80.0 }.message(),
            "Face recognition failed. Please try again or use alternative method."
        );
        assert_eq!(
            ApiError::UnknownUser(UserId::new("ghost")).message(),
            "Unknown user: ghost"
        );
    }

    #[test]
    fn test_failure_payload_shape() {
        let payload = FailurePayload::from(&ApiError::InvalidCredentials);
        assert!(!payload.success);

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "{\"success\":false,\"message\":\"Invalid credentials\"}");
    }
}
