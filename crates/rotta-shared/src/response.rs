//! Standardized API response types (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// Machine-readable error code, e.g. `slot_taken`.
    pub code: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            code: code.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", "validation_failed").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found", "not_found").with_detail(detail)
    }

    pub fn slot_taken(detail: impl Into<String>) -> Self {
        Self::new(409, "Slot Taken", "slot_taken").with_detail(detail)
    }

    pub fn generation_failed(detail: impl Into<String>) -> Self {
        Self::new(502, "Generation Failed", "generation_failed").with_detail(detail)
    }

    pub fn copy_failed(detail: impl Into<String>) -> Self {
        Self::new(422, "Copy Failed", "copy_failed").with_detail(detail)
    }

    pub fn share_failed(detail: impl Into<String>) -> Self {
        Self::new(422, "Share Failed", "share_failed").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error", "internal_error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_shape() {
        let body = serde_json::to_value(ErrorResponse::slot_taken("2026-10-19/x")).unwrap();
        assert_eq!(body["type"], "about:blank");
        assert_eq!(body["status"], 409);
        assert_eq!(body["code"], "slot_taken");
        assert_eq!(body["detail"], "2026-10-19/x");
    }
}
