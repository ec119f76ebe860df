//! Typed error handling for registra
//!
//! Every core operation resolves to exactly one outcome: a success value or
//! one [`RegistraError`] variant. The expected outcomes (validation failure,
//! conflict, not-found, identity mismatch) are structured results the caller
//! can act on and never mutate the store; `StoreUnavailable` carries a
//! collaborator failure upward unmodified for the transport layer to turn
//! into a retry-or-fail decision.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// A single field validation failure: the offending field and the reason
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// The error type for all registra operations
#[derive(Debug, Error)]
pub enum RegistraError {
    /// Input rejected before any store interaction
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// A record already exists under this identity
    #[error("{resource} with identity '{identity}' already exists")]
    Conflict { resource: String, identity: String },

    /// No record exists under this identity
    #[error("{resource} with identity '{identity}' not found")]
    NotFound { resource: String, identity: String },

    /// The out-of-band identity disagrees with the entity's own identity field
    #[error("identity '{body}' in the body does not match '{path}' in the path")]
    IdentityMismatch { path: String, body: String },

    /// No resource type is registered under this name
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    /// The storage collaborator failed; not the caller's fault
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl RegistraError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistraError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistraError::Conflict { .. } => StatusCode::CONFLICT,
            RegistraError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistraError::IdentityMismatch { .. } => StatusCode::BAD_REQUEST,
            RegistraError::UnknownResource(_) => StatusCode::NOT_FOUND,
            RegistraError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistraError::Validation(_) => "VALIDATION_FAILED",
            RegistraError::Conflict { .. } => "ALREADY_EXISTS",
            RegistraError::NotFound { .. } => "NOT_FOUND",
            RegistraError::IdentityMismatch { .. } => "IDENTITY_MISMATCH",
            RegistraError::UnknownResource(_) => "UNKNOWN_RESOURCE",
            RegistraError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            RegistraError::Validation(violations) => {
                Some(serde_json::json!({ "fields": violations }))
            }
            RegistraError::Conflict { resource, identity }
            | RegistraError::NotFound { resource, identity } => Some(serde_json::json!({
                "resource": resource,
                "identity": identity,
            })),
            RegistraError::IdentityMismatch { path, body } => Some(serde_json::json!({
                "path": path,
                "body": body,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for RegistraError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for registra operations
pub type RegistraResult<T> = Result<T, RegistraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display_and_codes() {
        let err = RegistraError::Conflict {
            resource: "user".to_string(),
            identity: "1234567890".to_string(),
        };
        assert!(err.to_string().contains("already exists"));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn test_not_found_status() {
        let err = RegistraError::NotFound {
            resource: "flight".to_string(),
            identity: "FL-00001-A".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("FL-00001-A"));
    }

    #[test]
    fn test_identity_mismatch_details() {
        let err = RegistraError::IdentityMismatch {
            path: "RU-2025-A".to_string(),
            body: "RU-2025-B".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let response = err.to_response();
        assert_eq!(response.code, "IDENTITY_MISMATCH");
        let details = response.details.unwrap();
        assert_eq!(details["path"], "RU-2025-A");
        assert_eq!(details["body"], "RU-2025-B");
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = RegistraError::Validation(vec![
            FieldViolation {
                field: "inn".to_string(),
                message: "must contain only digits".to_string(),
            },
            FieldViolation {
                field: "age".to_string(),
                message: "must be at least 18".to_string(),
            },
        ]);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let details = err.to_response().details.unwrap();
        assert_eq!(details["fields"].as_array().unwrap().len(), 2);
        assert_eq!(details["fields"][0]["field"], "inn");
    }

    #[test]
    fn test_store_unavailable_status() {
        let err = RegistraError::StoreUnavailable("lock poisoned".to_string());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
    }
}
