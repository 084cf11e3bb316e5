//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of bannerd.
///
/// Every failure outcome of the resolution core maps onto one of these
/// variants, and each variant maps onto a distinct HTTP status.
#[derive(Error, Debug)]
pub enum BannerdError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Malformed or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Token absent or unresolvable
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resolved identity lacks the required role, or the resource is
    /// not visible to the requester
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerdError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is a client-side failure (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation(_) | Self::Unauthorized(_) | Self::Forbidden(_)
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for BannerdError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for BannerdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `BannerdError`.
    #[must_use]
    pub fn from_error(error: &BannerdError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&BannerdError> for ErrorResponse {
    fn from(error: &BannerdError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(BannerdError::not_found("Banner", 1).status_code(), 404);
        assert_eq!(BannerdError::validation("bad tag_id").status_code(), 400);
        assert_eq!(BannerdError::unauthorized("no token").status_code(), 401);
        assert_eq!(BannerdError::forbidden("admin required").status_code(), 403);
        assert_eq!(BannerdError::Database("down".to_string()).status_code(), 500);
        assert_eq!(BannerdError::Cache("torn".to_string()).status_code(), 500);
        assert_eq!(BannerdError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BannerdError::not_found("Banner", 1).error_code(), "NOT_FOUND");
        assert_eq!(BannerdError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(BannerdError::unauthorized("x").error_code(), "UNAUTHORIZED");
        assert_eq!(BannerdError::forbidden("x").error_code(), "FORBIDDEN");
        assert_eq!(BannerdError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_errors() {
        assert!(BannerdError::validation("x").is_client_error());
        assert!(BannerdError::not_found("Banner", 7).is_client_error());
        assert!(!BannerdError::Database("x".to_string()).is_client_error());
        assert!(!BannerdError::internal("x").is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = BannerdError::not_found("Banner", 42);
        assert!(err.to_string().contains("Banner"));
        assert!(err.to_string().contains("42"));

        let err = BannerdError::forbidden("banner is not active");
        assert!(err.to_string().contains("banner is not active"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = BannerdError::not_found("Banner", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = BannerdError::validation("tag_id and feature_id are required");
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.message.contains("required"));
    }
}
