//! Response types for the criteria API.
//!
//! This module defines the error body and the mapping from
//! [`CriteriaError`] and wizard outcomes to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::wizard::{BlockReason, ConfirmReason};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A wizard step refused to advance.
    pub fn blocked(step: u8, reason: &BlockReason) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::with_details(
                "VALIDATION_BLOCKED",
                format!("Step {} is blocked: {}", step, reason),
                "Correct the draft and resubmit",
            ),
        }
    }

    /// The draft needs a confirmation the request did not give.
    pub fn confirmation_required(reason: ConfirmReason) -> Self {
        let details = match reason {
            ConfirmReason::NightWindowRollover => {
                "Resubmit with accept_rollover set to true to treat the night window as crossing midnight"
            }
        };
        Self {
            status: StatusCode::CONFLICT,
            error: ApiError::with_details(
                "ROLLOVER_CONFIRMATION_REQUIRED",
                reason.to_string(),
                details,
            ),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CriteriaError> for ApiErrorResponse {
    fn from(error: CriteriaError) -> Self {
        let message = error.to_string();
        match error {
            CriteriaError::InvalidTimeFormat { .. } | CriteriaError::InvalidOption { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(message),
                }
            }
            CriteriaError::InvalidTransition { .. }
            | CriteriaError::CategoryDisabled { .. }
            | CriteriaError::DraftFrozen { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "WIZARD_STATE_ERROR",
                    message,
                    "The request does not fit the wizard's current phase",
                ),
            },
            CriteriaError::CriteriaNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CRITERIA_NOT_FOUND",
                    message,
                    format!("No criteria with id '{}' is registered", id),
                ),
            },
            CriteriaError::DuplicateCriteriaId { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_CRITERIA_ID", message),
            },
            CriteriaError::ConfigNotFound { .. } | CriteriaError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_blocked_response() {
        let response = ApiErrorResponse::blocked(1, &BlockReason::NameRequired);
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "VALIDATION_BLOCKED");
        assert!(response.error.message.contains("name required"));
    }

    #[test]
    fn test_confirmation_required_response() {
        let response = ApiErrorResponse::confirmation_required(ConfirmReason::NightWindowRollover);
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "ROLLOVER_CONFIRMATION_REQUIRED");
        assert!(response.error.details.unwrap().contains("accept_rollover"));
    }

    #[test]
    fn test_criteria_error_to_api_error() {
        let not_found: ApiErrorResponse = CriteriaError::CriteriaNotFound {
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.error.code, "CRITERIA_NOT_FOUND");

        let disabled: ApiErrorResponse = CriteriaError::CategoryDisabled {
            category: Category::Night,
        }
        .into();
        assert_eq!(disabled.status, StatusCode::CONFLICT);
        assert_eq!(disabled.error.code, "WIZARD_STATE_ERROR");

        let bad_option: ApiErrorResponse = CriteriaError::InvalidOption {
            option: "classification",
            value: "weekly".to_string(),
        }
        .into();
        assert_eq!(bad_option.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad_option.error.code, "VALIDATION_ERROR");
    }
}
