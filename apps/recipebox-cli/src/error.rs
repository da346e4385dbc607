//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Recipe Box                             │
//! │                                                                         │
//! │  args.rs ── bad flag / number ──────────────► INVALID_ARGUMENT         │
//! │                                                                         │
//! │  commands.rs                                                           │
//! │    ├── malformed JSON draft ── serde_json ──► INVALID_ARGUMENT         │
//! │    ├── ValidationError ── CoreError ────────► VALIDATION_ERROR (+field)│
//! │    └── unknown recipe id ───────────────────► NOT_FOUND                │
//! │                                                                         │
//! │  lib.rs prints the ApiError as JSON and maps it to an exit code.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use recipebox_core::{CoreError, RecipeId, ValidationError};
use serde::Serialize;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "title is required",
///   "field": "title"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Offending field for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Recipe not found
    NotFound,

    /// Recipe fields failed validation
    ValidationError,

    /// Command line or JSON input could not be understood
    InvalidArgument,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(id: RecipeId) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("Recipe not found: {}", id))
    }

    /// Creates a validation error naming `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            field: Some(field.into()),
            ..ApiError::new(ErrorCode::ValidationError, message)
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArgument, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::InvalidArgument => 2,
            _ => 1,
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.field(), err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RecipeNotFound(id) => ApiError::not_found(id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts malformed JSON input to API errors.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_argument(format!("Invalid JSON: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = CoreError::RecipeNotFound(7).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Recipe not found: 7");
        assert_eq!(err.exit_code(), 1);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "title".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("title"));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(ApiError::validation("title", "title is required")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], "title");

        let json = serde_json::to_value(ApiError::invalid_argument("bad flag")).unwrap();
        assert_eq!(json["code"], "INVALID_ARGUMENT");
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        assert_eq!(ApiError::invalid_argument("x").exit_code(), 2);
        assert_eq!(ApiError::internal("x").exit_code(), 1);
    }
}
