//! # Error Types
//!
//! Domain-specific error types for recipebox-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  recipebox-core errors (this file)                                     │
//! │  ├── CoreError        - Unknown recipe, wrapped validation failures    │
//! │  └── ValidationError  - Malformed recipe fields                        │
//! │                                                                         │
//! │  recipebox-cli errors (app)                                            │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no I/O in this crate, so there are no timeout, connection or
//! parse failures to model. Nothing here is retried and nothing is fatal.

use thiserror::Error;

use crate::types::RecipeId;

// =============================================================================
// Core Error
// =============================================================================

/// Core data-layer errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Recipe cannot be found.
    ///
    /// ## When This Occurs
    /// Only from lookups that must succeed (`RecipeStore::require_recipe`).
    /// Favorite, update and delete operations on a missing id are no-ops.
    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the offending field when this is a validation failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Validation(err) => Some(err.field()),
            CoreError::RecipeNotFound(_) => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Recipe field validation errors.
///
/// Every variant names the field that failed so a form can highlight it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate recipe id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::RecipeNotFound(42);
        assert_eq!(err.to_string(), "Recipe not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::OutOfRange {
            field: "prep_time".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "prep_time must be between 0 and 10");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "ingredients".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.field(), Some("ingredients"));
        assert_eq!(CoreError::RecipeNotFound(1).field(), None);
    }
}
