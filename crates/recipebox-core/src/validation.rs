//! # Validation Module
//!
//! Field rules for recipes, applied at the single mutation boundary
//! (`Catalog::add` / `Catalog::update`).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  RecipeDraft (untrusted)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_draft() ← THIS MODULE                                        │
//! │       │                                                                 │
//! │       ├── title blank?          → Required { field: "title" }          │
//! │       ├── description blank?    → Required { field: "description" }    │
//! │       ├── no ingredient lines?  → Required { field: "ingredients" }    │
//! │       ├── prep_time < 0?        → OutOfRange { field: "prep_time" }    │
//! │       ├── cook_time < 0?        → OutOfRange { field: "cook_time" }    │
//! │       ├── category is "All"?    → NotAllowed { field: "category" }     │
//! │       │                                                                 │
//! │       └── OK → ValidRecipe (trimmed, tags normalized)                  │
//! │                                                                         │
//! │  The first failing field wins; nothing is written on failure.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use recipebox_core::validation::{normalize_tags, validate_minutes};
//!
//! assert_eq!(validate_minutes("prep_time", 15).unwrap(), 15);
//! assert!(validate_minutes("prep_time", -1).is_err());
//!
//! let tags = normalize_tags(&[" Pasta ".to_string(), "pasta".to_string()]);
//! assert_eq!(tags, vec!["pasta".to_string()]);
//! ```

use crate::error::ValidationError;
use crate::types::{Difficulty, RecipeDraft};
use crate::ALL_LABEL;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The normalized fields of a draft that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates a whole draft and returns its normalized fields.
///
/// Fields are checked in declaration order: title, description,
/// ingredients, prep_time, cook_time, category.
pub fn validate_draft(draft: &RecipeDraft) -> ValidationResult<ValidRecipe> {
    let title = validate_required_text("title", &draft.title)?;
    let description = validate_required_text("description", &draft.description)?;
    let ingredients = validate_ingredients(&draft.ingredients)?;
    let prep_time = validate_minutes("prep_time", draft.prep_time)?;
    let cook_time = validate_minutes("cook_time", draft.cook_time)?;
    let category = validate_category(&draft.category)?;

    Ok(ValidRecipe {
        title,
        description,
        ingredients,
        instructions: draft.instructions.clone(),
        prep_time,
        cook_time,
        difficulty: draft.difficulty,
        category,
        tags: normalize_tags(&draft.tags),
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a category name.
///
/// ## Rules
/// - Trimmed; may be empty
/// - Must not be the "All" filter label (any case), which could never be
///   selected on its own
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();

    if category.eq_ignore_ascii_case(ALL_LABEL) {
        return Err(ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: vec![format!("any name except \"{}\"", ALL_LABEL)],
        });
    }

    Ok(category.to_string())
}

/// Validates a required text field.
///
/// ## Returns
/// The trimmed value.
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Validates an ingredient list.
///
/// Lines are trimmed and blank lines dropped; at least one must remain.
pub fn validate_ingredients(ingredients: &[String]) -> ValidationResult<Vec<String>> {
    let lines: Vec<String> = ingredients
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(ValidationError::Required {
            field: "ingredients".to_string(),
        });
    }

    Ok(lines)
}

/// Lowercases and trims tags, dropping blanks and repeats.
///
/// First occurrence wins, so the caller's ordering survives.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());

    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    normalized
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a duration in minutes.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (no-cook recipes)
pub fn validate_minutes(field: &str, minutes: i64) -> ValidationResult<u32> {
    u32::try_from(minutes).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
