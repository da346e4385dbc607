//! # Domain Types
//!
//! Core domain types used throughout Recipe Box.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  RecipeDraft    │   │     Recipe      │   │  RecipePatch    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  caller input   │──►│  id (assigned)  │◄──│  Option<field>  │       │
//! │  │  raw minutes    │   │  validated      │   │  partial edit   │       │
//! │  │  (i64)          │   │  timestamps     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │                        ┌─────────────────┐                              │
//! │                        │   Difficulty    │                              │
//! │                        │  Easy│Medium│Hard│                             │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validated vs Unvalidated Shapes
//! `RecipeDraft` and `RecipePatch` are what the UI sends; they are trusted
//! for nothing. `Recipe` only ever comes out of the catalog after the
//! fields passed [`crate::validation::validate_draft`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Recipe identifier. Assigned by the catalog, never reused.
pub type RecipeId = u64;

// =============================================================================
// Difficulty
// =============================================================================

/// How hard a recipe is to cook. A closed label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All labels in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the UI label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    /// Parses a label case-insensitively ("easy", "Easy", " EASY ").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "difficulty".to_string(),
                allowed: Difficulty::ALL.iter().map(|d| d.to_string()).collect(),
            })
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// One dish record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned at creation.
    #[ts(as = "u32")]
    pub id: RecipeId,

    /// Display title (trimmed, non-empty).
    pub title: String,

    /// Short description (trimmed, non-empty).
    pub description: String,

    /// Ingredient lines in the order given. At least one.
    pub ingredients: Vec<String>,

    /// Free text. Step separators are left as typed.
    pub instructions: String,

    /// Preparation time in minutes.
    pub prep_time: u32,

    /// Cooking time in minutes.
    pub cook_time: u32,

    pub difficulty: Difficulty,

    /// Free-form label such as "Italian" or "Dessert".
    pub category: String,

    /// Lowercase labels, unique, in first-given order.
    pub tags: Vec<String>,

    /// When the recipe was added.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the recipe was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Total time from start to plate.
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Checks whether the recipe carries `tag` (tags are stored lowercase).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// Recipe Draft
// =============================================================================

/// Caller-supplied fields for a new recipe.
///
/// Minutes are signed so that a negative value coming from a form can be
/// rejected with a field-named error instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[ts(as = "i32")]
    pub prep_time: i64,
    #[ts(as = "i32")]
    pub cook_time: i64,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Merges the fields present in `patch` over this draft.
    pub fn apply(&mut self, patch: RecipePatch) {
        let RecipePatch {
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            difficulty,
            category,
            tags,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
        if let Some(prep_time) = prep_time {
            self.prep_time = prep_time;
        }
        if let Some(cook_time) = cook_time {
            self.cook_time = cook_time;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
    }
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        RecipeDraft {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            prep_time: i64::from(recipe.prep_time),
            cook_time: i64::from(recipe.cook_time),
            difficulty: recipe.difficulty,
            category: recipe.category.clone(),
            tags: recipe.tags.clone(),
        }
    }
}

// =============================================================================
// Recipe Patch
// =============================================================================

/// A partial edit. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    #[ts(as = "Option<i32>")]
    pub prep_time: Option<i64>,
    #[ts(as = "Option<i32>")]
    pub cook_time: Option<i64>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl RecipePatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == RecipePatch::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Vegetable Stir Fry".to_string(),
            description: "Quick and healthy.".to_string(),
            ingredients: vec!["Mixed vegetables".to_string(), "Soy sauce".to_string()],
            instructions: "1. Chop. 2. Fry.".to_string(),
            prep_time: 10,
            cook_time: 15,
            difficulty: Difficulty::Easy,
            category: "Asian".to_string(),
            tags: vec!["vegetarian".to_string()],
        }
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);

        let err = "Extreme".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.field(), "difficulty");
    }

    #[test]
    fn test_difficulty_serializes_as_label() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_draft_apply_patch_only_touches_present_fields() {
        let mut d = draft();
        d.apply(RecipePatch {
            title: Some("Tofu Stir Fry".to_string()),
            prep_time: Some(12),
            ..RecipePatch::default()
        });

        assert_eq!(d.title, "Tofu Stir Fry");
        assert_eq!(d.prep_time, 12);
        assert_eq!(d.description, "Quick and healthy.");
        assert_eq!(d.cook_time, 15);
        assert_eq!(d.category, "Asian");
    }

    #[test]
    fn test_draft_from_json_defaults_optional_fields() {
        let json = r#"{
            "title": "Toast",
            "description": "Bread, but hot.",
            "ingredients": ["Bread"],
            "prepTime": 1,
            "cookTime": 3,
            "difficulty": "Easy",
            "category": "Breakfast"
        }"#;
        let d: RecipeDraft = serde_json::from_str(json).unwrap();
        assert!(d.tags.is_empty());
        assert!(d.instructions.is_empty());
        assert_eq!(d.cook_time, 3);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(RecipePatch::default().is_empty());
        let patch: RecipePatch = serde_json::from_str(r#"{"category":"Thai"}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.category.as_deref(), Some("Thai"));
    }
}
