//! # Recipe Catalog
//!
//! The ordered collection of recipe records.
//!
//! ## Id Discipline
//! Ids are assigned here, never by the caller. `next_id` only grows, so an
//! id freed by a delete is never handed out again.
//!
//! ```text
//! add(draft)  ──► validate ──► id = next_id++ ──► push to the end
//! update(id)  ──► merge patch over current ──► validate ──► replace in place
//! remove(id)  ──► take out (order of the rest unchanged)
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Recipe, RecipeDraft, RecipeId, RecipePatch};
use crate::validation::{validate_draft, ValidRecipe};

/// Ordered recipe records plus the id counter.
///
/// ## Invariants
/// - Ids are unique across the live collection
/// - Every id is `< next_id`
/// - Records are in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    recipes: Vec<Recipe>,
    next_id: RecipeId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog. The first recipe gets id 1.
    pub fn new() -> Self {
        Catalog {
            recipes: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a catalog from records saved elsewhere (an export, another
    /// snapshot), keeping their ids. This is the only way records with
    /// caller-chosen ids enter a catalog.
    ///
    /// ## Errors
    /// - `Duplicate { field: "id" }` if two records share an id
    /// - `OutOfRange { field: "id" }` if an id leaves no room for the next one
    pub fn from_recipes(recipes: Vec<Recipe>) -> CoreResult<Self> {
        let mut next_id = 1;
        for (i, recipe) in recipes.iter().enumerate() {
            if recipes[..i].iter().any(|r| r.id == recipe.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: recipe.id.to_string(),
                }
                .into());
            }
            let after = recipe.id.checked_add(1).ok_or_else(id_exhausted)?;
            next_id = next_id.max(after);
        }

        Ok(Catalog { recipes, next_id })
    }

    /// Validates `draft`, assigns the next id and appends the recipe.
    pub fn add(&mut self, draft: &RecipeDraft, now: DateTime<Utc>) -> CoreResult<Recipe> {
        let fields = validate_draft(draft)?;

        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(id_exhausted)?;
        let recipe = build_recipe(id, fields, now, now);
        self.next_id = next_id;
        self.recipes.push(recipe.clone());

        Ok(recipe)
    }

    /// Merges `patch` into the recipe with `id`.
    ///
    /// ## Returns
    /// - `Ok(Some(recipe))` with the updated record
    /// - `Ok(None)` if no recipe has `id` (nothing to do)
    /// - `Err(..)` if the merged record fails validation; the stored record
    ///   is untouched
    pub fn update(
        &mut self,
        id: RecipeId,
        patch: RecipePatch,
        now: DateTime<Utc>,
    ) -> CoreResult<Option<Recipe>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let current = &self.recipes[index];
        let mut merged = RecipeDraft::from(current);
        merged.apply(patch);
        let fields = validate_draft(&merged)?;

        let recipe = build_recipe(id, fields, current.created_at, now);
        self.recipes[index] = recipe.clone();

        Ok(Some(recipe))
    }

    /// Removes the recipe with `id`, returning it if it existed.
    pub fn remove(&mut self, id: RecipeId) -> Option<Recipe> {
        self.position(id).map(|index| self.recipes.remove(index))
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Checks whether a recipe with `id` is live.
    pub fn contains(&self, id: RecipeId) -> bool {
        self.position(id).is_some()
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The id the next added recipe will receive.
    pub fn next_id(&self) -> RecipeId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn position(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|r| r.id == id)
    }
}

fn build_recipe(
    id: RecipeId,
    fields: ValidRecipe,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Recipe {
    Recipe {
        id,
        title: fields.title,
        description: fields.description,
        ingredients: fields.ingredients,
        instructions: fields.instructions,
        prep_time: fields.prep_time,
        cook_time: fields.cook_time,
        difficulty: fields.difficulty,
        category: fields.category,
        tags: fields.tags,
        created_at,
        updated_at,
    }
}

/// No id is left to hand out.
fn id_exhausted() -> ValidationError {
    ValidationError::OutOfRange {
        field: "id".to_string(),
        min: 1,
        max: i64::MAX,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
