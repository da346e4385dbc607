//! # Recipe Box Commands
//!
//! One function per user-facing operation. Each takes the store, does the
//! work through `recipebox-core`, and returns a serializable response.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Recipe Box Commands                                  │
//! │                                                                         │
//! │  Catalog              Favorites            Filters                      │
//! │  ───────              ─────────            ───────                      │
//! │  get_recipes          toggle_favorite      set_filters                  │
//! │  get_recipe           set_favorite         clear_filters                │
//! │  add_recipe           get_favorites        get_filter_options           │
//! │  update_recipe                                                          │
//! │  delete_recipe        Recommendations                                   │
//! │                       ───────────────                                   │
//! │                       get_recommendations                               │
//! │                                                                         │
//! │  Reads take &RecipeStore, mutations take &mut RecipeStore.             │
//! │  Unknown ids surface as NOT_FOUND here; the store itself treats         │
//! │  them as no-ops.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::convert::Infallible;

use recipebox_core::validation::validate_minutes;
use recipebox_core::{
    ActiveFilter, Choice, Difficulty, FilterState, Recipe, RecipeDraft, RecipeId, RecipePatch,
    RecipeStore, Recommendation, RecommendationKind, TagCount,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

// =============================================================================
// Responses
// =============================================================================

/// A filter badge with its display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBadge {
    pub filter: ActiveFilter,
    pub label: String,
}

impl From<ActiveFilter> for FilterBadge {
    fn from(filter: ActiveFilter) -> Self {
        FilterBadge {
            label: filter.label(),
            filter,
        }
    }
}

/// The filtered recipe list with the filter that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,

    /// Number of recipes shown
    pub shown: usize,

    /// Catalog size before filtering
    pub total: usize,

    pub filters: FilterState,
    pub active_filters: Vec<FilterBadge>,
}

/// A single recipe and its favorite flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

/// The recipe that was removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: Recipe,
    pub remaining: usize,
    pub favorites_count: usize,
}

/// Favorite membership after a favorite command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub recipe_id: RecipeId,
    pub is_favorite: bool,
    pub favorites_count: usize,
}

/// Favorited recipes in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub recipes: Vec<Recipe>,
    pub count: usize,
}

/// Dropdown contents plus the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResponse {
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub filters: FilterState,
    pub active_filters: Vec<FilterBadge>,
}

/// The suggestion list with a heading for the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub heading: String,
    pub kind: RecommendationKind,
    pub top_tags: Vec<TagCount>,
    pub items: Vec<Recommendation>,
}

/// Filter fields to change, as typed on the command line. `None` keeps
/// the current value; "All" (any case) resets a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub max_prep_time: Option<i64>,
}

// =============================================================================
// Catalog Commands
// =============================================================================

/// Gets the recipes passing the current filter.
pub fn get_recipes(store: &RecipeStore) -> RecipeListResponse {
    debug!("get_recipes command");
    list_response(store)
}

/// Gets one recipe by id.
pub fn get_recipe(store: &RecipeStore, id: RecipeId) -> Result<RecipeResponse, ApiError> {
    debug!(recipe_id = id, "get_recipe command");
    let recipe = store.require_recipe(id)?;
    Ok(RecipeResponse {
        is_favorite: store.is_favorite(recipe.id),
        recipe,
    })
}

/// Adds a recipe from a JSON draft.
///
/// ## Example Input
/// ```json
/// {
///   "title": "Pancakes",
///   "description": "Fluffy breakfast pancakes.",
///   "ingredients": ["Flour", "Milk", "Eggs"],
///   "prepTime": 10,
///   "cookTime": 15,
///   "difficulty": "Easy",
///   "category": "Breakfast",
///   "tags": ["breakfast", "sweet"]
/// }
/// ```
///
/// ## Errors
/// - `INVALID_ARGUMENT` if the JSON does not describe a draft
/// - `VALIDATION_ERROR` naming the first offending field
pub fn add_recipe(store: &mut RecipeStore, draft_json: &str) -> Result<RecipeResponse, ApiError> {
    let draft: RecipeDraft = serde_json::from_str(draft_json)?;
    debug!(title = %draft.title, "add_recipe command");

    let recipe = store.add_recipe(draft)?;
    Ok(RecipeResponse {
        recipe,
        is_favorite: false,
    })
}

/// Applies a JSON patch to an existing recipe.
pub fn update_recipe(
    store: &mut RecipeStore,
    id: RecipeId,
    patch_json: &str,
) -> Result<RecipeResponse, ApiError> {
    let patch: RecipePatch = serde_json::from_str(patch_json)?;
    debug!(recipe_id = id, empty = patch.is_empty(), "update_recipe command");

    let recipe = store
        .update_recipe(id, patch)?
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(RecipeResponse {
        is_favorite: store.is_favorite(id),
        recipe,
    })
}

/// Deletes a recipe; it also leaves the favorites.
pub fn delete_recipe(store: &mut RecipeStore, id: RecipeId) -> Result<DeleteResponse, ApiError> {
    debug!(recipe_id = id, "delete_recipe command");
    let deleted = store
        .delete_recipe(id)
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(DeleteResponse {
        deleted,
        remaining: store.snapshot().catalog.len(),
        favorites_count: store.favorites_count(),
    })
}

// =============================================================================
// Favorite Commands
// =============================================================================

/// Flips the favorite flag of a recipe.
pub fn toggle_favorite(store: &mut RecipeStore, id: RecipeId) -> Result<FavoriteResponse, ApiError> {
    debug!(recipe_id = id, "toggle_favorite command");
    ensure_known(store, id)?;

    let is_favorite = store.toggle_favorite(id);
    Ok(favorite_response(store, id, is_favorite))
}

/// Sets the favorite flag of a recipe to `favorite`.
///
/// Repeating the same call is harmless.
pub fn set_favorite(
    store: &mut RecipeStore,
    id: RecipeId,
    favorite: bool,
) -> Result<FavoriteResponse, ApiError> {
    debug!(recipe_id = id, favorite, "set_favorite command");
    ensure_known(store, id)?;

    if favorite {
        store.add_favorite(id);
    } else {
        store.remove_favorite(id);
    }
    let is_favorite = store.is_favorite(id);
    Ok(favorite_response(store, id, is_favorite))
}

/// Gets the favorited recipes.
pub fn get_favorites(store: &RecipeStore) -> FavoritesResponse {
    debug!("get_favorites command");
    let recipes = store.favorite_recipes();
    FavoritesResponse {
        count: recipes.len(),
        recipes,
    }
}

// =============================================================================
// Filter Commands
// =============================================================================

/// Changes the fields present in `update` and returns the new list.
///
/// Everything is parsed before anything is applied, so a bad value leaves
/// the filter untouched.
pub fn set_filters(
    store: &mut RecipeStore,
    update: FilterUpdate,
) -> Result<RecipeListResponse, ApiError> {
    debug!(?update, "set_filters command");

    let difficulty = update
        .difficulty
        .as_deref()
        .map(str::parse::<Choice<Difficulty>>)
        .transpose()?;
    let max_prep_time = update
        .max_prep_time
        .map(|minutes| validate_minutes("max_prep_time", minutes))
        .transpose()?;
    let category = update.category.as_deref().map(parse_category);

    if let Some(term) = update.search_term {
        store.set_search_term(term);
    }
    if let Some(category) = category {
        store.set_selected_category(category);
    }
    if let Some(difficulty) = difficulty {
        store.set_selected_difficulty(difficulty);
    }
    if let Some(minutes) = max_prep_time {
        store.set_max_prep_time(minutes);
    }

    Ok(list_response(store))
}

/// Resets every filter and returns the full list.
pub fn clear_filters(store: &mut RecipeStore) -> RecipeListResponse {
    debug!("clear_filters command");
    store.clear_filters();
    list_response(store)
}

/// Gets the dropdown options and the current selection.
pub fn get_filter_options(store: &RecipeStore) -> FilterOptionsResponse {
    debug!("get_filter_options command");
    FilterOptionsResponse {
        categories: store.categories(),
        difficulties: store.difficulties(),
        filters: store.filters(),
        active_filters: badges(store),
    }
}

// =============================================================================
// Recommendation Commands
// =============================================================================

/// Gets the suggestion panel.
pub fn get_recommendations(store: &RecipeStore) -> RecommendationsResponse {
    debug!("get_recommendations command");
    let recommendations = store.recommendations();

    let heading = match recommendations.kind {
        RecommendationKind::Personalized => "Recommended For You",
        RecommendationKind::Popular => "Popular Recipes",
    };

    RecommendationsResponse {
        heading: heading.to_string(),
        kind: recommendations.kind,
        top_tags: recommendations.top_tags,
        items: recommendations.items,
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn list_response(store: &RecipeStore) -> RecipeListResponse {
    let recipes = store.filtered_recipes();
    RecipeListResponse {
        shown: recipes.len(),
        total: store.snapshot().catalog.len(),
        recipes,
        filters: store.filters(),
        active_filters: badges(store),
    }
}

fn badges(store: &RecipeStore) -> Vec<FilterBadge> {
    store
        .active_filters()
        .into_iter()
        .map(FilterBadge::from)
        .collect()
}

fn favorite_response(store: &RecipeStore, id: RecipeId, is_favorite: bool) -> FavoriteResponse {
    FavoriteResponse {
        recipe_id: id,
        is_favorite,
        favorites_count: store.favorites_count(),
    }
}

fn ensure_known(store: &RecipeStore, id: RecipeId) -> Result<(), ApiError> {
    store.require_recipe(id).map(|_| ()).map_err(ApiError::from)
}

fn parse_category(raw: &str) -> Choice<String> {
    raw.parse().unwrap_or_else(|never: Infallible| match never {})
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::seed::sample_recipes;
    use recipebox_core::StoreConfig;

    fn seeded() -> RecipeStore {
        RecipeStore::with_recipes(StoreConfig::default(), sample_recipes()).unwrap()
    }

    fn ids(recipes: &[Recipe]) -> Vec<RecipeId> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_get_recipes_unfiltered() {
        let store = seeded();
        let response = get_recipes(&store);
        assert_eq!(ids(&response.recipes), vec![1, 2, 3, 4]);
        assert_eq!(response.shown, 4);
        assert_eq!(response.total, 4);
        assert!(response.active_filters.is_empty());
    }

    #[test]
    fn test_get_recipe_not_found() {
        let store = seeded();
        let err = get_recipe(&store, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_recipe_from_json() {
        let mut store = seeded();
        let response = add_recipe(
            &mut store,
            r#"{
                "title": "Pancakes",
                "description": "Fluffy breakfast pancakes.",
                "ingredients": ["Flour", "Milk", "Eggs"],
                "prepTime": 10,
                "cookTime": 15,
                "difficulty": "Easy",
                "category": "Breakfast",
                "tags": ["Breakfast", "sweet"]
            }"#,
        )
        .unwrap();

        assert_eq!(response.recipe.id, 5);
        assert_eq!(response.recipe.tags, vec!["breakfast", "sweet"]);
        assert!(!response.is_favorite);
        assert_eq!(get_recipes(&store).total, 5);
    }

    #[test]
    fn test_add_recipe_rejections() {
        let mut store = seeded();

        let err = add_recipe(&mut store, "{ not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = add_recipe(
            &mut store,
            r#"{"title": "  ", "description": "d", "ingredients": ["x"],
                "prepTime": 1, "cookTime": 1, "difficulty": "Easy", "category": "c"}"#,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("title"));

        let err = add_recipe(
            &mut store,
            r#"{"title": "t", "description": "d", "ingredients": ["x"],
                "prepTime": -5, "cookTime": 1, "difficulty": "Easy", "category": "c"}"#,
        )
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("prep_time"));

        assert_eq!(get_recipes(&store).total, 4);
    }

    #[test]
    fn test_update_recipe() {
        let mut store = seeded();
        store.toggle_favorite(2);

        let response = update_recipe(&mut store, 2, r#"{"prepTime": 5}"#).unwrap();
        assert_eq!(response.recipe.prep_time, 5);
        assert_eq!(response.recipe.title, "Vegetable Stir Fry");
        assert!(response.is_favorite);

        let err = update_recipe(&mut store, 42, r#"{"prepTime": 5}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_recipe_cascades() {
        let mut store = seeded();
        toggle_favorite(&mut store, 1).unwrap();

        let response = delete_recipe(&mut store, 1).unwrap();
        assert_eq!(response.deleted.id, 1);
        assert_eq!(response.remaining, 3);
        assert_eq!(response.favorites_count, 0);

        let err = delete_recipe(&mut store, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_favorite_commands() {
        let mut store = seeded();

        let on = toggle_favorite(&mut store, 3).unwrap();
        assert!(on.is_favorite);
        assert_eq!(on.favorites_count, 1);

        let off = toggle_favorite(&mut store, 3).unwrap();
        assert!(!off.is_favorite);
        assert_eq!(off.favorites_count, 0);

        set_favorite(&mut store, 4, true).unwrap();
        let again = set_favorite(&mut store, 4, true).unwrap();
        assert!(again.is_favorite);
        assert_eq!(again.favorites_count, 1);

        assert_eq!(ids(&get_favorites(&store).recipes), vec![4]);

        let err = toggle_favorite(&mut store, 9).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(store.favorites_count(), 1);
    }

    #[test]
    fn test_search_and_category_filters() {
        let mut store = seeded();

        let response = set_filters(
            &mut store,
            FilterUpdate {
                search_term: Some("chicken".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap();
        assert_eq!(ids(&response.recipes), vec![4]);
        assert_eq!(response.active_filters[0].label, "Search: chicken");

        let response = set_filters(
            &mut store,
            FilterUpdate {
                search_term: Some(String::new()),
                category: Some("Italian".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap();
        assert_eq!(ids(&response.recipes), vec![1, 4]);
        assert_eq!(response.total, 4);

        let response = clear_filters(&mut store);
        assert_eq!(ids(&response.recipes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bad_filter_values_change_nothing() {
        let mut store = seeded();
        let before = store.filters();

        let err = set_filters(
            &mut store,
            FilterUpdate {
                category: Some("Italian".to_string()),
                difficulty: Some("Impossible".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("difficulty"));
        assert_eq!(store.filters(), before);

        let err = set_filters(
            &mut store,
            FilterUpdate {
                max_prep_time: Some(-1),
                ..FilterUpdate::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("max_prep_time"));
    }

    #[test]
    fn test_all_label_ignores_case() {
        let mut store = seeded();
        set_filters(
            &mut store,
            FilterUpdate {
                category: Some("Italian".to_string()),
                difficulty: Some("Easy".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap();

        let response = set_filters(
            &mut store,
            FilterUpdate {
                category: Some("all".to_string()),
                difficulty: Some("ALL".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap();
        assert_eq!(ids(&response.recipes), vec![1, 2, 3, 4]);
        assert!(response.active_filters.is_empty());
    }

    #[test]
    fn test_filter_options() {
        let mut store = seeded();
        set_filters(
            &mut store,
            FilterUpdate {
                difficulty: Some("easy".to_string()),
                max_prep_time: Some(10),
                ..FilterUpdate::default()
            },
        )
        .unwrap();

        let options = get_filter_options(&store);
        assert_eq!(options.categories, vec!["All", "Italian", "Asian", "Dessert"]);
        assert_eq!(options.difficulties, vec!["All", "Medium", "Easy"]);
        let labels: Vec<_> = options.active_filters.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Difficulty: Easy", "Max Prep: 10min"]);
        assert_eq!(ids(&get_recipes(&store).recipes), vec![2]);
    }

    #[test]
    fn test_recommendations_heading() {
        let mut store = seeded();

        let cold = get_recommendations(&store);
        assert_eq!(cold.heading, "Popular Recipes");
        let cold_ids: Vec<_> = cold.items.iter().map(|i| i.recipe.id).collect();
        assert_eq!(cold_ids, vec![1, 2, 3]);

        toggle_favorite(&mut store, 1).unwrap();
        let warm = get_recommendations(&store);
        assert_eq!(warm.heading, "Recommended For You");
        assert_eq!(warm.kind, RecommendationKind::Personalized);
        assert_eq!(warm.items[0].recipe.id, 4);
        assert!(warm.items.iter().all(|i| i.recipe.id != 1));
    }

    #[test]
    fn test_list_response_shape() {
        let mut store = seeded();
        set_filters(
            &mut store,
            FilterUpdate {
                category: Some("Dessert".to_string()),
                ..FilterUpdate::default()
            },
        )
        .unwrap();

        let json = serde_json::to_value(get_recipes(&store)).unwrap();
        assert_eq!(json["shown"], 1);
        assert_eq!(json["filters"]["category"], "Dessert");
        assert_eq!(json["activeFilters"][0]["label"], "Category: Dessert");
        assert_eq!(json["recipes"][0]["prepTime"], 15);
    }
}
