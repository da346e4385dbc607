//! # Filter Engine
//!
//! Pure predicates over the catalog. Nothing here mutates recipes; the
//! store owns the `FilterState` and hands it in.
//!
//! ## Predicate Conjunction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  recipe passes iff ALL of:                                             │
//! │                                                                         │
//! │  1. search     term empty, or (case-insensitive) substring of          │
//! │                title │ description │ any ingredient │ any tag         │
//! │  2. category   All, or recipe.category == selected                     │
//! │  3. difficulty All, or recipe.difficulty == selected                   │
//! │  4. prep time  recipe.prep_time <= max_prep_time                       │
//! │                                                                         │
//! │  Output keeps catalog order (stable filter, no re-sort).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::types::{Difficulty, Recipe};
use crate::{ALL_LABEL, DEFAULT_MAX_PREP_TIME};

// =============================================================================
// Choice
// =============================================================================

/// One dimension of a dropdown filter: everything, or one value.
///
/// Renders to and parses from the UI strings: `"All"` or the value itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Checks whether `value` passes this choice.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL_LABEL),
            Choice::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Choice::All);
        }
        s.parse().map(Choice::Only)
    }
}

impl<T: fmt::Display> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Choice<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// The current search/category/difficulty/prep-time constraint tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Raw text as typed; trimmed when matching.
    pub search_term: String,

    #[ts(type = "string")]
    pub category: Choice<String>,

    #[ts(type = "string")]
    pub difficulty: Choice<Difficulty>,

    /// Inclusive upper bound on `prep_time`, in minutes.
    pub max_prep_time: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_max_prep_time(DEFAULT_MAX_PREP_TIME)
    }
}

impl FilterState {
    /// Neutral filter with a custom prep-time ceiling.
    pub fn with_max_prep_time(max_prep_time: u32) -> Self {
        FilterState {
            search_term: String::new(),
            category: Choice::All,
            difficulty: Choice::All,
            max_prep_time,
        }
    }

    /// Resets every field in one assignment.
    pub fn clear(&mut self, default_max_prep_time: u32) {
        *self = Self::with_max_prep_time(default_max_prep_time);
    }

    /// True when this state lets every recipe within the default ceiling through.
    pub fn is_neutral(&self, default_max_prep_time: u32) -> bool {
        *self == Self::with_max_prep_time(default_max_prep_time)
    }

    /// The normalized needle used for search matching.
    fn needle(&self) -> String {
        self.search_term.trim().to_lowercase()
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns the recipes passing every predicate, in catalog order.
///
/// ## Example
/// ```rust
/// use recipebox_core::filter::{filter_recipes, FilterState};
///
/// let everything = filter_recipes(&[], &FilterState::default());
/// assert!(everything.is_empty());
/// ```
pub fn filter_recipes<'a>(recipes: &'a [Recipe], state: &FilterState) -> Vec<&'a Recipe> {
    let needle = state.needle();
    recipes
        .iter()
        .filter(|recipe| passes(recipe, state, &needle))
        .collect()
}

/// Checks a single recipe against `state`.
pub fn matches(recipe: &Recipe, state: &FilterState) -> bool {
    passes(recipe, state, &state.needle())
}

fn passes(recipe: &Recipe, state: &FilterState, needle: &str) -> bool {
    matches_search(recipe, needle)
        && state.category.admits(&recipe.category)
        && state.difficulty.admits(&recipe.difficulty)
        && recipe.prep_time <= state.max_prep_time
}

/// Case-insensitive substring search over title, description,
/// ingredients and tags. `needle` must already be trimmed and lowercased.
pub fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let hit = |text: &str| text.to_lowercase().contains(needle);

    hit(&recipe.title)
        || hit(&recipe.description)
        || recipe.ingredients.iter().any(|i| hit(i))
        || recipe.tags.iter().any(|t| hit(t))
}

// =============================================================================
// Dropdown Options
// =============================================================================

/// `["All", ...]` followed by each category once, in first-seen order.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    distinct_labels(recipes.iter().map(|r| r.category.as_str()))
}

/// `["All", ...]` followed by each difficulty present once, in first-seen order.
pub fn difficulties(recipes: &[Recipe]) -> Vec<String> {
    distinct_labels(recipes.iter().map(|r| r.difficulty.as_str()))
}

fn distinct_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL_LABEL.to_string()];
    for label in labels {
        if !out[1..].iter().any(|seen| seen == label) {
            out.push(label.to_string());
        }
    }
    out
}

// =============================================================================
// Active Filters
// =============================================================================

/// One non-neutral constraint, for rendering "active filter" badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ActiveFilter {
    Search(String),
    Category(String),
    Difficulty(Difficulty),
    MaxPrepTime(u32),
}

impl ActiveFilter {
    /// Short badge text.
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Search(term) => format!("Search: {}", term),
            ActiveFilter::Category(category) => format!("Category: {}", category),
            ActiveFilter::Difficulty(difficulty) => format!("Difficulty: {}", difficulty),
            ActiveFilter::MaxPrepTime(minutes) => format!("Max Prep: {}min", minutes),
        }
    }
}

/// Lists the constraints that narrow the catalog.
///
/// Prep time only counts when it is below `default_max_prep_time`.
pub fn active_filters(state: &FilterState, default_max_prep_time: u32) -> Vec<ActiveFilter> {
    let mut active = Vec::new();

    let term = state.search_term.trim();
    if !term.is_empty() {
        active.push(ActiveFilter::Search(term.to_string()));
    }
    if let Choice::Only(category) = &state.category {
        active.push(ActiveFilter::Category(category.clone()));
    }
    if let Choice::Only(difficulty) = state.difficulty {
        active.push(ActiveFilter::Difficulty(difficulty));
    }
    if state.max_prep_time < default_max_prep_time {
        active.push(ActiveFilter::MaxPrepTime(state.max_prep_time));
    }

    active
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{RecipeDraft, RecipeId};
    use chrono::Utc;

    fn recipe(
        title: &str,
        category: &str,
        difficulty: Difficulty,
        prep_time: i64,
        ingredients: &[&str],
        tags: &[&str],
    ) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            description: format!("A plate of {}.", title.to_lowercase()),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: String::new(),
            prep_time,
            cook_time: 10,
            difficulty,
            category: category.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fixture() -> Catalog {
        let mut catalog = Catalog::new();
        let drafts = [
            recipe("Classic Spaghetti Carbonara", "Italian", Difficulty::Medium, 15, &["Spaghetti", "Eggs", "Pancetta"], &["pasta", "italian", "dinner", "classic"]),
            recipe("Vegetable Stir Fry", "Asian", Difficulty::Easy, 10, &["Mixed vegetables", "Soy sauce"], &["vegetarian", "quick"]),
            recipe("Chocolate Chip Cookies", "Dessert", Difficulty::Easy, 15, &["Flour", "Butter", "Chocolate chips"], &["baking", "sweet"]),
            recipe("Chicken Alfredo Pasta", "Italian", Difficulty::Medium, 20, &["Fettuccine", "Chicken breast", "Cream"], &["pasta", "chicken", "creamy", "dinner", "italian"]),
            recipe("Beef Wellington", "British", Difficulty::Hard, 90, &["Beef fillet", "Puff pastry"], &["dinner", "festive"]),
        ];
        for d in &drafts {
            catalog.add(d, Utc::now()).unwrap();
        }
        catalog
    }

    fn ids(recipes: &[&Recipe]) -> Vec<RecipeId> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_filter_is_neutral() {
        let catalog = fixture();
        let state = FilterState::default();
        assert!(state.is_neutral(DEFAULT_MAX_PREP_TIME));

        let all = filter_recipes(catalog.recipes(), &state);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let catalog = fixture();
        let state = FilterState {
            search_term: "chicken".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &state)), vec![4]);

        let state = FilterState {
            search_term: "  SPAGHETTI ".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &state)), vec![1]);
    }

    #[test]
    fn test_search_matches_ingredients_and_tags() {
        let catalog = fixture();
        let by_ingredient = FilterState {
            search_term: "soy".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &by_ingredient)), vec![2]);

        let by_tag = FilterState {
            search_term: "festive".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &by_tag)), vec![5]);

        let by_tag_fragment = FilterState {
            search_term: "swe".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &by_tag_fragment)), vec![3]);
    }

    #[test]
    fn test_category_keeps_catalog_order() {
        let catalog = fixture();
        let state = FilterState {
            category: Choice::Only("Italian".to_string()),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &state)), vec![1, 4]);
    }

    #[test]
    fn test_difficulty_and_prep_time() {
        let catalog = fixture();
        let state = FilterState {
            difficulty: Choice::Only(Difficulty::Easy),
            max_prep_time: 10,
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_recipes(catalog.recipes(), &state)), vec![2]);

        let state = FilterState {
            max_prep_time: 0,
            ..FilterState::default()
        };
        assert!(filter_recipes(catalog.recipes(), &state).is_empty());
    }

    #[test]
    fn test_every_result_satisfies_every_predicate() {
        let catalog = fixture();
        let terms = ["", "pasta", "dinner", "e", "nothing-matches"];
        let category_choices = [Choice::All, Choice::Only("Italian".to_string()), Choice::Only("Asian".to_string())];
        let difficulty_choices = [Choice::All, Choice::Only(Difficulty::Easy), Choice::Only(Difficulty::Medium)];
        let ceilings = [0, 10, 15, 120];

        for term in terms {
            for category in &category_choices {
                for difficulty in &difficulty_choices {
                    for max_prep_time in ceilings {
                        let state = FilterState {
                            search_term: term.to_string(),
                            category: category.clone(),
                            difficulty: difficulty.clone(),
                            max_prep_time,
                        };
                        let needle = term.to_lowercase();
                        let result = filter_recipes(catalog.recipes(), &state);
                        for r in &result {
                            assert!(matches_search(r, &needle));
                            assert!(category.admits(&r.category));
                            assert!(difficulty.admits(&r.difficulty));
                            assert!(r.prep_time <= max_prep_time);
                        }
                        let expected: Vec<RecipeId> = catalog
                            .recipes()
                            .iter()
                            .filter(|r| matches(r, &state))
                            .map(|r| r.id)
                            .collect();
                        assert_eq!(ids(&result), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_dropdown_options_are_distinct_in_first_seen_order() {
        let catalog = fixture();
        assert_eq!(
            categories(catalog.recipes()),
            vec!["All", "Italian", "Asian", "Dessert", "British"]
        );
        assert_eq!(
            difficulties(catalog.recipes()),
            vec!["All", "Medium", "Easy", "Hard"]
        );
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut state = FilterState {
            search_term: "cookies".to_string(),
            category: Choice::Only("Dessert".to_string()),
            difficulty: Choice::Only(Difficulty::Hard),
            max_prep_time: 30,
        };
        state.clear(DEFAULT_MAX_PREP_TIME);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_choice_round_trips_through_ui_strings() {
        let all: Choice<Difficulty> = "All".parse().unwrap();
        assert!(all.is_all());
        for label in ["all", " ALL "] {
            assert!(label.parse::<Choice<Difficulty>>().unwrap().is_all());
            assert!(label.parse::<Choice<String>>().unwrap().is_all());
        }
        let easy: Choice<Difficulty> = "Easy".parse().unwrap();
        assert_eq!(easy, Choice::Only(Difficulty::Easy));
        assert!("Impossible".parse::<Choice<Difficulty>>().is_err());

        let state = FilterState {
            category: Choice::Only("Thai".to_string()),
            ..FilterState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["category"], "Thai");
        assert_eq!(json["difficulty"], "All");
        assert_eq!(json["maxPrepTime"], 120);

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_active_filters() {
        assert!(active_filters(&FilterState::default(), DEFAULT_MAX_PREP_TIME).is_empty());

        let state = FilterState {
            search_term: " pasta ".to_string(),
            category: Choice::Only("Italian".to_string()),
            difficulty: Choice::All,
            max_prep_time: 30,
        };
        let labels: Vec<String> = active_filters(&state, DEFAULT_MAX_PREP_TIME)
            .iter()
            .map(ActiveFilter::label)
            .collect();
        assert_eq!(
            labels,
            vec!["Search: pasta", "Category: Italian", "Max Prep: 30min"]
        );
    }
}
