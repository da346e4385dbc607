//! # Recommendation Engine
//!
//! Derives a short, deterministic suggestion list from the favorites and
//! the catalog. Read-only over both.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      recommend()                                        │
//! │                                                                         │
//! │  favorites empty? ──yes──► first `limit` recipes (Popular)             │
//! │        │                                                                │
//! │        no                                                               │
//! │        ▼                                                                │
//! │  count tags over favorite recipes (catalog order)                      │
//! │        ▼                                                                │
//! │  top tags: by count desc, ties by first seen, keep `top_tag_limit`     │
//! │        ▼                                                                │
//! │  candidates: non-favorites sharing ≥1 top tag                          │
//! │        ▼                                                                │
//! │  rank by match score desc, ties by catalog order, keep `limit`         │
//! │        ▼                                                                │
//! │  short? backfill with non-favorites in catalog order (score 0)         │
//! │        ▼                                                                │
//! │  Personalized                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The result never contains a favorite and never repeats an id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::StoreConfig;
use crate::favorites::FavoriteSet;
use crate::types::{Recipe, RecipeId};

// =============================================================================
// Result Types
// =============================================================================

/// Which branch produced the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// No favorites yet: catalog head as a placeholder ranking.
    Popular,
    /// Scored against the favorites' tags.
    Personalized,
}

/// A tag and how many favorite recipes carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TagCount {
    pub tag: String,
    #[ts(as = "u32")]
    pub count: usize,
}

/// One suggested recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recipe: Recipe,

    /// Number of top tags the recipe shares. 0 for cold-start and backfill.
    #[ts(as = "u32")]
    pub match_score: usize,
}

/// The ranked suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub kind: RecommendationKind,

    /// Tags used for scoring (empty for `Popular`).
    pub top_tags: Vec<TagCount>,

    pub items: Vec<Recommendation>,
}

impl Recommendations {
    /// Suggested ids in rank order.
    pub fn ids(&self) -> Vec<RecipeId> {
        self.items.iter().map(|item| item.recipe.id).collect()
    }

    /// Suggested recipes in rank order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.items.iter().map(|item| &item.recipe)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Counts tags across `favorite_records` and keeps the `limit` most frequent.
///
/// The sort is stable over first-seen order, so equal counts keep the
/// order in which the tags were first met.
pub fn top_tags(favorite_records: &[&Recipe], limit: usize) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();

    for recipe in favorite_records {
        for tag in &recipe.tags {
            match counts.iter_mut().find(|c| c.tag == *tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Number of `top_tags` entries that `recipe` carries.
pub fn match_score(recipe: &Recipe, top_tags: &[TagCount]) -> usize {
    top_tags.iter().filter(|t| recipe.has_tag(&t.tag)).count()
}

// =============================================================================
// Engine
// =============================================================================

/// Builds the suggestion list for the current catalog and favorites.
///
/// ## Example
/// ```rust
/// use recipebox_core::recommend::{recommend, RecommendationKind};
/// use recipebox_core::{FavoriteSet, StoreConfig};
///
/// let empty = recommend(&[], &FavoriteSet::new(), &StoreConfig::default());
/// assert_eq!(empty.kind, RecommendationKind::Popular);
/// assert!(empty.is_empty());
/// ```
pub fn recommend(
    recipes: &[Recipe],
    favorites: &FavoriteSet,
    config: &StoreConfig,
) -> Recommendations {
    let limit = config.recommendation_limit;

    if favorites.is_empty() {
        return Recommendations {
            kind: RecommendationKind::Popular,
            top_tags: Vec::new(),
            items: recipes.iter().take(limit).map(unscored).collect(),
        };
    }

    let favorite_records: Vec<&Recipe> =
        recipes.iter().filter(|r| favorites.contains(r.id)).collect();
    let top = top_tags(&favorite_records, config.top_tag_limit);

    let mut candidates: Vec<Recommendation> = recipes
        .iter()
        .filter(|r| !favorites.contains(r.id))
        .filter_map(|r| {
            let score = match_score(r, &top);
            (score > 0).then(|| Recommendation {
                recipe: r.clone(),
                match_score: score,
            })
        })
        .collect();

    // Stable: equal scores stay in catalog order.
    candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    candidates.truncate(limit);

    let mut items = candidates;
    if items.len() < limit {
        for recipe in recipes.iter().filter(|r| !favorites.contains(r.id)) {
            if items.len() >= limit {
                break;
            }
            if !items.iter().any(|item| item.recipe.id == recipe.id) {
                items.push(unscored(recipe));
            }
        }
    }

    Recommendations {
        kind: RecommendationKind::Personalized,
        top_tags: top,
        items,
    }
}

fn unscored(recipe: &Recipe) -> Recommendation {
    Recommendation {
        recipe: recipe.clone(),
        match_score: 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
