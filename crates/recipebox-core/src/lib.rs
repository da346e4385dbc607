//! # recipebox-core: Pure Data Layer for Recipe Box
//!
//! This crate owns everything the recipe catalog UI reads and writes:
//! the recipe collection, the favorites set, the filter state and the
//! recommendation scorer. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Recipe Box Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (cards, forms, lists)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ recipebox-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │                       RecipeStore                               │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │─►│ favorites │─►│  filter   │─►│ recommend │  │   │
//! │  │   │  Catalog  │  │FavoriteSet│  │FilterState│  │ top tags  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • ONE WRITER • PURE READS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Recipe, RecipeDraft, RecipePatch, Difficulty)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules applied at the mutation boundary
//! - [`catalog`] - Ordered recipe collection with id assignment
//! - [`favorites`] - Favorite recipe ids
//! - [`filter`] - Search/category/difficulty/prep-time predicates
//! - [`recommend`] - Tag-frequency recommendations
//! - [`store`] - The snapshot-swapping store that ties them together
//!
//! ## Example Usage
//!
//! ```rust
//! use recipebox_core::{Difficulty, RecipeDraft, RecipeStore, StoreConfig};
//!
//! let mut store = RecipeStore::new(StoreConfig::default());
//! let carbonara = store
//!     .add_recipe(RecipeDraft {
//!         title: "Classic Spaghetti Carbonara".to_string(),
//!         description: "Eggs, cheese, pancetta and pepper.".to_string(),
//!         ingredients: vec!["Spaghetti".to_string(), "Eggs".to_string()],
//!         instructions: String::new(),
//!         prep_time: 15,
//!         cook_time: 20,
//!         difficulty: Difficulty::Medium,
//!         category: "Italian".to_string(),
//!         tags: vec!["pasta".to_string()],
//!     })
//!     .unwrap();
//!
//! store.toggle_favorite(carbonara.id);
//! assert!(store.is_favorite(carbonara.id));
//! assert_eq!(store.favorite_recipes().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod recommend;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use config::StoreConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::FavoriteSet;
pub use filter::{ActiveFilter, Choice, FilterState};
pub use recommend::{Recommendation, RecommendationKind, Recommendations, TagCount};
pub use store::{RecipeStore, Snapshot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label used by the UI for "no constraint" on category and difficulty.
pub const ALL_LABEL: &str = "All";

/// Upper bound of the prep-time slider; the neutral value of the filter.
pub const DEFAULT_MAX_PREP_TIME: u32 = 120;

/// Number of suggestions produced by the recommendation engine.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Number of favorite tags considered when scoring candidates.
pub const DEFAULT_TOP_TAG_LIMIT: usize = 5;
