//! # Recipe Store
//!
//! The single writer path over catalog, favorites and filters.
//!
//! ## Snapshot Swapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  UI Action            Store Method              Snapshot Change         │
//! │  ─────────            ────────────              ───────────────         │
//! │                                                                         │
//! │  Save form ─────────► add_recipe() ───────────► catalog.push(recipe)   │
//! │  Edit form ─────────► update_recipe() ────────► catalog[i] = merged    │
//! │  Delete ────────────► delete_recipe() ────────► catalog − id,          │
//! │                                                 favorites − id         │
//! │  Heart icon ────────► toggle_favorite() ──────► favorites ± id         │
//! │  Search / dropdowns ► set_*() / clear_filters() ► filters = new        │
//! │                                                                         │
//! │  List / grid ───────► filtered_recipes() ─────► (read only)            │
//! │  Suggestions ───────► recommendations() ──────► (read only)            │
//! │                                                                         │
//! │  Every write clones the current snapshot, edits the clone and swaps    │
//! │  the Arc on success. A failed write drops the clone: the store is      │
//! │  left exactly as it was.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//! There is one logical writer (the UI thread) and no async path, so the
//! store holds no lock. Readers that need a stable view across several
//! calls take `snapshot()`; the `Arc` they get never changes underneath
//! them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::favorites::{favorite_recipes, FavoriteSet};
use crate::filter::{self, ActiveFilter, Choice, FilterState};
use crate::recommend::{recommend, Recommendations};
use crate::types::{Difficulty, Recipe, RecipeDraft, RecipeId, RecipePatch};

/// Everything the store owns, at one version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub catalog: Catalog,
    pub favorites: FavoriteSet,
    pub filters: FilterState,

    /// Incremented on every committed mutation.
    pub version: u64,

    /// When the last mutation was committed.
    pub updated_at: DateTime<Utc>,
}

impl Snapshot {
    fn empty(config: &StoreConfig) -> Self {
        Snapshot {
            catalog: Catalog::new(),
            favorites: FavoriteSet::new(),
            filters: FilterState::with_max_prep_time(config.default_max_prep_time),
            version: 0,
            updated_at: Utc::now(),
        }
    }
}

/// The recipe data layer.
///
/// Construct one per process and pass it by reference to whatever needs it.
#[derive(Debug)]
pub struct RecipeStore {
    config: StoreConfig,
    snapshot: Arc<Snapshot>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        let snapshot = Arc::new(Snapshot::empty(&config));
        RecipeStore { config, snapshot }
    }

    /// Creates a store pre-loaded with `drafts`, in order.
    ///
    /// All-or-nothing: the first invalid draft fails construction.
    pub fn with_recipes<I>(config: StoreConfig, drafts: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = RecipeDraft>,
    {
        let mut store = Self::new(config);
        store.commit(|next| {
            let now = Utc::now();
            for draft in drafts {
                next.catalog.add(&draft, now)?;
            }
            Ok(())
        })?;
        debug!(recipes = store.snapshot.catalog.len(), "store seeded");
        Ok(store)
    }

    // =========================================================================
    // Snapshot Access
    // =========================================================================

    /// Returns the current snapshot. Later writes don't affect it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Executes a function with read access to the current snapshot.
    pub fn with_snapshot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Snapshot) -> R,
    {
        f(&self.snapshot)
    }

    pub fn version(&self) -> u64 {
        self.snapshot.version
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Applies `f` to a copy of the snapshot and swaps it in on success.
    fn commit<F, R>(&mut self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Snapshot) -> CoreResult<R>,
    {
        let mut next = Snapshot::clone(&self.snapshot);
        let out = f(&mut next)?;
        next.version += 1;
        next.updated_at = Utc::now();
        self.snapshot = Arc::new(next);
        Ok(out)
    }

    /// `commit` for mutations that cannot fail.
    fn commit_infallible<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Snapshot) -> R,
    {
        let mut next = Snapshot::clone(&self.snapshot);
        let out = f(&mut next);
        next.version += 1;
        next.updated_at = Utc::now();
        self.snapshot = Arc::new(next);
        out
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Validates and appends a recipe; the catalog assigns its id.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> CoreResult<Recipe> {
        let recipe = self.commit(|next| next.catalog.add(&draft, Utc::now()))?;
        debug!(recipe_id = recipe.id, version = self.version(), "recipe added");
        Ok(recipe)
    }

    /// Merges `patch` into the recipe with `id`.
    ///
    /// ## Returns
    /// - `Ok(Some(recipe))` after a successful update
    /// - `Ok(None)` if `id` is unknown (nothing changes)
    /// - `Err(CoreError::Validation)` if the merged record is invalid
    pub fn update_recipe(&mut self, id: RecipeId, patch: RecipePatch) -> CoreResult<Option<Recipe>> {
        if !self.snapshot.catalog.contains(id) {
            debug!(recipe_id = id, "update of unknown recipe ignored");
            return Ok(None);
        }

        let updated = self.commit(|next| next.catalog.update(id, patch, Utc::now()))?;
        debug!(recipe_id = id, version = self.version(), "recipe updated");
        Ok(updated)
    }

    /// Removes the recipe with `id` and drops it from the favorites.
    pub fn delete_recipe(&mut self, id: RecipeId) -> Option<Recipe> {
        if !self.snapshot.catalog.contains(id) {
            debug!(recipe_id = id, "delete of unknown recipe ignored");
            return None;
        }

        let removed = self.commit_infallible(|next| {
            next.favorites.remove(id);
            next.catalog.remove(id)
        });
        debug!(recipe_id = id, version = self.version(), "recipe deleted");
        removed
    }

    /// Looks up a recipe by id.
    pub fn recipe(&self, id: RecipeId) -> Option<Recipe> {
        self.snapshot.catalog.get(id).cloned()
    }

    /// Looks up a recipe that must exist.
    pub fn require_recipe(&self, id: RecipeId) -> CoreResult<Recipe> {
        self.recipe(id).ok_or(CoreError::RecipeNotFound(id))
    }

    /// The whole catalog in order.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.snapshot.catalog.recipes().to_vec()
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flips favorite membership of `id`.
    ///
    /// ## Returns
    /// Whether `id` is a favorite afterwards. Unknown ids stay unfavorited.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        if !self.snapshot.favorites.contains(id) && !self.snapshot.catalog.contains(id) {
            debug!(recipe_id = id, "favorite of unknown recipe ignored");
            return false;
        }

        let now_favorite = self.commit_infallible(|next| next.favorites.toggle(id));
        debug!(recipe_id = id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    /// Marks `id` as a favorite. Returns `true` if membership changed.
    pub fn add_favorite(&mut self, id: RecipeId) -> bool {
        if self.snapshot.favorites.contains(id) {
            return false;
        }
        if !self.snapshot.catalog.contains(id) {
            debug!(recipe_id = id, "favorite of unknown recipe ignored");
            return false;
        }

        self.commit_infallible(|next| next.favorites.insert(id));
        debug!(recipe_id = id, "favorite added");
        true
    }

    /// Unmarks `id`. Returns `true` if membership changed.
    pub fn remove_favorite(&mut self, id: RecipeId) -> bool {
        if !self.snapshot.favorites.contains(id) {
            return false;
        }

        self.commit_infallible(|next| next.favorites.remove(id));
        debug!(recipe_id = id, "favorite removed");
        true
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.snapshot.favorites.contains(id)
    }

    /// Favorited recipes in catalog order.
    pub fn favorite_recipes(&self) -> Vec<Recipe> {
        favorite_recipes(&self.snapshot.catalog, &self.snapshot.favorites)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn favorites_count(&self) -> usize {
        self.snapshot.favorites.len()
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.commit_infallible(|next| next.filters.search_term = term);
    }

    pub fn set_selected_category(&mut self, category: Choice<String>) {
        self.commit_infallible(|next| next.filters.category = category);
    }

    pub fn set_selected_difficulty(&mut self, difficulty: Choice<Difficulty>) {
        self.commit_infallible(|next| next.filters.difficulty = difficulty);
    }

    pub fn set_max_prep_time(&mut self, minutes: u32) {
        self.commit_infallible(|next| next.filters.max_prep_time = minutes);
    }

    /// Resets search, category, difficulty and prep time in one commit.
    pub fn clear_filters(&mut self) {
        let default_max = self.config.default_max_prep_time;
        self.commit_infallible(|next| next.filters.clear(default_max));
        debug!(version = self.version(), "filters cleared");
    }

    pub fn filters(&self) -> FilterState {
        self.snapshot.filters.clone()
    }

    /// Non-neutral constraints of the current filter.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        filter::active_filters(&self.snapshot.filters, self.config.default_max_prep_time)
    }

    /// Recipes passing the current filter, in catalog order.
    pub fn filtered_recipes(&self) -> Vec<Recipe> {
        filter::filter_recipes(self.snapshot.catalog.recipes(), &self.snapshot.filters)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> Vec<String> {
        filter::categories(self.snapshot.catalog.recipes())
    }

    pub fn difficulties(&self) -> Vec<String> {
        filter::difficulties(self.snapshot.catalog.recipes())
    }

    // =========================================================================
    // Recommendations
    // =========================================================================

    /// Ranked suggestions; never includes a favorite.
    pub fn recommendations(&self) -> Recommendations {
        recommend(
            self.snapshot.catalog.recipes(),
            &self.snapshot.favorites,
            &self.config,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
