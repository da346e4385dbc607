//! # Favorites
//!
//! The set of recipe ids the user has marked. Membership is boolean,
//! not ranked, and the set is always a subset of the live catalog ids
//! (the store drops ids on delete and ignores ids it doesn't know).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{Recipe, RecipeId};

/// Favorite recipe ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<RecipeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    ///
    /// ## Returns
    /// Whether `id` is a favorite after the call.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id)
        }
    }

    /// Adds `id`. Returns `false` if it was already present.
    pub fn insert(&mut self, id: RecipeId) -> bool {
        self.ids.insert(id)
    }

    /// Removes `id`. Returns `false` if it was absent.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Returns the favorited recipes in catalog order (not favoriting order).
pub fn favorite_recipes<'a>(catalog: &'a Catalog, favorites: &FavoriteSet) -> Vec<&'a Recipe> {
    catalog
        .recipes()
        .iter()
        .filter(|r| favorites.contains(r.id))
        .collect()
}
