//! # Store Configuration
//!
//! Tunables of the data layer. Pure values: loading them from the
//! environment is the app's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{DEFAULT_MAX_PREP_TIME, DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_TOP_TAG_LIMIT};

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// How many suggestions `recommendations()` returns (target list size).
    #[ts(as = "u32")]
    pub recommendation_limit: usize,

    /// How many of the favorites' most frequent tags are used for scoring.
    #[ts(as = "u32")]
    pub top_tag_limit: usize,

    /// Prep-time ceiling a cleared filter falls back to.
    pub default_max_prep_time: u32,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - 3 recommendations
    /// - top 5 tags
    /// - 120 minute prep-time ceiling (the slider's maximum)
    fn default() -> Self {
        StoreConfig {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            top_tag_limit: DEFAULT_TOP_TAG_LIMIT,
            default_max_prep_time: DEFAULT_MAX_PREP_TIME,
        }
    }
}
