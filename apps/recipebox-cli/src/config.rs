//! # Application Configuration
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RECIPEBOX_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::str::FromStr;

use recipebox_core::StoreConfig;
use serde::Serialize;
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Tunables handed to the store.
    pub store: StoreConfig,

    /// Load the sample catalog at startup.
    pub seed_sample_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store: StoreConfig::default(),
            seed_sample_catalog: true,
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RECIPEBOX_RECOMMENDATION_LIMIT`: suggestions per list (default 3)
    /// - `RECIPEBOX_TOP_TAG_LIMIT`: favorite tags used for scoring (default 5)
    /// - `RECIPEBOX_MAX_PREP_TIME`: prep-time ceiling of a cleared filter (default 120)
    /// - `RECIPEBOX_SEED`: `false`/`0`/`no`/`off` starts with an empty catalog
    ///
    /// `RECIPEBOX_LOG` is read by the logging setup, before this runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(limit) = parse_var(&lookup, "RECIPEBOX_RECOMMENDATION_LIMIT") {
            config.store.recommendation_limit = limit;
        }

        if let Some(limit) = parse_var(&lookup, "RECIPEBOX_TOP_TAG_LIMIT") {
            config.store.top_tag_limit = limit;
        }

        if let Some(minutes) = parse_var(&lookup, "RECIPEBOX_MAX_PREP_TIME") {
            config.store.default_max_prep_time = minutes;
        }

        if let Some(seed) = lookup("RECIPEBOX_SEED") {
            config.seed_sample_catalog = !matches!(
                seed.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        config
    }
}

/// Parses `key` if set; an unparseable value is logged and ignored.
fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.recommendation_limit, 3);
        assert!(config.seed_sample_catalog);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("RECIPEBOX_RECOMMENDATION_LIMIT", "4"),
            ("RECIPEBOX_TOP_TAG_LIMIT", " 2 "),
            ("RECIPEBOX_MAX_PREP_TIME", "60"),
            ("RECIPEBOX_SEED", "false"),
        ]));
        assert_eq!(config.store.recommendation_limit, 4);
        assert_eq!(config.store.top_tag_limit, 2);
        assert_eq!(config.store.default_max_prep_time, 60);
        assert!(!config.seed_sample_catalog);
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("RECIPEBOX_RECOMMENDATION_LIMIT", "three"),
            ("RECIPEBOX_MAX_PREP_TIME", "-5"),
            ("RECIPEBOX_SEED", "yes"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
