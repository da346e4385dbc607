//! # Recipe Box CLI Library
//!
//! Everything the `recipebox` binary does, kept in a library so it can be
//! tested without spawning a process.
//!
//! ## Module Organization
//! ```text
//! recipebox_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── args.rs         ◄─── Command-line parsing
//! ├── commands.rs     ◄─── One function per operation
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── API error type for commands
//! └── seed.rs         ◄─── Sample catalog
//! ```
//!
//! ## Output
//! stdout carries exactly one JSON document: either a [`Report`] or an
//! [`ApiError`]. Logs go to stderr.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod seed;

use std::process::ExitCode;

use recipebox_core::RecipeStore;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use args::{Action, Invocation, View};
use commands::{
    DeleteResponse, FavoriteResponse, FavoritesResponse, FilterOptionsResponse, FilterUpdate,
    RecipeListResponse, RecipeResponse, RecommendationsResponse,
};
use config::AppConfig;
use error::ApiError;

/// Default log filter when neither `RUST_LOG` nor `RECIPEBOX_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,recipebox=debug";

/// The result of one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    List(RecipeListResponse),
    Recipe(RecipeResponse),
    Deleted(DeleteResponse),
    Favorite(FavoriteResponse),
    Favorites(FavoritesResponse),
    FilterOptions(FilterOptionsResponse),
    Recommendations(RecommendationsResponse),
}

/// What the binary prints on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// One entry per action, in order.
    pub results: Vec<Outcome>,

    /// The selected view after every action ran.
    pub view: Outcome,
}

/// Runs the command line application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else RECIPEBOX_LOG, else info,recipebox=debug           │
/// │     • Written to stderr                                                 │
/// │                                                                         │
/// │  2. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • Bad flags print INVALID_ARGUMENT and exit 2                       │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • RECIPEBOX_* environment variables over defaults                   │
/// │                                                                         │
/// │  4. Build the Store ──────────────────────────────────────────────────► │
/// │     • Seeded with the sample catalog unless RECIPEBOX_SEED=false        │
/// │                                                                         │
/// │  5. Apply Actions & Print ────────────────────────────────────────────► │
/// │     • The first failing action stops the run (exit 1)                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let invocation = match args::parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => return fail(err),
    };

    if invocation.help {
        print!("{}", args::USAGE);
        return ExitCode::SUCCESS;
    }

    let config = AppConfig::from_env();
    info!(
        seed = config.seed_sample_catalog,
        recommendation_limit = config.store.recommendation_limit,
        "Starting Recipe Box"
    );

    let printed = execute(&config, &invocation).and_then(|report| {
        serde_json::to_string_pretty(&report).map_err(|e| ApiError::internal(e.to_string()))
    });

    match printed {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

/// Builds the store and applies `invocation` to it.
pub fn execute(config: &AppConfig, invocation: &Invocation) -> Result<Report, ApiError> {
    let mut store = build_store(config)?;

    let mut results = Vec::with_capacity(invocation.actions.len());
    for action in &invocation.actions {
        results.push(apply(&mut store, action)?);
    }

    let view = render(&store, invocation.view);
    debug!(version = store.version(), actions = results.len(), "run complete");

    Ok(Report { results, view })
}

/// Creates the process-wide store.
pub fn build_store(config: &AppConfig) -> Result<RecipeStore, ApiError> {
    if !config.seed_sample_catalog {
        return Ok(RecipeStore::new(config.store.clone()));
    }

    let store = RecipeStore::with_recipes(config.store.clone(), seed::sample_recipes())?;
    info!(recipes = store.recipes().len(), "Sample catalog loaded");
    Ok(store)
}

/// Applies one action through the command layer.
fn apply(store: &mut RecipeStore, action: &Action) -> Result<Outcome, ApiError> {
    let outcome = match action {
        Action::Search(term) => Outcome::List(commands::set_filters(
            store,
            FilterUpdate {
                search_term: Some(term.clone()),
                ..FilterUpdate::default()
            },
        )?),
        Action::Category(category) => Outcome::List(commands::set_filters(
            store,
            FilterUpdate {
                category: Some(category.clone()),
                ..FilterUpdate::default()
            },
        )?),
        Action::Difficulty(difficulty) => Outcome::List(commands::set_filters(
            store,
            FilterUpdate {
                difficulty: Some(difficulty.clone()),
                ..FilterUpdate::default()
            },
        )?),
        Action::MaxPrep(minutes) => Outcome::List(commands::set_filters(
            store,
            FilterUpdate {
                max_prep_time: Some(*minutes),
                ..FilterUpdate::default()
            },
        )?),
        Action::ClearFilters => Outcome::List(commands::clear_filters(store)),
        Action::Favorite(id) => Outcome::Favorite(commands::set_favorite(store, *id, true)?),
        Action::Unfavorite(id) => Outcome::Favorite(commands::set_favorite(store, *id, false)?),
        Action::Toggle(id) => Outcome::Favorite(commands::toggle_favorite(store, *id)?),
        Action::Add(json) => Outcome::Recipe(commands::add_recipe(store, json)?),
        Action::Update(id, json) => Outcome::Recipe(commands::update_recipe(store, *id, json)?),
        Action::Delete(id) => Outcome::Deleted(commands::delete_recipe(store, *id)?),
        Action::Show(id) => Outcome::Recipe(commands::get_recipe(store, *id)?),
    };
    Ok(outcome)
}

fn render(store: &RecipeStore, view: View) -> Outcome {
    match view {
        View::Recipes => Outcome::List(commands::get_recipes(store)),
        View::Favorites => Outcome::Favorites(commands::get_favorites(store)),
        View::Recommendations => Outcome::Recommendations(commands::get_recommendations(store)),
        View::Filters => Outcome::FilterOptions(commands::get_filter_options(store)),
    }
}

/// Prints `err` as JSON and returns its exit code.
fn fail(err: ApiError) -> ExitCode {
    warn!(code = ?err.code, message = %err.message, "command failed");
    match serde_json::to_string_pretty(&err) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{}", err),
    }
    ExitCode::from(err.exit_code())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RECIPEBOX_LOG=warn` - Used when `RUST_LOG` is unset
/// - Default: `info,recipebox=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RECIPEBOX_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
