//! # Command-Line Arguments
//!
//! Turns `recipebox [OPTIONS]` into a list of actions plus the view to
//! print at the end. Options are applied in the order given.
//!
//! ## Usage
//! ```bash
//! recipebox --favorite 1 --view recommendations
//! recipebox --category Italian --max-prep 20
//! recipebox --add '{"title": "Pancakes", ...}' --view favorites
//! ```

use recipebox_core::RecipeId;

use crate::error::ApiError;

/// Help text printed for `--help`.
pub const USAGE: &str = "\
Usage: recipebox [OPTIONS]

Options are applied in order, then the selected view is printed as JSON.

Filters:
  --search <TEXT>        Search title, description, ingredients and tags
  --category <NAME>      Only this category (\"All\" for any)
  --difficulty <LEVEL>   Easy, Medium, Hard or All
  --max-prep <MINUTES>   Only recipes with at most this prep time
  --clear-filters        Reset every filter

Favorites:
  --favorite <ID>        Mark a recipe as favorite
  --unfavorite <ID>      Unmark a recipe
  --toggle <ID>          Flip a recipe's favorite flag

Recipes:
  --add <JSON>           Add a recipe from a JSON draft
  --update <ID> <JSON>   Merge a JSON patch into a recipe
  --delete <ID>          Delete a recipe
  --show <ID>            Print one recipe

Output:
  --view <VIEW>          recipes (default), favorites, recommendations, filters
  -h, --help             Show this help message

Environment:
  RECIPEBOX_RECOMMENDATION_LIMIT, RECIPEBOX_TOP_TAG_LIMIT,
  RECIPEBOX_MAX_PREP_TIME, RECIPEBOX_SEED, RECIPEBOX_LOG, RUST_LOG
";

/// One step to apply to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Category(String),
    Difficulty(String),
    MaxPrep(i64),
    ClearFilters,
    Favorite(RecipeId),
    Unfavorite(RecipeId),
    Toggle(RecipeId),
    Add(String),
    Update(RecipeId, String),
    Delete(RecipeId),
    Show(RecipeId),
}

/// What to print after the actions ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Recipes,
    Favorites,
    Recommendations,
    Filters,
}

impl std::str::FromStr for View {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recipes" => Ok(View::Recipes),
            "favorites" => Ok(View::Favorites),
            "recommendations" => Ok(View::Recommendations),
            "filters" => Ok(View::Filters),
            other => Err(ApiError::invalid_argument(format!(
                "Unknown view '{}' (expected recipes, favorites, recommendations or filters)",
                other
            ))),
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub actions: Vec<Action>,
    pub view: View,
    pub help: bool,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, ApiError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut invocation = Invocation::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        let action = match flag {
            "--search" => Action::Search(value(&args, i, flag)?.to_string()),
            "--category" => Action::Category(value(&args, i, flag)?.to_string()),
            "--difficulty" => Action::Difficulty(value(&args, i, flag)?.to_string()),
            "--max-prep" => Action::MaxPrep(number(&args, i, flag)?),
            "--favorite" => Action::Favorite(number(&args, i, flag)?),
            "--unfavorite" => Action::Unfavorite(number(&args, i, flag)?),
            "--toggle" => Action::Toggle(number(&args, i, flag)?),
            "--add" => Action::Add(value(&args, i, flag)?.to_string()),
            "--delete" => Action::Delete(number(&args, i, flag)?),
            "--show" => Action::Show(number(&args, i, flag)?),
            "--update" => {
                let id = number(&args, i, flag)?;
                let patch = value(&args, i + 1, flag)?.to_string();
                i += 3;
                invocation.actions.push(Action::Update(id, patch));
                continue;
            }
            "--clear-filters" => {
                i += 1;
                invocation.actions.push(Action::ClearFilters);
                continue;
            }
            "--view" => {
                invocation.view = value(&args, i, flag)?.parse()?;
                i += 2;
                continue;
            }
            "--help" | "-h" => {
                invocation.help = true;
                i += 1;
                continue;
            }
            other => {
                return Err(ApiError::invalid_argument(format!(
                    "Unknown option '{}' (see --help)",
                    other
                )))
            }
        };

        invocation.actions.push(action);
        i += 2;
    }

    Ok(invocation)
}

/// The argument right after position `i`.
fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ApiError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ApiError::invalid_argument(format!("{} needs a value", flag)))
}

/// The argument right after position `i`, parsed as a number.
fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, ApiError> {
    let raw = value(args, i, flag)?;
    raw.trim().parse().map_err(|_| {
        ApiError::invalid_argument(format!("{} expects a number, got '{}'", flag, raw))
    })
}
