//! # Sample Catalog
//!
//! The recipes a fresh Recipe Box starts with. Loaded in order, so they
//! receive ids 1 through 4.
//!
//! Set `RECIPEBOX_SEED=false` to start with an empty catalog instead.

use recipebox_core::{Difficulty, RecipeDraft};

/// Builds one draft from string slices.
#[allow(clippy::too_many_arguments)]
fn draft(
    title: &str,
    description: &str,
    ingredients: &[&str],
    instructions: &str,
    prep_time: i64,
    cook_time: i64,
    difficulty: Difficulty,
    category: &str,
    tags: &[&str],
) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.to_string(),
        prep_time,
        cook_time,
        difficulty,
        category: category.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

/// The sample catalog, in insertion order.
pub fn sample_recipes() -> Vec<RecipeDraft> {
    vec![
        draft(
            "Classic Spaghetti Carbonara",
            "A traditional Italian pasta dish with eggs, cheese, pancetta, and black pepper.",
            &["Spaghetti", "Eggs", "Parmesan cheese", "Pancetta", "Black pepper", "Salt"],
            "1. Cook spaghetti. 2. Fry pancetta. 3. Mix eggs and cheese. 4. Combine all ingredients.",
            15,
            20,
            Difficulty::Medium,
            "Italian",
            &["pasta", "italian", "dinner", "classic"],
        ),
        draft(
            "Vegetable Stir Fry",
            "Quick and healthy stir-fried vegetables with soy sauce and ginger.",
            &["Mixed vegetables", "Soy sauce", "Ginger", "Garlic", "Sesame oil", "Rice"],
            "1. Chop vegetables. 2. Heat oil. 3. Stir-fry vegetables. 4. Add sauce. 5. Serve with rice.",
            10,
            15,
            Difficulty::Easy,
            "Asian",
            &["vegetarian", "quick", "healthy", "asian"],
        ),
        draft(
            "Chocolate Chip Cookies",
            "Classic homemade chocolate chip cookies that are soft and chewy.",
            &[
                "Flour",
                "Butter",
                "Sugar",
                "Chocolate chips",
                "Eggs",
                "Vanilla extract",
                "Baking soda",
            ],
            "1. Cream butter and sugar. 2. Add eggs and vanilla. 3. Mix in dry ingredients. \
             4. Add chocolate chips. 5. Bake at 350°F for 10-12 minutes.",
            15,
            12,
            Difficulty::Easy,
            "Dessert",
            &["baking", "dessert", "sweet", "classic"],
        ),
        draft(
            "Chicken Alfredo Pasta",
            "Fettuccine in a rich parmesan cream sauce topped with seared chicken breast.",
            &[
                "Fettuccine",
                "Chicken breast",
                "Heavy cream",
                "Butter",
                "Parmesan cheese",
                "Garlic",
            ],
            "1. Sear chicken. 2. Cook fettuccine. 3. Simmer cream, butter and garlic. \
             4. Stir in parmesan. 5. Toss pasta with sauce and sliced chicken.",
            15,
            25,
            Difficulty::Medium,
            "Italian",
            &["pasta", "chicken", "creamy", "dinner", "italian"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::{RecipeStore, StoreConfig};

    #[test]
    fn test_sample_catalog_is_valid() {
        let store = RecipeStore::with_recipes(StoreConfig::default(), sample_recipes()).unwrap();
        let ids: Vec<_> = store.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_only_the_alfredo_mentions_chicken() {
        let drafts = sample_recipes();
        for (index, draft) in drafts.iter().enumerate() {
            let text = format!(
                "{} {} {} {}",
                draft.title,
                draft.description,
                draft.ingredients.join(" "),
                draft.tags.join(" ")
            )
            .to_lowercase();
            assert_eq!(text.contains("chicken"), index == 3, "recipe #{}", index + 1);
        }
    }

    #[test]
    fn test_two_italian_recipes() {
        let italian: Vec<_> = sample_recipes()
            .into_iter()
            .filter(|d| d.category == "Italian")
            .map(|d| d.title)
            .collect();
        assert_eq!(italian, vec!["Classic Spaghetti Carbonara", "Chicken Alfredo Pasta"]);
    }
}
