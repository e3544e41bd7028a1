use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Recipe;
use crate::store::RecipeStore;

use super::helpers::load_collection;

/// How many recipes "recent" shows, newest first.
pub const FEATURED_COUNT: usize = 6;

#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    pub category: Option<String>,
    pub search_term: Option<String>,
    pub recent: bool,
}

pub fn run<S: RecipeStore>(store: &S, filter: &RecipeFilter) -> Result<CmdResult> {
    let mut recipes = load_collection(store);

    if let Some(category) = &filter.category {
        let wanted = category.to_lowercase();
        recipes.retain(|recipe| recipe.category.to_lowercase() == wanted);
    }

    if filter.recent {
        let skip = recipes.len().saturating_sub(FEATURED_COUNT);
        recipes = recipes.split_off(skip);
        recipes.reverse();
    }

    if let Some(term) = &filter.search_term {
        recipes = rank_matches(recipes, term);
    }

    Ok(CmdResult::default().with_listed_recipes(recipes))
}

/// Linear scan with coarse relevance: exact title match beats a title
/// substring, which beats a match anywhere in the body text.
fn rank_matches(recipes: Vec<Recipe>, term: &str) -> Vec<Recipe> {
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(Recipe, u8)> = recipes
        .into_iter()
        .filter_map(|recipe| {
            let title_lower = recipe.title.to_lowercase();
            let body_lower = format!(
                "{}\n{}\n{}",
                recipe.category,
                recipe.ingredients.join("\n"),
                recipe.instructions.join("\n")
            )
            .to_lowercase();

            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if body_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((recipe, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| match score_a.cmp(score_b) {
        std::cmp::Ordering::Equal => match a.title.len().cmp(&b.title.len()) {
            std::cmp::Ordering::Equal => a.created_at.cmp(&b.created_at),
            ord => ord,
        },
        ord => ord,
    });

    matches.into_iter().map(|(recipe, _)| recipe).collect()
}
