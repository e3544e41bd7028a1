use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecipeStore;

use super::helpers::{find_recipe, load_collection};

pub fn run<S: RecipeStore>(store: &S, ids: &[u32]) -> Result<CmdResult> {
    let recipes = load_collection(store);
    let mut listed = Vec::with_capacity(ids.len());
    for &id in ids {
        let pos = find_recipe(&recipes, id)?;
        listed.push(recipes[pos].clone());
    }
    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, RecipeDraft};
    use crate::error::ForkfulError;
    use crate::photos::PhotoStore;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn returns_recipes_in_requested_order() {
        let temp = TempDir::new().unwrap();
        let photos = PhotoStore::new(temp.path().to_path_buf());
        let mut store = InMemoryStore::new();
        for title in ["Soup", "Salad", "Cake"] {
            let draft = RecipeDraft::new(title.into(), "Dinner".into(), "".into(), "".into());
            create::run(&mut store, &photos, draft, &[]).unwrap();
        }

        let result = run(&store, &[3, 1]).unwrap();
        let titles: Vec<&str> = result
            .listed_recipes
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cake", "Soup"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let store = InMemoryStore::new();
        let err = run(&store, &[5]).unwrap_err();
        assert!(matches!(err, ForkfulError::RecipeNotFound(5)));
    }
}
