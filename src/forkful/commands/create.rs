use crate::commands::{CmdMessage, CmdResult, PhotoUpload, RecipeDraft};
use crate::error::Result;
use crate::model::Recipe;
use crate::photos::PhotoStore;
use crate::store::RecipeStore;

use super::helpers::{load_collection, save_uploads};

pub fn run<S: RecipeStore>(
    store: &mut S,
    photos: &PhotoStore,
    draft: RecipeDraft,
    uploads: &[PhotoUpload],
) -> Result<CmdResult> {
    let mut recipes = load_collection(store);

    let photo_paths = save_uploads(photos, uploads)?;
    let id = recipes.len() as u32 + 1;
    let recipe = Recipe::new(
        id,
        draft.title,
        draft.category,
        &draft.ingredients,
        &draft.instructions,
        photo_paths,
    );

    recipes.push(recipe.clone());
    store.save(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe created (#{}): {}",
        recipe.id, recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft::new(
            title.into(),
            "Dinner".into(),
            "salt\npepper".into(),
            "Mix.\nServe.".into(),
        )
    }

    #[test]
    fn assigns_sequential_ids() {
        let temp = TempDir::new().unwrap();
        let photos = PhotoStore::new(temp.path().to_path_buf());
        let mut store = InMemoryStore::new();

        run(&mut store, &photos, draft("Soup"), &[]).unwrap();
        let result = run(&mut store, &photos, draft("Salad"), &[]).unwrap();

        assert_eq!(result.affected_recipes[0].id, 2);
        let recipes = store.load().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, 1);
        assert_eq!(recipes[1].id, 2);
    }

    #[test]
    fn derives_list_fields_from_the_draft() {
        let temp = TempDir::new().unwrap();
        let photos = PhotoStore::new(temp.path().to_path_buf());
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &photos, draft("Soup"), &[]).unwrap();
        let recipe = &result.affected_recipes[0];
        assert_eq!(recipe.ingredients, vec!["salt", "pepper"]);
        assert_eq!(recipe.instructions, vec!["Mix.", "Serve."]);
    }

    #[test]
    fn stores_accepted_photos_only() {
        let temp = TempDir::new().unwrap();
        let photos = PhotoStore::new(temp.path().to_path_buf());
        let mut store = InMemoryStore::new();

        let uploads = vec![
            PhotoUpload::new("plated.jpg", b"a".to_vec()),
            PhotoUpload::new("notes.txt", b"b".to_vec()),
        ];
        let result = run(&mut store, &photos, draft("Soup"), &uploads).unwrap();

        let recipe = &result.affected_recipes[0];
        assert_eq!(recipe.photos.len(), 1);
        assert!(photos.exists(&recipe.photos[0]));
    }

    #[test]
    fn an_unreadable_collection_starts_over_at_one() {
        let temp = TempDir::new().unwrap();
        let photos = PhotoStore::new(temp.path().to_path_buf());
        let mut store = InMemoryStore::unreadable();

        let result = run(&mut store, &photos, draft("Soup"), &[]).unwrap();
        assert_eq!(result.affected_recipes[0].id, 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
