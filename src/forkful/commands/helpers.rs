use crate::commands::{PhotoUpload, MAX_PHOTOS_PER_SUBMISSION};
use crate::error::{ForkfulError, Result};
use crate::model::Recipe;
use crate::photos::PhotoStore;
use crate::store::RecipeStore;

/// Loads the collection, reading an unreadable or absent document as empty.
/// Commands that must not mistake "unreadable" for "empty" (doctor) call
/// `store.load()` directly instead.
pub fn load_collection<S: RecipeStore>(store: &S) -> Vec<Recipe> {
    store.load().unwrap_or_default()
}

pub fn find_recipe(recipes: &[Recipe], id: u32) -> Result<usize> {
    recipes
        .iter()
        .position(|recipe| recipe.id == id)
        .ok_or(ForkfulError::RecipeNotFound(id))
}

/// Reassigns ids so they run 1..=N in collection order.
pub fn renumber(recipes: &mut [Recipe]) {
    for (pos, recipe) in recipes.iter_mut().enumerate() {
        recipe.id = (pos + 1) as u32;
    }
}

/// Writes the accepted files of one submission and returns their stored
/// paths, in submission order. Only the first MAX_PHOTOS_PER_SUBMISSION
/// files are considered; within that window, files with unsupported names
/// are skipped silently but still consume their position index.
pub fn save_uploads(photos: &PhotoStore, uploads: &[PhotoUpload]) -> Result<Vec<String>> {
    let mut saved = Vec::new();
    for (i, upload) in uploads.iter().take(MAX_PHOTOS_PER_SUBMISSION).enumerate() {
        if !photos.is_allowed(&upload.original_name) {
            continue;
        }
        saved.push(photos.save(&upload.bytes, &upload.original_name, i)?);
    }
    Ok(saved)
}
