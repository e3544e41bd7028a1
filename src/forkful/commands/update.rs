use crate::commands::{CmdMessage, CmdResult, PhotoUpload, RecipeDraft};
use crate::error::Result;
use crate::model::{split_lines, stamp_now};
use crate::photos::PhotoStore;
use crate::store::RecipeStore;

use super::helpers::{find_recipe, load_collection, save_uploads};

/// Replaces a recipe's text fields and reconciles its photos.
///
/// A `keep` list names the preexisting photo paths to retain; the rest are
/// deleted from disk. `None` (or an empty list) keeps everything. Newly
/// uploaded photos are appended after the kept ones. The recipe must exist
/// before any upload is written, so a bad id leaves the disk untouched.
pub fn run<S: RecipeStore>(
    store: &mut S,
    photos: &PhotoStore,
    id: u32,
    draft: RecipeDraft,
    keep: Option<&[String]>,
    uploads: &[PhotoUpload],
) -> Result<CmdResult> {
    let mut recipes = load_collection(store);
    let pos = find_recipe(&recipes, id)?;

    let existing = recipes[pos].photos.clone();
    let kept: Vec<String> = match keep {
        Some(list) if !list.is_empty() => existing
            .iter()
            .filter(|path| list.iter().any(|k| k == *path))
            .cloned()
            .collect(),
        _ => existing.clone(),
    };
    let dropped: Vec<String> = existing
        .iter()
        .filter(|path| !kept.contains(path))
        .cloned()
        .collect();

    let mut new_paths = save_uploads(photos, uploads)?;
    photos.delete(&dropped);

    let recipe = &mut recipes[pos];
    recipe.title = draft.title;
    recipe.category = draft.category;
    recipe.ingredients = split_lines(&draft.ingredients);
    recipe.instructions = split_lines(&draft.instructions);
    recipe.photos = kept;
    recipe.photos.append(&mut new_paths);
    recipe.updated_at = stamp_now();

    let updated = recipe.clone();
    store.save(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated (#{}): {}",
        updated.id, updated.title
    )));
    result.affected_recipes.push(updated);
    Ok(result)
}
