use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ForkfulError, Result};
use crate::photos::PhotoStore;
use crate::store::RecipeStore;
use std::io::{self, Write};

use super::helpers::{find_recipe, load_collection, renumber};

/// Removes a recipe and its photo files, then renumbers the survivors so
/// ids stay dense. Asks for confirmation on stdin unless `skip_confirm`.
pub fn run<S: RecipeStore>(
    store: &mut S,
    photos: &PhotoStore,
    id: u32,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut recipes = load_collection(store);
    let pos = find_recipe(&recipes, id)?;

    if !skip_confirm {
        println!("This will permanently remove the recipe and its photos:");
        println!("  #{} {}", recipes[pos].id, recipes[pos].title);
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(ForkfulError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(ForkfulError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    photos.delete(&recipes[pos].photos);
    let removed = recipes.remove(pos);
    renumber(&mut recipes);
    store.save(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe removed (#{}): {}",
        removed.id, removed.title
    )));
    result.affected_recipes.push(removed);
    Ok(result)
}
