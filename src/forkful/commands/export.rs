use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ForkfulError, Result};
use crate::model::Recipe;
use crate::photos::PhotoStore;
use crate::store::RecipeStore;
use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

use super::helpers::{find_recipe, load_collection};

pub fn run<S: RecipeStore>(store: &S, photos: &PhotoStore, ids: &[u32]) -> Result<CmdResult> {
    // 1. Resolve recipes
    let recipes = resolve_recipes(store, ids)?;

    if recipes.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No recipes to export."));
        return Ok(res);
    }

    // 2. Prepare output file
    let now = Local::now();
    let filename = format!("forkful-{}.tar.gz", now.format("%Y-%m-%d_%H:%M:%S"));
    let file = File::create(&filename).map_err(ForkfulError::Io)?;

    // 3. Write archive
    write_archive(file, &recipes, photos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", filename)));
    Ok(result)
}

fn resolve_recipes<S: RecipeStore>(store: &S, ids: &[u32]) -> Result<Vec<Recipe>> {
    let recipes = load_collection(store);
    if ids.is_empty() {
        return Ok(recipes);
    }
    let mut selected = Vec::with_capacity(ids.len());
    for &id in ids {
        let pos = find_recipe(&recipes, id)?;
        selected.push(recipes[pos].clone());
    }
    Ok(selected)
}

fn write_archive<W: Write>(writer: W, recipes: &[Recipe], photos: &PhotoStore) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for recipe in recipes {
        let safe_title = sanitize_filename(&recipe.title);
        let entry_name = format!("forkful/{}-{}.txt", safe_title, recipe.id);
        let content = render_recipe(recipe);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(ForkfulError::Io)?;

        for path in &recipe.photos {
            if !photos.exists(path) {
                continue;
            }
            let bytes = photos.read(path)?;
            let mut header = tar::Header::new_gnu();
            header.set_size(bytes.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            tar.append_data(&mut header, format!("forkful/{}", path), bytes.as_slice())
                .map_err(ForkfulError::Io)?;
        }
    }

    tar.finish().map_err(ForkfulError::Io)?;
    Ok(())
}

fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&recipe.title);
    out.push('\n');
    out.push_str(&format!("Category: {}\n\n", recipe.category));
    out.push_str("Ingredients:\n");
    for item in &recipe.ingredients {
        out.push_str(&format!("- {}\n", item));
    }
    out.push_str("\nInstructions:\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
