use chrono::Local;
use clap::Parser;
use colored::*;
use forkful::api::{CmdMessage, ConfigAction, MessageLevel, PhotoUpload, RecipeDraft, RecipeFilter};
use forkful::error::{ForkfulError, Result};
use forkful::init::{initialize, ForkfulContext};
use forkful::model::{stamp, Recipe};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = initialize(cli.dir.clone());

    match cli.command {
        Some(Commands::Create {
            title,
            category,
            ingredients,
            instructions,
            photo,
        }) => handle_create(&mut ctx, title, category, ingredients, instructions, photo),
        Some(Commands::List {
            category,
            search,
            recent,
        }) => handle_list(&ctx, category, search, recent),
        Some(Commands::Show { ids }) => handle_show(&ctx, ids),
        Some(Commands::Edit {
            id,
            title,
            category,
            ingredients,
            instructions,
            photo,
            keep,
        }) => handle_edit(
            &mut ctx,
            id,
            title,
            category,
            ingredients,
            instructions,
            photo,
            keep,
        ),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Export { ids }) => handle_export(&ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None, false),
    }
}

fn read_uploads(paths: &[PathBuf]) -> Result<Vec<PhotoUpload>> {
    paths.iter().map(|p| PhotoUpload::from_file(p)).collect()
}

fn handle_create(
    ctx: &mut ForkfulContext,
    title: String,
    category: String,
    ingredients: String,
    instructions: String,
    photo: Vec<PathBuf>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ForkfulError::Api("Title cannot be empty".into()));
    }

    let uploads = read_uploads(&photo)?;
    let draft = RecipeDraft::new(title, category, ingredients, instructions);
    let result = ctx.api.create_recipe(draft, &uploads)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &ForkfulContext,
    category: Option<String>,
    search: Option<String>,
    recent: bool,
) -> Result<()> {
    let filter = RecipeFilter {
        category,
        search_term: search,
        recent,
    };
    let result = ctx.api.list_recipes(&filter)?;
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &ForkfulContext, ids: Vec<u32>) -> Result<()> {
    let result = ctx.api.view_recipes(&ids)?;
    print_full_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut ForkfulContext,
    id: u32,
    title: Option<String>,
    category: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
    photo: Vec<PathBuf>,
    keep: Vec<String>,
) -> Result<()> {
    let current = ctx.api.view_recipes(&[id])?;
    let recipe = &current.listed_recipes[0];

    let draft = RecipeDraft::new(
        title.unwrap_or_else(|| recipe.title.clone()),
        category.unwrap_or_else(|| recipe.category.clone()),
        ingredients.unwrap_or_else(|| recipe.ingredients.join("\n")),
        instructions.unwrap_or_else(|| recipe.instructions.join("\n")),
    );
    if draft.title.trim().is_empty() {
        return Err(ForkfulError::Api("Title cannot be empty".into()));
    }
    let uploads = read_uploads(&photo)?;
    let keep = if keep.is_empty() {
        None
    } else {
        Some(keep.as_slice())
    };

    let result = ctx.api.update_recipe(id, draft, keep, &uploads)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut ForkfulContext, id: u32, yes: bool) -> Result<()> {
    let result = ctx.api.delete_recipe(id, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut ForkfulContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &ForkfulContext, ids: Vec<u32>) -> Result<()> {
    let result = ctx.api.export_recipes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &ForkfulContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!(
            "photo-exts = {}",
            config.get("photo-exts").unwrap_or_default()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &ForkfulContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_recipes(recipes: &[Recipe]) {
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            format!("#{}", recipe.id).yellow(),
            recipe.title.bold(),
            format!("[{}]", recipe.category).cyan()
        );
        println!("--------------------------------");
        println!("Ingredients:");
        for item in &recipe.ingredients {
            println!("- {}", item);
        }
        println!();
        println!("Instructions:");
        for (n, step) in recipe.instructions.iter().enumerate() {
            println!("{}. {}", n + 1, step);
        }
        if !recipe.photos.is_empty() {
            println!();
            println!("Photos:");
            for path in &recipe.photos {
                println!("  {}", path);
            }
        }
        println!();
        println!(
            "{}",
            format!(
                "Added {} (updated {})",
                recipe.created_at.format(stamp::FORMAT),
                recipe.updated_at.format(stamp::FORMAT)
            )
            .dimmed()
        );
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 12;
const PHOTO_MARKER: &str = "📷";

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let idx_str = format!("{}. ", recipe.id);

        let left_prefix = "    ".to_string();
        let left_prefix_width = left_prefix.width();

        let marker = if recipe.photos.is_empty() {
            "  ".to_string()
        } else {
            format!("{} ", PHOTO_MARKER)
        };
        let marker_width = marker.width();

        let category = truncate_to_width(&recipe.category, CATEGORY_WIDTH);
        let category_padding = CATEGORY_WIDTH.saturating_sub(category.width());

        let time_ago = format_time_ago(recipe.created_at);

        let preview: String = recipe
            .ingredients
            .join(", ")
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            recipe.title.clone()
        } else {
            format!("{} {}", recipe.title, preview)
        };

        let idx_width = idx_str.width();
        let fixed_width =
            left_prefix_width + idx_width + marker_width + CATEGORY_WIDTH + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}{}{}  {}",
            left_prefix,
            idx_str.normal(),
            title_display,
            " ".repeat(padding),
            marker,
            category.cyan(),
            " ".repeat(category_padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::NaiveDateTime) -> String {
    let now = Local::now().naive_local();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
