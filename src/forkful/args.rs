use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "forkful")]
#[command(about = "A pocket recipe box for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep the recipe box in this directory instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "n")]
    Create {
        /// Title of the recipe
        title: String,

        /// Category it files under (e.g. Dinner, Dessert)
        #[arg(short, long)]
        category: String,

        /// Ingredients, one per line
        #[arg(long, default_value = "")]
        ingredients: String,

        /// Instructions, one step per line
        #[arg(long, default_value = "")]
        instructions: String,

        /// Photo files to attach (up to 5 per submission)
        #[arg(short, long, value_name = "FILE")]
        photo: Vec<PathBuf>,
    },

    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Only recipes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Only the most recently added recipes
        #[arg(long)]
        recent: bool,
    },

    /// Show one or more recipes in full
    #[command(alias = "v")]
    Show {
        /// Ids of the recipes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Edit a recipe; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Id of the recipe
        id: u32,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New ingredients, one per line
        #[arg(long)]
        ingredients: Option<String>,

        /// New instructions, one step per line
        #[arg(long)]
        instructions: Option<String>,

        /// Photo files to attach (up to 5 per submission)
        #[arg(short, long, value_name = "FILE")]
        photo: Vec<PathBuf>,

        /// Stored photo paths to keep; the rest are deleted. Omit to keep all
        #[arg(short, long, value_name = "PATH")]
        keep: Vec<String>,
    },

    /// Delete a recipe and its photos
    #[command(alias = "rm")]
    Delete {
        /// Id of the recipe
        id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check the photo directory against the collection and fix drift
    Doctor,

    /// Export recipes (all, or by id) to a tar.gz archive
    Export {
        /// Ids of the recipes, or nothing for all
        #[arg(num_args = 0..)]
        ids: Vec<u32>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., photo-exts)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the recipe box (optional utility)
    Init,
}
