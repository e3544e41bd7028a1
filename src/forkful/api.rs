//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all forkful operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over RecipeStore
//!
//! `RecipeApi<S: RecipeStore>` is generic over the storage backend:
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the collection file.

use crate::commands;
use crate::error::Result;
use crate::photos::PhotoStore;
use crate::store::RecipeStore;

/// The main API facade for forkful operations.
///
/// Generic over `RecipeStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct RecipeApi<S: RecipeStore> {
    store: S,
    photos: PhotoStore,
    paths: commands::AppPaths,
}

impl<S: RecipeStore> RecipeApi<S> {
    pub fn new(store: S, photos: PhotoStore, paths: commands::AppPaths) -> Self {
        Self {
            store,
            photos,
            paths,
        }
    }

    pub fn create_recipe(
        &mut self,
        draft: commands::RecipeDraft,
        uploads: &[commands::PhotoUpload],
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.photos, draft, uploads)
    }

    pub fn list_recipes(&self, filter: &RecipeFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_recipes(&self, ids: &[u32]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn update_recipe(
        &mut self,
        id: u32,
        draft: commands::RecipeDraft,
        keep: Option<&[String]>,
        uploads: &[commands::PhotoUpload],
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &self.photos, id, draft, keep, uploads)
    }

    pub fn delete_recipe(&mut self, id: u32, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.photos, id, skip_confirm)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, &self.photos)
    }

    pub fn export_recipes(&self, ids: &[u32]) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, &self.photos, ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::AppPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::{RecipeFilter, FEATURED_COUNT};
pub use commands::{
    AppPaths, CmdMessage, CmdResult, DoctorReport, MessageLevel, PhotoUpload, RecipeDraft,
    MAX_PHOTOS_PER_SUBMISSION,
};
