//! # Storage Layer
//!
//! This module defines the storage abstraction for the recipe book. The
//! [`RecipeStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The trait is deliberately a whole-collection `load`/`save` pair and
//! nothing more. The corpus is small and every mutation is a full
//! read-modify-write of the single document; callers locate records with a
//! linear scan by id. There is no per-record query surface to implement or
//! to fake.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection lives in `recipes.json`
//!   - A missing document reads as an empty collection; an unreadable or
//!     unparsable one is an error the caller may collapse to empty
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate an unreadable document
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data_dir>/
//! ├── recipes.json        # The full recipe collection (JSON array)
//! ├── config.json         # Configuration
//! └── photos/             # Uploaded photo files (managed by PhotoStore)
//! ```

use crate::error::Result;
use crate::model::Recipe;

pub mod fs;
pub mod memory;

/// Abstract interface for recipe collection storage.
///
/// Implementations persist the collection as a single ordered document;
/// `save` replaces it wholesale.
pub trait RecipeStore {
    /// Load the whole collection. A store with no document yet yields an
    /// empty collection; a document that cannot be read or parsed is an
    /// error.
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Replace the persisted collection with `recipes`.
    fn save(&mut self, recipes: &[Recipe]) -> Result<()>;
}
