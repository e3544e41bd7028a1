//! # Forkful Architecture
//!
//! Forkful is a **UI-agnostic recipe-keeping library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: create, edit, delete, doctor, ...   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the stores it is handed        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/ + photos.rs)                         │
//! │  - Abstract RecipeStore trait over the JSON collection      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - PhotoStore for the photo files recipes reference         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids Are Positions
//!
//! Recipe ids are 1-based positions in the collection, kept dense: deleting
//! a recipe renumbers everything after it. An id is a convenient handle for
//! the current session, not a stable identifier to keep across deletions.
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (the delete confirmation prompt is
//!   the one deliberate exception, and it can be skipped)
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a web app, a REST API, or any other
//! UI.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore` and a temp-dir `PhotoStore`. This is where the
//!    lion's share of testing lives.
//!
//! 2. **API** (`api.rs`): Tests verifying correct dispatch and return types.
//!
//! 3. **CLI** (`tests/cli_tests.rs`): End-to-end tests running the binary
//!    against a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Collection storage abstraction and implementations
//! - [`photos`]: Photo file storage
//! - [`model`]: Core data types (`Recipe`, timestamps, line splitting)
//! - [`config`]: Configuration management
//! - [`init`]: Wiring a ready-to-use API from a data directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod photos;
pub mod store;
