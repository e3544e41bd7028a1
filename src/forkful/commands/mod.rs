use crate::config::ForkfulConfig;
use crate::error::{ForkfulError, Result};
use crate::model::Recipe;
use crate::photos::PHOTOS_DIRNAME;
use std::fs;
use std::path::{Path, PathBuf};

pub mod config;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod export;
pub mod helpers;
pub mod init;
pub mod list;
pub mod update;
pub mod view;

/// Most photos accepted from a single create or edit submission.
pub const MAX_PHOTOS_PER_SUBMISSION: usize = 5;

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_dir: PathBuf,
}

impl AppPaths {
    pub fn photos_dir(&self) -> PathBuf {
        self.data_dir.join(PHOTOS_DIRNAME)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a doctor pass found and repaired.
#[derive(Debug, Default, Clone)]
pub struct DoctorReport {
    pub removed_orphans: usize,
    pub pruned_refs: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<Recipe>,
    pub report: Option<DoctorReport>,
    pub config: Option<ForkfulConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_report(mut self, report: DoctorReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: ForkfulConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Raw user input for a recipe's text fields. Ingredients and instructions
/// arrive as multi-line text and are split into list items by the model.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub title: String,
    pub category: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeDraft {
    pub fn new(title: String, category: String, ingredients: String, instructions: String) -> Self {
        Self {
            title,
            category,
            ingredients,
            instructions,
        }
    }
}

/// One uploaded photo: the name the submitter gave it plus its bytes.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            bytes,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(ForkfulError::Io)?;
        let original_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            original_name,
            bytes,
        })
    }
}
