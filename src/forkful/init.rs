use crate::api::{AppPaths, RecipeApi};
use crate::config::ForkfulConfig;
use crate::photos::PhotoStore;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct ForkfulContext {
    pub api: RecipeApi<FileStore>,
    pub config: ForkfulConfig,
}

/// Where the recipe box lives when no override is given.
pub fn default_data_dir() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "forkful", "forkful").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

pub fn initialize(data_dir_override: Option<PathBuf>) -> ForkfulContext {
    let data_dir = data_dir_override.unwrap_or_else(default_data_dir);

    let config = ForkfulConfig::load(&data_dir).unwrap_or_default();
    let photos =
        PhotoStore::new(data_dir.clone()).with_allowed_exts(config.get_photo_extensions());

    let store = FileStore::new(data_dir.clone());
    let paths = AppPaths { data_dir };
    let api = RecipeApi::new(store, photos, paths);

    ForkfulContext { api, config }
}
