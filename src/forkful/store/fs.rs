use super::RecipeStore;
use crate::error::{ForkfulError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "recipes.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ForkfulError::Io)?;
        }
        Ok(())
    }
}

impl RecipeStore for FileStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(ForkfulError::Io)?;
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(ForkfulError::Serialization)?;
        Ok(recipes)
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(recipes).map_err(ForkfulError::Serialization)?;
        fs::write(self.data_file(), content).map_err(ForkfulError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use tempfile::TempDir;

    fn sample(id: u32, title: &str) -> Recipe {
        Recipe::new(
            id,
            title.to_string(),
            "Dinner".to_string(),
            "one\ntwo",
            "mix\nserve",
            vec![format!("photos/{}.jpg", id)],
        )
    }

    #[test]
    fn load_without_document_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        let recipes = vec![sample(1, "Soup"), sample(2, "Salad")];
        store.save(&recipes).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, recipes);
    }

    #[test]
    fn save_creates_the_data_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("box");
        let mut store = FileStore::new(nested.clone());

        store.save(&[sample(1, "Cake")]).unwrap();
        assert!(nested.join(DATA_FILENAME).exists());
    }

    #[test]
    fn document_is_human_readable() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save(&[sample(1, "Borscht")]).unwrap();

        let raw = std::fs::read_to_string(store.data_file()).unwrap();
        // Pretty-printed: one field per line.
        assert!(raw.contains("\n  {\n"));
        assert!(raw.contains("\"title\": \"Borscht\""));
    }

    #[test]
    fn corrupt_document_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        std::fs::write(store.data_file(), "not json {{{").unwrap();

        assert!(matches!(
            store.load(),
            Err(ForkfulError::Serialization(_))
        ));
    }
}
