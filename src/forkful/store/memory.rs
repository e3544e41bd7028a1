use super::RecipeStore;
use crate::error::{ForkfulError, Result};
use crate::model::Recipe;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
    fail_loads: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose document reads as corrupt, for exercising the
    /// read-failure policy.
    pub fn unreadable() -> Self {
        Self {
            recipes: Vec::new(),
            fail_loads: true,
        }
    }

    /// A store pre-seeded with `recipes`, for tests that need doctored
    /// records (aged timestamps, hand-built photo lists).
    pub fn seeded(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            fail_loads: false,
        }
    }
}

impl RecipeStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        if self.fail_loads {
            return Err(ForkfulError::Store("recipe document is unreadable".into()));
        }
        Ok(self.recipes.clone())
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.recipes = recipes.to_vec();
        // A save rewrites the document wholesale, clearing any corruption.
        self.fail_loads = false;
        Ok(())
    }
}
