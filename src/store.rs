//! In-memory recipe store
//!
//! An ordered, append-only collection. It lives for the process lifetime.

use crate::recipe::{Recipe, RecipeId};

/// Ordered collection of every recipe entered this session
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe at the end. Always succeeds; duplicates are kept.
    pub fn append(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// All recipes in insertion order
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
