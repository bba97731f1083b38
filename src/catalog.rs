//! Catalog grouping
//!
//! The store stays the single source of truth; sections are derived on
//! demand by iterating the fixed category set and filtering the store.
//! Empty categories still produce a section.

use crate::recipe::{Recipe, RecipeId, RecipeImage};
use crate::types::Category;

/// Text shown by the detail screen when a recipe has no picture
pub const NO_IMAGE_TEXT: &str = "No image available";

/// Recipes of one category, in store order
#[derive(Debug, Clone)]
pub struct CatalogSection<'a> {
    pub category: Category,
    pub recipes: Vec<&'a Recipe>,
}

impl CatalogSection<'_> {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name()).collect()
    }
}

/// Partition recipes into one section per category, in display order
pub fn group_by_category(recipes: &[Recipe]) -> Vec<CatalogSection<'_>> {
    Category::all()
        .into_iter()
        .map(|category| CatalogSection {
            category,
            recipes: recipes
                .iter()
                .filter(|r| r.category() == category)
                .collect(),
        })
        .collect()
}

/// Recipe ids in the order the catalog list displays them
pub fn selectable_rows(sections: &[CatalogSection<'_>]) -> Vec<RecipeId> {
    sections
        .iter()
        .flat_map(|s| s.recipes.iter().map(|r| r.id()))
        .collect()
}

/// What the detail screen shows for a recipe
#[derive(Debug, Clone)]
pub enum DetailContent<'a> {
    Image(&'a RecipeImage),
    Placeholder(&'static str),
}

impl<'a> DetailContent<'a> {
    pub fn for_recipe(recipe: &'a Recipe) -> Self {
        match recipe.image() {
            Some(image) => Self::Image(image),
            None => Self::Placeholder(NO_IMAGE_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_three_empty_sections() {
        let sections = group_by_category(&[]);
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.is_empty()));
        assert_eq!(
            sections.iter().map(|s| s.category).collect::<Vec<_>>(),
            Category::all()
        );
    }

    #[test]
    fn test_selectable_rows_follow_section_order() {
        let recipes = vec![
            Recipe::new("Cake", Category::Dessert, None),
            Recipe::new("Dip", Category::Appetizer, None),
        ];
        let sections = group_by_category(&recipes);
        let rows = selectable_rows(&sections);
        assert_eq!(rows, vec![recipes[1].id(), recipes[0].id()]);
    }

    #[test]
    fn test_placeholder_for_missing_image() {
        let recipe = Recipe::new("Plain", Category::Entree, None);
        match DetailContent::for_recipe(&recipe) {
            DetailContent::Placeholder(text) => assert_eq!(text, "No image available"),
            DetailContent::Image(_) => panic!("expected placeholder"),
        }
    }
}
