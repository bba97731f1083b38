//! Entry form state
//!
//! Holds the working name, category and image between submissions. The
//! form owns no UI; the entry screen renders it and `App` feeds it keys.

use crate::recipe::{Recipe, RecipeId, RecipeImage};
use crate::store::RecipeStore;
use crate::types::Category;
use tracing::{debug, info};

/// Result of a resolved image picker
#[derive(Debug, Clone)]
pub enum PickOutcome {
    /// The user confirmed a picture
    Selected(RecipeImage),
    /// The user dismissed the picker
    Cancelled,
}

/// Focusable controls on the entry screen, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
    PickImage,
    Add,
    ViewRecipes,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::PickImage,
            Self::PickImage => Self::Add,
            Self::Add => Self::ViewRecipes,
            Self::ViewRecipes => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::ViewRecipes,
            Self::Category => Self::Name,
            Self::PickImage => Self::Category,
            Self::Add => Self::PickImage,
            Self::ViewRecipes => Self::Add,
        }
    }
}

/// Working values for the next recipe
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    name: String,
    category: Category,
    image: Option<RecipeImage>,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image(&self) -> Option<&RecipeImage> {
        self.image.as_ref()
    }

    pub fn push_char(&mut self, c: char) {
        self.name.push(c);
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Apply the picker's result. Cancelling leaves the working image alone.
    pub fn resolve_pick(&mut self, outcome: PickOutcome) {
        match outcome {
            PickOutcome::Selected(image) => {
                debug!("Working image set to {}", image.describe());
                self.image = Some(image);
            }
            PickOutcome::Cancelled => {
                debug!("Image pick cancelled; working image unchanged");
            }
        }
    }

    /// Build a recipe from the working values, append it, and reset.
    ///
    /// No validation: an empty name or a missing image is stored as-is.
    pub fn submit(&mut self, store: &mut RecipeStore) -> RecipeId {
        let form = std::mem::take(self);
        let recipe = Recipe::new(form.name, form.category, form.image);
        let id = recipe.id();
        info!(
            "Adding recipe {:?} ({}, image: {})",
            recipe.name(),
            recipe.category(),
            recipe.image().is_some()
        );
        store.append(recipe);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn sample_image() -> RecipeImage {
        RecipeImage::from_image(DynamicImage::ImageRgba8(RgbaImage::new(2, 2)))
    }

    #[test]
    fn test_defaults() {
        let form = EntryForm::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.category(), Category::Appetizer);
        assert!(form.image().is_none());
    }

    #[test]
    fn test_name_editing() {
        let mut form = EntryForm::new();
        for c in "Pie!".chars() {
            form.push_char(c);
        }
        form.backspace();
        assert_eq!(form.name(), "Pie");
        form.clear_name();
        assert_eq!(form.name(), "");
        form.backspace();
        assert_eq!(form.name(), "");
    }

    #[test]
    fn test_cancel_keeps_previous_image() {
        let mut form = EntryForm::new();
        let img = sample_image();
        form.resolve_pick(PickOutcome::Selected(img.clone()));
        form.resolve_pick(PickOutcome::Cancelled);
        assert!(form.image().is_some_and(|i| i.same_payload(&img)));
    }

    #[test]
    fn test_submit_moves_image_into_recipe() {
        let mut store = RecipeStore::new();
        let mut form = EntryForm::new();
        let img = sample_image();
        form.set_name("Flan");
        form.set_category(Category::Dessert);
        form.resolve_pick(PickOutcome::Selected(img.clone()));

        let id = form.submit(&mut store);

        let recipe = store.get(id).unwrap();
        assert!(recipe.image().is_some_and(|i| i.same_payload(&img)));
        assert!(form.image().is_none());
    }

    #[test]
    fn test_focus_ring_round_trip() {
        let mut field = FormField::default();
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::ViewRecipes);
    }
}
