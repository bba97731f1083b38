//! Tests for the recipe store and the entry form
//!
//! These tests verify:
//! - Append-only ordering of the store
//! - Submit builds one recipe from the working fields and resets the form
//! - Empty names are accepted without validation
//! - Cancelling the picker leaves the working image untouched

use image::{DynamicImage, Rgba, RgbaImage};
use recipetui::{Category, EntryForm, PickOutcome, Recipe, RecipeImage, RecipeStore};

fn picture(rgb: [u8; 3]) -> RecipeImage {
    let px = Rgba([rgb[0], rgb[1], rgb[2], 255]);
    RecipeImage::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, px)))
}

// =============================================================================
// Store Tests
// =============================================================================

#[test]
fn test_store_preserves_append_order() {
    let mut store = RecipeStore::new();
    for (name, category) in [
        ("Soup", Category::Entree),
        ("Cake", Category::Dessert),
        ("Dip", Category::Appetizer),
    ] {
        store.append(Recipe::new(name, category, None));
    }

    let names: Vec<&str> = store.all().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Soup", "Cake", "Dip"]);
}

#[test]
fn test_store_ids_resolve() {
    let mut store = RecipeStore::new();
    let recipe = Recipe::new("Ramen", Category::Entree, Some(picture([1, 2, 3])));
    let id = recipe.id();
    store.append(recipe);

    let found = store.get(id).expect("recipe should be found by id");
    assert_eq!(found.name(), "Ramen");
    assert!(found.image().is_some());
}

// =============================================================================
// Entry Form Tests
// =============================================================================

#[test]
fn test_submit_pancakes_entree_without_image() {
    let mut store = RecipeStore::new();
    let mut form = EntryForm::new();
    form.set_name("Pancakes");
    form.set_category(Category::Entree);

    form.submit(&mut store);

    assert_eq!(store.len(), 1);
    let recipe = &store.all()[0];
    assert_eq!(recipe.name(), "Pancakes");
    assert_eq!(recipe.category(), Category::Entree);
    assert!(recipe.image().is_none());

    assert_eq!(form.name(), "");
    assert_eq!(form.category(), Category::Appetizer);
    assert!(form.image().is_none());
}

#[test]
fn test_submit_accepts_empty_name() {
    let mut store = RecipeStore::new();
    let mut form = EntryForm::new();

    let id = form.submit(&mut store);

    assert_eq!(store.len(), 1);
    let recipe = store.get(id).unwrap();
    assert_eq!(recipe.name(), "");
    assert_eq!(recipe.category(), Category::Appetizer);
}

#[test]
fn test_submit_twice_keeps_both() {
    let mut store = RecipeStore::new();
    let mut form = EntryForm::new();
    form.set_name("Same");
    let first = form.submit(&mut store);
    form.set_name("Same");
    let second = form.submit(&mut store);

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_cancel_without_prior_image_stays_empty() {
    let mut form = EntryForm::new();
    form.resolve_pick(PickOutcome::Cancelled);
    assert!(form.image().is_none());
}

#[test]
fn test_cancel_with_prior_image_keeps_it() {
    let mut form = EntryForm::new();
    let before = picture([10, 20, 30]);
    form.resolve_pick(PickOutcome::Selected(before.clone()));

    form.resolve_pick(PickOutcome::Cancelled);

    let after = form.image().expect("image should survive cancel");
    assert!(after.same_payload(&before));
}

#[test]
fn test_new_pick_replaces_image() {
    let mut form = EntryForm::new();
    let first = picture([1, 1, 1]);
    let second = picture([2, 2, 2]);
    form.resolve_pick(PickOutcome::Selected(first.clone()));
    form.resolve_pick(PickOutcome::Selected(second.clone()));

    let current = form.image().unwrap();
    assert!(current.same_payload(&second));
    assert!(!current.same_payload(&first));
}
