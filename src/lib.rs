//! recipetui library
//!
//! Core of a terminal recipe organizer: an append-only recipe store, the
//! entry form, category grouping for the catalog, and the TUI around them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod form;
pub mod image_view;
pub mod picker;
pub mod recipe;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, Screen};
pub use catalog::{CatalogSection, DetailContent, NO_IMAGE_TEXT, group_by_category};
pub use config_file::AppConfig;
pub use error::RecipeTuiError;
pub use form::{EntryForm, FormField, PickOutcome};
pub use picker::{ImagePickerState, PickerAction, PickerEntry};
pub use recipe::{Recipe, RecipeId, RecipeImage};
pub use store::RecipeStore;
pub use types::Category;
