//! Application state definitions
//!
//! Contains the screen stack, the form and store, and the modal picker.

use crate::catalog::{group_by_category, selectable_rows};
use crate::config_file::AppConfig;
use crate::form::{EntryForm, FormField};
use crate::picker::ImagePickerState;
use crate::recipe::{Recipe, RecipeId};
use crate::store::RecipeStore;
use strum::Display;

/// A screen on the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entry form - root of the stack
    Entry,
    /// Recipes grouped by category
    Catalog,
    /// One recipe's picture
    Detail(RecipeId),
}

/// Application operating modes, used to select renderers and keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AppMode {
    #[strum(serialize = "Add Recipe")]
    Entry,
    #[strum(serialize = "Recipes")]
    Catalog,
    #[strum(serialize = "Recipe Detail")]
    Detail,
    /// Modal picker over the entry screen
    #[strum(serialize = "Pick Image")]
    ImagePicker,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every recipe entered this session
    pub store: RecipeStore,
    /// Working values for the next recipe
    pub form: EntryForm,
    /// Focused control on the entry screen
    pub focus: FormField,
    /// Screen stack; never empty, `Entry` at the bottom
    nav_stack: Vec<Screen>,
    /// Open image picker, if any
    pub picker: Option<ImagePickerState>,
    /// Index into the catalog's selectable rows
    pub catalog_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: RecipeStore::new(),
            form: EntryForm::new(),
            focus: FormField::default(),
            nav_stack: vec![Screen::Entry],
            picker: None,
            catalog_selection: 0,
            status_message: "Enter a recipe, then View Recipes to browse".to_string(),
            help_visible: false,
            config,
        }
    }

    /// Screen at the top of the stack
    pub fn current_screen(&self) -> Screen {
        self.nav_stack.last().copied().unwrap_or(Screen::Entry)
    }

    pub fn mode(&self) -> AppMode {
        if self.picker.is_some() {
            return AppMode::ImagePicker;
        }
        match self.current_screen() {
            Screen::Entry => AppMode::Entry,
            Screen::Catalog => AppMode::Catalog,
            Screen::Detail(_) => AppMode::Detail,
        }
    }

    pub fn depth(&self) -> usize {
        self.nav_stack.len()
    }

    pub fn push_screen(&mut self, screen: Screen) {
        self.nav_stack.push(screen);
    }

    /// Pop the top screen. The entry screen is never popped.
    pub fn pop_screen(&mut self) -> bool {
        if self.nav_stack.len() > 1 {
            self.nav_stack.pop();
            true
        } else {
            false
        }
    }

    /// Recipe ids in catalog display order
    pub fn catalog_rows(&self) -> Vec<RecipeId> {
        selectable_rows(&group_by_category(self.store.all()))
    }

    /// Recipe under the catalog cursor
    pub fn selected_recipe_id(&self) -> Option<RecipeId> {
        self.catalog_rows().get(self.catalog_selection).copied()
    }

    /// Recipe shown by the detail screen
    pub fn detail_recipe(&self) -> Option<&Recipe> {
        match self.current_screen() {
            Screen::Detail(id) => self.store.get(id),
            _ => None,
        }
    }
}
