//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The registry only describes keys for the nav bar and
//! the help overlay; dispatch lives in `App::handle_key_event`.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    NextField,
    PreviousField,
    CycleCategory,
    Select,
    PickImage,
    AddRecipe,
    ViewRecipes,
    ClearName,
    ParentDir,
    Back,
    Cancel,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with the Control modifier
    pub fn ctrl(c: char, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::ctrl('q', KeyAction::Quit, "Ctrl+Q", "Quit"),
        ];

        // Entry form
        self.mode_bindings.insert(
            AppMode::Entry,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Left, KeyAction::CycleCategory, "Left/Right", "Change recipe type"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Activate"),
                Keybinding::ctrl('o', KeyAction::PickImage, "Ctrl+O", "Pick image"),
                Keybinding::ctrl('s', KeyAction::AddRecipe, "Ctrl+S", "Add recipe"),
                Keybinding::ctrl('l', KeyAction::ViewRecipes, "Ctrl+L", "View recipes"),
                Keybinding::ctrl('u', KeyAction::ClearName, "Ctrl+U", "Clear name"),
            ],
        );

        // Catalog
        self.mode_bindings.insert(
            AppMode::Catalog,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous recipe"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next recipe"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First recipe"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last recipe"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Show picture"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc/b/Bksp", "Back"),
            ],
        );

        // Detail
        self.mode_bindings.insert(
            AppMode::Detail,
            vec![Keybinding::new(
                KeyCode::Esc,
                KeyAction::Back,
                "Esc/b/Bksp/Enter",
                "Back",
            )],
        );

        // Image picker
        self.mode_bindings.insert(
            AppMode::ImagePicker,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Move up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Move down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First entry"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last entry"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter/Right", "Open / choose"),
                Keybinding::new(KeyCode::Backspace, KeyAction::ParentDir, "Bksp/Left", "Parent directory"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Entry => vec![
                KeyAction::NextField,
                KeyAction::Select,
                KeyAction::PickImage,
                KeyAction::AddRecipe,
                KeyAction::ViewRecipes,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Catalog => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Detail => vec![KeyAction::Back, KeyAction::Help, KeyAction::Quit],
            AppMode::ImagePicker => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::ParentDir,
                KeyAction::Cancel,
            ],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            let is_nav = action == KeyAction::NavigateUp || action == KeyAction::NavigateDown;
            if is_nav && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if is_nav {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::ParentDir
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::CycleCategory
                        | KeyAction::PickImage
                        | KeyAction::AddRecipe
                        | KeyAction::ViewRecipes
                        | KeyAction::ClearName
                        | KeyAction::Cancel
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_bindings() {
        let ctx = KeybindingContext::new();
        for mode in [
            AppMode::Entry,
            AppMode::Catalog,
            AppMode::Detail,
            AppMode::ImagePicker,
        ] {
            assert!(!ctx.get_nav_items(&mode).is_empty(), "{:?}", mode);
        }
    }

    #[test]
    fn test_up_down_collapse_in_nav_bar() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::Catalog);
        let nav_count = items.iter().filter(|i| i.action_label == "Navigate").count();
        assert_eq!(nav_count, 1);
    }

    #[test]
    fn test_help_sections_for_entry() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Entry);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
        assert!(
            sections[1]
                .items
                .iter()
                .any(|(key, _)| key == "Ctrl+S")
        );
    }

    #[test]
    fn test_back_lists_every_accepted_key() {
        let ctx = KeybindingContext::new();
        let back_keys = |mode: AppMode| {
            ctx.get_bindings(&mode)
                .into_iter()
                .find(|b| b.action == KeyAction::Back)
                .map(|b| b.display.clone())
        };
        assert_eq!(back_keys(AppMode::Catalog).as_deref(), Some("Esc/b/Bksp"));
        assert_eq!(
            back_keys(AppMode::Detail).as_deref(),
            Some("Esc/b/Bksp/Enter")
        );
    }
}
