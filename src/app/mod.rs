//! Application module
//!
//! Contains the main application logic, screen navigation, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, Screen)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, Screen};

use crate::components::keybindings::KeybindingContext;
use crate::config_file::AppConfig;
use crate::error::Result;
use crate::form::{FormField, PickOutcome};
use crate::picker::{ImagePickerState, PickerAction};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(config),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Main loop finished with {} recipes", self.state.store.len());
        Ok(())
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            info!("Quit requested");
            return true;
        }

        if key_event.code == KeyCode::F(1) {
            self.toggle_help();
            return false;
        }

        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.state.help_visible = false;
            }
            return false;
        }

        match self.state.mode() {
            AppMode::ImagePicker => {
                self.handle_picker_key(key_event);
                false
            }
            AppMode::Entry => self.handle_entry_key(key_event),
            AppMode::Catalog => self.handle_catalog_key(key_event),
            AppMode::Detail => self.handle_detail_key(key_event),
        }
    }

    /// Keys that mean something everywhere except while typing a name
    fn handle_global_key(&mut self, key_event: KeyEvent) -> Option<bool> {
        match key_event.code {
            KeyCode::Char('?') => {
                self.toggle_help();
                Some(false)
            }
            KeyCode::Char('q') => {
                info!("Quit requested");
                Some(true)
            }
            _ => None,
        }
    }

    fn handle_entry_key(&mut self, key_event: KeyEvent) -> bool {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            match key_event.code {
                KeyCode::Char('s') => self.submit_form(),
                KeyCode::Char('o') => self.open_picker(),
                KeyCode::Char('l') => self.open_catalog(),
                KeyCode::Char('u') => self.state.form.clear_name(),
                _ => {}
            }
            return false;
        }

        match key_event.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.focus = self.state.focus.next();
                return false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focus = self.state.focus.previous();
                return false;
            }
            _ => {}
        }

        if self.state.focus == FormField::Name {
            match key_event.code {
                KeyCode::Char(c) => self.state.form.push_char(c),
                KeyCode::Backspace => self.state.form.backspace(),
                KeyCode::Enter => self.state.focus = self.state.focus.next(),
                _ => {}
            }
            return false;
        }

        if let Some(exit) = self.handle_global_key(key_event) {
            return exit;
        }

        match (self.state.focus, key_event.code) {
            (FormField::Category, KeyCode::Left) => self.state.form.previous_category(),
            (FormField::Category, KeyCode::Right) => self.state.form.next_category(),
            (FormField::Category, KeyCode::Enter) => self.state.focus = self.state.focus.next(),
            (FormField::PickImage, KeyCode::Enter) => self.open_picker(),
            (FormField::Add, KeyCode::Enter) => self.submit_form(),
            (FormField::ViewRecipes, KeyCode::Enter) => self.open_catalog(),
            _ => {}
        }
        false
    }

    fn handle_catalog_key(&mut self, key_event: KeyEvent) -> bool {
        if let Some(exit) = self.handle_global_key(key_event) {
            return exit;
        }

        let rows = self.state.catalog_rows();
        match key_event.code {
            KeyCode::Up => {
                self.state.catalog_selection = self.state.catalog_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.state.catalog_selection + 1 < rows.len() {
                    self.state.catalog_selection += 1;
                }
            }
            KeyCode::Home => self.state.catalog_selection = 0,
            KeyCode::End => self.state.catalog_selection = rows.len().saturating_sub(1),
            KeyCode::Enter => {
                if let Some(id) = rows.get(self.state.catalog_selection).copied() {
                    debug!("Opening detail for recipe {}", id);
                    self.state.push_screen(Screen::Detail(id));
                }
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        false
    }

    fn handle_detail_key(&mut self, key_event: KeyEvent) -> bool {
        if let Some(exit) = self.handle_global_key(key_event) {
            return exit;
        }
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Enter
        ) {
            self.go_back();
        }
        false
    }

    fn handle_picker_key(&mut self, key_event: KeyEvent) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match key_event.code {
            KeyCode::Up => picker.move_up(),
            KeyCode::Down => picker.move_down(),
            KeyCode::Home => picker.move_to_first(),
            KeyCode::End => picker.move_to_last(),
            KeyCode::Backspace | KeyCode::Left => picker.ascend(),
            KeyCode::Enter | KeyCode::Right => {
                if let PickerAction::Chosen(image) = picker.activate() {
                    self.close_picker(PickOutcome::Selected(image));
                }
            }
            KeyCode::Esc => self.close_picker(PickOutcome::Cancelled),
            _ => {}
        }
    }

    /// Show the modal picker. The form is blocked until it resolves.
    fn open_picker(&mut self) {
        let dir = self.state.config.picker_start_dir();
        match ImagePickerState::open(&dir, &self.state.config.image_extensions) {
            Ok(picker) => {
                info!("Image picker opened at {:?}", picker.dir());
                self.state.picker = Some(picker);
            }
            Err(e) => {
                warn!("Cannot open image picker at {:?}: {}", dir, e);
                self.state.status_message = format!("Cannot open {}: {}", dir.display(), e);
            }
        }
    }

    fn close_picker(&mut self, outcome: PickOutcome) {
        self.state.picker = None;
        self.state.status_message = match &outcome {
            PickOutcome::Selected(image) => format!("Selected {}", image.describe()),
            PickOutcome::Cancelled => "Image selection cancelled".to_string(),
        };
        info!("Image picker resolved: {}", self.state.status_message);
        self.state.form.resolve_pick(outcome);
    }

    fn submit_form(&mut self) {
        let name = self.state.form.name().to_string();
        let category = self.state.form.category();
        self.state.form.submit(&mut self.state.store);
        self.state.focus = FormField::Name;
        self.state.status_message = if name.is_empty() {
            format!("Added untitled recipe to {}", category.label())
        } else {
            format!("Added \"{}\" to {}", name, category.label())
        };
    }

    fn open_catalog(&mut self) {
        debug!("Opening catalog with {} recipes", self.state.store.len());
        self.state.catalog_selection = 0;
        self.state.push_screen(Screen::Catalog);
    }

    fn go_back(&mut self) {
        if self.state.pop_screen() {
            debug!("Navigated back to {:?}", self.state.current_screen());
        }
    }
}
