//! User interface rendering module
//!
//! This module is organized into submodules, one per screen:
//! - `header` - Titles, status line, nav bar and help overlay
//! - `entry` - Recipe entry form
//! - `catalog` - Recipes grouped by category
//! - `detail` - One recipe's picture, scaled to fit
//! - `picker` - Modal image picker

mod catalog;
mod detail;
mod entry;
mod header;
mod picker;

pub use catalog::catalog_items;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Rectangle of at most `width x height`, centered in `parent`
pub fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    Rect::new(
        parent.x + (parent.width - width) / 2,
        parent.y + (parent.height - height) / 2,
        width,
        height,
    )
}

/// UI renderer for the application
///
/// Entry point for rendering; delegates to the per-screen submodules.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let status_area = main_chunks[1];
        let nav_bar_area = main_chunks[2];

        match state.mode() {
            AppMode::Entry => entry::render_entry_screen(f, state, content_area),
            AppMode::ImagePicker => {
                // Picker is modal over the form
                entry::render_entry_screen(f, state, content_area);
                if let Some(ref picker_state) = state.picker {
                    picker::render_picker(f, picker_state, content_area);
                }
            }
            AppMode::Catalog => catalog::render_catalog_screen(f, state, content_area),
            AppMode::Detail => detail::render_detail_screen(f, state, content_area),
        }

        header::render_status_line(f, state, status_area);
        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let parent = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(parent, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered_rect(parent, 50, 50), parent);
    }
}
