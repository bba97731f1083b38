//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors, styles and fixed strings used by
//! the entry, catalog, detail and picker screens.
//!
//! # Usage
//! ```rust
//! use recipetui::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background for panels and the picker
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text (category line under a recipe name)
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color: borders, titles, focus
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color: selected items
    pub const SECONDARY: Color = Color::Yellow;

    /// Submit button
    pub const ACTION: Color = Color::Blue;

    /// Navigation button ("View Recipes")
    pub const NAVIGATE: Color = Color::Green;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Catalog section header
    pub const SECTION: Color = Color::Yellow;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Recipe name in lists (headline)
    pub fn headline() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Catalog section header
    pub fn section() -> Style {
        Style::default()
            .fg(Colors::SECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected option in a selector
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Button with the given fill color; focus adds bold and reverse
    pub fn button(fill: Color, focused: bool) -> Style {
        let style = Style::default().fg(Colors::FG_PRIMARY).bg(fill);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Key label in the nav bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "Recipe Organizer";
    pub const CATALOG_TITLE: &'static str = "Recipes";
    pub const NAME_PLACEHOLDER: &'static str = "Recipe Name";
    pub const CATEGORY_LABEL: &'static str = "Select Recipe Type";
    pub const BTN_PICK_IMAGE: &'static str = "[ Pick Image ]";
    pub const BTN_ADD_RECIPE: &'static str = "[ Add Recipe ]";
    pub const BTN_VIEW_RECIPES: &'static str = "[ View Recipes ]";
    pub const NO_IMAGE_SELECTED: &'static str = "No image selected";
    pub const PICKER_TITLE: &'static str = "Pick Image";
}
