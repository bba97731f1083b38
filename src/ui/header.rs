//! Header and common widget rendering
//!
//! Screen titles, the status line, the nav bar, and the help overlay.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, UiText};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render a bordered, centered title
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title_widget = Paragraph::new(title.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        )
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title_widget, area);
}

/// Render the one-line status message
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", UiText::APP_TITLE), Styles::title()),
        Span::styled(state.status_message.clone(), Styles::text_secondary()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the keybinding hints for the current mode
pub fn render_nav_bar(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext, area: Rect) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode()) {
        spans.push(Span::styled(format!(" {}", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(format!(" {} ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay on top of everything
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let overlay = HelpOverlay::new(&state.mode(), keybinding_ctx);
    overlay.render(f, f.area());
}
