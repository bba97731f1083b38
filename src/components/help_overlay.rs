//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating panel.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Recipe Organizer Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(mode.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<12}", key), Styles::nav_key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press F1, ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16 + 2).min(parent.height);
        let width = 60.min(parent.width);
        let area = crate::ui::centered_rect(parent, width, height);

        f.render_widget(Clear, area);
        let panel = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Styles::border(true)),
            )
            .style(Styles::panel_bg())
            .wrap(Wrap { trim: false });
        f.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_names_mode() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Catalog, &ctx);
        let text: Vec<String> = overlay.lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Recipes")));
        assert!(text.iter().any(|l| l.contains("Show picture")));
    }
}
