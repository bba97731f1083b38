//! Recipe entry form rendering

use super::header::render_title;
use crate::app::AppState;
use crate::form::FormField;
use crate::image_view::ImageWidget;
use crate::theme::{Colors, Styles, UiText};
use crate::types::Category;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_entry_screen(f: &mut Frame, state: &AppState, area: Rect) {
    let preview_height = state.config.preview_rows.saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),              // Title
            Constraint::Length(3),              // Name
            Constraint::Length(3),              // Category
            Constraint::Length(1),              // Pick Image
            Constraint::Length(preview_height), // Preview
            Constraint::Length(1),              // Add Recipe
            Constraint::Length(1),              // View Recipes
            Constraint::Min(0),
        ])
        .split(area);

    render_title(f, chunks[0], "Add Recipe");
    render_name_input(f, state, chunks[1]);
    render_category_selector(f, state, chunks[2]);
    render_button(
        f,
        chunks[3],
        UiText::BTN_PICK_IMAGE,
        Colors::ACTION,
        state.focus == FormField::PickImage,
    );
    render_preview(f, state, chunks[4]);
    render_button(
        f,
        chunks[5],
        UiText::BTN_ADD_RECIPE,
        Colors::ACTION,
        state.focus == FormField::Add,
    );
    render_button(
        f,
        chunks[6],
        UiText::BTN_VIEW_RECIPES,
        Colors::NAVIGATE,
        state.focus == FormField::ViewRecipes,
    );
}

fn render_name_input(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == FormField::Name;
    let name = state.form.name();

    let line = if name.is_empty() && !focused {
        Line::from(Span::styled(UiText::NAME_PLACEHOLDER, Styles::text_muted()))
    } else {
        let mut spans = vec![Span::styled(name.to_string(), Styles::text())];
        if focused {
            spans.push(Span::styled("_", Styles::title()));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Name ")
            .border_style(Styles::border(focused)),
    );
    f.render_widget(input, area);
}

fn render_category_selector(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == FormField::Category;
    let current = state.form.category();

    let mut spans = Vec::new();
    for category in Category::all() {
        let style = if category == current {
            Styles::selected()
        } else {
            Styles::unselected()
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));
        spans.push(Span::raw(" "));
    }

    let selector = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", UiText::CATEGORY_LABEL))
                .border_style(Styles::border(focused)),
        );
    f.render_widget(selector, area);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, fill: ratatui::style::Color, focused: bool) {
    let width = (label.chars().count() as u16).min(area.width);
    let button_area = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    f.render_widget(
        Paragraph::new(label.to_string()).style(Styles::button(fill, focused)),
        button_area,
    );
}

fn render_preview(f: &mut Frame, state: &AppState, area: Rect) {
    let width = state.config.preview_cols.saturating_add(2).min(area.width);
    let preview_area = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(preview_area);
    f.render_widget(block, preview_area);

    match state.form.image() {
        Some(image) => f.render_widget(ImageWidget::new(image), inner),
        None => {
            let placeholder = Paragraph::new(UiText::NO_IMAGE_SELECTED)
                .alignment(Alignment::Center)
                .style(Styles::text_muted());
            let row = Rect::new(
                inner.x,
                inner.y + inner.height / 2,
                inner.width,
                inner.height.min(1),
            );
            f.render_widget(placeholder, row);
        }
    }
}
