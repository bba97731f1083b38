//! Catalog rendering: one section per category, in display order

use super::header::render_title;
use crate::app::AppState;
use crate::catalog::group_by_category;
use crate::image_view::thumbnail_lines;
use crate::theme::{Styles, UiText};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// List items for the catalog and the list index of the selected recipe.
///
/// Every category contributes a header item, even when it has no recipes.
/// Each recipe row is two lines: thumbnail + name, thumbnail + category.
pub fn catalog_items(state: &AppState) -> (Vec<ListItem<'static>>, Option<usize>) {
    let selected_id = state.selected_recipe_id();
    let cols = state.config.thumbnail_cols;
    let rows = state.config.thumbnail_rows.max(2);

    let mut items = Vec::new();
    let mut selected_index = None;

    for section in group_by_category(state.store.all()) {
        items.push(ListItem::new(Line::from(Span::styled(
            section.category.label().to_uppercase(),
            Styles::section(),
        ))));

        for recipe in &section.recipes {
            if Some(recipe.id()) == selected_id {
                selected_index = Some(items.len());
            }

            let has_image = recipe.image().is_some();
            let thumb = thumbnail_lines(recipe.image(), cols, rows);
            let lines: Vec<Line<'static>> = thumb
                .into_iter()
                .enumerate()
                .map(|(i, mut line)| {
                    if !has_image {
                        // No thumbnail column when there is no picture
                        line.spans.clear();
                    }
                    line.spans.insert(0, Span::raw("  "));
                    line.spans.push(Span::raw(" "));
                    match i {
                        0 => line.spans.push(Span::styled(recipe.name().to_string(), Styles::headline())),
                        1 => line.spans.push(Span::styled(
                            recipe.category().label().to_string(),
                            Styles::text_secondary(),
                        )),
                        _ => {}
                    }
                    line
                })
                .collect();
            items.push(ListItem::new(lines));
        }
    }

    (items, selected_index)
}

pub fn render_catalog_screen(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_title(f, chunks[0], UiText::CATALOG_TITLE);

    let (items, selected) = catalog_items(state);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(selected);
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}
