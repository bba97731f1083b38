//! Modal image picker rendering

use super::centered_rect;
use crate::picker::{ImagePickerState, PickerEntry};
use crate::theme::{Styles, UiText};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn render_picker(f: &mut Frame, picker: &ImagePickerState, parent: Rect) {
    let area = centered_rect(parent, parent.width * 3 / 4, parent.height * 3 / 4);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} - {} ", UiText::PICKER_TITLE, picker.dir().display()))
        .border_style(Styles::border(true))
        .style(Styles::panel_bg());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = picker
        .entries()
        .iter()
        .map(|entry| {
            let style = match entry {
                PickerEntry::Image(_) => Styles::text(),
                PickerEntry::Parent(_) | PickerEntry::Directory(_) => Styles::title(),
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();

    if items.is_empty() {
        f.render_widget(
            Paragraph::new("No images or folders here").style(Styles::text_muted()),
            chunks[0],
        );
    } else {
        let list = List::new(items)
            .highlight_style(Styles::selected())
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(picker.selected()));
        f.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    let footer = match &picker.error {
        Some(error) => Line::from(Span::styled(error.clone(), Styles::error())),
        None => Line::from(Span::styled(
            "Enter: open/choose  Backspace: up  Esc: cancel",
            Styles::text_muted(),
        )),
    };
    f.render_widget(Paragraph::new(footer), chunks[1]);
}
