//! Recipe detail rendering: the picture scaled to fit, or a placeholder

use super::header::render_title;
use crate::app::AppState;
use crate::catalog::DetailContent;
use crate::image_view::ImageWidget;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_detail_screen(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(recipe) = state.detail_recipe() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_title(f, chunks[0], recipe.name());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    match DetailContent::for_recipe(recipe) {
        DetailContent::Image(image) => f.render_widget(ImageWidget::new(image), inner),
        DetailContent::Placeholder(text) => {
            let row = Rect::new(
                inner.x,
                inner.y + inner.height / 2,
                inner.width,
                inner.height.min(1),
            );
            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Styles::headline()),
                row,
            );
        }
    }
}
