//! Image rendering for the terminal
//!
//! Pictures are drawn with half blocks: each cell shows two vertical pixels
//! using `▀`, the foreground carrying the top pixel and the background the
//! bottom one. A `cols x rows` area therefore holds `cols x 2*rows` pixels.

use crate::recipe::RecipeImage;
use image::{Rgba, RgbaImage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::sync::Arc;

/// Upper half block
pub const HALF_BLOCK: char = '▀';

/// Largest size fitting `max_w x max_h` with the aspect ratio kept.
///
/// Each side is at least 1 as long as the bounds are non-zero.
pub fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    let (w, h) = (width as u64, height as u64);
    let (mw, mh) = (max_w as u64, max_h as u64);

    // Compare w/h against mw/mh without floating point
    if w * mh >= h * mw {
        let fitted_h = (h * mw / w).max(1);
        (max_w, fitted_h as u32)
    } else {
        let fitted_w = (w * mh / h).max(1);
        (fitted_w as u32, max_h)
    }
}

/// A picture resampled to fit a `cols x rows` cell area, cached per size
pub fn scaled_for_cells(image: &RecipeImage, cols: u16, rows: u16) -> Arc<RgbaImage> {
    let (w, h) = fit_within(image.width(), image.height(), cols as u32, rows as u32 * 2);
    if w == 0 || h == 0 {
        return Arc::new(RgbaImage::new(0, 0));
    }
    image.resized(w, h)
}

fn to_color(pixel: &Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        Color::Reset
    } else {
        Color::Rgb(r, g, b)
    }
}

/// Colours of the cell at (`col`, `row`): (top pixel, bottom pixel)
fn cell_colors(pixels: &RgbaImage, col: u32, row: u32) -> (Color, Color) {
    let top = to_color(pixels.get_pixel(col, row * 2));
    let bottom = if row * 2 + 1 < pixels.height() {
        to_color(pixels.get_pixel(col, row * 2 + 1))
    } else {
        Color::Reset
    };
    (top, bottom)
}

/// Cell rows of an already scaled picture, as styled lines
pub fn half_block_lines(pixels: &RgbaImage) -> Vec<Line<'static>> {
    let rows = pixels.height().div_ceil(2);
    (0..rows)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..pixels.width())
                .map(|col| {
                    let (fg, bg) = cell_colors(pixels, col, row);
                    Span::styled(HALF_BLOCK.to_string(), Style::default().fg(fg).bg(bg))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Fixed-size thumbnail lines, padded so rows line up in a list
pub fn thumbnail_lines(image: Option<&RecipeImage>, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let blank = " ".repeat(cols as usize);
    let mut lines = match image {
        Some(image) => half_block_lines(&scaled_for_cells(image, cols, rows)),
        None => Vec::new(),
    };
    for line in &mut lines {
        let pad = (cols as usize).saturating_sub(line.spans.len());
        if pad > 0 {
            line.spans.push(Span::raw(" ".repeat(pad)));
        }
    }
    while lines.len() < rows as usize {
        lines.push(Line::from(blank.clone()));
    }
    lines
}

/// Draws a picture scaled to fit and centred in its area
pub struct ImageWidget<'a> {
    image: &'a RecipeImage,
}

impl<'a> ImageWidget<'a> {
    pub fn new(image: &'a RecipeImage) -> Self {
        Self { image }
    }
}

impl Widget for ImageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let pixels = scaled_for_cells(self.image, area.width, area.height);
        let cols = pixels.width() as u16;
        let rows = pixels.height().div_ceil(2) as u16;
        let x0 = area.x + (area.width.saturating_sub(cols)) / 2;
        let y0 = area.y + (area.height.saturating_sub(rows)) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let (fg, bg) = cell_colors(&pixels, col as u32, row as u32);
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}
