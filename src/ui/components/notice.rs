use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// Top-right placement for a toast with `text`.
pub fn toast_area(area: Rect, text: &str) -> Rect {
    let width = (text.width() as u16 + 6).min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

pub struct Toast<'a> {
    text: &'a str,
    palette: Palette,
}

impl<'a> Toast<'a> {
    pub fn new(text: &'a str, palette: Palette) -> Self {
        Self { text, palette }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.palette.background)
                    .bg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::THICK)
                    .border_style(Style::default().fg(self.palette.accent)),
            )
            .render(area, buf);
    }
}
