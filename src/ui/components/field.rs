use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    form::{BorderToken, TextField},
    theme::Palette,
    ui::util::visible_tail,
};

const CURSOR: char = '▏';

/// Bordered input with its error line underneath. Takes the whole `area`:
/// the last row holds the error, the rest the box.
pub struct InputBox<'a> {
    label: &'a str,
    field: &'a TextField,
    focused: bool,
    palette: Palette,
}

impl<'a> InputBox<'a> {
    pub fn new(label: &'a str, field: &'a TextField, palette: Palette) -> Self {
        Self {
            label,
            field,
            focused: false,
            palette,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn border_style(&self) -> Style {
        match self.field.error.border() {
            BorderToken::Error => Style::default().fg(self.palette.error),
            BorderToken::Default if self.focused => Style::default().fg(self.palette.accent),
            BorderToken::Default => Style::default().fg(self.palette.input_border),
        }
    }

    fn lines(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let mut text = self.field.display();
        let mut cursor = self.field.cursor();
        if self.focused {
            let at = text.char_indices().nth(cursor).map_or(text.len(), |(i, _)| i);
            text.insert(at, CURSOR);
        } else {
            cursor = text.chars().count();
        }

        if !self.field.multiline {
            return vec![Line::raw(visible_tail(&text, cursor, width))];
        }

        let cursor_line = text.chars().take(cursor).filter(|c| *c == '\n').count();
        let first = cursor_line.saturating_sub(height.saturating_sub(1));
        text.split('\n')
            .skip(first)
            .take(height)
            .map(|line| Line::raw(visible_tail(line, line.chars().count(), width)))
            .collect()
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let box_area = Rect {
            height: area.height - 1,
            ..area
        };
        let error_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };

        let label_style = if self.focused {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text_dim)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(self.border_style())
            .title(Line::styled(format!(" {} ", self.label), label_style));
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let lines = self.lines(inner.width as usize, inner.height as usize);
        Paragraph::new(lines)
            .style(Style::default().fg(self.palette.text))
            .render(inner, buf);

        if self.field.error.is_shown() {
            Line::styled(
                format!(" {}", self.field.error.message()),
                Style::default().fg(self.palette.error),
            )
            .render(error_area, buf);
        }
    }
}
