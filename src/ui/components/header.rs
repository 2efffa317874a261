use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    theme::{Palette, Theme},
    ui::{input::InputMode, state::Section},
};

pub const THEME_TOGGLE_WIDTH: u16 = 12;

pub struct Header<'a> {
    title: &'a str,
    section: Section,
    theme: Theme,
    palette: Palette,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, section: Section, theme: Theme, palette: Palette) -> Self {
        Self {
            title,
            section,
            theme,
            palette,
        }
    }
}

/// Clickable theme switch at the right edge of the header.
pub fn theme_toggle_area(header: Rect) -> Rect {
    let width = THEME_TOGGLE_WIDTH.min(header.width);
    Rect {
        x: header.right() - width,
        width,
        ..header
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.palette.surface));

        let mut spans = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        )];
        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if *section == self.section {
                Style::default()
                    .fg(self.palette.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.text_dim)
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, section.title()), style));
        }
        Line::from(spans).render(area, buf);

        let icon = match self.theme {
            Theme::Dark => "☾ dark",
            Theme::Light => "☀ light",
        };
        Line::styled(format!("{} [t] ", icon), Style::default().fg(self.palette.text))
            .alignment(Alignment::Right)
            .render(theme_toggle_area(area), buf);
    }
}

pub struct Footer {
    mode: InputMode,
    palette: Palette,
}

impl Footer {
    pub fn new(mode: InputMode, palette: Palette) -> Self {
        Self { mode, palette }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            InputMode::Page => {
                "↑↓ scroll/select · Tab section · Enter open · a add song · d remove · t theme · q quit"
            }
            InputMode::Editing { multiline: true } => {
                "Enter newline · Ctrl-S send · Tab next field · Esc leave field"
            }
            InputMode::Editing { multiline: false } => {
                "Enter send · Tab next field · Esc leave field"
            }
            InputMode::PlaylistModal => "Enter add · Tab switch field · Esc cancel",
            InputMode::ImageModal => "Esc close",
            InputMode::ConfirmRemoval => "y remove · n keep",
            InputMode::Confirmation => "any key to continue",
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.palette.surface));
        Line::styled(
            format!(" {}", self.hints()),
            Style::default().fg(self.palette.text_dim),
        )
        .render(area, buf);
    }
}
