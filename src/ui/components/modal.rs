use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{
    lightbox::ImageRef,
    playlist::{ModalField, PlaylistModal},
    theme::Palette,
    ui::{components::field::InputBox, util::centered},
};

pub const PLAYLIST_MODAL_SIZE: (u16, u16) = (72, 14);
pub const IMAGE_MODAL_SIZE: (u16, u16) = (64, 13);
pub const DIALOG_SIZE: (u16, u16) = (52, 7);

fn modal_block(title: &str, palette: Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::DOUBLE)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface))
        .title(Line::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::styled(" ✕ Esc ", Style::default().fg(palette.text_dim)).right_aligned())
}

pub fn playlist_modal_area(area: Rect) -> Rect {
    centered(area, PLAYLIST_MODAL_SIZE.0, PLAYLIST_MODAL_SIZE.1)
}

pub fn image_modal_area(area: Rect) -> Rect {
    centered(area, IMAGE_MODAL_SIZE.0, IMAGE_MODAL_SIZE.1)
}

pub fn dialog_area(area: Rect) -> Rect {
    centered(area, DIALOG_SIZE.0, DIALOG_SIZE.1)
}

pub struct PlaylistModalView<'a> {
    modal: &'a PlaylistModal,
    palette: Palette,
}

impl<'a> PlaylistModalView<'a> {
    pub fn new(modal: &'a PlaylistModal, palette: Palette) -> Self {
        Self { modal, palette }
    }
}

impl Widget for PlaylistModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = modal_block("Add a song", self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(inner);

        Line::styled(
            "Paste a Spotify embed (<iframe …>) and the playlist password.",
            Style::default().fg(self.palette.text_dim),
        )
        .render(chunks[0], buf);

        InputBox::new("Spotify embed code", &self.modal.embed, self.palette)
            .focused(self.modal.focus == ModalField::Embed)
            .render(chunks[1], buf);
        InputBox::new("Password", &self.modal.password, self.palette)
            .focused(self.modal.focus == ModalField::Password)
            .render(chunks[2], buf);

        Line::styled(
            "[Enter] Add Song   [Esc] Cancel",
            Style::default().fg(self.palette.text),
        )
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}

pub struct ImageModalView<'a> {
    image: &'a ImageRef,
    palette: Palette,
}

impl<'a> ImageModalView<'a> {
    pub fn new(image: &'a ImageRef, palette: Palette) -> Self {
        Self { image, palette }
    }
}

impl Widget for ImageModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = modal_block("Image", self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.palette.secondary));
        let frame_inner = frame.inner(chunks[0]);
        frame.render(chunks[0], buf);
        let middle = Rect {
            y: frame_inner.y + frame_inner.height / 2,
            height: 1.min(frame_inner.height),
            ..frame_inner
        };
        Line::styled("▣", Style::default().fg(self.palette.secondary))
            .alignment(Alignment::Center)
            .render(middle, buf);

        let alt = if self.image.alt.is_empty() {
            self.image.src.as_str()
        } else {
            self.image.alt.as_str()
        };
        Paragraph::new(vec![
            Line::styled(alt, Style::default().fg(self.palette.text)),
            Line::styled(self.image.src.as_str(), Style::default().fg(self.palette.text_dim)),
        ])
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
    }
}

/// Small centred box with a message and a line of key hints.
pub struct Dialog<'a> {
    title: &'a str,
    text: &'a str,
    hint: &'a str,
    palette: Palette,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, text: &'a str, hint: &'a str, palette: Palette) -> Self {
        Self {
            title,
            text,
            hint,
            palette,
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = modal_block(self.title, self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::styled(self.text, Style::default().fg(self.palette.text)),
            Line::default(),
            Line::styled(self.hint, Style::default().fg(self.palette.accent)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}
