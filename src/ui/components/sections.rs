use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::{lightbox::ImageRef, theme::Palette, ui::state::Section};

/// Frame shared by every page section; the focused one is drawn in accent.
pub fn section_block(section: Section, focused: bool, palette: Palette) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.input_border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
        .title(Line::styled(
            format!(" {} ", section.title().to_uppercase()),
            Style::default()
                .fg(palette.secondary)
                .add_modifier(Modifier::BOLD),
        ))
}

pub struct AboutSection<'a> {
    text: &'a str,
    focused: bool,
    palette: Palette,
}

impl<'a> AboutSection<'a> {
    pub fn new(text: &'a str, focused: bool, palette: Palette) -> Self {
        Self {
            text,
            focused,
            palette,
        }
    }
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(Section::About, self.focused, self.palette);
        Paragraph::new(self.text)
            .style(Style::default().fg(self.palette.text))
            .block(block)
            .render(area, buf);
    }
}

pub struct GallerySection<'a> {
    images: &'a [ImageRef],
    selected: usize,
    focused: bool,
    palette: Palette,
}

impl<'a> GallerySection<'a> {
    pub fn new(images: &'a [ImageRef], selected: usize, focused: bool, palette: Palette) -> Self {
        Self {
            images,
            selected,
            focused,
            palette,
        }
    }
}

impl Widget for GallerySection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(Section::Gallery, self.focused, self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.images.is_empty() {
            Line::styled("No images yet.", Style::default().fg(self.palette.text_dim))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let caption = if image.alt.is_empty() { &image.src } else { &image.alt };
                let (marker, style) = if self.focused && i == self.selected {
                    (
                        "> ",
                        Style::default()
                            .fg(self.palette.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default().fg(self.palette.text))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled("▣ ", Style::default().fg(self.palette.secondary)),
                    Span::styled(caption.clone(), style),
                ]))
            })
            .collect();

        let list_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        List::new(items).render(list_area, buf);

        if self.focused && inner.height > 0 {
            let hint_area = Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            };
            Line::styled(
                "Enter to view full size",
                Style::default().fg(self.palette.text_dim),
            )
            .render(hint_area, buf);
        }
    }
}
