use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::{
    reveal::{RevealStyle, Span},
    theme::Palette,
    util::colors::blend,
};

/// A section drawn off-screen, then composited into the viewport with its
/// reveal style applied.
pub struct SectionLayer {
    pub span: Span,
    pub style: RevealStyle,
}

/// Copies the visible window of `page` (starting at page row `scroll`) into
/// `area`. Each section is pushed down by its reveal offset (clipped to its
/// own span) and faded from the background by its opacity.
pub fn composite(
    page: &Buffer,
    layers: &[SectionLayer],
    scroll: u32,
    palette: Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    buf.set_style(area, Style::default().bg(palette.background).fg(palette.text));

    for row in 0..area.height {
        let page_row = scroll + row as u32;
        let Some(layer) = layers
            .iter()
            .find(|l| page_row >= l.span.top && page_row < l.span.bottom())
        else {
            continue;
        };

        let offset = layer.style.offset as u32;
        if page_row < layer.span.top + offset {
            continue;
        }
        let source_row = page_row - offset;
        let Ok(source_y) = u16::try_from(source_row) else {
            continue;
        };

        for col in 0..area.width.min(page.area.width) {
            let Some(source) = page.cell((col, source_y)) else {
                continue;
            };
            let Some(target) = buf.cell_mut((area.x + col, area.y + row)) else {
                continue;
            };

            let opacity = layer.style.opacity;
            let mut cell = source.clone();
            let bg = match source.bg {
                ratatui::style::Color::Reset => palette.background,
                bg => bg,
            };
            let fg = match source.fg {
                ratatui::style::Color::Reset => palette.text,
                fg => fg,
            };
            cell.set_bg(blend(palette.background, bg, opacity));
            cell.set_fg(blend(palette.background, fg, opacity));
            *target = cell;
        }
    }
}

/// Off-screen canvas tall enough for the whole page.
pub fn page_buffer(width: u16, total_rows: u32, palette: Palette) -> Buffer {
    let height = u16::try_from(total_rows).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    buf.set_style(area, Style::default().bg(palette.background).fg(palette.text));
    buf
}

/// Renders `widget` at `span` of the off-screen page.
pub fn draw_section(page: &mut Buffer, span: Span, widget: impl Widget) {
    let (Ok(y), Ok(height)) = (u16::try_from(span.top), u16::try_from(span.height)) else {
        return;
    };
    let area = Rect::new(0, y, page.area.width, height).intersection(page.area);
    widget.render(area, page);
}
