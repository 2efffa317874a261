use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    playlist::PlaylistRender,
    theme::Palette,
    ui::{components::sections::section_block, state::Section},
};

pub struct PlaylistSection {
    render: PlaylistRender,
    selected: Option<usize>,
    focused: bool,
    palette: Palette,
}

impl PlaylistSection {
    pub fn new(
        render: PlaylistRender,
        selected: Option<usize>,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            render,
            selected,
            focused,
            palette,
        }
    }
}

impl Widget for PlaylistSection {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(Section::Playlist, self.focused, self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        match self.render {
            PlaylistRender::Empty(placeholder) => {
                lines.push(Line::styled(
                    placeholder,
                    Style::default().fg(self.palette.text_dim),
                ));
                lines.push(Line::default());
            }
            PlaylistRender::Items(items) => {
                for item in items {
                    let is_selected = self.focused && self.selected == Some(item.index);
                    let style = if is_selected {
                        Style::default()
                            .fg(self.palette.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.palette.text)
                    };
                    lines.push(Line::from(vec![
                        Span::styled(if is_selected { "> " } else { "  " }, style),
                        Span::styled(format!("{:>2}. ", item.index + 1), style),
                        Span::styled(item.label, style),
                    ]));
                    lines.push(Line::styled(
                        format!("      {}", item.link.unwrap_or_default()),
                        Style::default().fg(self.palette.text_dim),
                    ));
                }
            }
        }

        let hint = if self.focused {
            "a add song · d remove selected"
        } else {
            "press 3 to manage the playlist"
        };
        lines.push(Line::styled(hint, Style::default().fg(self.palette.text_dim)));

        Paragraph::new(lines).render(inner, buf);
    }
}
