use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{reveal::Span, ui::state::Section};

/// Blank rows between sections.
pub const SECTION_GAP: u32 = 1;
pub const FEEDBACK_HEIGHT: u32 = 15;

/// Header line, scrolling page, key-hint footer.
pub fn split_screen(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Vertical placement of every section on the page, in page rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub spans: [Span; 4],
    pub total: u32,
}

impl PageLayout {
    pub fn new(heights: [u32; 4]) -> Self {
        let mut top = 0;
        let spans = heights.map(|height| {
            let span = Span::new(top, height);
            top += height + SECTION_GAP;
            span
        });
        Self {
            spans,
            total: top.saturating_sub(SECTION_GAP),
        }
    }

    pub fn span(&self, section: Section) -> Span {
        self.spans[section.index()]
    }

    pub fn max_scroll(&self, viewport_height: u32) -> u32 {
        self.total.saturating_sub(viewport_height)
    }

    /// Section owning `row`, if the row is not a gap.
    pub fn section_at(&self, row: u32) -> Option<Section> {
        self.spans
            .iter()
            .position(|s| row >= s.top && row < s.bottom())
            .and_then(Section::from_index)
    }

    /// Scroll offset that brings `section` into view with minimal movement.
    pub fn scroll_to(&self, section: Section, scroll: u32, viewport_height: u32) -> u32 {
        let span = self.span(section);
        let target = if span.top < scroll {
            span.top
        } else if span.bottom() > scroll + viewport_height {
            span.bottom().saturating_sub(viewport_height).min(span.top)
        } else {
            scroll
        };
        target.min(self.max_scroll(viewport_height))
    }
}

pub fn about_height(about: &str) -> u32 {
    about.lines().count().max(1) as u32 + 2
}

pub fn gallery_height(images: usize) -> u32 {
    images.max(1) as u32 + 3
}

pub fn playlist_height(songs: usize) -> u32 {
    songs.max(1) as u32 * 2 + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::new([4, 6, 5, 15])
    }

    #[test]
    fn spans_are_stacked_with_gaps() {
        let layout = layout();
        assert_eq!(layout.spans[0], Span::new(0, 4));
        assert_eq!(layout.spans[1], Span::new(5, 6));
        assert_eq!(layout.spans[3], Span::new(18, 15));
        assert_eq!(layout.total, 33);
    }

    #[test]
    fn section_lookup_skips_gaps() {
        let layout = layout();
        assert_eq!(layout.section_at(0), Some(Section::About));
        assert_eq!(layout.section_at(4), None);
        assert_eq!(layout.section_at(5), Some(Section::Gallery));
        assert_eq!(layout.section_at(40), None);
    }

    #[test]
    fn scroll_to_moves_minimally() {
        let layout = layout();
        // Already visible.
        assert_eq!(layout.scroll_to(Section::Gallery, 0, 20), 0);
        // Below the fold: bring its top into view without overshooting.
        assert_eq!(layout.scroll_to(Section::Feedback, 0, 20), 13);
        // Above the viewport.
        assert_eq!(layout.scroll_to(Section::About, 10, 20), 0);
    }

    #[test]
    fn max_scroll_saturates() {
        let layout = layout();
        assert_eq!(layout.max_scroll(10), 23);
        assert_eq!(layout.max_scroll(100), 0);
    }
}
