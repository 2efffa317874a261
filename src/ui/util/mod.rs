pub mod handler;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Rectangle of at most `width` x `height` centred in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Tail of `text` that fits in `width` columns while keeping the char at
/// `cursor` (or the end) visible.
pub fn visible_tail(text: &str, cursor: usize, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let end = (cursor + 1).min(chars.len());
    let mut start = end;
    let mut used = 0;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    let mut out: String = chars[start..end].iter().collect();
    for c in &chars[end..] {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 80, 40), area);
    }

    #[test]
    fn contains_is_exclusive_at_edges() {
        let area = Rect::new(2, 2, 3, 3);
        assert!(contains(area, 2, 2));
        assert!(contains(area, 4, 4));
        assert!(!contains(area, 5, 4));
        assert!(!contains(area, 1, 3));
    }

    #[test]
    fn tail_keeps_cursor_visible() {
        assert_eq!(visible_tail("hello", 5, 10), "hello");
        assert_eq!(visible_tail("hello world", 11, 5), "world");
        assert_eq!(visible_tail("hello world", 2, 5), "hello");
    }
}
