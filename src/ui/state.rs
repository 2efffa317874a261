use crate::form::FeedbackField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    About,
    Gallery,
    Playlist,
    Feedback,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Gallery,
        Section::Playlist,
        Section::Feedback,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Gallery => 1,
            Section::Playlist => 2,
            Section::Feedback => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Gallery => "Gallery",
            Section::Playlist => "Playlist",
            Section::Feedback => "Feedback",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub scroll: u32,
    pub section: Section,
    pub gallery_index: usize,
    /// Feedback input that currently owns the keyboard.
    pub feedback_field: Option<FeedbackField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(Section::Feedback.next(), Section::About);
        assert_eq!(Section::About.previous(), Section::Feedback);
        for section in Section::ALL {
            assert_eq!(Section::from_index(section.index()), Some(section));
            assert_eq!(section.next().previous(), section);
        }
    }
}
