use super::state::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // Page
    Quit,
    ToggleTheme,
    ScrollUp(u32),
    ScrollDown(u32),
    PageUp,
    PageDown,
    Navigate(Direction),
    JumpTo(Section),
    NextSection,
    PreviousSection,
    Activate,

    // Playlist
    OpenAddSong,
    RemoveSelected,
    ConfirmRemoval,
    CancelRemoval,

    // Forms and dialogs
    FocusNext,
    FocusPrevious,
    Blur,
    Edit(EditOp),
    Paste(String),
    Submit,
    CloseModal,
    DismissNotice,
}

impl AppMessage {
    /// Debug form for the log. Typed and pasted text never appears, since
    /// it may be the playlist password or feedback contents.
    pub fn log_label(&self) -> String {
        match self {
            AppMessage::Edit(EditOp::Insert(_)) => "Edit(Insert(..))".to_string(),
            AppMessage::Paste(text) => format!("Paste({} chars)", text.chars().count()),
            other => format!("{:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}
