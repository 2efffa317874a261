use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{
    message::{AppMessage, Direction, EditOp},
    state::Section,
};

/// Which layer currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Page,
    Editing { multiline: bool },
    PlaylistModal,
    ImageModal,
    ConfirmRemoval,
    Confirmation,
}

impl InputMode {
    /// Whether a text input owns the keyboard.
    pub fn accepts_text(self) -> bool {
        matches!(self, InputMode::Editing { .. } | InputMode::PlaylistModal)
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, mode: InputMode) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        match mode {
            InputMode::Confirmation => Some(AppMessage::DismissNotice),
            InputMode::ConfirmRemoval => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(AppMessage::ConfirmRemoval)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(AppMessage::CancelRemoval)
                }
                _ => None,
            },
            InputMode::ImageModal => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(AppMessage::CloseModal),
                _ => None,
            },
            InputMode::PlaylistModal => match key.code {
                KeyCode::Esc => Some(AppMessage::CloseModal),
                KeyCode::Tab => Some(AppMessage::FocusNext),
                KeyCode::BackTab => Some(AppMessage::FocusPrevious),
                KeyCode::Enter => Some(AppMessage::Submit),
                _ => Self::handle_edit(key),
            },
            InputMode::Editing { multiline } => match key.code {
                KeyCode::Esc => Some(AppMessage::Blur),
                KeyCode::Tab => Some(AppMessage::FocusNext),
                KeyCode::BackTab => Some(AppMessage::FocusPrevious),
                KeyCode::Enter if multiline && !key.modifiers.contains(KeyModifiers::ALT) => {
                    Some(AppMessage::Edit(EditOp::Insert('\n')))
                }
                KeyCode::Enter => Some(AppMessage::Submit),
                _ => Self::handle_edit(key),
            },
            InputMode::Page => Self::handle_page(key),
        }
    }

    fn handle_edit(key: KeyEvent) -> Option<AppMessage> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Some(AppMessage::Submit),
                KeyCode::Char('a') => Some(AppMessage::Edit(EditOp::Home)),
                KeyCode::Char('e') => Some(AppMessage::Edit(EditOp::End)),
                _ => None,
            };
        }

        let op = match key.code {
            KeyCode::Char(c) => EditOp::Insert(c),
            KeyCode::Backspace => EditOp::Backspace,
            KeyCode::Delete => EditOp::Delete,
            KeyCode::Left => EditOp::Left,
            KeyCode::Right => EditOp::Right,
            KeyCode::Home => EditOp::Home,
            KeyCode::End => EditOp::End,
            _ => return None,
        };
        Some(AppMessage::Edit(op))
    }

    fn handle_page(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char('t') => Some(AppMessage::ToggleTheme),
            KeyCode::Char('a') => Some(AppMessage::OpenAddSong),
            KeyCode::Char('d') | KeyCode::Delete => Some(AppMessage::RemoveSelected),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::Navigate(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::Navigate(Direction::Down)),
            KeyCode::PageUp => Some(AppMessage::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(AppMessage::PageDown),
            KeyCode::Tab => Some(AppMessage::NextSection),
            KeyCode::BackTab => Some(AppMessage::PreviousSection),
            KeyCode::Enter => Some(AppMessage::Activate),
            KeyCode::Char(c @ '1'..='4') => {
                Section::from_index(c as usize - '1' as usize).map(AppMessage::JumpTo)
            }
            _ => None,
        }
    }
}
