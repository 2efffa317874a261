use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::{
    form::{FeedbackField, FeedbackForm},
    theme::Palette,
    ui::{
        components::{field::InputBox, sections::section_block},
        state::Section,
    },
};

pub struct FeedbackSection<'a> {
    form: &'a FeedbackForm,
    field: Option<FeedbackField>,
    focused: bool,
    palette: Palette,
}

impl<'a> FeedbackSection<'a> {
    pub fn new(
        form: &'a FeedbackForm,
        field: Option<FeedbackField>,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            form,
            field,
            focused,
            palette,
        }
    }
}

impl Widget for FeedbackSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = section_block(Section::Feedback, self.focused, self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        InputBox::new("Email", &self.form.email, self.palette)
            .focused(self.field == Some(FeedbackField::Email))
            .render(chunks[0], buf);
        InputBox::new("Your feedback", &self.form.feedback, self.palette)
            .focused(self.field == Some(FeedbackField::Feedback))
            .render(chunks[1], buf);

        let hint = match self.field {
            Some(_) => "Ctrl-S to send",
            None if self.focused => "Enter to start typing",
            None => "press 4 to leave feedback",
        };
        Line::styled(hint, Style::default().fg(self.palette.text_dim)).render(chunks[2], buf);
    }
}
