use std::time::Instant;

use flume::{Receiver, Sender};
use ratatui::{Frame, layout::Rect};
use tracing::{debug, info};

use crate::{
    config::Config,
    event::events::Event,
    form::{
        FeedbackField, FeedbackForm, TextField,
        feedback::{CONFIRMATION, SubmitOutcome},
    },
    lightbox::ImageModal,
    notice::Notices,
    playlist::{
        ModalSubmit, PlaylistModal, PlaylistStore, PlaylistView, modal::SONG_ADDED,
        view::CONFIRM_REMOVE,
    },
    reveal::{RevealState, ScrollReveal, Span},
    storage::SharedStore,
    theme::{ThemeManager, system_preference},
    util::task::TaskManager,
};

use super::{
    components::{
        feedback::FeedbackSection,
        header::{Footer, Header, theme_toggle_area},
        modal::{
            Dialog, ImageModalView, PlaylistModalView, dialog_area, image_modal_area,
            playlist_modal_area,
        },
        notice::{Toast, toast_area},
        page::{SectionLayer, composite, draw_section, page_buffer},
        playlist::PlaylistSection,
        sections::{AboutSection, GallerySection},
    },
    input::InputMode,
    layout::{self, FEEDBACK_HEIGHT, PageLayout},
    message::{AppMessage, Direction, EditOp},
    state::{PageState, Section},
    tui::{self, TerminalEvent},
    util::{contains, handler::EventHandler},
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: Config,
    pub theme: ThemeManager,
    pub feedback: FeedbackForm,
    pub playlist_store: PlaylistStore,
    pub playlist: PlaylistView,
    pub playlist_modal: PlaylistModal,
    pub image_modal: ImageModal,
    pub reveal: ScrollReveal,
    pub notices: Notices,
    pub page: PageState,
    pub task_manager: TaskManager,
    pub viewport: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: SharedStore) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        let mut theme = ThemeManager::new(store.clone(), system_preference());
        theme.init();

        let playlist_store = PlaylistStore::new(store);
        let playlist = PlaylistView::new(playlist_store.load());
        info!("Loaded {} playlist entries", playlist.songs().len());

        Self {
            event_rx,
            event_tx,
            playlist_modal: PlaylistModal::new(config.playlist_password.clone()),
            reveal: ScrollReveal::new(config.reveal(), Section::ALL.len()),
            config,
            theme,
            feedback: FeedbackForm::new(),
            playlist_store,
            playlist,
            image_modal: ImageModal::new(),
            notices: Notices::new(),
            page: PageState::default(),
            task_manager: TaskManager::new(),
            viewport: Rect::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?
            .frame_rate(self.config.frame_rate)
            .mouse(true)
            .paste(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    pub fn input_mode(&self) -> InputMode {
        if self.notices.confirmation().is_some() {
            InputMode::Confirmation
        } else if self.image_modal.is_open() {
            InputMode::ImageModal
        } else if self.playlist_modal.is_open() {
            InputMode::PlaylistModal
        } else if self.playlist.pending_removal().is_some() {
            InputMode::ConfirmRemoval
        } else if let Some(field) = self.page.feedback_field {
            InputMode::Editing {
                multiline: field == FeedbackField::Feedback,
            }
        } else {
            InputMode::Page
        }
    }

    /// Background scrolling is suppressed while a modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.image_modal.is_open() || self.playlist_modal.is_open()
    }

    pub fn page_layout(&self) -> PageLayout {
        PageLayout::new([
            layout::about_height(&self.config.about),
            layout::gallery_height(self.config.images.len()),
            layout::playlist_height(self.playlist.songs().len()),
            FEEDBACK_HEIGHT,
        ])
    }

    fn content_height(&self) -> u32 {
        let (_, content, _) = layout::split_screen(self.viewport);
        content.height as u32
    }

    fn active_modal_area(&self) -> Option<Rect> {
        if self.image_modal.is_open() {
            Some(image_modal_area(self.viewport))
        } else if self.playlist_modal.is_open() {
            Some(playlist_modal_area(self.viewport))
        } else {
            None
        }
    }

    pub fn resize(&mut self, area: Rect) {
        self.viewport = area;
        self.observe_sections(Instant::now());
    }

    /// Advances reveal transitions. Returns whether a redraw is needed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let was_animating = (0..Section::ALL.len())
            .any(|i| matches!(self.reveal.state(i), Some(RevealState::Revealing { .. })));
        self.reveal.tick(now) || was_animating
    }

    fn observe_sections(&mut self, now: Instant) {
        let layout = self.page_layout();
        let height = self.content_height();
        self.page.scroll = self.page.scroll.min(layout.max_scroll(height));
        let revealed = self
            .reveal
            .observe(&layout.spans, Span::new(self.page.scroll, height), now);
        if !revealed.is_empty() {
            debug!("Revealed sections {:?}", revealed);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::NoticeExpired(id) => {
                self.notices.expire(id);
            }
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ToggleTheme => self.theme.toggle_theme(),
            AppMessage::ScrollUp(rows) => self.scroll_by(-(rows as i64)),
            AppMessage::ScrollDown(rows) => self.scroll_by(rows as i64),
            AppMessage::PageUp => self.scroll_by(-(self.content_height().max(2) as i64 - 1)),
            AppMessage::PageDown => self.scroll_by(self.content_height().max(2) as i64 - 1),
            AppMessage::Navigate(direction) => self.navigate(direction),
            AppMessage::JumpTo(section) => self.set_section(section),
            AppMessage::NextSection => self.set_section(self.page.section.next()),
            AppMessage::PreviousSection => self.set_section(self.page.section.previous()),
            AppMessage::Activate => self.activate(),
            AppMessage::OpenAddSong => {
                self.set_section(Section::Playlist);
                self.playlist_modal.open();
            }
            AppMessage::RemoveSelected => {
                if self.page.section == Section::Playlist
                    && let Some(index) = self.playlist.selected()
                {
                    self.playlist.request_removal(index);
                }
            }
            AppMessage::ConfirmRemoval => {
                if self.playlist.confirm_removal(&self.playlist_store) {
                    self.observe_sections(Instant::now());
                }
            }
            AppMessage::CancelRemoval => self.playlist.cancel_removal(),
            AppMessage::FocusNext => self.focus_step(true),
            AppMessage::FocusPrevious => self.focus_step(false),
            AppMessage::Blur => self.focus_feedback(None),
            AppMessage::Edit(op) => self.apply_edit(op),
            AppMessage::Paste(text) => self.paste(&text),
            AppMessage::Submit => self.submit(),
            AppMessage::CloseModal => self.close_modal(),
            AppMessage::DismissNotice => {
                self.notices.dismiss_confirmation();
            }
        }
    }

    fn scroll_by(&mut self, delta: i64) {
        if self.scroll_locked() {
            return;
        }
        let max = self.page_layout().max_scroll(self.content_height()) as i64;
        self.page.scroll = (self.page.scroll as i64 + delta).clamp(0, max) as u32;
        self.observe_sections(Instant::now());
    }

    fn set_section(&mut self, section: Section) {
        if self.page.feedback_field.is_some() {
            self.focus_feedback(None);
        }
        self.page.section = section;
        self.page.scroll =
            self.page_layout()
                .scroll_to(section, self.page.scroll, self.content_height());
        self.observe_sections(Instant::now());
    }

    fn navigate(&mut self, direction: Direction) {
        match (self.page.section, direction) {
            (Section::Gallery, Direction::Up) => {
                self.page.gallery_index = self.page.gallery_index.saturating_sub(1);
            }
            (Section::Gallery, Direction::Down) => {
                if self.page.gallery_index + 1 < self.config.images.len() {
                    self.page.gallery_index += 1;
                }
            }
            (Section::Playlist, Direction::Up) => self.playlist.select_previous(),
            (Section::Playlist, Direction::Down) => self.playlist.select_next(),
            (_, Direction::Up) => self.scroll_by(-1),
            (_, Direction::Down) => self.scroll_by(1),
        }
    }

    fn activate(&mut self) {
        match self.page.section {
            Section::Gallery => {
                if let Some(image) = self.config.images.get(self.page.gallery_index) {
                    self.image_modal.open(image);
                }
            }
            Section::Playlist => self.playlist_modal.open(),
            Section::Feedback => self.focus_feedback(Some(FeedbackField::Email)),
            Section::About => {}
        }
    }

    /// Moves keyboard focus between feedback inputs. Leaving a field is a
    /// blur and validates it.
    fn focus_feedback(&mut self, field: Option<FeedbackField>) {
        if let Some(current) = self.page.feedback_field
            && Some(current) != field
        {
            self.feedback.blur(current);
        }
        self.page.feedback_field = field;
        if field.is_some() {
            self.page.section = Section::Feedback;
        }
    }

    fn focus_step(&mut self, forward: bool) {
        if self.playlist_modal.is_open() {
            self.playlist_modal.focus = self.playlist_modal.focus.toggled();
            return;
        }

        let Some(current) = self.page.feedback_field else {
            return;
        };
        let target = if forward {
            current.next()
        } else {
            current.previous()
        };
        match target {
            Some(field) => self.focus_feedback(Some(field)),
            None if forward => self.set_section(Section::Feedback.next()),
            None => self.set_section(Section::Feedback.previous()),
        }
    }

    fn apply_edit(&mut self, op: EditOp) {
        if self.playlist_modal.is_open() {
            edit(self.playlist_modal.focused_mut(), op);
        } else if let Some(field) = self.page.feedback_field {
            edit(self.feedback.field_mut(field), op);
            self.feedback.input(field);
        }
    }

    fn paste(&mut self, text: &str) {
        if self.playlist_modal.is_open() {
            self.playlist_modal.focused_mut().insert_str(text);
        } else if let Some(field) = self.page.feedback_field {
            self.feedback.field_mut(field).insert_str(text);
            self.feedback.input(field);
        }
    }

    fn submit(&mut self) {
        if self.playlist_modal.is_open() {
            if let ModalSubmit::Added(songs) = self.playlist_modal.submit(&self.playlist_store) {
                self.playlist.refresh(songs);
                self.show_toast(SONG_ADDED);
                self.observe_sections(Instant::now());
            }
        } else if self.page.section == Section::Feedback
            && self.feedback.submit() == SubmitOutcome::Accepted
        {
            self.page.feedback_field = None;
            self.notices.confirm(CONFIRMATION);
        }
    }

    fn show_toast(&mut self, text: &str) {
        let id = self.notices.toast(text);
        self.task_manager.schedule(
            "toast",
            self.config.notice_ttl(),
            self.event_tx.clone(),
            Event::NoticeExpired(id),
        );
    }

    fn close_modal(&mut self) {
        if !self.image_modal.handle_escape() && self.playlist_modal.is_open() {
            self.playlist_modal.close();
        }
    }

    /// Left click at a terminal cell.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.notices.dismiss_confirmation() {
            return;
        }
        if let Some(area) = self.active_modal_area() {
            if !contains(area, column, row) {
                self.close_modal();
            }
            return;
        }
        if self.playlist.pending_removal().is_some() {
            return;
        }

        let (header, content, _) = layout::split_screen(self.viewport);
        if contains(theme_toggle_area(header), column, row) {
            self.theme.toggle_theme();
            return;
        }
        if !contains(content, column, row) {
            return;
        }

        let page_row = self.page.scroll + (row - content.y) as u32;
        let layout = self.page_layout();
        let Some(section) = layout.section_at(page_row) else {
            return;
        };
        if section != self.page.section {
            self.set_section(section);
        }

        // Item rows start one below the section's top border.
        let row_in_section = (page_row - layout.span(section).top) as usize;
        let Some(offset) = row_in_section.checked_sub(1) else {
            return;
        };
        match section {
            Section::Gallery if offset < self.config.images.len() => {
                self.page.gallery_index = offset;
                self.activate();
            }
            // Two rows per song: label, then link.
            Section::Playlist => {
                self.playlist.select(offset / 2);
            }
            _ => {}
        }
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.viewport {
            self.resize(area);
        }

        let now = Instant::now();
        let palette = self.theme.palette();
        let theme = self.theme.applied().unwrap_or_default();
        let mode = self.input_mode();
        let (header, content, footer) = layout::split_screen(area);
        let layout = self.page_layout();
        let focused = self.page.section;

        let mut page = page_buffer(content.width, layout.total, palette);
        draw_section(
            &mut page,
            layout.span(Section::About),
            AboutSection::new(&self.config.about, focused == Section::About, palette),
        );
        draw_section(
            &mut page,
            layout.span(Section::Gallery),
            GallerySection::new(
                &self.config.images,
                self.page.gallery_index,
                focused == Section::Gallery,
                palette,
            ),
        );
        draw_section(
            &mut page,
            layout.span(Section::Playlist),
            PlaylistSection::new(
                self.playlist.render(),
                self.playlist.selected(),
                focused == Section::Playlist,
                palette,
            ),
        );
        draw_section(
            &mut page,
            layout.span(Section::Feedback),
            FeedbackSection::new(
                &self.feedback,
                self.page.feedback_field,
                focused == Section::Feedback,
                palette,
            ),
        );

        let layers: Vec<SectionLayer> = Section::ALL
            .iter()
            .map(|section| SectionLayer {
                span: layout.span(*section),
                style: self.reveal.style(section.index(), now),
            })
            .collect();
        composite(
            &page,
            &layers,
            self.page.scroll,
            palette,
            content,
            frame.buffer_mut(),
        );

        frame.render_widget(Header::new(&self.config.title, focused, theme, palette), header);
        frame.render_widget(Footer::new(mode, palette), footer);

        if let Some(image) = self.image_modal.image() {
            frame.render_widget(ImageModalView::new(image, palette), image_modal_area(area));
        }
        if self.playlist_modal.is_open() {
            frame.render_widget(
                PlaylistModalView::new(&self.playlist_modal, palette),
                playlist_modal_area(area),
            );
        }
        if self.playlist.pending_removal().is_some() {
            frame.render_widget(
                Dialog::new("Remove song", CONFIRM_REMOVE, "[y] Remove   [n] Keep", palette),
                dialog_area(area),
            );
        }
        if let Some(notice) = self.notices.confirmation() {
            frame.render_widget(
                Dialog::new("Thank you", &notice.text, "Press any key", palette),
                dialog_area(area),
            );
        }
        if let Some(toast) = self.notices.current_toast() {
            frame.render_widget(Toast::new(&toast.text, palette), toast_area(area, &toast.text));
        }
    }
}

fn edit(field: &mut TextField, op: EditOp) {
    match op {
        EditOp::Insert(c) => field.insert(c),
        EditOp::Backspace => field.backspace(),
        EditOp::Delete => field.delete(),
        EditOp::Left => field.move_left(),
        EditOp::Right => field.move_right(),
        EditOp::Home => field.move_home(),
        EditOp::End => field.move_end(),
    }
}
