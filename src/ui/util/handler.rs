use std::time::Instant;

use ratatui::{
    crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use tracing::{debug, warn};

use crate::ui::{
    app::App,
    input::InputHandler,
    message::AppMessage,
    tui::{TerminalEvent, Tui},
};

const WHEEL_ROWS: u32 = 3;

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains the application
    /// events that arrived meanwhile. Returns whether to redraw.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        match tui.next().await {
            Some(evt) => {
                if Self::handle_event(app, evt, tui)? {
                    should_render = true;
                }
            }
            None => app.should_quit = true,
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.handle_event(evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {
                let size = tui.size()?;
                app.resize(Rect::new(0, 0, size.width, size.height));
            }
            TerminalEvent::Closed => app.should_quit = true,
            TerminalEvent::Error => {
                warn!("Terminal reported an input error");
                return Ok(false);
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
            TerminalEvent::Paste(text) => {
                if app.input_mode().accepts_text() {
                    app.update(AppMessage::Paste(text));
                }
            }
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Tick => {
                return Ok(app.on_tick(Instant::now()) && app.has_focus);
            }
        }

        Ok(true)
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if let Some(msg) = InputHandler::handle_key(evt, app.input_mode()) {
            debug!("{}", msg.log_label());
            app.update(msg);
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        match evt.kind {
            MouseEventKind::ScrollUp => app.update(AppMessage::ScrollUp(WHEEL_ROWS)),
            MouseEventKind::ScrollDown => app.update(AppMessage::ScrollDown(WHEEL_ROWS)),
            MouseEventKind::Down(MouseButton::Left) => app.click(evt.column, evt.row),
            _ => {}
        }
    }
}
