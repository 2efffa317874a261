use std::{
    io::Stdout,
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend, crossterm};
use tracing::{debug, warn};

pub const DEFAULT_FRAME_RATE: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    Init,
    /// The input stream failed once; reading continues.
    Error,
    /// The input stream ended.
    Closed,
    Tick,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Maps raw crossterm input. Key releases and repeats are dropped.
    pub fn from_crossterm(evt: CrosstermEvent) -> Option<Self> {
        match evt {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            CrosstermEvent::Key(_) => None,
            CrosstermEvent::Mouse(mouse) => Some(Self::Mouse(mouse)),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize(width, height)),
            CrosstermEvent::FocusGained => Some(Self::FocusGained),
            CrosstermEvent::FocusLost => Some(Self::FocusLost),
            CrosstermEvent::Paste(text) => Some(Self::Paste(text)),
        }
    }
}

/// Terminal in raw mode on the alternate screen. Input is read on a
/// spawned task and merged with a frame tick into one channel.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_rx: Receiver<TerminalEvent>,
    event_tx: Sender<TerminalEvent>,
    frame_rate: f64,
    mouse: bool,
    paste: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(std::io::stdout()))?,
            event_rx,
            event_tx,
            frame_rate: DEFAULT_FRAME_RATE,
            mouse: false,
            paste: false,
        })
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = paste;
        self
    }

    fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1.0))
    }

    fn start(&self) {
        debug!("Starting input reader at {} fps", self.frame_rate);
        tokio::spawn(read_input(self.event_tx.clone(), self.tick_period()));
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            crossterm::execute!(stdout, EnableMouseCapture)?;
        }
        if self.paste {
            crossterm::execute!(stdout, EnableBracketedPaste)?;
        }
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !crossterm::terminal::is_raw_mode_enabled()? {
            return Ok(());
        }
        self.terminal.flush()?;
        let mut stdout = std::io::stdout();
        if self.paste {
            crossterm::execute!(stdout, DisableBracketedPaste)?;
        }
        if self.mouse {
            crossterm::execute!(stdout, DisableMouseCapture)?;
        }
        Self::restore()
    }

    /// Leaves the alternate screen and raw mode. Safe to call from a panic
    /// hook.
    pub fn restore() -> Result<()> {
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

async fn read_input(tx: Sender<TerminalEvent>, tick_period: Duration) {
    let mut reader = EventStream::new();
    let mut ticks = tokio::time::interval(tick_period);
    loop {
        let evt = tokio::select! {
            _ = ticks.tick() => Some(TerminalEvent::Tick),
            input = reader.next().fuse() => match input {
                Some(Ok(evt)) => TerminalEvent::from_crossterm(evt),
                Some(Err(e)) => {
                    warn!("Failed to read terminal input: {}", e);
                    Some(TerminalEvent::Error)
                }
                None => {
                    let _ = tx.send_async(TerminalEvent::Closed).await;
                    break;
                }
            },
        };

        if let Some(evt) = evt
            && tx.send_async(evt).await.is_err()
        {
            break;
        }
    }
}

impl Deref for Tui {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
