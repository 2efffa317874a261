//! Light/dark theme preference.
//!
//! The applied theme is the page-level attribute every widget reads its
//! colours from. The preference is persisted under [`THEME_KEY`] as
//! `"light"` or `"dark"`.

use std::fmt;

use ratatui::style::Color;
use tracing::{debug, warn};

use crate::{storage::SharedStore, util::colors};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the terminal's background hint (`COLORFGBG`, formatted `fg;bg` or
/// `fg;default;bg`). Background indices 7 and 15 are light, 0-6 and 8 are dark.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match bg {
        7 | 15 => Some(Theme::Light),
        0..=6 | 8 => Some(Theme::Dark),
        _ => None,
    }
}

pub fn system_preference() -> Option<Theme> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
}

/// Named colour slots used by the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub secondary: Color,
    pub input_border: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: colors::DARK_BACKGROUND,
            surface: colors::DARK_SURFACE,
            text: colors::DARK_TEXT,
            text_dim: colors::DARK_TEXT_DIM,
            accent: colors::NEON_CYAN,
            secondary: colors::NEON_MAGENTA,
            input_border: colors::DARK_INPUT_BORDER,
            error: colors::ERROR_RED,
            success: colors::SUCCESS_GREEN,
        }
    }

    pub fn light() -> Self {
        Self {
            background: colors::LIGHT_BACKGROUND,
            surface: colors::LIGHT_SURFACE,
            text: colors::LIGHT_TEXT,
            text_dim: colors::LIGHT_TEXT_DIM,
            accent: colors::LIGHT_ACCENT,
            secondary: colors::NEON_MAGENTA,
            input_border: colors::LIGHT_INPUT_BORDER,
            error: colors::ERROR_RED,
            success: colors::SUCCESS_GREEN,
        }
    }
}

pub struct ThemeManager {
    store: SharedStore,
    system: Option<Theme>,
    applied: Option<Theme>,
}

impl ThemeManager {
    pub fn new(store: SharedStore, system: Option<Theme>) -> Self {
        Self {
            store,
            system,
            applied: None,
        }
    }

    /// Persisted preference, else the system preference, else dark.
    pub fn get_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(saved)) => {
                if let Some(theme) = Theme::parse(&saved) {
                    return theme;
                }
                warn!("Ignoring unknown stored theme {:?}", saved);
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read theme preference: {}", e),
        }
        self.system.unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.applied = Some(theme);
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!("Failed to persist theme {}: {}", theme, e);
        }
        debug!("Theme set to {}", theme);
    }

    pub fn toggle_theme(&mut self) {
        let current = self.applied.unwrap_or_default();
        self.set_theme(current.toggled());
    }

    /// Applies the stored or system theme. Called once at start-up.
    pub fn init(&mut self) {
        let theme = self.get_theme();
        self.set_theme(theme);
    }

    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }

    pub fn palette(&self) -> Palette {
        self.applied.unwrap_or_default().palette()
    }
}
