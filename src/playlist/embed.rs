//! Spotify embed acceptance and parsing.
//!
//! Accepted markup is never displayed as-is: it is reduced to a
//! [`SpotifyEmbed`] and rendered from a fixed template.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IFRAME_PATTERN: Regex = Regex::new(
        r#"(?i)<iframe[^>]*src\s*=\s*["']https://open\.spotify\.com/embed/[^"']*["'][^>]*></iframe>"#
    )
    .expect("iframe pattern compiles");
    static ref SRC_PATTERN: Regex =
        Regex::new(r#"(?i)src\s*=\s*["']https://open\.spotify\.com/embed/([^"']*)["']"#)
            .expect("src pattern compiles");
}

/// Shape check on the trimmed markup. Not a sanitizer: other attributes next
/// to the matched `src` are not inspected.
pub fn validate_iframe(markup: &str) -> bool {
    IFRAME_PATTERN.is_match(markup.trim())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedKind {
    Track,
    Album,
    Playlist,
    Artist,
    Episode,
    Show,
    Other(String),
}

impl EmbedKind {
    fn from_segment(segment: &str) -> Self {
        match segment.to_ascii_lowercase().as_str() {
            "track" => EmbedKind::Track,
            "album" => EmbedKind::Album,
            "playlist" => EmbedKind::Playlist,
            "artist" => EmbedKind::Artist,
            "episode" => EmbedKind::Episode,
            "show" => EmbedKind::Show,
            other => EmbedKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EmbedKind::Track => "track",
            EmbedKind::Album => "album",
            EmbedKind::Playlist => "playlist",
            EmbedKind::Artist => "artist",
            EmbedKind::Episode => "episode",
            EmbedKind::Show => "show",
            EmbedKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEmbed {
    pub kind: EmbedKind,
    pub id: String,
}

impl SpotifyEmbed {
    /// Parses markup that passes [`validate_iframe`] into kind and resource
    /// id. Query strings are dropped; ids are restricted to alphanumerics.
    pub fn parse(markup: &str) -> Option<Self> {
        let markup = markup.trim();
        if !validate_iframe(markup) {
            return None;
        }

        let path = SRC_PATTERN.captures(markup)?.get(1)?.as_str();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let kind = segments.next()?;
        let id = segments.next()?;

        let is_token = |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_token(kind) || !is_token(id) {
            return None;
        }

        Some(Self {
            kind: EmbedKind::from_segment(kind),
            id: id.to_string(),
        })
    }

    pub fn open_url(&self) -> String {
        format!("https://open.spotify.com/{}/{}", self.kind, self.id)
    }

    pub fn label(&self) -> String {
        format!("♪ Spotify {} · {}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = r#"<iframe src="https://open.spotify.com/embed/track/123"></iframe>"#;

    #[test]
    fn accepts_spotify_embed() {
        assert!(validate_iframe(TRACK));
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(!validate_iframe(r#"<iframe src="https://evil.example.com"></iframe>"#));
        assert!(!validate_iframe(r#"<iframe src="http://open.spotify.com/embed/track/1"></iframe>"#));
        assert!(!validate_iframe(r#"<iframe src="https://open.spotify.com/track/1"></iframe>"#));
    }

    #[test]
    fn accepts_real_world_generator_output() {
        let markup = r#"
            <IFRAME style="border-radius:12px" SRC='https://open.spotify.com/embed/album/4aawyAB9vmqN3uQ7FjRGTy?utm_source=generator' width="100%" height="352" frameBorder="0" allowfullscreen="" loading="lazy"></IFRAME>
        "#;
        assert!(validate_iframe(markup));

        let embed = SpotifyEmbed::parse(markup).unwrap();
        assert_eq!(embed.kind, EmbedKind::Album);
        assert_eq!(embed.id, "4aawyAB9vmqN3uQ7FjRGTy");
        assert_eq!(embed.open_url(), "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy");
    }

    #[test]
    fn rejects_unclosed_or_missing_tag() {
        assert!(!validate_iframe(r#"<iframe src="https://open.spotify.com/embed/track/1">"#));
        assert!(!validate_iframe("https://open.spotify.com/embed/track/1"));
        assert!(!validate_iframe(""));
    }

    #[test]
    fn parse_track() {
        let embed = SpotifyEmbed::parse(TRACK).unwrap();
        assert_eq!(embed.kind, EmbedKind::Track);
        assert_eq!(embed.id, "123");
        assert_eq!(embed.label(), "♪ Spotify track · 123");
    }

    #[test]
    fn parse_requires_kind_and_id() {
        let bare = r#"<iframe src="https://open.spotify.com/embed/"></iframe>"#;
        assert!(validate_iframe(bare));
        assert_eq!(SpotifyEmbed::parse(bare), None);
    }

    #[test]
    fn parse_rejects_markup_in_id() {
        let sneaky =
            r#"<iframe src="https://open.spotify.com/embed/track/<b>1</b>"></iframe>"#;
        assert_eq!(SpotifyEmbed::parse(sneaky), None);
    }

    #[test]
    fn parse_keeps_unknown_kinds() {
        let markup = r#"<iframe src="https://open.spotify.com/embed/audiobook/9z"></iframe>"#;
        let embed = SpotifyEmbed::parse(markup).unwrap();
        assert_eq!(embed.kind, EmbedKind::Other("audiobook".into()));
    }
}
