use serde::Deserialize;
use tracing::debug;

/// Gallery image as configured: a location and its alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Lightbox for a single enlarged image. Open state carries a copy of the
/// activated image's source and alt text.
#[derive(Debug, Clone, Default)]
pub struct ImageModal {
    shown: Option<ImageRef>,
}

impl ImageModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.shown.as_ref()
    }

    pub fn open(&mut self, image: &ImageRef) {
        debug!("Opening image {}", image.src);
        self.shown = Some(image.clone());
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    /// Escape closes the lightbox only while it is open. Returns whether the
    /// key was consumed.
    pub fn handle_escape(&mut self) -> bool {
        if self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_copies_source_and_alt() {
        let mut modal = ImageModal::new();
        let image = ImageRef::new("assets/setup.png", "My desk setup");
        modal.open(&image);

        assert!(modal.is_open());
        assert_eq!(modal.image(), Some(&image));
    }

    #[test]
    fn reopening_replaces_image() {
        let mut modal = ImageModal::new();
        modal.open(&ImageRef::new("a.png", "A"));
        modal.open(&ImageRef::new("b.png", "B"));
        assert_eq!(modal.image().map(|i| i.src.as_str()), Some("b.png"));
    }

    #[test]
    fn escape_only_acts_when_open() {
        let mut modal = ImageModal::new();
        assert!(!modal.handle_escape());

        modal.open(&ImageRef::new("a.png", "A"));
        assert!(modal.handle_escape());
        assert!(!modal.is_open());
        assert!(!modal.handle_escape());
    }
}
