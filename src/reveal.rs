//! Fire-once fade/slide-in for page sections entering the viewport.
//!
//! Each section starts transparent and pushed down by `offset` rows. The
//! first time the visible fraction of a section inside the viewport (minus
//! the bottom margin) reaches the threshold, it eases to opaque and its
//! natural position. Revealed sections stay revealed.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f32,
    pub bottom_margin: u32,
    pub offset: u16,
    pub duration: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 2,
            offset: 2,
            duration: Duration::from_millis(600),
        }
    }
}

/// Vertical extent in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing { started: Instant },
    Shown,
}

/// How a section should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: u16,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset: 0,
    };
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    config: RevealConfig,
    states: Vec<RevealState>,
}

impl ScrollReveal {
    pub fn new(config: RevealConfig, sections: usize) -> Self {
        Self {
            config,
            states: vec![RevealState::Hidden; sections],
        }
    }

    pub fn state(&self, section: usize) -> Option<RevealState> {
        self.states.get(section).copied()
    }

    /// Fraction of `section` inside `viewport` after shrinking the viewport
    /// bottom by the configured margin.
    pub fn visible_ratio(&self, section: Span, viewport: Span) -> f32 {
        if section.height == 0 {
            return 0.0;
        }
        let root_bottom = viewport
            .bottom()
            .saturating_sub(self.config.bottom_margin)
            .max(viewport.top);
        let top = section.top.max(viewport.top);
        let bottom = section.bottom().min(root_bottom);
        bottom.saturating_sub(top) as f32 / section.height as f32
    }

    /// Checks every hidden section against the viewport and starts the
    /// transition for those that crossed the threshold. Returns their
    /// indices.
    pub fn observe(&mut self, spans: &[Span], viewport: Span, now: Instant) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, span) in spans.iter().enumerate() {
            if self.states.get(index) != Some(&RevealState::Hidden) {
                continue;
            }
            let ratio = self.visible_ratio(*span, viewport);
            if ratio > 0.0 && ratio >= self.config.threshold {
                trace!("Revealing section {} at ratio {:.2}", index, ratio);
                self.states[index] = RevealState::Revealing { started: now };
                revealed.push(index);
            }
        }
        revealed
    }

    /// Finishes transitions whose duration elapsed. Returns whether any
    /// section is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for state in &mut self.states {
            if let RevealState::Revealing { started } = *state {
                if now.saturating_duration_since(started) >= self.config.duration {
                    *state = RevealState::Shown;
                } else {
                    animating = true;
                }
            }
        }
        animating
    }

    pub fn style(&self, section: usize, now: Instant) -> RevealStyle {
        match self.states.get(section) {
            Some(RevealState::Hidden) => RevealStyle {
                opacity: 0.0,
                offset: self.config.offset,
            },
            Some(RevealState::Revealing { started }) => {
                let elapsed = now.saturating_duration_since(*started).as_secs_f32();
                let total = self.config.duration.as_secs_f32().max(f32::EPSILON);
                let eased = ease(elapsed / total);
                RevealStyle {
                    opacity: eased,
                    offset: (self.config.offset as f32 * (1.0 - eased)).round() as u16,
                }
            }
            Some(RevealState::Shown) | None => RevealStyle::VISIBLE,
        }
    }
}

/// Close approximation of CSS `ease`: quick start, long settle.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
