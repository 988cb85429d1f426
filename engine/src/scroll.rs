//! Smooth in-page scrolling and the hide-on-scroll header.
//!
//! Anchor jumps animate over a fixed duration with cubic ease-in-out;
//! manual scrolling cancels any in-flight animation. The header hides
//! when the page scrolls down past a threshold and reappears on the
//! first upward movement.

use std::time::{Duration, Instant};

/// Anchor jump animation length.
pub const SCROLL_DURATION: Duration = Duration::from_millis(800);
/// Rows kept above an anchor target so the header doesn't cover it.
pub const ANCHOR_OFFSET: f32 = 2.0;
/// Scroll depth (rows) past which downward movement hides the header.
pub const HEADER_HIDE_THRESHOLD: f32 = 4.0;

#[derive(Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Vertical scroll position plus header visibility.
#[derive(Debug)]
pub struct ScrollState {
    offset: f32,
    last_offset: f32,
    header_hidden: bool,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            last_offset: 0.0,
            header_hidden: false,
            animation: None,
        }
    }

    /// Begin an eased jump to a target row (anchor offset applied).
    pub fn jump_to(&mut self, target_row: f32, now: Instant) {
        let to = (target_row - ANCHOR_OFFSET).max(0.0);
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: now,
        });
    }

    /// Manual scroll; cancels any in-flight animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.animation = None;
        self.set_offset((self.offset + delta).max(0.0));
    }

    /// Advance the animation, if one is running.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = &self.animation else {
            return;
        };
        let elapsed = now.saturating_duration_since(animation.started);
        let progress = (elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32()).min(1.0);
        let eased = ease_in_out_cubic(progress);
        let next = animation.from + (animation.to - animation.from) * eased;
        self.set_offset(next);
        if progress >= 1.0 {
            self.animation = None;
        }
    }

    fn set_offset(&mut self, next: f32) {
        self.last_offset = self.offset;
        self.offset = next;
        self.update_header();
    }

    fn update_header(&mut self) {
        if self.offset > HEADER_HIDE_THRESHOLD && self.offset > self.last_offset {
            self.header_hidden = true;
        } else {
            self.header_hidden = false;
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset in whole rows for rendering.
    #[must_use]
    pub fn offset_rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    #[must_use]
    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// The landing page's easing curve.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
