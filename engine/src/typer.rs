//! The typing headline animation: a perpetual reveal/delete cycle over a
//! rotating phrase list.
//!
//! The animation is an explicit state machine advanced by the frame loop.
//! Exactly one pending deadline exists while the typer runs; `start`
//! replaces the whole state including that deadline, so a predecessor run
//! structurally cannot fire after a restart.
//!
//! # State Machine
//! ```text
//!              reveal tick (110ms)
//!            ┌──────────────────┐
//!            v                  │
//! ┌─────────────────┐           │
//! │ Revealing       │ ──full────┼──> hold 2500ms, then Deleting
//! └─────────────────┘           │
//! ┌─────────────────┐           │
//! │ Deleting (55ms) │ ──empty───┴──> next phrase (mod len), rest 450ms
//! └─────────────────┘
//! ```

use std::time::{Duration, Instant};

use unicode_segmentation::UnicodeSegmentation;

/// Delay after revealing one more grapheme.
pub const REVEAL_DELAY: Duration = Duration::from_millis(110);
/// Delay after deleting one grapheme.
pub const DELETE_DELAY: Duration = Duration::from_millis(55);
/// Hold on the fully revealed phrase before deleting begins.
pub const HOLD_DELAY: Duration = Duration::from_millis(2500);
/// Rest on the empty display before the next phrase starts revealing.
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(450);

/// Perpetual reveal/delete animation over a phrase list.
#[derive(Debug)]
pub struct Typer {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    /// The single pending tick. `None` means the typer is stopped.
    deadline: Option<Instant>,
}

impl Typer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phrases: Vec::new(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            deadline: None,
        }
    }

    /// Begin (or restart) the cycle over a new phrase list.
    ///
    /// Resets the cursor to the start of the first phrase and arms an
    /// immediate first tick. Any in-flight run is cancelled by the state
    /// replacement; its pending tick can never fire.
    pub fn start(&mut self, phrases: Vec<String>, now: Instant) {
        if phrases.is_empty() {
            // Callers substitute the default language's list before getting
            // here; an empty list stops the typer rather than panicking.
            tracing::warn!("typer started with empty phrase list; stopping");
            self.phrases = phrases;
            self.deadline = None;
            self.char_index = 0;
            self.phrase_index = 0;
            self.deleting = false;
            return;
        }
        self.phrases = phrases;
        self.phrase_index = 0;
        self.char_index = 0;
        self.deleting = false;
        self.deadline = Some(now);
    }

    /// Advance the animation if the pending tick is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        let delay = self.step();
        self.deadline = Some(now + delay);
    }

    /// One animation step. Returns the delay until the next one.
    fn step(&mut self) -> Duration {
        let len = self.current_len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }

        let mut delay = if self.deleting {
            DELETE_DELAY
        } else {
            REVEAL_DELAY
        };

        if !self.deleting && self.char_index == len {
            delay = HOLD_DELAY;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay = NEXT_PHRASE_DELAY;
        }

        delay
    }

    /// The currently visible prefix of the active phrase.
    #[must_use]
    pub fn display(&self) -> String {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return String::new();
        };
        phrase.graphemes(true).take(self.char_index).collect()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// When the next step is due (tests drive the clock through this).
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p.graphemes(true).count())
            .unwrap_or(0)
    }
}

impl Default for Typer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    /// Run the typer until its next deadline, once.
    fn advance(typer: &mut Typer) {
        let due = typer.next_deadline().expect("typer running");
        typer.tick(due);
    }

    #[test]
    fn reveals_one_grapheme_per_tick() {
        let mut typer = Typer::new();
        typer.start(phrases(&["Beautifully"]), Instant::now());

        advance(&mut typer);
        assert_eq!(typer.display(), "B");
        advance(&mut typer);
        assert_eq!(typer.display(), "Be");
        assert!(!typer.is_deleting());
    }

    #[test]
    fn full_reveal_switches_to_deleting_with_hold() {
        let mut typer = Typer::new();
        typer.start(phrases(&["Hi"]), Instant::now());

        advance(&mut typer); // "H"
        let before_full = typer.next_deadline().expect("running");
        advance(&mut typer); // "Hi" - full
        assert_eq!(typer.display(), "Hi");
        assert!(typer.is_deleting());
        let after_full = typer.next_deadline().expect("running");
        assert_eq!(after_full - before_full, HOLD_DELAY);
    }

    #[test]
    fn delete_to_empty_advances_phrase_modulo_len() {
        let mut typer = Typer::new();
        typer.start(phrases(&["A", "B"]), Instant::now());

        // Phrase 0: reveal "A", hold, delete to empty.
        advance(&mut typer);
        assert!(typer.is_deleting());
        advance(&mut typer);
        assert_eq!(typer.display(), "");
        assert_eq!(typer.phrase_index(), 1, "advances to B");
        assert!(!typer.is_deleting());

        // Phrase 1: full cycle wraps back to phrase 0.
        advance(&mut typer);
        advance(&mut typer);
        assert_eq!(typer.phrase_index(), 0, "wraps modulo list length");
    }

    #[test]
    fn restart_cancels_previous_run() {
        let mut typer = Typer::new();
        let t0 = Instant::now();
        typer.start(phrases(&["Perfectly"]), t0);
        advance(&mut typer);
        advance(&mut typer);
        assert_eq!(typer.display(), "Pe");

        // Restart with a new list: state resets wholesale, and exactly one
        // deadline exists - the old chain cannot fire.
        typer.start(phrases(&["Hermosamente"]), t0);
        assert_eq!(typer.char_index(), 0);
        assert_eq!(typer.phrase_index(), 0);
        assert!(!typer.is_deleting());
        assert_eq!(typer.next_deadline(), Some(t0));

        advance(&mut typer);
        assert_eq!(typer.display(), "H", "only the new list drives the display");
    }

    #[test]
    fn hebrew_phrases_step_by_grapheme() {
        let mut typer = Typer::new();
        typer.start(phrases(&["בקלות"]), Instant::now());

        advance(&mut typer);
        assert_eq!(typer.display(), "ב");
        for _ in 0..4 {
            advance(&mut typer);
        }
        assert_eq!(typer.display(), "בקלות");
        assert!(typer.is_deleting());
    }

    #[test]
    fn empty_list_stops_instead_of_panicking() {
        let mut typer = Typer::new();
        typer.start(Vec::new(), Instant::now());
        assert!(!typer.is_running());
        assert_eq!(typer.display(), "");
        typer.tick(Instant::now());
    }

    #[test]
    fn first_tick_is_armed_immediately() {
        let mut typer = Typer::new();
        let t0 = Instant::now();
        typer.start(phrases(&["Go"]), t0);
        assert_eq!(typer.next_deadline(), Some(t0));
    }

    #[test]
    fn delay_cadence_matches_reveal_and_delete_speeds() {
        let mut typer = Typer::new();
        typer.start(phrases(&["abc"]), Instant::now());

        let before = typer.next_deadline().expect("running");
        advance(&mut typer); // reveal "a"
        let after = typer.next_deadline().expect("running");
        assert_eq!(after - before, REVEAL_DELAY);

        advance(&mut typer); // "ab"
        advance(&mut typer); // "abc" -> hold
        let before_delete = typer.next_deadline().expect("running");
        advance(&mut typer); // delete "ab"
        let after_delete = typer.next_deadline().expect("running");
        assert_eq!(after_delete - before_delete, DELETE_DELAY);
    }
}
