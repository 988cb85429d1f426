//! The cookie-consent card.
//!
//! Armed only after the startup locale resolution so its copy is already
//! translated when it appears. The reveal delay is internal to the card.
//!
//! # State Machine
//! ```text
//! Hidden --arm(already accepted)--> Dismissed
//! Hidden --arm--> Armed{reveal_at} --tick past deadline--> Visible --accept--> Dismissed
//! ```

use std::time::{Duration, Instant};

/// Delay between arming and the card becoming visible.
pub const REVEAL_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieCard {
    /// Not armed yet (page still booting).
    Hidden,
    /// Armed; will reveal once the deadline passes.
    Armed { reveal_at: Instant },
    /// On screen, awaiting acknowledgement.
    Visible,
    /// Acknowledged (this run or a previous one); never shown again.
    Dismissed,
}

impl CookieCard {
    #[must_use]
    pub fn new() -> Self {
        Self::Hidden
    }

    /// Arm the card. A previously-persisted acknowledgement skips the
    /// reveal entirely.
    pub fn arm(&mut self, already_accepted: bool, now: Instant) {
        if *self != Self::Hidden {
            return;
        }
        *self = if already_accepted {
            Self::Dismissed
        } else {
            Self::Armed {
                reveal_at: now + REVEAL_DELAY,
            }
        };
    }

    pub fn tick(&mut self, now: Instant) {
        if let Self::Armed { reveal_at } = *self
            && now >= reveal_at
        {
            *self = Self::Visible;
        }
    }

    /// Acknowledge the card. Returns `true` when this is a fresh
    /// acknowledgement the caller should persist.
    pub fn accept(&mut self) -> bool {
        if *self == Self::Visible {
            *self = Self::Dismissed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        *self == Self::Visible
    }
}

impl Default for CookieCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_after_the_delay() {
        let mut card = CookieCard::new();
        let t0 = Instant::now();
        card.arm(false, t0);

        card.tick(t0 + Duration::from_millis(500));
        assert!(!card.is_visible());

        card.tick(t0 + REVEAL_DELAY);
        assert!(card.is_visible());
    }

    #[test]
    fn prior_acknowledgement_skips_the_card() {
        let mut card = CookieCard::new();
        let t0 = Instant::now();
        card.arm(true, t0);

        card.tick(t0 + REVEAL_DELAY * 2);
        assert!(!card.is_visible());
        assert_eq!(card, CookieCard::Dismissed);
    }

    #[test]
    fn accept_reports_fresh_acknowledgement_once() {
        let mut card = CookieCard::new();
        let t0 = Instant::now();
        card.arm(false, t0);
        card.tick(t0 + REVEAL_DELAY);

        assert!(card.accept(), "first accept should be persisted");
        assert!(!card.accept(), "repeat accepts are no-ops");
        assert!(!card.is_visible());
    }

    #[test]
    fn accept_before_reveal_is_a_no_op() {
        let mut card = CookieCard::new();
        card.arm(false, Instant::now());
        assert!(!card.accept());
    }

    #[test]
    fn arming_twice_keeps_the_first_deadline() {
        let mut card = CookieCard::new();
        let t0 = Instant::now();
        card.arm(false, t0);
        let first = card;
        card.arm(false, t0 + Duration::from_secs(30));
        assert_eq!(card, first);
    }
}
