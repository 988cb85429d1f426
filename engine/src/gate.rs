//! Passphrase gate guarding the page.
//!
//! The gate renders as a blocking overlay; while it is locked the page
//! underneath receives no input. Unlocking is published on a watch channel
//! so that observers (the boot sequencer) react to the transition without
//! the gate calling back into them.
//!
//! # State Machine
//! ```text
//! ┌────────┐  submit(match)     ┌──────────┐
//! │ Locked │ ─────────────────> │ Unlocked │  (terminal for the page lifetime)
//! └────────┘                    └──────────┘
//!     │ ^
//!     │ │ submit(no match): error shown, input cleared
//!     └─┘
//! ```

use tokio::sync::watch;

/// Gate state, monotonic per page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Outcome of a single submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Secret matched; the gate is now (or already was) unlocked.
    Unlocked,
    /// Secret did not match; the gate stays locked and shows an error.
    Rejected,
}

const MISMATCH_MESSAGE: &str = "Incorrect passphrase.";

/// The access gate: overlay visibility, the typed candidate, and the
/// monotonic lock state.
#[derive(Debug)]
pub struct AccessGate {
    state: GateState,
    expected: String,
    input: String,
    error: Option<&'static str>,
    visible: bool,
    notify: watch::Sender<GateState>,
}

impl AccessGate {
    #[must_use]
    pub fn new(expected: impl Into<String>) -> Self {
        let (notify, _) = watch::channel(GateState::Locked);
        Self {
            state: GateState::Locked,
            expected: expected.into(),
            input: String::new(),
            error: None,
            visible: false,
            notify,
        }
    }

    /// Show the blocking overlay. No-op once unlocked.
    pub fn present(&mut self) {
        if self.state == GateState::Locked {
            self.visible = true;
        }
    }

    /// Observation channel for the lock state. Receivers see the current
    /// value immediately and every transition afterwards.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.notify.subscribe()
    }

    /// Compare a candidate against the expected secret.
    ///
    /// Match: hides the overlay, publishes `Unlocked`. Mismatch: inline
    /// error, input cleared, unlimited retries. Calls after unlock are
    /// no-ops.
    pub fn submit(&mut self, candidate: &str) -> SubmitOutcome {
        if self.state == GateState::Unlocked {
            return SubmitOutcome::Unlocked;
        }
        if candidate == self.expected {
            self.state = GateState::Unlocked;
            self.visible = false;
            self.error = None;
            self.input.clear();
            // Send fails only with zero receivers; the transition is still
            // recorded for later subscribers.
            let _ = self.notify.send(GateState::Unlocked);
            tracing::info!("gate unlocked");
            SubmitOutcome::Unlocked
        } else {
            self.error = Some(MISMATCH_MESSAGE);
            self.input.clear();
            SubmitOutcome::Rejected
        }
    }

    /// Submit whatever has been typed into the overlay input.
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let candidate = std::mem::take(&mut self.input);
        self.submit(&candidate)
    }

    pub fn push_char(&mut self, c: char) {
        if self.state == GateState::Locked {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Whether the blocking overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}
