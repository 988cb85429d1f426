//! The boot sequencer: one-shot startup orchestration.
//!
//! The gate publishes its unlock on a watch channel; that channel may
//! redeliver or coalesce observations, so first-edge-only semantics are
//! enforced here, structurally: the phase can leave `AwaitingUnlock` only
//! once, and post-unlock initialization hangs off that single transition.
//!
//! # State Machine
//! ```text
//! ┌────────────────┐ first Unlocked  ┌────────────┐ locale resolution ┌───────┐
//! │ AwaitingUnlock │ ──────────────> │ Localizing │ ────────────────> │ Ready │
//! └────────────────┘  (subsystems    └────────────┘  (cookie card     └───────┘
//!                      start here)                    armed here)
//! ```
//!
//! Ordering guarantees: theme/scroll/nav/sparks start on the unlock edge
//! in no particular relative order; localization fully resolves (success
//! or exhausted fallback) before the typer starts; the cookie card is
//! armed only after that resolution.

use crate::gate::GateState;

/// Boot progress for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Gate overlay is up; nothing else runs.
    AwaitingUnlock,
    /// Subsystems are up; the startup locale resolution is in flight.
    Localizing,
    /// Resolution completed; the page is fully booted.
    Ready,
}

/// Edge-triggered sequencer over [`BootPhase`].
#[derive(Debug)]
pub struct BootSequencer {
    phase: BootPhase,
}

impl BootSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: BootPhase::AwaitingUnlock,
        }
    }

    #[must_use]
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Feed one gate observation. Returns `true` exactly once, on the
    /// first `Unlocked` seen; the caller runs post-unlock initialization
    /// if and only if this returns `true`.
    pub fn observe_gate(&mut self, state: GateState) -> bool {
        match (self.phase, state) {
            (BootPhase::AwaitingUnlock, GateState::Unlocked) => {
                self.phase = BootPhase::Localizing;
                true
            }
            _ => false,
        }
    }

    /// Mark the startup locale resolution complete (success or exhausted
    /// fallback). Returns `true` exactly once; the caller arms the cookie
    /// card on that edge.
    pub fn localization_resolved(&mut self) -> bool {
        if self.phase == BootPhase::Localizing {
            self.phase = BootPhase::Ready;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new()
    }
}
