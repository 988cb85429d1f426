//! The decorative spark field: slow particles drifting up the page
//! background.
//!
//! Geometry is randomized once at boot; motion is a pure function of the
//! frame clock, so the field needs no per-tick state.

use std::time::Instant;

use rand::{Rng, RngExt};

/// Number of sparks placed at boot.
pub const SPARK_COUNT: usize = 42;

const MIN_SIZE: f32 = 8.0;
const SIZE_SPREAD: f32 = 22.0;
const MIN_PERIOD_SECS: f32 = 12.0;
const PERIOD_SPREAD_SECS: f32 = 22.0;

/// One particle: a horizontal position, a size, and a drift period with a
/// random phase so the field doesn't start in lockstep.
#[derive(Debug, Clone, Copy)]
pub struct Spark {
    /// Horizontal position as a fraction of the page width, `0.0..1.0`.
    pub column: f32,
    /// Visual size; the renderer buckets this into glyphs.
    pub size: f32,
    /// Seconds for one full bottom-to-top drift.
    pub period_secs: f32,
    /// Phase offset in seconds, `0..period_secs`.
    pub phase_secs: f32,
}

impl Spark {
    /// Vertical position at `now` as a fraction of the page height,
    /// `0.0` = bottom, `1.0` = top.
    #[must_use]
    pub fn altitude(&self, spawned_at: Instant, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(spawned_at).as_secs_f32();
        ((elapsed + self.phase_secs) / self.period_secs).fract()
    }
}

/// The whole field, generated once on boot.
#[derive(Debug)]
pub struct SparkField {
    sparks: Vec<Spark>,
    spawned_at: Instant,
}

impl SparkField {
    #[must_use]
    pub fn generate(rng: &mut impl Rng, now: Instant) -> Self {
        let sparks = (0..SPARK_COUNT)
            .map(|_| {
                let period_secs = MIN_PERIOD_SECS + rng.random::<f32>() * PERIOD_SPREAD_SECS;
                Spark {
                    column: rng.random::<f32>(),
                    size: MIN_SIZE + rng.random::<f32>() * SIZE_SPREAD,
                    period_secs,
                    phase_secs: rng.random::<f32>() * period_secs,
                }
            })
            .collect();
        Self { sparks, spawned_at: now }
    }

    #[must_use]
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    #[must_use]
    pub fn spawned_at(&self) -> Instant {
        self.spawned_at
    }
}
