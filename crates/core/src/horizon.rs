/// The simulated duration and the interval between steps.
///
/// Step times are `0, dt, 2·dt, …` for as long as they stay below
/// `duration`. Each step time produces exactly one integration step.
///
/// Neither field is validated. A zero, negative, or NaN `dt` yields no steps,
/// so a run over such a horizon returns only the initial strengths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizon {
    pub duration: f64,
    pub dt: f64,
}

impl Horizon {
    #[must_use]
    pub const fn new(duration: f64, dt: f64) -> Self {
        Self { duration, dt }
    }

    /// Returns the time at the given step index.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.dt
    }

    /// Returns the number of step times below `duration`.
    ///
    /// Times are computed as `k·dt` rather than accumulated, so long horizons
    /// with fractional steps do not drift. Ratios too large for `usize`
    /// saturate at `usize::MAX`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        let ratio = self.duration / self.dt;
        if self.dt <= 0.0 || self.duration <= 0.0 || !ratio.is_finite() {
            return 0;
        }

        // Start from the ceiling and correct for rounding in the division.
        let mut steps = ratio.ceil() as usize;
        while steps > 0 && self.time_at(steps - 1) >= self.duration {
            steps -= 1;
        }
        while steps < usize::MAX && self.time_at(steps) < self.duration {
            steps += 1;
        }
        steps
    }
}
