use lanchester_core::{Depletion, Forces};

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A step left one or both sides below the depletion threshold.
    Depleted(Depletion),

    /// Every step time in the horizon was consumed.
    HorizonReached,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The RED and BLUE strength sequences of a run.
///
/// Index 0 holds the initial strengths and each integration step appends one
/// element to both sequences, so they always have equal length and are never
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthHistory {
    red: Vec<f64>,
    blue: Vec<f64>,
}

impl StrengthHistory {
    pub(crate) fn with_capacity(initial: Forces, capacity: usize) -> Self {
        let mut history = Self {
            red: Vec::with_capacity(capacity),
            blue: Vec::with_capacity(capacity),
        };
        history.push(initial);
        history
    }

    pub(crate) fn push(&mut self, forces: Forces) {
        self.red.push(forces.red);
        self.blue.push(forces.blue);
    }

    /// RED strength at each step.
    #[must_use]
    pub fn red(&self) -> &[f64] {
        &self.red
    }

    /// BLUE strength at each step.
    #[must_use]
    pub fn blue(&self) -> &[f64] {
        &self.blue
    }

    /// Number of recorded steps, including the initial strengths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.red.len()
    }

    /// Always `false`; a history holds at least the initial strengths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// Strengths at `step`, if it was recorded.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<Forces> {
        Some(Forces::new(*self.red.get(step)?, *self.blue.get(step)?))
    }

    /// Strengths at the end of the run.
    #[must_use]
    pub fn last(&self) -> Forces {
        let last = self.len() - 1;
        Forces::new(self.red[last], self.blue[last])
    }

    /// Iterates over the strengths at each step.
    pub fn iter(&self) -> impl Iterator<Item = Forces> + '_ {
        self.red
            .iter()
            .zip(&self.blue)
            .map(|(&red, &blue)| Forces::new(red, blue))
    }

    /// Consumes the history and returns the `(red, blue)` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.red, self.blue)
    }
}

/// The result of an attrition run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Strength sequences for both sides, including the initial strengths.
    pub history: StrengthHistory,

    /// Number of integration steps completed.
    pub steps: usize,
}
