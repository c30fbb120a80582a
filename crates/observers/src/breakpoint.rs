//! Stops a run once either side reaches its breakpoint.
//!
//! Real engagements rarely continue until one side is annihilated; a unit
//! usually breaks off after losing some fraction of its starting strength.
//! [`Breakpoint`] models this by stopping the run early.

use lanchester_core::{Forces, Observer, Side};

use crate::traits::{CanStopEarly, HasForces};

/// An observer that stops the run when a side's losses reach a fraction of
/// its starting strength.
///
/// The first observed event is taken as the starting strengths. A side only
/// breaks once it has actually lost strength, so the run never stops on the
/// starting strengths, and a side that starts with no strength never breaks.
#[derive(Debug, Clone)]
pub struct Breakpoint {
    fraction: f64,
    initial: Option<Forces>,
    broken: Option<Side>,
}

impl Breakpoint {
    /// Creates a breakpoint at `fraction` losses (for example `0.3` for 30%).
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction,
            initial: None,
            broken: None,
        }
    }

    /// The side that broke first, if any.
    ///
    /// When both sides reach their breakpoints in the same step, RED is
    /// reported.
    #[must_use]
    pub fn broken(&self) -> Option<Side> {
        self.broken
    }

    fn has_broken(&self, initial: &Forces, current: &Forces, side: Side) -> bool {
        let start = initial.strength(side);
        let loss = start - current.strength(side);
        start > 0.0 && loss > 0.0 && loss >= self.fraction * start
    }
}

impl<E, A> Observer<E, A> for Breakpoint
where
    E: HasForces,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let current = event.forces();
        let initial = *self.initial.get_or_insert(current);

        let broken = [Side::Red, Side::Blue]
            .into_iter()
            .find(|&side| self.has_broken(&initial, &current, side));
        self.broken = broken;

        broken.map(|_| A::stop_early())
    }
}

/// Allows `&mut Breakpoint` to be passed to integrators that take an observer
/// by value, so [`Breakpoint::broken`] can be read after the run.
impl<E, A> Observer<E, A> for &mut Breakpoint
where
    E: HasForces,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lanchester_core::{Depletion, Horizon, SquareLaw};
    use lanchester_solvers::attrition::{self, Status};

    #[test]
    fn stops_when_a_side_loses_the_fraction() {
        let law = SquareLaw { r_s: 0.2, b_s: 0.1 };
        let mut breakpoint = Breakpoint::new(0.5);

        let solution = attrition::solve(
            &law,
            Forces::new(8000.0, 10000.0),
            Horizon::new(100.0, 1.0),
            &mut breakpoint,
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(breakpoint.broken(), Some(Side::Blue));

        let last = solution.history.last();
        assert!(last.blue <= 5000.0);

        // The step before had not yet broken BLUE.
        let previous = solution.history.get(solution.steps - 1).unwrap();
        assert!(previous.blue > 5000.0);
    }

    #[test]
    fn never_stops_without_losses() {
        let law = SquareLaw { r_s: 0.0, b_s: 0.0 };
        let mut breakpoint = Breakpoint::new(0.1);

        let solution = attrition::solve(
            &law,
            Forces::new(100.0, 100.0),
            Horizon::new(10.0, 1.0),
            &mut breakpoint,
        );

        assert_eq!(solution.status, Status::HorizonReached);
        assert_eq!(breakpoint.broken(), None);
    }

    #[test]
    fn zero_fraction_stops_at_the_first_loss() {
        let law = SquareLaw { r_s: 0.2, b_s: 0.1 };
        let solution = attrition::solve(
            &law,
            Forces::new(10.0, 10.0),
            Horizon::new(10.0, 1.0),
            Breakpoint::new(0.0),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 1);
    }

    #[test]
    fn side_without_strength_runs_the_first_step() {
        let law = SquareLaw { r_s: 0.2, b_s: 0.1 };
        let mut breakpoint = Breakpoint::new(0.5);

        let solution = attrition::solve(
            &law,
            Forces::new(0.0, 100.0),
            Horizon::new(10.0, 1.0),
            &mut breakpoint,
        );

        assert_eq!(solution.status, Status::Depleted(Depletion::Red));
        assert_eq!(solution.steps, 1);
        assert_eq!(breakpoint.broken(), None);
    }
}
