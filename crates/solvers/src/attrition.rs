//! Fixed-step attrition integrator.
//!
//! This module advances two opposing forces through discrete steps of an
//! [`AttritionLaw`]:
//!
//! ```text
//! forces_{n+1} = law.step(forces_n)
//! ```
//!
//! One step is taken for each step time `0, dt, 2·dt, …` below the horizon
//! duration. The run stops early after the first step that leaves either side
//! below [`DEPLETION_THRESHOLD`]. The initial strengths are never checked
//! against the threshold.
//!
//! # Example
//!
//! ```
//! use lanchester_core::{Forces, Horizon, SquareLaw};
//! use lanchester_solvers::attrition;
//!
//! let law = SquareLaw { r_s: 0.2, b_s: 0.1 };
//! let solution = attrition::solve_unobserved(&law, Forces::new(8000.0, 10000.0), Horizon::new(100.0, 1.0));
//!
//! assert!(matches!(solution.status, attrition::Status::Depleted(_)));
//! assert_eq!(solution.history.red().len(), solution.history.blue().len());
//! ```
//!
//! [`DEPLETION_THRESHOLD`]: lanchester_core::DEPLETION_THRESHOLD

mod action;
mod event;
mod solution;


pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status, StrengthHistory};

use lanchester_core::{
    AttritionLaw, Forces, Horizon, LinearLaw, ModernizedLaw, Observer, SquareLaw,
};

/// Upper bound on history slots reserved before a run starts.
///
/// Battles usually end long before the horizon, so the history grows on
/// demand past this point.
const PREALLOCATED_STEPS: usize = 1024;

/// Runs an attrition law over a horizon.
///
/// # Algorithm
///
/// 1. Record the initial strengths as step 0 and emit an event.
/// 2. For each step time below the horizon duration:
///    - Advance the strengths with [`AttritionLaw::step`].
///    - Record the new strengths and emit an event.
///    - If either side fell below the depletion threshold, terminate.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// Depletion takes precedence over an observer stop in the same step.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial strengths and after
/// each integration step, and may return [`Action::StopEarly`] to terminate
/// the run early.
pub fn solve<L, Obs>(law: &L, initial: Forces, horizon: Horizon, mut observer: Obs) -> Solution
where
    L: AttritionLaw + ?Sized,
    Obs: Observer<Event, Action>,
{
    let steps = horizon.steps();
    let mut history =
        StrengthHistory::with_capacity(initial, steps.min(PREALLOCATED_STEPS) + 1);

    let event = Event {
        step: 0,
        time: horizon.time_at(0),
        forces: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        };
    }

    let mut current = initial;

    for step in 1..=steps {
        let next = law.step(&current);
        history.push(next);

        let event = Event {
            step,
            time: horizon.time_at(step),
            forces: next,
        };
        let action = observer.observe(&event);

        if let Some(depletion) = next.depletion() {
            return Solution {
                status: Status::Depleted(depletion),
                history,
                steps: step,
            };
        }

        if let Some(Action::StopEarly) = action {
            return Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            };
        }

        current = next;
    }

    Solution {
        status: Status::HorizonReached,
        history,
        steps,
    }
}

/// Runs an attrition law over a horizon without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<L>(law: &L, initial: Forces, horizon: Horizon) -> Solution
where
    L: AttritionLaw + ?Sized,
{
    solve(law, initial, horizon, ())
}

/// Runs the square law and returns both strength sequences.
#[must_use]
pub fn run_square(initial: Forces, law: SquareLaw, horizon: Horizon) -> StrengthHistory {
    solve_unobserved(&law, initial, horizon).history
}

/// Runs the linear law and returns both strength sequences.
#[must_use]
pub fn run_linear(initial: Forces, law: LinearLaw, horizon: Horizon) -> StrengthHistory {
    solve_unobserved(&law, initial, horizon).history
}

/// Runs the modernized law and returns both strength sequences.
#[must_use]
pub fn run_modernized(initial: Forces, law: ModernizedLaw, horizon: Horizon) -> StrengthHistory {
    solve_unobserved(&law, initial, horizon).history
}
