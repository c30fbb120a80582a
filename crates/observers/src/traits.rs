//! Capability traits for attrition observers.
//!
//! These traits abstract over integrator event and action types, so an
//! observer can be written once and reused with any event that exposes the
//! strengths of both sides.
//!
//! # Event traits
//!
//! - [`HasForces`]: events that carry a time and both sides' strengths
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use lanchester_core::Observer;
//! use lanchester_observers::traits::{CanStopEarly, HasForces};
//!
//! /// Stops once RED drops below a fixed strength.
//! struct RedFloor(f64);
//!
//! impl<E: HasForces, A: CanStopEarly> Observer<E, A> for RedFloor {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.forces().red < self.0).then(A::stop_early)
//!     }
//! }
//! ```

use lanchester_core::Forces;
use lanchester_solvers::attrition;

/// An event that carries both sides' strengths at a point in time.
pub trait HasForces {
    /// Returns the simulation time of this event.
    fn time(&self) -> f64;

    /// Returns the strengths at this event.
    fn forces(&self) -> Forces;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl HasForces for attrition::Event {
    fn time(&self) -> f64 {
        self.time
    }

    fn forces(&self) -> Forces {
        self.forces
    }
}

impl CanStopEarly for attrition::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
