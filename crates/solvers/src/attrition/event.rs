use lanchester_core::Forces;

/// Event emitted by the attrition integrator for each recorded step.
///
/// Step 0 carries the initial strengths before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Simulation time of this step, `step · dt`.
    pub time: f64,

    /// Strengths after this step.
    pub forces: Forces,
}
