/// Control actions supported by the attrition integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the history so far.
    StopEarly,
}
