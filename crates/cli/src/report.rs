//! Battle outcome reporting.

use std::fmt::{self, Write as _};

use lanchester_core::{Depletion, Horizon, LawKind, Side};
use lanchester_solvers::attrition::{Solution, Status, StrengthHistory};

/// The outcome of a run, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub model: LawKind,
    pub winner: Side,
    pub red_remaining: f64,
    pub blue_remaining: f64,
    pub steps: usize,
    pub status: Status,
}

impl Report {
    #[must_use]
    pub fn new(model: LawKind, solution: &Solution) -> Self {
        let last = solution.history.last();
        Self {
            model,
            winner: last.winner(),
            red_remaining: last.red,
            blue_remaining: last.blue,
            steps: solution.steps,
            status: solution.status,
        }
    }

    fn ending(&self) -> String {
        match self.status {
            Status::Depleted(Depletion::Red) => format!("RED depleted after {} steps", self.steps),
            Status::Depleted(Depletion::Blue) => {
                format!("BLUE depleted after {} steps", self.steps)
            }
            Status::Depleted(Depletion::Both) => {
                format!("both sides depleted after {} steps", self.steps)
            }
            Status::HorizonReached => format!("horizon reached after {} steps", self.steps),
            Status::StoppedByObserver => format!("breakpoint reached after {} steps", self.steps),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted result of the battle ({} law):\n", self.model)?;
        writeln!(f, "Winner: {}", self.winner)?;
        writeln!(f, "Remaining RED units [ {} ]", self.red_remaining)?;
        writeln!(f, "Remaining BLUE units [ {} ]", self.blue_remaining)?;
        write!(f, "({})", self.ending())
    }
}

/// Formats the strengths at every step as a table.
///
/// The time column is `step · dt`.
#[must_use]
pub fn series_table(history: &StrengthHistory, horizon: &Horizon) -> String {
    let mut table = format!("{:>6} {:>10} {:>16} {:>16}\n", "step", "time", "RED", "BLUE");
    for (step, forces) in history.iter().enumerate() {
        let _ = writeln!(
            table,
            "{step:>6} {:>10} {:>16.4} {:>16.4}",
            horizon.time_at(step),
            forces.red,
            forces.blue
        );
    }
    table
}
