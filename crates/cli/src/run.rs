use lanchester_core::Observer;
use lanchester_solvers::attrition::{self, Action, Event, Solution};

use crate::{config::Scenario, report::Report};

/// Runs a scenario with its selected law.
///
/// The observer sees every step; pass `()` to run unobserved.
pub fn simulate<Obs>(scenario: &Scenario, observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let law = scenario.law();
    let solution = attrition::solve(law.as_ref(), scenario.initial(), scenario.horizon(), observer);

    let report = Report::new(scenario.model, &solution);
    tracing::info!(
        model = %scenario.model,
        steps = solution.steps,
        status = ?solution.status,
        winner = %report.winner,
        "simulation finished"
    );

    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    use lanchester_core::{LawKind, Side};
    use lanchester_observers::Breakpoint;
    use lanchester_solvers::attrition::Status;

    #[test]
    fn default_scenario_matches_direct_square_run() {
        let scenario = Scenario::default();
        let solution = simulate(&scenario, ());

        let direct = lanchester_solvers::run_square(
            scenario.initial(),
            scenario.square_law(),
            scenario.horizon(),
        );
        assert_eq!(solution.history, direct);
        assert_eq!(solution.history.last().winner(), Side::Red);
    }

    #[test]
    fn each_model_runs_its_own_law() {
        let lengths: Vec<usize> = LawKind::ALL
            .into_iter()
            .map(|model| {
                let scenario = Scenario {
                    model,
                    ..Scenario::default()
                };
                simulate(&scenario, ()).history.len()
            })
            .collect();

        assert_eq!(lengths, vec![14, 101, 9]);
    }

    #[test]
    fn observers_can_end_the_run() {
        let solution = simulate(&Scenario::default(), Breakpoint::new(0.3));
        assert_eq!(solution.status, Status::StoppedByObserver);
    }
}
