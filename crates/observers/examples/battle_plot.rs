//! Plots a battle under each attrition law.
//!
//! # Usage
//!
//! ```text
//! cargo run --example battle_plot --features plot -- square
//! cargo run --example battle_plot --features plot -- linear
//! cargo run --example battle_plot --features plot -- modernized
//! ```
//!
//! Every mode starts from 8000 RED against 10000 BLUE over 100 rounds. Under
//! the square law RED's higher fire rate wins despite the smaller force; the
//! linear law grinds on to the end of the horizon; the modernized law ends
//! fastest because information warfare multiplies both sides' losses.

use std::error::Error;

use lanchester_core::{AttritionLaw, Forces, Horizon, LawKind, LinearLaw, ModernizedLaw, SquareLaw};
use lanchester_observers::{PlotObserver, ShowConfig};
use lanchester_solvers::attrition;

fn main() -> Result<(), Box<dyn Error>> {
    let kind = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<LawKind>)
        .transpose()?
        .unwrap_or_default();

    let law: Box<dyn AttritionLaw> = match kind {
        LawKind::Square => Box::new(SquareLaw { r_s: 0.2, b_s: 0.1 }),
        LawKind::Linear => Box::new(LinearLaw {
            r_l: 0.00001,
            b_l: 0.00002,
        }),
        LawKind::Modernized => Box::new(ModernizedLaw {
            r_l: 0.00001,
            b_l: 0.00002,
            r_s: 0.2,
            b_s: 0.1,
            r_f: 0.6,
            b_f: 0.2,
            r_a: 0.6,
            b_a: 0.2,
            r_i: 4.0,
            b_i: 4.0,
        }),
    };

    let mut obs = PlotObserver::<2>::new(["RED units", "BLUE units"])
        .color(0, [220, 40, 40])
        .color(1, [40, 80, 220]);

    let solution = attrition::solve(
        law.as_ref(),
        Forces::new(8000.0, 10000.0),
        Horizon::new(100.0, 1.0),
        &mut obs,
    );
    let last = solution.history.last();

    obs.show(
        ShowConfig::new()
            .title(format!(
                "{kind} law: {} wins after {} rounds",
                last.winner(),
                solution.steps
            ))
            .x_label("Time (round)")
            .y_label("Number of units")
            .legend(),
    )?;

    Ok(())
}
