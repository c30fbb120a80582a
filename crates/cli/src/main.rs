//! Lanchester's laws simulation.
//!
//! Runs interactively by default:
//!
//! ```text
//! cargo run -p lanchester-cli
//! ```
//!
//! Or once, non-interactively, from a scenario file and flags:
//!
//! ```text
//! cargo run -p lanchester-cli -- --batch --config battle.toml --model linear --series
//! cargo run -p lanchester-cli --features plot -- --batch --plot
//! ```

use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use lanchester_cli::{
    config::Scenario,
    prompt::Prompter,
    report::{Report, series_table},
    run::simulate,
};
use lanchester_core::LawKind;
use lanchester_observers::Breakpoint;
use lanchester_solvers::attrition::Solution;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lanchester", version)]
#[command(about = "Simulate attrition battles with Lanchester's laws")]
struct Cli {
    /// Scenario file (TOML); omitted keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attrition law: square, linear, or modernized
    #[arg(long)]
    model: Option<LawKind>,

    /// Initial number of RED units
    #[arg(long)]
    red: Option<u32>,

    /// Initial number of BLUE units
    #[arg(long)]
    blue: Option<u32>,

    /// Total number of steps in the simulation
    #[arg(long)]
    duration: Option<u32>,

    /// Time interval between steps
    #[arg(long)]
    dt: Option<u32>,

    /// Stop once a side has lost this fraction of its starting strength
    #[arg(long)]
    breakpoint: Option<f64>,

    /// Run once with the configured scenario instead of prompting
    #[arg(long)]
    batch: bool,

    /// Print the strength of both sides at every step
    #[arg(long)]
    series: bool,

    /// Show a plot of both strengths over time
    #[arg(long)]
    plot: bool,
}

impl Cli {
    fn scenario(&self) -> Result<Scenario, Box<dyn Error>> {
        let mut scenario = match &self.config {
            Some(path) => Scenario::load(path)?,
            None => Scenario::default(),
        };

        if let Some(model) = self.model {
            scenario.model = model;
        }
        if let Some(red) = self.red {
            scenario.red = red;
        }
        if let Some(blue) = self.blue {
            scenario.blue = blue;
        }
        if let Some(duration) = self.duration {
            scenario.duration = duration;
        }
        if let Some(dt) = self.dt {
            scenario.dt = dt;
        }

        scenario.validate()?;
        Ok(scenario)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut scenario = cli.scenario()?;

    if cli.batch {
        return execute(cli, &scenario);
    }

    println!("Lanchester's laws simulation, v.{}\n", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        scenario = prompter.scenario(&scenario)?;
        scenario.validate()?;
        execute(cli, &scenario)?;

        if !prompter.try_again()? {
            break;
        }
    }

    Ok(())
}

fn execute(cli: &Cli, scenario: &Scenario) -> Result<(), Box<dyn Error>> {
    info!(?scenario, "running scenario");
    observe_and_simulate(cli, scenario)
}

fn print_results(cli: &Cli, scenario: &Scenario, solution: &Solution) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", Report::new(scenario.model, solution))?;
    if cli.series {
        writeln!(
            stdout,
            "\n{}",
            series_table(&solution.history, &scenario.horizon())
        )?;
    }
    stdout.flush()
}

/// Runs the scenario with the observers requested on the command line and
/// prints the results, before any plot window opens.
#[cfg(feature = "plot")]
fn observe_and_simulate(cli: &Cli, scenario: &Scenario) -> Result<(), Box<dyn Error>> {
    use lanchester_core::Observer;
    use lanchester_observers::{PlotObserver, ShowConfig};
    use lanchester_solvers::attrition::{Action, Event};

    if !cli.plot {
        let solution = simulate_with_breakpoint(cli, scenario);
        print_results(cli, scenario, &solution)?;
        return Ok(());
    }

    let mut breakpoint = cli.breakpoint.map(Breakpoint::new);
    let mut plot = PlotObserver::<2>::new(["RED units", "BLUE units"])
        .color(0, [220, 40, 40])
        .color(1, [40, 80, 220]);

    let solution = simulate(scenario, |event: &Event| -> Option<Action> {
        let _: Option<Action> = plot.observe(event);
        breakpoint.as_mut().and_then(|b| b.observe(event))
    });
    print_results(cli, scenario, &solution)?;

    plot.show(
        ShowConfig::new()
            .title("Lanchester model simulation")
            .x_label("Time (round)")
            .y_label("Number of units")
            .legend(),
    )?;

    Ok(())
}

/// Runs the scenario with the observers requested on the command line and
/// prints the results.
#[cfg(not(feature = "plot"))]
fn observe_and_simulate(cli: &Cli, scenario: &Scenario) -> Result<(), Box<dyn Error>> {
    if cli.plot {
        warn!("plotting is unavailable; rebuild with `--features plot`");
    }
    let solution = simulate_with_breakpoint(cli, scenario);
    print_results(cli, scenario, &solution)?;
    Ok(())
}

fn simulate_with_breakpoint(cli: &Cli, scenario: &Scenario) -> Solution {
    match cli.breakpoint {
        Some(fraction) => simulate(scenario, Breakpoint::new(fraction)),
        None => simulate(scenario, ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_file(name: &str) -> String {
        format!("{}/scenarios/{name}", env!("CARGO_MANIFEST_DIR"))
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lanchester").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_the_scenario_file() {
        let path = scenario_file("guerrilla.toml");
        let cli = parse(&["--config", &path, "--dt", "5", "--red", "100"]);
        let scenario = cli.scenario().unwrap();

        assert_eq!(scenario.model, LawKind::Linear);
        assert_eq!(scenario.dt, 5);
        assert_eq!(scenario.red, 100);
        assert_eq!(scenario.blue, 1200);
        assert_eq!(scenario.duration, 200);
    }

    #[test]
    fn model_flag_overrides_the_file_model() {
        let path = scenario_file("guerrilla.toml");
        let scenario = parse(&["--config", &path, "--model", "square"])
            .scenario()
            .unwrap();

        assert_eq!(scenario.model, LawKind::Square);
        assert_eq!(scenario.red, 3000);
    }

    #[test]
    fn overrides_are_validated() {
        let path = scenario_file("guerrilla.toml");
        assert!(parse(&["--config", &path, "--dt", "0"]).scenario().is_err());
    }

    #[test]
    fn defaults_without_a_file() {
        let scenario = parse(&["--batch"]).scenario().unwrap();
        assert_eq!(scenario, Scenario::default());
    }
}
