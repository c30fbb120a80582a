//! Plotting observer for visualizing strength over time.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use lanchester_core::Observer;
use lanchester_solvers::attrition;

use crate::traits::HasForces;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Lanchester model simulation").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no axis
    /// labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            x_label: None,
            y_label: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x-axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels the y-axis.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from an integrator event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// [`attrition::Event`] implements `Plottable<2>` with time on the x-axis and
/// the RED and BLUE strengths as the two traces.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for attrition::Event {
    fn x(&self) -> Option<f64> {
        Some(HasForces::time(self))
    }

    fn traces(&self) -> [Option<f64>; 2] {
        let forces = self.forces();
        [Some(forces.red), Some(forces.blue)]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, then either pass
/// `&mut PlotObserver` to the integrator as its observer or call
/// [`record`][PlotObserver::record] manually.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["RED units", "BLUE units"])
///     .color(0, [220, 40, 40])
///     .color(1, [40, 80, 220]);
/// attrition::solve(&law, initial, horizon, &mut obs);
/// obs.show(ShowConfig::new().title("Lanchester model simulation").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    colors: [Option<Color32>; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            colors: [None; N],
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Sets the RGB color of the trace at `index`.
    ///
    /// Traces without a color use the plot's automatic palette. Indices out
    /// of range are ignored.
    #[must_use]
    pub fn color(mut self, index: usize, rgb: [u8; 3]) -> Self {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]));
        }
        self
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<Trace> = self
            .names
            .into_iter()
            .zip(self.colors)
            .zip(self.data)
            .map(|((name, color), points)| Trace {
                name,
                color,
                points,
            })
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    x_label: config.x_label,
                    y_label: config.y_label,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to integrators that take an
/// observer by value, so [`PlotObserver::show`] can be called after the run.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct Trace {
    name: String,
    color: Option<Color32>,
    points: Vec<[f64; 2]>,
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<Trace>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    let mut line = Line::new(points).name(&trace.name);
                    if let Some(color) = trace.color {
                        line = line.color(color);
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lanchester_core::{Forces, Horizon, SquareLaw};

    fn points(obs: &PlotObserver<2>, trace: usize) -> &[[f64; 2]] {
        &obs.data[trace]
    }

    #[test]
    fn records_attrition_events_against_time() {
        let mut obs = PlotObserver::<2>::new(["RED units", "BLUE units"]);
        let law = SquareLaw { r_s: 0.2, b_s: 0.1 };

        let solution = attrition::solve(
            &law,
            Forces::new(100.0, 100.0),
            Horizon::new(2.0, 0.5),
            &mut obs,
        );

        assert_eq!(points(&obs, 0).len(), solution.history.len());
        assert_eq!(points(&obs, 0)[0], [0.0, 100.0]);
        assert_eq!(points(&obs, 0)[1], [0.5, 90.0]);
        assert_eq!(points(&obs, 1)[0], [0.0, 100.0]);
    }

    #[test]
    fn record_direct_call_stores_points() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);
        assert_eq!(points(&obs, 0), [[1.0, 10.0]]);
        assert_eq!(points(&obs, 1), [[2.0, 20.0]]);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        let event = attrition::Event {
            step: 0,
            time: 0.0,
            forces: Forces::new(1.0, 2.0),
        };
        let action: Option<attrition::Action> = obs.observe(&event);
        assert!(action.is_none());
    }

    #[test]
    fn color_ignores_out_of_range_index() {
        let obs = PlotObserver::<2>::new(["a", "b"])
            .color(0, [255, 0, 0])
            .color(5, [0, 0, 255]);
        assert_eq!(obs.colors[0], Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(obs.colors[1], None);
    }
}
