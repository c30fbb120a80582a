//! Reusable observers for Lanchester attrition simulations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the attrition integrator.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for observers ([`HasForces`],
//!   [`CanStopEarly`])
//! - [`breakpoint`]: [`Breakpoint`], which ends a run once a side has taken
//!   a given fraction of losses
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing strength over time via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: lanchester_core::Observer
//! [`HasForces`]: traits::HasForces
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Breakpoint`]: breakpoint::Breakpoint

pub mod breakpoint;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use breakpoint::Breakpoint;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
