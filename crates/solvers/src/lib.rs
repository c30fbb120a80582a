//! Integrators for Lanchester attrition simulations.
//!
//! The [`attrition`] module advances any [`AttritionLaw`] over a [`Horizon`]
//! and records both sides' strength sequences. The three `run_*` functions
//! are the plain entry points for the built-in laws.
//!
//! [`AttritionLaw`]: lanchester_core::AttritionLaw
//! [`Horizon`]: lanchester_core::Horizon

pub mod attrition;

pub use attrition::{run_linear, run_modernized, run_square};
