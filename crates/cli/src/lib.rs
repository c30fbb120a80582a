//! Command-line front end for Lanchester attrition simulations.
//!
//! The binary collects a [`Scenario`](config::Scenario) from defaults, a
//! TOML file, flags, and interactive prompts, runs it through the attrition
//! integrator, and reports the outcome.

pub mod config;
pub mod prompt;
pub mod report;
pub mod run;
