//! Core traits and types for Lanchester attrition simulations.
//!
//! This crate defines the shared abstractions that the integrator, observers,
//! and front ends build on:
//!
//! - [`Forces`]: the RED/BLUE strength pair at one step
//! - [`Horizon`]: the simulated duration and its step size
//! - [`AttritionLaw`]: advances a [`Forces`] pair by one step
//! - [`SquareLaw`], [`LinearLaw`], [`ModernizedLaw`]: the three attrition
//!   laws and their coefficient sets
//! - [`Observer`]: receives integrator events and optionally returns control
//!   actions

mod forces;
mod horizon;
mod law;
mod laws;
mod observer;

pub use forces::{DEPLETION_THRESHOLD, Depletion, Forces, Side};
pub use horizon::Horizon;
pub use law::{AttritionLaw, LawKind, ParseLawKindError};
pub use laws::{LinearLaw, ModernizedLaw, SquareLaw};
pub use observer::Observer;
