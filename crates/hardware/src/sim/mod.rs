//! Simulation utilities and program loading.
//!
//! Provides the textual program loader and the bounded-run simulator wrapper.

pub mod loader;

pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
