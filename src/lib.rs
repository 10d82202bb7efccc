//! Single-period newsvendor simulation.
//!
//! A fixed order quantity is tested against a discrete daily demand model
//! over a number of independent days. [`simulation::engine::run`] is the
//! entry point; it takes its randomness from a [`random::traits::RandomSource`]
//! so runs can be replayed.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod random;
pub mod simulation;
