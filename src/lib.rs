//! Life Kernel - Conway's Game of Life step kernels
//!
//! Computes one B3/S23 generation over a square board surrounded by a dead
//! one-cell halo, single-threaded or across row bands in parallel. A C ABI is
//! exported for foreign harnesses.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;

pub use automaton::{step, step_in_place, step_parallel, Board, StepController, StepStats};
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
