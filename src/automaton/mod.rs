//! Core automaton logic: grid layout and step kernels.
//!
//! The dual-buffer [`step`] is the primitive every other kernel builds on.
//! [`step_in_place`] and [`step_parallel`] snapshot a caller-owned buffer
//! first; [`StepController`] keeps its own double buffer and worker pool.
//! The FFI layer in `ffi/` calls these functions.

pub mod board;
pub mod controller;
pub mod grid;
pub mod neighbors;
pub mod parallel;
pub mod partition;
pub mod stepping;

pub use board::Board;
pub use controller::{StepController, StepStats};
pub use grid::{check_len, in_bounds, index_of, is_halo, padded_dim, padded_len, GridView};
pub use neighbors::{NEIGHBOR_COUNT, NEIGHBOR_OFFSETS};
pub use parallel::step_parallel;
pub use partition::row_bands;
pub use stepping::{next_state, step, step_in_place};
