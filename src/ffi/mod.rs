//! C FFI layer for foreign benchmark harnesses.
//!
//! This module exports C ABI functions. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. Status
//! codes: 0 on success, 1 for a null pointer, otherwise [`LifeError::code`].
//!
//! [`LifeError::code`]: crate::error::LifeError::code

pub mod kernel;
pub mod simulation;

pub use kernel::{life_step, life_step_mt, life_step_update};
pub use simulation::{
    life_average_step_us, life_create, life_destroy, life_extract_cells, life_get_cell,
    life_get_generation, life_population, life_set_cell, life_step_sim,
};

use crate::error::LifeError;

pub const STATUS_OK: i32 = 0;
pub const STATUS_NULL: i32 = 1;

fn size_from_c(size: i32) -> Result<usize, LifeError> {
    usize::try_from(size).map_err(|_| LifeError::NegativeSize(size))
}

fn status(result: crate::error::Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => {
            tracing::warn!(error = %err, "step failed");
            err.code()
        }
    }
}
