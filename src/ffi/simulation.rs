//! Simulation handle: creation, destruction, cell access and stepping.

use super::{status, STATUS_NULL};
use crate::automaton::StepController;
use crate::config::SimulationConfig;

/// Creates a simulation of `size × size` cells stepped by `workers` threads.
/// `workers <= 0` picks one worker per available CPU.
///
/// # Returns
/// A pointer to a new StepController, or null on invalid size or allocation failure.
///
/// # Safety
/// The returned pointer must eventually be freed with `life_destroy()`.
#[no_mangle]
pub extern "C" fn life_create(size: i32, workers: i32) -> *mut StepController {
    let Ok(size) = usize::try_from(size) else {
        return std::ptr::null_mut();
    };

    let mut config = SimulationConfig::new(size);
    if workers > 0 {
        config = config.with_workers(workers as usize);
    }

    match StepController::new(config) {
        Ok(ctrl) => Box::into_raw(Box::new(ctrl)),
        Err(err) => {
            tracing::warn!(error = %err, "failed to create simulation");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ctrl` must be a valid pointer returned by `life_create()`, or null
/// - `ctrl` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn life_destroy(ctrl: *mut StepController) {
    if !ctrl.is_null() {
        drop(Box::from_raw(ctrl));
    }
}

/// Sets interior cell `(i, j)` (padded coordinates) to alive (non-zero) or dead.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
///
/// Halo and out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn life_set_cell(ctrl: *mut StepController, i: i32, j: i32, alive: u8) {
    if ctrl.is_null() || i < 0 || j < 0 {
        return;
    }

    let ctrl = &mut *ctrl;
    ctrl.board_mut().set(i as usize, j as usize, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn life_get_cell(ctrl: *const StepController, i: i32, j: i32) -> u8 {
    if ctrl.is_null() || i < 0 || j < 0 {
        return 0;
    }

    (*ctrl).board().get(i as usize, j as usize)
}

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status code.
#[no_mangle]
pub unsafe extern "C" fn life_step_sim(ctrl: *mut StepController) -> i32 {
    if ctrl.is_null() {
        return STATUS_NULL;
    }

    status((*ctrl).step())
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
///
/// # Returns
/// The generation counter, or 0 if ctrl is null.
#[no_mangle]
pub unsafe extern "C" fn life_get_generation(ctrl: *const StepController) -> u64 {
    if ctrl.is_null() {
        return 0;
    }
    (*ctrl).generation()
}

/// Number of live cells, or 0 if ctrl is null.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
#[no_mangle]
pub unsafe extern "C" fn life_population(ctrl: *const StepController) -> u64 {
    if ctrl.is_null() {
        return 0;
    }
    (*ctrl).board().population()
}

/// Copies the padded board into `out_buf`.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
/// - `out_buf` must point to at least `len` writable `i32` values
///
/// # Returns
/// The number of cells written: `(size + 2)²`, or 0 if a pointer is null or
/// `len` is too small.
#[no_mangle]
pub unsafe extern "C" fn life_extract_cells(
    ctrl: *const StepController,
    out_buf: *mut i32,
    len: u64,
) -> u64 {
    if ctrl.is_null() || out_buf.is_null() {
        return 0;
    }

    let cells = (*ctrl).board().cells();
    if usize::try_from(len).unwrap_or(usize::MAX) < cells.len() {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, cells.len());
    out_slice.copy_from_slice(cells);
    cells.len() as u64
}

/// Mean wall time per step in microseconds, or 0 before the first step.
///
/// # Safety
/// - `ctrl` must be a valid pointer to a StepController, or null
#[no_mangle]
pub unsafe extern "C" fn life_average_step_us(ctrl: *const StepController) -> u64 {
    if ctrl.is_null() {
        return 0;
    }
    (*ctrl).stats().average().as_micros() as u64
}
