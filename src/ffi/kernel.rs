//! Stateless step entry points over caller-owned buffers.
//!
//! Buffers are `(size + 2)²` `i32` cells, row-major with index
//! `i + j * (size + 2)`, halo pre-zeroed by the caller.

use super::{size_from_c, status, STATUS_NULL};
use crate::automaton::{self, grid};
use crate::error::{LifeError, Result};

/// Computes the next generation of `src` into `dst`.
///
/// # Safety
/// - `src` and `dst` must each point to `(size + 2)²` valid `i32` values
/// - the two buffers must not overlap
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status code.
#[no_mangle]
pub unsafe extern "C" fn life_step(src: *const i32, dst: *mut i32, size: i32) -> i32 {
    if src.is_null() || dst.is_null() {
        return STATUS_NULL;
    }

    status(size_from_c(size).and_then(|size| {
        let len = grid::padded_len(size)?;
        let source = std::slice::from_raw_parts(src, len);
        let destination = std::slice::from_raw_parts_mut(dst, len);
        automaton::step(size, source, destination)
    }))
}

/// Advances `state` by one generation in place.
///
/// # Safety
/// - `state` must point to `(size + 2)²` valid `i32` values
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status code.
#[no_mangle]
pub unsafe extern "C" fn life_step_update(state: *mut i32, size: i32) -> i32 {
    if state.is_null() {
        return STATUS_NULL;
    }

    status(size_from_c(size).and_then(|size| {
        let len = grid::padded_len(size)?;
        let cells = std::slice::from_raw_parts_mut(state, len);
        automaton::step_in_place(size, cells)
    }))
}

/// Advances `state` by one generation in place using `worker_count` threads.
///
/// # Safety
/// - `state` must point to `(size + 2)²` valid `i32` values
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status code. On a
/// worker failure `state` is left at its previous generation.
#[no_mangle]
pub unsafe extern "C" fn life_step_mt(state: *mut i32, size: i32, worker_count: i32) -> i32 {
    if state.is_null() {
        return STATUS_NULL;
    }

    status(size_from_c(size).and_then(|size| {
        let workers = worker_count_from_c(worker_count)?;
        let len = grid::padded_len(size)?;
        let cells = std::slice::from_raw_parts_mut(state, len);
        automaton::step_parallel(size, workers, cells)
    }))
}

fn worker_count_from_c(worker_count: i32) -> Result<usize> {
    match usize::try_from(worker_count) {
        Ok(workers) if workers > 0 => Ok(workers),
        _ => Err(LifeError::InvalidWorkerCount(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::STATUS_OK;
    use std::ptr;

    fn blinker() -> Vec<i32> {
        let mut cells = vec![0; 49];
        for i in 1..=3 {
            cells[grid::index_of(7, i, 2)] = 1;
        }
        cells
    }

    fn vertical_blinker() -> Vec<i32> {
        let mut cells = vec![0; 49];
        for j in 1..=3 {
            cells[grid::index_of(7, 2, j)] = 1;
        }
        cells
    }

    #[test]
    fn test_life_step() {
        let src = blinker();
        let mut dst = vec![0; 49];
        unsafe {
            assert_eq!(life_step(src.as_ptr(), dst.as_mut_ptr(), 5), STATUS_OK);
        }
        assert_eq!(dst, vertical_blinker());
        assert_eq!(src, blinker());
    }

    #[test]
    fn test_life_step_update() {
        let mut state = blinker();
        unsafe {
            assert_eq!(life_step_update(state.as_mut_ptr(), 5), STATUS_OK);
        }
        assert_eq!(state, vertical_blinker());
    }

    #[test]
    fn test_life_step_mt() {
        for workers in 1..=5 {
            let mut state = blinker();
            unsafe {
                assert_eq!(life_step_mt(state.as_mut_ptr(), 5, workers), STATUS_OK);
            }
            assert_eq!(state, vertical_blinker(), "workers={workers}");
        }
    }

    #[test]
    fn test_bad_arguments() {
        let mut state = blinker();
        unsafe {
            assert_eq!(life_step_mt(state.as_mut_ptr(), 5, 0), 4);
            assert_eq!(life_step_mt(state.as_mut_ptr(), 5, -2), 4);
            assert_eq!(life_step_update(state.as_mut_ptr(), -1), 2);
        }
        assert_eq!(state, blinker());
    }

    #[test]
    fn test_null_pointer_handling() {
        let mut state = blinker();
        unsafe {
            assert_eq!(life_step(ptr::null(), state.as_mut_ptr(), 5), STATUS_NULL);
            assert_eq!(life_step(state.as_ptr(), ptr::null_mut(), 5), STATUS_NULL);
            assert_eq!(life_step_update(ptr::null_mut(), 5), STATUS_NULL);
            assert_eq!(life_step_mt(ptr::null_mut(), 5, 2), STATUS_NULL);
        }
    }
}
