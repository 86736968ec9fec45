//! Single-threaded stepping with B3/S23 rules.

use tracing::debug;

use super::grid::{self, GridView};
use crate::error::{LifeError, Result};

/// Next state of interior cell `(i, j)` read from `snapshot`.
///
/// B3/S23 rules:
/// - Birth: a cell with exactly 3 live neighbors is alive
/// - Survival: a live cell (value 1) with exactly 2 live neighbors stays alive
/// - Anything else is dead
#[inline]
pub fn next_state(snapshot: &GridView<'_>, i: usize, j: usize) -> i32 {
    let neighbors = snapshot.live_neighbors(i, j);
    if neighbors == 3 || (snapshot.get(i, j) == 1 && neighbors == 2) {
        1
    } else {
        0
    }
}

/// Compute whole padded rows starting at row `first_row` into `rows`.
///
/// `rows` must hold a whole number of rows of `snapshot.dim()` cells. Halo
/// cells are written as 0. This is the only code that writes cell values, so
/// every kernel produces bit-identical output.
pub(crate) fn step_rows(snapshot: &GridView<'_>, first_row: usize, rows: &mut [i32]) {
    let n = snapshot.dim();
    for (offset, row) in rows.chunks_exact_mut(n).enumerate() {
        let j = first_row + offset;
        for (i, cell) in row.iter_mut().enumerate() {
            *cell = if grid::is_halo(n, i, j) {
                0
            } else {
                next_state(snapshot, i, j)
            };
        }
    }
}

/// Step `source` forward by one generation into `destination`.
///
/// Both buffers must hold `(size + 2)²` cells. `source` is never written.
pub fn step(size: usize, source: &[i32], destination: &mut [i32]) -> Result<()> {
    let snapshot = GridView::new(size, source)?;
    if destination.len() != source.len() {
        return Err(LifeError::BufferLength {
            expected: source.len(),
            actual: destination.len(),
        });
    }

    debug!(size, "sequential step");
    step_rows(&snapshot, 0, destination);
    Ok(())
}

/// Step `state` forward by one generation, overwriting it.
///
/// A private snapshot of the whole buffer is taken first and dropped on return.
pub fn step_in_place(size: usize, state: &mut [i32]) -> Result<()> {
    grid::check_len(size, state.len())?;
    let snapshot = grid::snapshot(state)?;
    step(size, &snapshot, state)
}
