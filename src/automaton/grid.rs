//! Padded grid indexing, halo checks and snapshot allocation.
//!
//! A board of `size × size` cells is stored with a one-cell dead halo on every
//! side, so the buffer has dimension `n = size + 2` and cell `(i, j)` lives at
//! `i + j * n`. Interior cells can then read all eight neighbors without any
//! boundary branching.

use super::neighbors::NEIGHBOR_OFFSETS;
use crate::error::{LifeError, Result};

/// Padded dimension `size + 2`, checked so that `n * n` fits in `usize`.
pub fn padded_dim(size: usize) -> Result<usize> {
    size.checked_add(2)
        .filter(|n| n.checked_mul(*n).is_some())
        .ok_or(LifeError::InvalidSize { size })
}

/// Number of cells in the padded buffer, `(size + 2)²`.
pub fn padded_len(size: usize) -> Result<usize> {
    let n = padded_dim(size)?;
    Ok(n * n)
}

/// Verify that a buffer of `len` cells matches `size`. Returns the padded dimension.
pub fn check_len(size: usize, len: usize) -> Result<usize> {
    let n = padded_dim(size)?;
    if len != n * n {
        return Err(LifeError::BufferLength {
            expected: n * n,
            actual: len,
        });
    }
    Ok(n)
}

/// Linear index of `(i, j)` in a buffer of dimension `n`.
#[inline]
pub fn index_of(n: usize, i: usize, j: usize) -> usize {
    i + j * n
}

/// Whether `(i, j)` lies on the one-cell halo.
#[inline]
pub fn is_halo(n: usize, i: usize, j: usize) -> bool {
    i == 0 || j == 0 || i + 1 == n || j + 1 == n
}

/// Whether `(i, j)` is an interior (non-halo) cell.
#[inline]
pub fn in_bounds(n: usize, i: usize, j: usize) -> bool {
    i < n && j < n && !is_halo(n, i, j)
}

/// Private copy of `cells`, failing with [`LifeError::Allocation`] instead of aborting.
pub fn snapshot(cells: &[i32]) -> Result<Vec<i32>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(cells.len())
        .map_err(|_| LifeError::Allocation { cells: cells.len() })?;
    copy.extend_from_slice(cells);
    Ok(copy)
}

/// Zeroed buffer of `len` cells, failing with [`LifeError::Allocation`].
pub fn alloc_cells(len: usize) -> Result<Vec<i32>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| LifeError::Allocation { cells: len })?;
    cells.resize(len, 0);
    Ok(cells)
}

/// Read-only view over a padded buffer whose length has been validated.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [i32],
    n: usize,
}

impl<'a> GridView<'a> {
    pub fn new(size: usize, cells: &'a [i32]) -> Result<Self> {
        let n = check_len(size, cells.len())?;
        Ok(GridView { cells, n })
    }

    /// View over a buffer whose length is already known to be `n * n`.
    pub(crate) fn from_validated(cells: &'a [i32], n: usize) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        GridView { cells, n }
    }

    /// Padded dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Logical board size (without the halo).
    #[inline]
    pub fn size(&self) -> usize {
        self.n - 2
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[index_of(self.n, i, j)]
    }

    pub fn cells(&self) -> &'a [i32] {
        self.cells
    }

    /// Count neighbors with a positive value. `(i, j)` must be an interior cell.
    #[inline]
    pub fn live_neighbors(&self, i: usize, j: usize) -> u8 {
        debug_assert!(in_bounds(self.n, i, j));
        let mut count = 0;
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
            let x = (i as isize + dx) as usize;
            let y = (j as isize + dy) as usize;
            if self.get(x, y) > 0 {
                count += 1;
            }
        }
        count
    }
}
