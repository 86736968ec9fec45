//! Double-buffered padded board.
//!
//! The board owns two buffers of `(size + 2)²` cells. A step reads `current`,
//! writes `next`, and then the two swap roles, so no snapshot is ever copied.

use super::grid::{self, index_of, GridView};
use crate::error::Result;

/// A padded Life board with a persistent back buffer.
pub struct Board {
    size: usize,
    n: usize,
    current: Vec<i32>,
    next: Vec<i32>,
}

impl Board {
    /// All-dead board of `size × size` interior cells.
    pub fn new(size: usize) -> Result<Self> {
        let n = grid::padded_dim(size)?;
        let current = grid::alloc_cells(n * n)?;
        let next = grid::alloc_cells(n * n)?;
        Ok(Board {
            size,
            n,
            current,
            next,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Padded dimension `size + 2`.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Current generation as a flat padded buffer.
    pub fn cells(&self) -> &[i32] {
        &self.current
    }

    pub fn view(&self) -> GridView<'_> {
        GridView::from_validated(&self.current, self.n)
    }

    /// Set interior cell `(i, j)` in padded coordinates. Halo and out-of-range
    /// coordinates are silently ignored.
    pub fn set(&mut self, i: usize, j: usize, alive: bool) {
        if grid::in_bounds(self.n, i, j) {
            self.current[index_of(self.n, i, j)] = alive as i32;
        }
    }

    /// Cell `(i, j)` in padded coordinates, 0 when out of range.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        if i < self.n && j < self.n {
            (self.current[index_of(self.n, i, j)] > 0) as u8
        } else {
            0
        }
    }

    /// Number of live interior cells.
    pub fn population(&self) -> u64 {
        let n = self.n;
        self.current
            .iter()
            .enumerate()
            .filter(|&(k, &c)| c > 0 && !grid::is_halo(n, k % n, k / n))
            .count() as u64
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.current.fill(0);
    }

    /// Read-only current buffer and writable back buffer.
    pub(crate) fn buffers_mut(&mut self) -> (&[i32], &mut [i32]) {
        (&self.current, &mut self.next)
    }

    /// Promote the back buffer to current.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
