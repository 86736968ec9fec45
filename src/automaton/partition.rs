//! Row-band partitioning for parallel stepping.

use std::ops::Range;

use crate::error::{LifeError, Result};

/// Split logical rows `[0, size)` into `worker_count` contiguous bands.
///
/// Every band is `size / worker_count` rows wide and the last band absorbs the
/// remainder. Bands are pairwise disjoint and their union is `[0, size)`, so
/// workers writing one band each never touch the same row. When
/// `worker_count > size` the leading bands are empty.
pub fn row_bands(size: usize, worker_count: usize) -> Result<Vec<Range<usize>>> {
    if worker_count == 0 {
        return Err(LifeError::InvalidWorkerCount(worker_count));
    }

    let mut bands = Vec::new();
    bands
        .try_reserve_exact(worker_count)
        .map_err(|_| LifeError::Allocation {
            cells: worker_count,
        })?;

    let step = size / worker_count;
    for k in 0..worker_count {
        let start = k * step;
        let end = if k + 1 == worker_count {
            size
        } else {
            start + step
        };
        bands.push(start..end);
    }
    Ok(bands)
}
