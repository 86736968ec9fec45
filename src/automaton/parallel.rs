//! Fork-join parallel stepping over disjoint row bands.
//!
//! One snapshot of the whole padded buffer is taken before dispatch. Each band
//! gets its own `&mut` slice of the destination rows, so workers cannot write
//! outside their band and never read the destination at all.
//!
//! Failure policy:
//! - a worker that cannot be spawned has its band computed on the calling
//!   thread before returning
//! - a worker that panics fails the whole step, and `state` is restored from
//!   the snapshot so the caller never sees a half-updated grid

use std::any::Any;
use std::io;
use std::mem;
use std::ops::Range;
use std::thread;

use tracing::{debug, trace, warn};

use super::grid::{self, GridView};
use super::partition::row_bands;
use super::stepping::step_rows;
use crate::error::{LifeError, Result};

/// Step `state` forward by one generation using `worker_count` threads.
///
/// Produces the same output as [`step_in_place`](super::stepping::step_in_place)
/// for every `worker_count >= 1`.
pub fn step_parallel(size: usize, worker_count: usize, state: &mut [i32]) -> Result<()> {
    step_parallel_with(size, worker_count, state, step_rows, band_thread)
}

fn band_thread(worker: usize) -> io::Result<thread::Builder> {
    Ok(thread::Builder::new().name(format!("life-band-{worker}")))
}

/// `step_parallel` with the band kernel and the per-worker thread builder
/// supplied by the caller.
fn step_parallel_with<K, B>(
    size: usize,
    worker_count: usize,
    state: &mut [i32],
    kernel: K,
    builder: B,
) -> Result<()>
where
    K: Fn(&GridView<'_>, usize, &mut [i32]) + Sync,
    B: Fn(usize) -> io::Result<thread::Builder>,
{
    let n = grid::check_len(size, state.len())?;
    let bands = row_bands(size, worker_count)?;
    let snapshot = grid::snapshot(state)?;
    let view = GridView::new(size, &snapshot)?;

    debug!(size, worker_count, "parallel step");

    // Halo rows belong to no band.
    let (top, rest) = state.split_at_mut(n);
    let (interior, bottom) = rest.split_at_mut(size * n);
    top.fill(0);
    bottom.fill(0);

    let unspawned = match run_bands(&view, &bands, interior, &kernel, &builder) {
        Ok(unspawned) => unspawned,
        Err(err) => {
            state.copy_from_slice(&snapshot);
            return Err(err);
        }
    };

    for (worker, band) in unspawned {
        warn!(worker, start = band.start, end = band.end, "computing band on caller thread");
        let rows = &mut state[(band.start + 1) * n..(band.end + 1) * n];
        kernel(&view, band.start + 1, rows);
    }
    Ok(())
}

/// Spawn one scoped thread per non-empty band and join them all.
///
/// Returns the bands whose thread could not be started.
fn run_bands<K, B>(
    view: &GridView<'_>,
    bands: &[Range<usize>],
    mut interior: &mut [i32],
    kernel: &K,
    builder: &B,
) -> Result<Vec<(usize, Range<usize>)>>
where
    K: Fn(&GridView<'_>, usize, &mut [i32]) + Sync,
    B: Fn(usize) -> io::Result<thread::Builder>,
{
    let n = view.dim();
    let mut unspawned = Vec::new();

    let joined: Result<()> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(bands.len());

        for (worker, band) in bands.iter().enumerate() {
            let (rows, rest) = mem::take(&mut interior).split_at_mut(band.len() * n);
            interior = rest;
            if band.is_empty() {
                continue;
            }

            trace!(worker, start = band.start, end = band.end, "dispatching row band");
            let first_row = band.start + 1;
            let spawned = builder(worker)
                .and_then(|b| b.spawn_scoped(scope, move || kernel(view, first_row, rows)));

            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(err) => {
                    warn!(worker, error = %err, "failed to spawn band worker");
                    unspawned.push((worker, band.clone()));
                }
            }
        }

        let mut outcome = Ok(());
        for (worker, handle) in handles {
            if let Err(payload) = handle.join() {
                let detail = panic_message(payload.as_ref());
                warn!(worker, %detail, "band worker panicked");
                if outcome.is_ok() {
                    outcome = Err(LifeError::Thread { worker, detail });
                }
            }
        }
        outcome
    });

    joined.map(|()| unspawned)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        String::from("worker panicked")
    }
}
