//! Persistent double-buffered stepping on a reusable thread pool.
//!
//! Where [`step_parallel`](super::parallel::step_parallel) snapshots the
//! caller's buffer and spawns threads on every call, `StepController` keeps
//! both buffers and a rayon pool alive across generations. Each step reads the
//! board's current buffer, writes the back buffer band by band, then swaps.
//!
//! Core invariant: the current buffer is never written during a step, so it
//! serves as the snapshot. A failed step leaves it untouched.

use std::fmt;
use std::mem;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::board::Board;
use super::grid::GridView;
use super::partition::row_bands;
use super::stepping::step_rows;
use crate::config::SimulationConfig;
use crate::error::{LifeError, Result};

const NO_FAILURE: usize = usize::MAX;

/// Step count and accumulated wall time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: u64,
    pub total: Duration,
}

impl StepStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.steps += 1;
        self.total += elapsed;
    }

    /// Mean wall time per step, zero before the first step.
    pub fn average(&self) -> Duration {
        if self.steps == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / u128::from(self.steps);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for StepStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg_ms = self.average().as_secs_f64() * 1000.0;
        write!(f, "{} steps, avg {:.2} ms", self.steps, avg_ms)
    }
}

/// Owns a board and the worker pool that steps it.
pub struct StepController {
    board: Board,

    /// Row bands, one per worker. Fixed for the board's lifetime.
    bands: Vec<Range<usize>>,

    thread_pool: rayon::ThreadPool,

    generation: u64,
    stats: StepStats,
}

impl StepController {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let board = Board::new(config.size)?;
        let bands = row_bands(config.size, config.workers)?;
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("life-pool-{i}"))
            .build()
            .map_err(|err| LifeError::Thread {
                worker: 0,
                detail: err.to_string(),
            })?;

        debug!(size = config.size, workers = config.workers, "created step controller");

        Ok(StepController {
            board,
            bands,
            thread_pool,
            generation: 0,
            stats: StepStats::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> &StepStats {
        &self.stats
    }

    pub fn workers(&self) -> usize {
        self.bands.len()
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<()> {
        self.step_with(step_rows)
    }

    fn step_with<K>(&mut self, kernel: K) -> Result<()>
    where
        K: Fn(&GridView<'_>, usize, &mut [i32]) + Sync,
    {
        let started = Instant::now();
        let n = self.board.dim();
        let size = self.board.size();
        let bands = &self.bands;
        let failed = AtomicUsize::new(NO_FAILURE);

        let (current, next) = self.board.buffers_mut();
        let view = GridView::from_validated(current, n);

        let (top, rest) = next.split_at_mut(n);
        let (mut interior, bottom) = rest.split_at_mut(size * n);
        top.fill(0);
        bottom.fill(0);

        self.thread_pool.scope(|scope| {
            for (worker, band) in bands.iter().enumerate() {
                let (rows, rest) = mem::take(&mut interior).split_at_mut(band.len() * n);
                interior = rest;
                if band.is_empty() {
                    continue;
                }

                let view = &view;
                let kernel = &kernel;
                let failed = &failed;
                let first_row = band.start + 1;
                scope.spawn(move |_| {
                    let outcome =
                        panic::catch_unwind(AssertUnwindSafe(|| kernel(view, first_row, rows)));
                    if outcome.is_err() {
                        failed.store(worker, Ordering::Relaxed);
                    }
                });
            }
        });

        let worker = failed.load(Ordering::Relaxed);
        if worker != NO_FAILURE {
            warn!(worker, generation = self.generation, "band worker panicked");
            return Err(LifeError::Thread {
                worker,
                detail: String::from("panicked during step"),
            });
        }

        self.board.swap();
        self.generation += 1;
        self.stats.record(started.elapsed());
        Ok(())
    }

    /// Advance `generations` steps, stopping at the first failure.
    pub fn run(&mut self, generations: u64) -> Result<()> {
        for _ in 0..generations {
            self.step()?;
        }
        debug!(generation = self.generation, stats = %self.stats, "run finished");
        Ok(())
    }

    /// Bring `points` pseudo-random interior cells to life.
    ///
    /// Deterministic for a given `seed`. Points may repeat.
    pub fn seed_random(&mut self, points: usize, seed: u32) {
        let size = self.board.size();
        if size == 0 {
            return;
        }

        let mut lcg_state = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let mut next = || {
            lcg_state = lcg_state.wrapping_mul(1103515245).wrapping_add(12345);
            (lcg_state >> 16) as usize % size + 1
        };

        for _ in 0..points {
            let i = next();
            let j = next();
            self.board.set(i, j, true);
        }
    }
}
