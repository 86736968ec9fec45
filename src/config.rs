//! Simulation configuration.

use std::thread;

use crate::automaton::grid;
use crate::error::{LifeError, Result};

/// Parameters for a [`StepController`](crate::automaton::StepController).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Logical board size (interior cells per side).
    pub size: usize,
    /// Worker threads in the step pool.
    pub workers: usize,
}

impl SimulationConfig {
    /// Board of `size × size` cells with one worker per available CPU.
    pub fn new(size: usize) -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        SimulationConfig { size, workers }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(LifeError::InvalidWorkerCount(self.workers));
        }
        grid::padded_len(self.size)?;
        Ok(())
    }
}
