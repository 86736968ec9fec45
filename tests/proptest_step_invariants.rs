//! Property-based invariant tests for the step kernels.
//!
//! These tests verify invariants that must hold for any board:
//!
//! 1. Halo cells are dead after every step.
//! 2. A cell with exactly 3 live neighbors is born or survives.
//! 3. A live cell survives on 2 neighbors and dies on anything but 2 or 3.
//! 4. The parallel kernel matches the sequential one for every worker count.
//! 5. The pooled controller matches the sequential kernel.
//! 6. Row bands cover `[0, size)` exactly once.
//! 7. Repeated steps of the same input are bit-identical.

use life_kernel::automaton::{
    index_of, is_halo, row_bands, step, step_in_place, step_parallel, StepController,
    NEIGHBOR_OFFSETS,
};
use life_kernel::SimulationConfig;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// A `(size, padded cells)` pair with a dead halo and random 0/1 interior.
fn board_strategy() -> impl Strategy<Value = (usize, Vec<i32>)> {
    (1usize..=24).prop_flat_map(|size| {
        let n = size + 2;
        proptest::collection::vec(prop::bool::weighted(0.35), size * size).prop_map(
            move |interior| {
                let mut cells = vec![0; n * n];
                for (k, alive) in interior.into_iter().enumerate() {
                    let i = k % size + 1;
                    let j = k / size + 1;
                    cells[index_of(n, i, j)] = alive as i32;
                }
                (size, cells)
            },
        )
    })
}

fn live_neighbors(n: usize, cells: &[i32], i: usize, j: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let x = (i as isize + dx) as usize;
            let y = (j as isize + dy) as usize;
            cells[index_of(n, x, y)] > 0
        })
        .count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Halo stays dead
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn halo_dead_after_step((size, cells) in board_strategy()) {
        let n = size + 2;
        let mut state = cells;
        step_in_place(size, &mut state).unwrap();
        for j in 0..n {
            for i in 0..n {
                if is_halo(n, i, j) {
                    prop_assert_eq!(state[index_of(n, i, j)], 0, "halo ({}, {})", i, j);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 & 3. Birth and survival rules
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_follow_b3_s23((size, cells) in board_strategy()) {
        let n = size + 2;
        let mut next = vec![0; cells.len()];
        step(size, &cells, &mut next).unwrap();

        for j in 1..=size {
            for i in 1..=size {
                let idx = index_of(n, i, j);
                let m = live_neighbors(n, &cells, i, j);
                let expected = match (cells[idx], m) {
                    (_, 3) => 1,
                    (1, 2) => 1,
                    _ => 0,
                };
                prop_assert_eq!(next[idx], expected, "cell ({}, {}) with {} neighbors", i, j, m);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Parallel matches sequential
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parallel_matches_sequential((size, cells) in board_strategy(), extra in 0usize..4) {
        let mut expected = cells.clone();
        step_in_place(size, &mut expected).unwrap();

        for workers in 1..=size + extra {
            let mut state = cells.clone();
            step_parallel(size, workers, &mut state).unwrap();
            prop_assert_eq!(&state, &expected, "workers={}", workers);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Pooled controller matches sequential
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn controller_matches_sequential(
        (size, cells) in board_strategy(),
        workers in 1usize..6,
        generations in 1usize..6
    ) {
        let n = size + 2;
        let config = SimulationConfig::new(size).with_workers(workers);
        let mut ctrl = StepController::new(config).unwrap();
        for j in 1..=size {
            for i in 1..=size {
                ctrl.board_mut().set(i, j, cells[index_of(n, i, j)] == 1);
            }
        }

        let mut expected = cells;
        for _ in 0..generations {
            ctrl.step().unwrap();
            step_in_place(size, &mut expected).unwrap();
        }
        prop_assert_eq!(ctrl.board().cells(), &expected[..]);
        prop_assert_eq!(ctrl.generation(), generations as u64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Row bands are an exact cover
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bands_cover_rows_exactly_once(size in 1usize..=2000, workers in 1usize..=300) {
        let bands = row_bands(size, workers).unwrap();
        prop_assert_eq!(bands.len(), workers);

        let mut next = 0;
        for band in &bands {
            prop_assert_eq!(band.start, next);
            prop_assert!(band.start <= band.end);
            next = band.end;
        }
        prop_assert_eq!(next, size);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_steps_identical((size, cells) in board_strategy(), workers in 1usize..5) {
        let mut a = cells.clone();
        let mut b = cells;
        step_parallel(size, workers, &mut a).unwrap();
        step_parallel(size, workers, &mut b).unwrap();
        prop_assert_eq!(a, b);
    }
}
