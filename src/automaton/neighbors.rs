//! Moore neighborhood offsets.

/// Number of cells in the Moore neighborhood of a 2D cell.
pub const NEIGHBOR_COUNT: usize = 8;

/// `(dx, dy)` deltas of the eight Moore neighbors, row by row from the top-left.
pub const NEIGHBOR_OFFSETS: [(isize, isize); NEIGHBOR_COUNT] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_cover_moore_neighborhood() {
        let mut seen = Vec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                assert!(NEIGHBOR_OFFSETS.contains(&(dx, dy)), "missing ({dx}, {dy})");
                seen.push((dx, dy));
            }
        }
        assert_eq!(seen.len(), NEIGHBOR_COUNT);
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
    }
}
