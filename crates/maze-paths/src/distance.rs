use maze_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let (dr, dc) = a.delta(b);
    ((dr * dr + dc * dc) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(2, 3)), 5);
        assert_eq!(manhattan(Cell::new(4, 1), Cell::new(1, 4)), 6);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let a = Cell::new(1, 1);
        for b in [Cell::new(4, 5), Cell::new(1, 9), Cell::new(0, 0)] {
            assert!(euclidean(a, b) <= manhattan(a, b) as f64);
        }
        assert_eq!(euclidean(Cell::new(0, 0), Cell::new(3, 4)), 5.0);
    }
}
