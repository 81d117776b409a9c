//! Reference enumeration for testing the line engine.
//!
//! [`brute_force_lines`] finds every line by trying each direction from each
//! cell, without using the slice decomposition. It is quadratic-ish and only
//! meant for small grids.
//!
//! # Example
//!
//! ```
//! use hyperoxo_core::Grid;
//! use hyperoxo_lines::{LineSet, testing};
//!
//! let lines = LineSet::build(Grid::new(3, 3)?)?;
//! testing::assert_matches_brute_force(&lines);
//! # Ok::<(), hyperoxo_lines::LineError>(())
//! ```

use std::collections::HashSet;

use crate::LineSet;

/// Returns the member cells of every line of `h(dim, size)`, each sorted ascending.
///
/// A line is a direction in `{-1, 0, 1}^dim` (nonzero, first nonzero
/// component positive) together with a start cell from which `size - 1`
/// further steps stay on the grid. For `size == 1` every direction gives the
/// same single cell, so the result holds `(3^dim - 1) / 2` copies of `[0]`.
///
/// # Panics
///
/// Panics if `h(dim, size)` has more than `usize::MAX` cells.
#[must_use]
pub fn brute_force_lines(dim: usize, size: usize) -> Vec<Vec<usize>> {
    let cell_count = hyperoxo_core::count::checked_pow(size, dim).expect("grid too large");
    let directions = directions(dim);
    let mut lines = Vec::new();
    for start in 0..cell_count {
        let start = unflatten(start, dim, size);
        for direction in &directions {
            let Some(cells) = walk(&start, direction, size) else {
                continue;
            };
            let mut cells: Vec<usize> = cells.iter().map(|c| flatten(c, size)).collect();
            cells.sort_unstable();
            lines.push(cells);
        }
    }
    lines
}

/// Asserts that `lines` holds exactly the lines found by [`brute_force_lines`].
///
/// # Panics
///
/// Panics if a line is missing, extra, or repeated.
#[track_caller]
pub fn assert_matches_brute_force(lines: &LineSet) {
    let grid = lines.grid();
    let expected = brute_force_lines(grid.dim(), grid.size());
    assert_eq!(
        lines.len(),
        expected.len(),
        "line count differs from brute force for h({}, {})",
        grid.dim(),
        grid.size()
    );
    if grid.size() < 2 {
        return;
    }
    let expected: HashSet<Vec<usize>> = expected.into_iter().collect();
    let mut actual = HashSet::new();
    for line in lines {
        let mut cells: Vec<usize> = line.cells().iter().map(|c| c.get()).collect();
        cells.sort_unstable();
        assert!(
            expected.contains(&cells),
            "line {} ({:?}) is not a line of the grid",
            line.key(),
            line.cells()
        );
        assert!(actual.insert(cells), "line {} is repeated", line.key());
    }
}

fn directions(dim: usize) -> Vec<Vec<isize>> {
    let mut directions = vec![Vec::new()];
    for _ in 0..dim {
        directions = directions
            .into_iter()
            .flat_map(|prefix| {
                [-1, 0, 1].map(|step| {
                    let mut next = prefix.clone();
                    next.push(step);
                    next
                })
            })
            .collect();
    }
    directions.retain(|d| d.iter().find(|&&s| s != 0) == Some(&1));
    directions
}

fn walk(start: &[usize], direction: &[isize], size: usize) -> Option<Vec<Vec<usize>>> {
    let mut cells = vec![start.to_vec()];
    for _ in 1..size {
        let prev = cells.last()?;
        let next = prev
            .iter()
            .zip(direction)
            .map(|(&c, &d)| c.checked_add_signed(d).filter(|&c| c < size))
            .collect::<Option<Vec<_>>>()?;
        cells.push(next);
    }
    Some(cells)
}

fn unflatten(mut index: usize, dim: usize, size: usize) -> Vec<usize> {
    let mut coord = vec![0; dim];
    for c in coord.iter_mut().rev() {
        *c = index % size;
        index /= size;
    }
    coord
}

fn flatten(coord: &[usize], size: usize) -> usize {
    coord.iter().fold(0, |acc, &c| acc * size + c)
}
