//! Assembly and verification of the complete line set.

use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use hyperoxo_core::{CellIndex, Grid, Resource, Slice, count};
use rayon::prelude::*;

use crate::{
    BuildOptions, ConsistencyError, Line, LineError, LineId, LineKey, Orientation, Verification,
    diagonal,
};

/// Every line of a grid, in a deterministic order.
///
/// Lines are ordered by extent (number of varying axes), then by axis set,
/// then by fixed assignment (the order of
/// [`AxisCombinations`](hyperoxo_core::AxisCombinations)), then by the
/// diagonal construction order of [`diagonal::diagonals`].
///
/// # Examples
///
/// ```
/// use hyperoxo_core::Grid;
/// use hyperoxo_lines::LineSet;
///
/// let grid = Grid::new(2, 2)?;
/// let lines = LineSet::build(grid)?;
/// let cells: Vec<Vec<usize>> = lines
///     .iter()
///     .map(|line| line.cells().iter().map(|c| c.get()).collect())
///     .collect();
/// assert_eq!(
///     cells,
///     vec![vec![0, 2], vec![1, 3], vec![0, 1], vec![2, 3], vec![0, 3], vec![2, 1]]
/// );
/// # Ok::<(), hyperoxo_lines::LineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LineSet {
    grid: Grid,
    lines: Vec<Line>,
    /// `extent_starts[k]` is the first line with extent `k`; one entry past `dim`.
    extent_starts: Vec<usize>,
}

impl LineSet {
    /// Assembles the lines of `grid` with default options.
    ///
    /// # Errors
    ///
    /// See [`LineSet::build_with`].
    pub fn build(grid: Grid) -> Result<Self, LineError> {
        Self::build_with(grid, &BuildOptions::default())
    }

    /// Assembles the lines of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Grid`] with
    /// [`GridError::ResourceExhausted`](hyperoxo_core::GridError::ResourceExhausted)
    /// if the grid or its line list would exceed `options.limits`; nothing
    /// large is allocated in that case.
    ///
    /// Returns [`LineError::Inconsistent`] if the assembled lines disagree
    /// with the closed-form count or, with [`Verification::Full`], violate a
    /// structural invariant.
    pub fn build_with(grid: Grid, options: &BuildOptions) -> Result<Self, LineError> {
        let (dim, size) = (grid.dim(), grid.size());
        options
            .limits
            .check(Resource::Cells, Some(grid.cell_count()))?;
        let expected = count::num_lines(dim, size);
        let required = expected.and_then(|c| c.checked_mul(size));
        let line_cells = options.limits.check(Resource::LineCells, required)?;
        // The check above rejects an overflowing count.
        let expected = expected.unwrap_or_default();
        log::debug!(
            "assembling {expected} lines ({line_cells} cell references) for h({dim}, {size})"
        );

        // Orientations depend only on the extent, so every slice of one extent shares them.
        let orientations: Vec<Vec<Orientation>> = (0..=dim).map(diagonal::orientations).collect();
        let slices: Vec<Slice> = grid.axis_combinations().collect();
        let per_slice: Vec<Vec<Line>> = if options.parallel {
            slices
                .par_iter()
                .map(|slice| slice_lines(grid, slice, &orientations[slice.dim()]))
                .collect()
        } else {
            slices
                .iter()
                .map(|slice| slice_lines(grid, slice, &orientations[slice.dim()]))
                .collect()
        };
        let mut lines = Vec::with_capacity(expected);
        lines.extend(per_slice.into_iter().flatten());

        if lines.len() != expected {
            log::error!(
                "h({dim}, {size}): assembled {} lines, closed form gives {expected}",
                lines.len()
            );
            return Err(ConsistencyError::LineCountMismatch {
                expected,
                actual: lines.len(),
            }
            .into());
        }

        let extent_starts = (0..=dim + 1)
            .map(|k| lines.partition_point(|line: &Line| line.extent() < k))
            .collect();
        let set = Self {
            grid,
            lines,
            extent_starts,
        };
        for (extent, group) in set.grouped_by_extent() {
            log::debug!("extent {extent}: {} lines", group.len());
        }

        if options.verification == Verification::Full {
            set.verify()?;
        }
        Ok(set)
    }

    /// Returns the grid the lines were assembled for.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns all lines.
    #[must_use]
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// Returns an iterator over all lines.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Returns an iterator over all lines with their ids.
    #[must_use]
    pub fn iter_with_ids(&self) -> impl ExactSizeIterator<Item = (LineId, &Line)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (LineId::new(i), line))
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines, which never happens for a valid grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line with the given id.
    #[must_use]
    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.get())
    }

    /// Returns the lines that vary along exactly `extent` axes.
    ///
    /// Extents outside `1..=dim` give an empty slice.
    #[must_use]
    pub fn with_extent(&self, extent: usize) -> &[Line] {
        if extent == 0 || extent > self.grid.dim() {
            return &[];
        }
        &self.lines[self.extent_starts[extent]..self.extent_starts[extent + 1]]
    }

    /// Returns the lines grouped by extent, for every extent in `1..=dim`.
    #[must_use]
    pub fn grouped_by_extent(&self) -> BTreeMap<usize, &[Line]> {
        (1..=self.grid.dim())
            .map(|extent| (extent, self.with_extent(extent)))
            .collect()
    }

    /// Checks every structural invariant of the line set.
    ///
    /// - every line has exactly `n` distinct cells, each a unit step from the
    ///   previous one along every varying axis and equal on every fixed axis;
    /// - no two lines share a [`LineKey`], and for `n >= 2` no two lines have
    ///   the same member cells;
    /// - every member cell survives a flatten/unflatten round trip;
    /// - every cell of the grid lies on at least one line.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        self.verify_lines().inspect_err(|err| log::error!("{err}"))
    }

    fn verify_lines(&self) -> Result<(), ConsistencyError> {
        let grid = self.grid;
        let size = grid.size();
        let mut keys: HashMap<&LineKey, LineId> = HashMap::with_capacity(self.lines.len());
        let mut members: HashMap<Vec<CellIndex>, LineId> = HashMap::new();
        let mut covered = vec![false; grid.cell_count()];

        for (id, line) in self.iter_with_ids() {
            if line.len() != size {
                return Err(ConsistencyError::LineLength {
                    line: id,
                    expected: size,
                    actual: line.len(),
                });
            }

            let mut sorted = line.cells().to_vec();
            sorted.sort_unstable();
            if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(ConsistencyError::RepeatedCell {
                    line: id,
                    cell: pair[0],
                });
            }

            let mut coords = Vec::with_capacity(size);
            for &cell in line.cells() {
                let coord = grid
                    .unflatten(cell)
                    .map_err(|_| ConsistencyError::RoundTrip { index: cell })?;
                if grid.flatten(&coord) != Ok(cell) {
                    return Err(ConsistencyError::RoundTrip { index: cell });
                }
                covered[cell.get()] = true;
                coords.push(coord);
            }
            let broken = coords
                .windows(2)
                .position(|pair| !is_unit_step(line, &pair[0], &pair[1]));
            if let Some(position) = broken {
                return Err(ConsistencyError::BrokenStep { line: id, position });
            }

            match keys.entry(line.key()) {
                Entry::Occupied(first) => {
                    return Err(ConsistencyError::DuplicateLine {
                        first: *first.get(),
                        second: id,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }

            // With n = 1 every line is the single cell, so only keys distinguish lines.
            if size >= 2 {
                match members.entry(sorted) {
                    Entry::Occupied(first) => {
                        return Err(ConsistencyError::DuplicateLine {
                            first: *first.get(),
                            second: id,
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
            }
        }

        if let Some(cell) = covered.iter().position(|&hit| !hit) {
            return Err(ConsistencyError::UncoveredCell {
                cell: CellIndex::new(cell),
            });
        }
        Ok(())
    }
}

/// Returns `true` if `next` is one step from `prev` along exactly the line's varying axes.
fn is_unit_step(line: &Line, prev: &[usize], next: &[usize]) -> bool {
    prev.iter().zip(next).enumerate().all(|(axis, (&a, &b))| {
        if line.axes().contains(axis) {
            a.abs_diff(b) == 1
        } else {
            a == b
        }
    })
}

fn slice_lines(grid: Grid, slice: &Slice, orientations: &[Orientation]) -> Vec<Line> {
    let found = diagonal::diagonals_with(slice, orientations);
    log::trace!(
        "slice axes {} fixed {}: {} diagonals",
        slice.axes(),
        slice.fixed(),
        found.len()
    );
    found
        .into_iter()
        .map(|diagonal| {
            let cells = diagonal
                .cells
                .iter()
                .map(|coord| grid.flatten_unchecked(coord))
                .collect();
            let key = LineKey {
                axes: slice.axes().clone(),
                fixed: slice.fixed().clone(),
                orientation: diagonal.orientation,
            };
            Line::new(key, cells)
        })
        .collect()
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
