//! The assembled engine for one grid.

use std::collections::BTreeMap;

use hyperoxo_core::{CellIndex, Grid, GridError};

use crate::{BuildOptions, CellLines, Line, LineError, LineId, LineSet, LineTally, Verification};

/// A hypercube grid together with its lines and cell-to-line index.
///
/// A `Hypercube` only exists once every enabled check has passed, and is
/// immutable afterwards: it can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use hyperoxo_lines::Hypercube;
///
/// let cube = Hypercube::new(3, 4)?;
/// assert_eq!(cube.cell_count(), 64);
/// assert_eq!(cube.line_count(), 76);
///
/// // A corner lies on more lines than a face centre.
/// assert_eq!(cube.membership(&[0, 0, 0])?, 7);
/// assert_eq!(cube.membership(&[0, 1, 1])?, 4);
///
/// let corner = cube.grid().flatten(&[3, 3, 3])?;
/// for &id in cube.lines_through(&[3, 3, 3])? {
///     assert!(cube.line(id).is_some_and(|line| line.contains(corner)));
/// }
/// # Ok::<(), hyperoxo_lines::LineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hypercube {
    lines: LineSet,
    cell_lines: CellLines,
}

impl Hypercube {
    /// Builds `h(dim, size)` with default options.
    ///
    /// # Errors
    ///
    /// See [`Hypercube::with_options`].
    pub fn new(dim: usize, size: usize) -> Result<Self, LineError> {
        Self::with_options(dim, size, &BuildOptions::default())
    }

    /// Builds `h(dim, size)`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Grid`] if `dim` or `size` is zero, or if the grid
    /// or its lines exceed `options.limits`.
    ///
    /// Returns [`LineError::Inconsistent`] if an enabled check fails.
    pub fn with_options(
        dim: usize,
        size: usize,
        options: &BuildOptions,
    ) -> Result<Self, LineError> {
        let grid = Grid::with_limits(dim, size, &options.limits)?;
        let lines = LineSet::build_with(grid, options)?;
        let cell_lines = CellLines::build(grid, lines.as_slice());
        if options.verification == Verification::Full {
            cell_lines
                .verify(lines.as_slice())
                .inspect_err(|err| log::error!("{err}"))?;
        }
        log::debug!(
            "h({dim}, {size}) ready: {} cells, {} lines",
            grid.cell_count(),
            lines.len()
        );
        Ok(Self { lines, cell_lines })
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.lines.grid()
    }

    /// Returns the line set.
    #[must_use]
    pub fn line_set(&self) -> &LineSet {
        &self.lines
    }

    /// Returns the cell-to-line index.
    #[must_use]
    pub fn cell_lines(&self) -> &CellLines {
        &self.cell_lines
    }

    /// Returns all lines in assembly order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        self.lines.as_slice()
    }

    /// Returns the line with id `id`, or `None` if there is no such line.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Returns the lines grouped by the number of varying axes.
    #[must_use]
    pub fn lines_grouped_by_extent(&self) -> BTreeMap<usize, &[Line]> {
        self.lines.grouped_by_extent()
    }

    /// Returns the lines varying along exactly `extent` axes.
    #[must_use]
    pub fn lines_with_extent(&self, extent: usize) -> &[Line] {
        self.lines.with_extent(extent)
    }

    /// Returns the ids of the lines through the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ArityMismatch`] or
    /// [`GridError::CoordinateOutOfRange`] if `coord` is not a cell of the grid.
    pub fn lines_through(&self, coord: &[usize]) -> Result<&[LineId], GridError> {
        let index = self.grid().flatten(coord)?;
        self.lines_through_index(index)
    }

    /// Returns the ids of the lines through the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not a cell of the grid.
    pub fn lines_through_index(&self, index: CellIndex) -> Result<&[LineId], GridError> {
        self.cell_lines
            .lines_through(index)
            .ok_or(GridError::IndexOutOfRange {
                index: index.get(),
                cell_count: self.cell_count(),
            })
    }

    /// Returns the lines through the cell at `coord`, in id order.
    ///
    /// # Errors
    ///
    /// See [`Hypercube::lines_through`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperoxo_lines::Hypercube;
    ///
    /// let board = Hypercube::new(2, 3)?;
    /// let grid = board.grid();
    /// let through_corner: Vec<Vec<String>> = board
    ///     .lines_containing(&[0, 0])?
    ///     .map(|line| line.coords(&grid).map(|c| c.to_string()).collect())
    ///     .collect();
    /// assert_eq!(through_corner.len(), 3);
    /// assert!(through_corner.contains(&vec!["(0, 0)".into(), "(1, 1)".into(), "(2, 2)".into()]));
    /// # Ok::<(), hyperoxo_lines::LineError>(())
    /// ```
    pub fn lines_containing<'a>(
        &'a self,
        coord: &[usize],
    ) -> Result<impl ExactSizeIterator<Item = &'a Line> + use<'a>, GridError> {
        let ids = self.lines_through(coord)?;
        let lines = self.lines.as_slice();
        Ok(ids.iter().map(move |id| &lines[id.get()]))
    }

    /// Returns the number of lines through the cell at `coord`.
    ///
    /// # Errors
    ///
    /// See [`Hypercube::lines_through`].
    pub fn membership(&self, coord: &[usize]) -> Result<usize, GridError> {
        self.lines_through(coord).map(<[LineId]>::len)
    }

    /// Tallies every line through `index` for `mover`, reading marks through `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not a cell of the grid.
    pub fn tallies_through<M, F>(
        &self,
        index: CellIndex,
        mover: &M,
        mut mark: F,
    ) -> Result<Vec<(LineId, LineTally)>, GridError>
    where
        M: PartialEq,
        F: FnMut(CellIndex) -> Option<M>,
    {
        let ids = self.lines_through_index(index)?;
        Ok(ids
            .iter()
            .filter_map(|&id| self.lines.get(id).map(|line| (id, line)))
            .map(|(id, line)| (id, LineTally::of(line, mover, &mut mark)))
            .collect())
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid().cell_count()
    }
}

#[cfg(test)]
mod tests {
    use hyperoxo_core::{Coord, Limits, Resource};

    use super::*;

    fn full(dim: usize, size: usize) -> Hypercube {
        let options = BuildOptions::default().with_verification(Verification::Full);
        Hypercube::with_options(dim, size, &options).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn test_rejects_zero_parameters() {
            assert_eq!(
                Hypercube::new(0, 3).unwrap_err(),
                LineError::Grid(GridError::InvalidDimension { dim: 0 })
            );
            assert_eq!(
                Hypercube::new(2, 0).unwrap_err(),
                LineError::Grid(GridError::InvalidSize { size: 0 })
            );
        }

        #[test]
        fn test_rejects_grid_over_limit() {
            let options =
                BuildOptions::default().with_limits(Limits::default().with_max_cells(1000));
            let err = Hypercube::with_options(3, 11, &options).unwrap_err();
            assert_eq!(
                err,
                LineError::Grid(GridError::ResourceExhausted {
                    resource: Resource::Cells,
                    required: 1331,
                    limit: 1000,
                })
            );
        }

        #[test]
        fn test_resource_exhaustion_is_not_invalid_configuration() {
            let options =
                BuildOptions::default().with_limits(Limits::default().with_max_cells(10));
            let err = Hypercube::with_options(3, 4, &options).unwrap_err();
            let LineError::Grid(err) = err else {
                panic!("expected a grid error");
            };
            assert!(err.is_resource_exhausted());
            assert!(!err.is_invalid_configuration());
            assert!(!err.is_out_of_range());
        }

        #[test]
        fn test_single_axis() {
            let cube = full(1, 5);
            assert_eq!(cube.line_count(), 1);
            for x in 0..5 {
                assert_eq!(cube.lines_through(&[x]).unwrap(), &[LineId::new(0)]);
            }
        }

        #[test]
        fn test_single_cell() {
            let cube = full(4, 1);
            assert_eq!(cube.cell_count(), 1);
            assert_eq!(cube.line_count(), 40);
            assert_eq!(cube.membership(&[0, 0, 0, 0]).unwrap(), 40);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn test_tic_tac_toe_memberships() {
            let cube = full(2, 3);
            let memberships: Vec<usize> = cube
                .grid()
                .cells()
                .map(|c| cube.membership(&c).unwrap())
                .collect();
            assert_eq!(memberships, vec![3, 2, 3, 2, 4, 2, 3, 2, 3]);
        }

        #[test]
        fn test_lines_through_lists_containing_lines() {
            let cube = full(3, 3);
            let coord = Coord::from([2, 1, 0]);
            let index = cube.grid().flatten(&coord).unwrap();
            for &id in cube.lines_through(&coord).unwrap() {
                let line = cube.line(id).unwrap();
                assert!(line.contains(index));
                assert!(line.coords(&cube.grid()).any(|c| c == coord));
            }
        }

        #[test]
        fn test_lines_containing_matches_ids() {
            let cube = full(3, 4);
            let coord = [1, 2, 0];
            let ids = cube.lines_through(&coord).unwrap();
            let lines: Vec<&Line> = cube.lines_containing(&coord).unwrap().collect();
            assert_eq!(lines.len(), ids.len());
            for (line, &id) in lines.into_iter().zip(ids) {
                assert_eq!(Some(line), cube.line(id));
            }
        }

        #[test]
        fn test_out_of_range_queries() {
            let cube = full(2, 3);
            assert_eq!(
                cube.lines_through(&[3, 0]).unwrap_err(),
                GridError::CoordinateOutOfRange {
                    axis: 0,
                    value: 3,
                    size: 3,
                }
            );
            assert!(cube.lines_through(&[0]).unwrap_err().is_arity_mismatch());
            assert!(
                cube.lines_through_index(CellIndex::new(9))
                    .unwrap_err()
                    .is_out_of_range()
            );
            assert!(cube.line(LineId::new(8)).is_none());
        }

        #[test]
        fn test_extent_groups() {
            let cube = full(3, 4);
            let sizes: Vec<(usize, usize)> = cube
                .lines_grouped_by_extent()
                .into_iter()
                .map(|(extent, lines)| (extent, lines.len()))
                .collect();
            assert_eq!(sizes, vec![(1, 48), (2, 24), (3, 4)]);
            assert_eq!(cube.lines_with_extent(3).len(), 4);
        }

        #[test]
        fn test_tallies_through_centre() {
            let cube = full(2, 3);
            // x . o
            // . x .
            // . . .
            let board = [
                Some('x'),
                None,
                Some('o'),
                None,
                Some('x'),
                None,
                None,
                None,
                None,
            ];
            let centre = CellIndex::new(4);
            let tallies = cube
                .tallies_through(centre, &'x', |cell| board[cell.get()])
                .unwrap();
            assert_eq!(tallies.len(), 4);
            let best = tallies.iter().map(|(_, t)| t.own).max();
            assert_eq!(best, Some(2));
            assert_eq!(tallies.iter().filter(|(_, t)| t.is_blocked()).count(), 1);
        }
    }

    #[test]
    fn test_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hypercube>();
    }
}
