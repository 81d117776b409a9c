//! The hypercube grid and its coordinate conversions.

use crate::{AxisCombinations, CellIndex, Coord, GridError, Limits, Resource, count::checked_pow};

/// A `dim`-dimensional grid with `size` cells along every axis, `h(dim, size)`.
///
/// A grid is a pure description: it knows its shape and converts between
/// tuple coordinates ([`Coord`]) and flattened indices ([`CellIndex`]), but
/// holds no cell values.
///
/// Flattening is row-major, with axis 0 as the most significant digit:
///
/// ```text
/// index = ((c[0] * n + c[1]) * n + c[2]) ... * n + c[d-1]
/// ```
///
/// # Examples
///
/// ```
/// use hyperoxo_core::{CellIndex, Coord, Grid};
///
/// let grid = Grid::new(2, 3)?;
/// assert_eq!(grid.cell_count(), 9);
///
/// let index = grid.flatten(&[1, 2])?;
/// assert_eq!(index, CellIndex::new(5));
/// assert_eq!(grid.unflatten(index)?, Coord::from([1, 2]));
/// # Ok::<(), hyperoxo_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    dim: usize,
    size: usize,
    cell_count: usize,
}

impl Grid {
    /// Creates a grid, rejecting only shapes whose cell count overflows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if `dim` is zero,
    /// [`GridError::InvalidSize`] if `size` is zero, and
    /// [`GridError::ResourceExhausted`] if `size^dim` overflows.
    pub fn new(dim: usize, size: usize) -> Result<Self, GridError> {
        Self::with_limits(dim, size, &Limits::UNLIMITED)
    }

    /// Creates a grid whose cell count must stay within `limits`.
    ///
    /// # Errors
    ///
    /// As [`Grid::new`], and additionally [`GridError::ResourceExhausted`] if
    /// `size^dim` exceeds [`Limits::max_cells`].
    pub fn with_limits(dim: usize, size: usize, limits: &Limits) -> Result<Self, GridError> {
        if dim == 0 {
            return Err(GridError::InvalidDimension { dim });
        }
        if size == 0 {
            return Err(GridError::InvalidSize { size });
        }
        let cell_count = limits.check(Resource::Cells, checked_pow(size, dim))?;
        Ok(Self {
            dim,
            size,
            cell_count,
        })
    }

    /// Returns the number of axes.
    #[must_use]
    #[inline]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, `size^dim`.
    #[must_use]
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Checks that `coord` has one in-range component per axis.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ArityMismatch`] or [`GridError::CoordinateOutOfRange`].
    pub fn check_coord(&self, coord: &[usize]) -> Result<(), GridError> {
        if coord.len() != self.dim {
            return Err(GridError::ArityMismatch {
                expected: self.dim,
                actual: coord.len(),
            });
        }
        match coord.iter().position(|&c| c >= self.size) {
            Some(axis) => Err(GridError::CoordinateOutOfRange {
                axis,
                value: coord[axis],
                size: self.size,
            }),
            None => Ok(()),
        }
    }

    /// Checks that `index` addresses a cell of this grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`].
    pub fn check_index(&self, index: CellIndex) -> Result<(), GridError> {
        if index.get() < self.cell_count {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index: index.get(),
                cell_count: self.cell_count,
            })
        }
    }

    /// Returns `true` if `coord` is a valid coordinate of this grid.
    #[must_use]
    pub fn contains(&self, coord: &[usize]) -> bool {
        self.check_coord(coord).is_ok()
    }

    /// Converts a tuple coordinate into its flattened index.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ArityMismatch`] or [`GridError::CoordinateOutOfRange`]
    /// if `coord` is not a coordinate of this grid.
    pub fn flatten(&self, coord: &[usize]) -> Result<CellIndex, GridError> {
        self.check_coord(coord)?;
        Ok(self.flatten_unchecked(coord))
    }

    /// Converts a coordinate already known to be valid.
    #[must_use]
    #[inline]
    pub fn flatten_unchecked(&self, coord: &[usize]) -> CellIndex {
        debug_assert!(self.contains(coord));
        CellIndex::new(coord.iter().fold(0, |acc, &c| acc * self.size + c))
    }

    /// Converts a flattened index back into its tuple coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not below [`Grid::cell_count`].
    pub fn unflatten(&self, index: CellIndex) -> Result<Coord, GridError> {
        self.check_index(index)?;
        Ok(self.unflatten_unchecked(index))
    }

    /// Converts an index already known to be valid.
    #[must_use]
    pub fn unflatten_unchecked(&self, index: CellIndex) -> Coord {
        debug_assert!(self.check_index(index).is_ok());
        let mut coord = Coord::zeros(self.dim);
        let mut rest = index.get();
        for c in coord.as_mut_slice().iter_mut().rev() {
            *c = rest % self.size;
            rest /= self.size;
        }
        coord
    }

    /// Returns an iterator over all cell coordinates in flattened order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperoxo_core::{Coord, Grid};
    ///
    /// let grid = Grid::new(2, 2)?;
    /// let cells: Vec<_> = grid.cells().collect();
    /// assert_eq!(cells[1], Coord::from([0, 1]));
    /// assert_eq!(cells[2], Coord::from([1, 0]));
    /// # Ok::<(), hyperoxo_core::GridError>(())
    /// ```
    pub fn cells(
        &self,
    ) -> impl DoubleEndedIterator<Item = Coord> + ExactSizeIterator + Clone + use<> {
        let grid = *self;
        (0..self.cell_count).map(move |i| grid.unflatten_unchecked(CellIndex::new(i)))
    }

    /// Returns an iterator over all flattened cell indices.
    pub fn indices(
        &self,
    ) -> impl DoubleEndedIterator<Item = CellIndex> + ExactSizeIterator + Clone + use<> {
        (0..self.cell_count).map(CellIndex::new)
    }

    /// Returns `true` if every component of `coord` is `0` or `size - 1`.
    ///
    /// Invalid coordinates are never corners.
    #[must_use]
    pub fn is_corner(&self, coord: &[usize]) -> bool {
        self.contains(coord) && coord.iter().all(|&c| c == 0 || c == self.size - 1)
    }

    /// Returns an iterator over the corners of the grid in flattened order.
    ///
    /// There are `2^dim` corners, or a single one when `size == 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperoxo_core::{Coord, Grid};
    ///
    /// let grid = Grid::new(2, 3)?;
    /// let corners: Vec<_> = grid.corners().collect();
    /// assert_eq!(
    ///     corners,
    ///     [[0, 0], [0, 2], [2, 0], [2, 2]].map(Coord::from).to_vec()
    /// );
    /// # Ok::<(), hyperoxo_core::GridError>(())
    /// ```
    #[must_use]
    pub fn corners(&self) -> impl Iterator<Item = Coord> + '_ {
        // size >= 2 keeps dim below usize::BITS, since size^dim fits in usize.
        let count = if self.size == 1 {
            1
        } else {
            1usize << self.dim
        };
        (0..count).map(move |bits| {
            (0..self.dim)
                .map(|axis| {
                    let high = (bits >> (self.dim - 1 - axis)) & 1 == 1;
                    if high { self.size - 1 } else { 0 }
                })
                .collect()
        })
    }

    /// Returns an iterator over every (axis set, fixed assignment) pair of this grid.
    ///
    /// See [`AxisCombinations`].
    #[must_use]
    pub fn axis_combinations(&self) -> AxisCombinations {
        AxisCombinations::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn test_rejects_zero_dimension() {
            assert_eq!(Grid::new(0, 3), Err(GridError::InvalidDimension { dim: 0 }));
        }

        #[test]
        fn test_rejects_zero_size() {
            assert_eq!(Grid::new(3, 0), Err(GridError::InvalidSize { size: 0 }));
        }

        #[test]
        fn test_rejects_overflowing_cell_count() {
            let err = Grid::new(100, 10).unwrap_err();
            assert!(err.is_resource_exhausted());
        }

        #[test]
        fn test_size_one_never_overflows() {
            let grid = Grid::new(1000, 1).unwrap();
            assert_eq!(grid.cell_count(), 1);
        }

        #[test]
        fn test_limits_apply() {
            let limits = Limits::default().with_max_cells(63);
            assert_eq!(
                Grid::with_limits(3, 4, &limits),
                Err(GridError::ResourceExhausted {
                    resource: Resource::Cells,
                    required: 64,
                    limit: 63,
                })
            );
            assert!(Grid::with_limits(3, 3, &limits).is_ok());
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn test_row_major_order() {
            let grid = Grid::new(2, 2).unwrap();
            assert_eq!(grid.flatten(&[0, 0]).unwrap().get(), 0);
            assert_eq!(grid.flatten(&[0, 1]).unwrap().get(), 1);
            assert_eq!(grid.flatten(&[1, 0]).unwrap().get(), 2);
            assert_eq!(grid.flatten(&[1, 1]).unwrap().get(), 3);
        }

        #[test]
        fn test_rejects_wrong_arity() {
            let grid = Grid::new(3, 4).unwrap();
            assert_eq!(
                grid.flatten(&[1, 2]),
                Err(GridError::ArityMismatch {
                    expected: 3,
                    actual: 2,
                })
            );
        }

        #[test]
        fn test_rejects_out_of_range_component() {
            let grid = Grid::new(3, 4).unwrap();
            assert_eq!(
                grid.flatten(&[1, 4, 0]),
                Err(GridError::CoordinateOutOfRange {
                    axis: 1,
                    value: 4,
                    size: 4,
                })
            );
        }

        #[test]
        fn test_rejects_out_of_range_index() {
            let grid = Grid::new(3, 4).unwrap();
            assert_eq!(
                grid.unflatten(CellIndex::new(64)),
                Err(GridError::IndexOutOfRange {
                    index: 64,
                    cell_count: 64,
                })
            );
        }

        #[test]
        fn test_cells_match_indices() {
            let grid = Grid::new(3, 3).unwrap();
            for (coord, index) in grid.cells().zip(grid.indices()) {
                assert_eq!(grid.flatten(&coord).unwrap(), index);
            }
        }
    }

    mod corners {
        use super::*;

        #[test]
        fn test_corner_count() {
            assert_eq!(Grid::new(3, 4).unwrap().corners().count(), 8);
            assert_eq!(Grid::new(3, 1).unwrap().corners().count(), 1);
        }

        #[test]
        fn test_corners_are_corners() {
            let grid = Grid::new(4, 3).unwrap();
            assert!(grid.corners().all(|c| grid.is_corner(&c)));
            let count = grid.cells().filter(|c| grid.is_corner(c)).count();
            assert_eq!(count, 16);
        }

        #[test]
        fn test_is_corner() {
            let grid = Grid::new(3, 4).unwrap();
            assert!(grid.is_corner(&[0, 3, 3]));
            assert!(!grid.is_corner(&[0, 1, 3]));
            assert!(!grid.is_corner(&[0, 4, 3]));
        }
    }

    proptest! {
        #[test]
        fn test_unflatten_then_flatten(dim in 1usize..6, size in 1usize..6, seed: usize) {
            let grid = Grid::new(dim, size).unwrap();
            let index = CellIndex::new(seed % grid.cell_count());
            let coord = grid.unflatten(index).unwrap();
            prop_assert_eq!(grid.flatten(&coord).unwrap(), index);
        }

        #[test]
        fn test_flatten_then_unflatten(
            size in 1usize..8,
            components in proptest::collection::vec(0usize..64, 1..6),
        ) {
            let grid = Grid::new(components.len(), size).unwrap();
            let coord: Coord = components.iter().map(|c| c % size).collect();
            let index = grid.flatten(&coord).unwrap();
            prop_assert!(index.get() < grid.cell_count());
            prop_assert_eq!(grid.unflatten(index).unwrap(), coord);
        }
    }
}
