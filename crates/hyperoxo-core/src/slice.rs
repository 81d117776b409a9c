//! Sub-grids obtained by fixing some axes of a grid.

use crate::{AxisSet, Coord, Grid, GridError, count::checked_pow};

/// A `k`-dimensional slice of a grid.
///
/// The axes in [`Slice::axes`] vary; every other axis is held at the
/// corresponding value of [`Slice::fixed`], which lists the fixed values in
/// ascending axis order. A slice with all axes varying is the whole grid.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::{AxisSet, Coord, Grid, Slice};
///
/// let grid = Grid::new(3, 2)?;
/// // Axis 1 is fixed at 1; axes 0 and 2 vary.
/// let slice = Slice::new(grid, AxisSet::new(3, [0, 2])?, Coord::from([1]))?;
/// assert_eq!(slice.dim(), 2);
/// assert_eq!(slice.coord_at(&[1, 0])?, Coord::from([1, 1, 0]));
///
/// let cells: Vec<_> = slice
///     .cells()
///     .map(|c| grid.flatten_unchecked(&c).get())
///     .collect();
/// assert_eq!(cells, vec![2, 3, 6, 7]);
/// # Ok::<(), hyperoxo_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    grid: Grid,
    axes: AxisSet,
    fixed: Coord,
}

impl Slice {
    /// Creates a slice of `grid` varying along `axes`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::AxisOutOfRange`] if an axis does not belong to the
    /// grid, [`GridError::ArityMismatch`] if `fixed` does not hold exactly one
    /// value per fixed axis, and [`GridError::CoordinateOutOfRange`] if a fixed
    /// value is not below the grid size.
    pub fn new(grid: Grid, axes: AxisSet, fixed: Coord) -> Result<Self, GridError> {
        if let Some(axis) = axes.iter().find(|&axis| axis >= grid.dim()) {
            return Err(GridError::AxisOutOfRange {
                axis,
                dim: grid.dim(),
            });
        }
        let expected = grid.dim() - axes.len();
        if fixed.len() != expected {
            return Err(GridError::ArityMismatch {
                expected,
                actual: fixed.len(),
            });
        }
        if let Some((axis, &value)) = axes
            .complement(grid.dim())
            .zip(fixed.iter())
            .find(|&(_, &value)| value >= grid.size())
        {
            return Err(GridError::CoordinateOutOfRange {
                axis,
                value,
                size: grid.size(),
            });
        }
        Ok(Self::from_parts(grid, axes, fixed))
    }

    pub(crate) fn from_parts(grid: Grid, axes: AxisSet, fixed: Coord) -> Self {
        debug_assert_eq!(axes.len() + fixed.len(), grid.dim());
        Self { grid, axes, fixed }
    }

    /// Returns the grid this slice belongs to.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the varying axes.
    #[must_use]
    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    /// Returns the values of the fixed axes, in ascending axis order.
    #[must_use]
    pub fn fixed(&self) -> &Coord {
        &self.fixed
    }

    /// Returns the number of varying axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.axes.len()
    }

    /// Returns the number of cells in the slice, `size^k`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        // Bounded by the grid's own cell count.
        checked_pow(self.grid.size(), self.dim()).unwrap_or(usize::MAX)
    }

    /// Returns the grid coordinate whose varying components are `local`.
    ///
    /// `local` holds one value per varying axis, in ascending axis order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ArityMismatch`] or [`GridError::CoordinateOutOfRange`]
    /// if `local` is not a coordinate of the slice.
    pub fn coord_at(&self, local: &[usize]) -> Result<Coord, GridError> {
        if local.len() != self.dim() {
            return Err(GridError::ArityMismatch {
                expected: self.dim(),
                actual: local.len(),
            });
        }
        if let Some((axis, &value)) = self
            .axes
            .iter()
            .zip(local)
            .find(|&(_, &value)| value >= self.grid.size())
        {
            return Err(GridError::CoordinateOutOfRange {
                axis,
                value,
                size: self.grid.size(),
            });
        }
        Ok(self.interleave(local.iter().copied()))
    }

    /// Merges varying values (in ascending axis order) with the fixed values.
    ///
    /// `varying` must yield exactly [`Slice::dim`] values.
    pub fn interleave<I>(&self, varying: I) -> Coord
    where
        I: IntoIterator<Item = usize>,
    {
        let mut varying = varying.into_iter();
        let mut fixed = self.fixed.iter().copied();
        (0..self.grid.dim())
            .map(|axis| {
                let next = if self.axes.contains(axis) {
                    varying.next()
                } else {
                    fixed.next()
                };
                next.unwrap_or_default()
            })
            .collect()
    }

    /// Returns an iterator over the grid coordinates in this slice, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let local_grid = Grid::new(self.dim(), self.grid.size()).ok();
        local_grid
            .into_iter()
            .flat_map(|local| local.cells())
            .map(|local| self.interleave(local.iter().copied()))
    }
}
