//! Lines and their identities.

use std::fmt;

use hyperoxo_core::{AxisSet, CellIndex, Coord, Grid};
use tinyvec::TinyVec;

/// Position of a line in its [`LineSet`](crate::LineSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct LineId(usize);

impl LineId {
    /// Wraps a raw line position.
    #[must_use]
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw line position.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The direction in which a line walks each of its varying axes.
///
/// Holds one flag per varying axis, in ascending axis order: `false` walks
/// the axis from `0` up to `n - 1`, `true` walks it from `n - 1` down to `0`.
///
/// # Examples
///
/// ```
/// use hyperoxo_lines::Orientation;
///
/// let orientation = Orientation::new([false, true]);
/// assert_eq!(orientation.walk(0, 3).collect::<Vec<_>>(), vec![0, 2]);
/// assert_eq!(orientation.walk(2, 3).collect::<Vec<_>>(), vec![2, 0]);
/// assert_eq!(orientation.to_string(), "+-");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Orientation {
    reversed: TinyVec<[bool; 4]>,
}

impl Orientation {
    /// Creates an orientation from per-axis reversal flags.
    #[must_use]
    pub fn new<I>(reversed: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            reversed: reversed.into_iter().collect(),
        }
    }

    /// Returns the number of varying axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Returns `true` if the orientation covers no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Returns the reversal flags in ascending axis order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.reversed
    }

    /// Returns `true` if the axis at `position` (within the axis set) is walked in reverse.
    #[must_use]
    pub fn is_reversed(&self, position: usize) -> bool {
        self.reversed.get(position).copied().unwrap_or(false)
    }

    /// Returns the varying components at `step` of a walk across `size` cells.
    pub fn walk(&self, step: usize, size: usize) -> impl Iterator<Item = usize> + '_ {
        debug_assert!(step < size);
        self.reversed
            .iter()
            .map(move |&reversed| if reversed { size - 1 - step } else { step })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &reversed in &self.reversed {
            f.write_str(if reversed { "-" } else { "+" })?;
        }
        Ok(())
    }
}

/// The identity of a line: varying axes, fixed values, and orientation.
///
/// No two lines of a [`LineSet`](crate::LineSet) share a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey {
    /// The varying axes.
    pub axes: AxisSet,
    /// Values of the fixed axes, in ascending axis order.
    pub fixed: Coord,
    /// Walk direction along each varying axis.
    pub orientation: Orientation,
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "axes {} fixed {} {}",
            self.axes, self.fixed, self.orientation
        )
    }
}

/// A maximal run of `n` collinear cells.
///
/// Cells are stored as flattened indices, ordered from one corner of the
/// line's slice to the opposite corner. Consecutive cells differ by a unit
/// step along every varying axis and agree on every fixed axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    key: LineKey,
    cells: Box<[CellIndex]>,
}

impl Line {
    pub(crate) fn new(key: LineKey, cells: Box<[CellIndex]>) -> Self {
        Self { key, cells }
    }

    /// Returns the identity of the line.
    #[must_use]
    pub fn key(&self) -> &LineKey {
        &self.key
    }

    /// Returns the varying axes.
    #[must_use]
    pub fn axes(&self) -> &AxisSet {
        &self.key.axes
    }

    /// Returns the values of the fixed axes, in ascending axis order.
    #[must_use]
    pub fn fixed(&self) -> &Coord {
        &self.key.fixed
    }

    /// Returns the walk direction along each varying axis.
    #[must_use]
    pub fn orientation(&self) -> &Orientation {
        &self.key.orientation
    }

    /// Returns the number of varying axes: `1` for rows and columns, more for diagonals.
    #[must_use]
    pub fn extent(&self) -> usize {
        self.key.axes.len()
    }

    /// Returns the member cells in walk order.
    #[must_use]
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Returns the number of member cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the line has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` is a member of the line.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the position of `cell` along the line.
    #[must_use]
    pub fn position_of(&self, cell: CellIndex) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    /// Returns the member cells as tuple coordinates of `grid`.
    ///
    /// `grid` must be the grid the line was assembled for.
    pub fn coords<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Coord> + 'a {
        self.cells
            .iter()
            .map(|&cell| grid.unflatten_unchecked(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_walk() {
        let orientation = Orientation::new([true, false, true]);
        assert_eq!(orientation.walk(1, 4).collect::<Vec<_>>(), vec![2, 1, 2]);
        assert!(orientation.is_reversed(0));
        assert!(!orientation.is_reversed(1));
        assert!(!orientation.is_reversed(7));
        assert_eq!(orientation.to_string(), "-+-");
    }

    #[test]
    fn test_line_queries() {
        let grid = Grid::new(2, 3).unwrap();
        let key = LineKey {
            axes: AxisSet::new(2, [0, 1]).unwrap(),
            fixed: Coord::default(),
            orientation: Orientation::new([true, false]),
        };
        let cells = [6, 4, 2].map(CellIndex::new);
        let line = Line::new(key, cells.into());
        assert_eq!(line.extent(), 2);
        assert_eq!(line.len(), 3);
        assert!(line.contains(CellIndex::new(4)));
        assert!(!line.contains(CellIndex::new(0)));
        assert_eq!(line.position_of(CellIndex::new(2)), Some(2));
        assert_eq!(
            line.coords(&grid).collect::<Vec<_>>(),
            [[2, 0], [1, 1], [0, 2]].map(Coord::from).to_vec()
        );
        assert_eq!(line.key().to_string(), "axes {0, 1} fixed () -+");
    }
}
