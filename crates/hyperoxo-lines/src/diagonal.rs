//! Diagonals of a sub-grid.
//!
//! A `k`-dimensional sub-grid has `2^k` corners, joined pairwise by `2^(k-1)`
//! diagonals. Rather than pairing corners and filtering, the diagonals are
//! built recursively:
//!
//! - a 1-dimensional sub-grid is its own diagonal;
//! - otherwise the first two axes are collapsed into one axis that walks both
//!   together, once with the first axis in its natural order and once with it
//!   reversed, and the diagonals of both `(k-1)`-dimensional results are
//!   concatenated.
//!
//! The collapsed axis is moved to the end, so the next level reverses a
//! different axis. For a 2×2×2 cube holding `0..8` in row-major order this
//! yields `[0, 7]`, `[1, 6]`, `[4, 3]` and `[5, 2]`.
//!
//! Every call builds its own result; nothing is retained between calls.

use hyperoxo_core::{Coord, Slice};
use tinyvec::TinyVec;

use crate::Orientation;

/// One axis of the sub-grid, tagged with its walk direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Lane {
    /// Position of the axis within the sub-grid's axis set.
    position: usize,
    reversed: bool,
}

impl Lane {
    fn flipped(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }
}

/// An axis of an intermediate view: lanes that advance together.
type ViewAxis = TinyVec<[Lane; 4]>;

/// A diagonal of a slice: its orientation and its cells from corner to corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagonal {
    /// Walk direction along each varying axis of the slice.
    pub orientation: Orientation,
    /// Member cells in walk order, as grid coordinates.
    pub cells: Vec<Coord>,
}

/// Returns the orientations of all `2^(extent-1)` diagonals of an `extent`-dimensional sub-grid.
///
/// The result depends only on `extent`. An `extent` of zero has no diagonals.
///
/// # Examples
///
/// ```
/// use hyperoxo_lines::{Orientation, diagonal::orientations};
///
/// assert_eq!(orientations(1), vec![Orientation::new([false])]);
/// assert_eq!(
///     orientations(2),
///     vec![Orientation::new([false, false]), Orientation::new([true, false])]
/// );
/// assert_eq!(orientations(4).len(), 8);
/// ```
#[must_use]
pub fn orientations(extent: usize) -> Vec<Orientation> {
    let view: Vec<ViewAxis> = (0..extent)
        .map(|position| {
            let mut axis = ViewAxis::new();
            axis.push(Lane {
                position,
                reversed: false,
            });
            axis
        })
        .collect();
    collapse(&view)
        .into_iter()
        .map(|lanes| {
            let mut reversed = vec![false; extent];
            for lane in lanes {
                reversed[lane.position] = lane.reversed;
            }
            Orientation::new(reversed)
        })
        .collect()
}

fn collapse(view: &[ViewAxis]) -> Vec<ViewAxis> {
    match view {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        [first, second, rest @ ..] => {
            let mut found = collapse(&merge(first.iter().copied(), second, rest));
            found.extend(collapse(&merge(
                first.iter().copied().map(Lane::flipped),
                second,
                rest,
            )));
            found
        }
    }
}

fn merge<I>(first: I, second: &ViewAxis, rest: &[ViewAxis]) -> Vec<ViewAxis>
where
    I: Iterator<Item = Lane>,
{
    let merged: ViewAxis = first.chain(second.iter().copied()).collect();
    rest.iter().cloned().chain([merged]).collect()
}

/// Returns all diagonals of `slice`, each ordered from one corner to the opposite corner.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::{AxisSet, Coord, Grid, Slice};
/// use hyperoxo_lines::diagonal::diagonals;
///
/// let grid = Grid::new(2, 2)?;
/// let square = Slice::new(grid, AxisSet::new(2, [0, 1])?, Coord::default())?;
/// let found: Vec<Vec<usize>> = diagonals(&square)
///     .iter()
///     .map(|d| d.cells.iter().map(|c| grid.flatten_unchecked(c).get()).collect())
///     .collect();
/// assert_eq!(found, vec![vec![0, 3], vec![2, 1]]);
/// # Ok::<(), hyperoxo_core::GridError>(())
/// ```
#[must_use]
pub fn diagonals(slice: &Slice) -> Vec<Diagonal> {
    diagonals_with(slice, &orientations(slice.dim()))
}

/// Like [`diagonals`], reusing `orientations` computed once for the slice's extent.
///
/// `orientations` must be `orientations(slice.dim())`; callers walking many
/// slices of the same extent compute it once and share it.
#[must_use]
pub fn diagonals_with(slice: &Slice, orientations: &[Orientation]) -> Vec<Diagonal> {
    let size = slice.grid().size();
    orientations
        .iter()
        .map(|orientation| {
            let cells = (0..size)
                .map(|step| slice.interleave(orientation.walk(step, size)))
                .collect();
            Diagonal {
                orientation: orientation.clone(),
                cells,
            }
        })
        .collect()
}
