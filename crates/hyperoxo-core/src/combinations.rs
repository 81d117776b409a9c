//! Enumeration of (axis set, fixed assignment) pairs.

use std::iter::FusedIterator;

use crate::{AxisSet, Coord, Grid, GridError, Slice, count};

/// Returns an iterator over every slice of `h(dim, size)` with at least one varying axis.
///
/// This is a convenience wrapper around [`Grid::new`] and
/// [`Grid::axis_combinations`].
///
/// # Errors
///
/// Returns [`GridError::InvalidDimension`] if `dim` is zero,
/// [`GridError::InvalidSize`] if `size` is zero, and
/// [`GridError::ResourceExhausted`] if the grid's cell count overflows.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::axis_combinations;
///
/// let pairs: Vec<_> = axis_combinations(2, 2)?
///     .map(|slice| (slice.axes().as_slice().to_vec(), slice.fixed().as_slice().to_vec()))
///     .collect();
/// assert_eq!(
///     pairs,
///     vec![
///         (vec![0], vec![0]),
///         (vec![0], vec![1]),
///         (vec![1], vec![0]),
///         (vec![1], vec![1]),
///         (vec![0, 1], vec![]),
///     ]
/// );
/// # Ok::<(), hyperoxo_core::GridError>(())
/// ```
pub fn axis_combinations(dim: usize, size: usize) -> Result<AxisCombinations, GridError> {
    Ok(Grid::new(dim, size)?.axis_combinations())
}

/// Iterator over every (axis set, fixed assignment) pair of a grid.
///
/// Pairs are yielded as [`Slice`]s in a deterministic order:
///
/// 1. by the number of varying axes `k`, from `1` to `dim`;
/// 2. for each `k`, by axis set in lexicographic order of ascending axes;
/// 3. for each axis set, by fixed assignment in lexicographic order (the
///    highest fixed axis changes fastest).
///
/// For `k = dim` the only assignment is the empty one. The iterator is lazy
/// and finite; cloning it, or calling [`Grid::axis_combinations`] again,
/// restarts the sequence.
#[derive(Debug, Clone)]
pub struct AxisCombinations {
    grid: Grid,
    axes: Vec<usize>,
    fixed: Vec<usize>,
    done: bool,
}

impl AxisCombinations {
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            grid,
            axes: vec![0],
            fixed: vec![0; grid.dim() - 1],
            done: false,
        }
    }

    /// Returns the grid being enumerated.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Total number of pairs the full sequence yields, or `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        count::num_slices(self.grid.dim(), self.grid.size())
    }

    fn advance(&mut self) {
        if advance_assignment(&mut self.fixed, self.grid.size()) {
            return;
        }
        if advance_combination(&mut self.axes, self.grid.dim()) {
            return;
        }
        let k = self.axes.len() + 1;
        if k > self.grid.dim() {
            self.done = true;
            return;
        }
        self.axes = (0..k).collect();
        self.fixed = vec![0; self.grid.dim() - k];
    }
}

/// Steps `values` to the next assignment in `[0, size)^len`; `false` once it wraps.
fn advance_assignment(values: &mut [usize], size: usize) -> bool {
    for v in values.iter_mut().rev() {
        *v += 1;
        if *v < size {
            return true;
        }
        *v = 0;
    }
    false
}

/// Steps `axes` to the next `k`-combination of `0..dim`; `false` after the last one.
fn advance_combination(axes: &mut [usize], dim: usize) -> bool {
    let k = axes.len();
    let Some(i) = (0..k).rev().find(|&i| axes[i] < dim - k + i) else {
        return false;
    };
    axes[i] += 1;
    for j in i + 1..k {
        axes[j] = axes[j - 1] + 1;
    }
    true
}

impl Iterator for AxisCombinations {
    type Item = Slice;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let slice = Slice::from_parts(
            self.grid,
            AxisSet::from_sorted(&self.axes),
            Coord::from(self.fixed.as_slice()),
        );
        self.advance();
        Some(slice)
    }
}

impl FusedIterator for AxisCombinations {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            axis_combinations(0, 3).unwrap_err(),
            GridError::InvalidDimension { dim: 0 }
        );
        assert_eq!(
            axis_combinations(2, 0).unwrap_err(),
            GridError::InvalidSize { size: 0 }
        );
    }

    #[test]
    fn test_one_dimension() {
        let slices: Vec<_> = axis_combinations(1, 5).unwrap().collect();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].axes().as_slice(), &[0]);
        assert!(slices[0].fixed().is_empty());
    }

    #[test]
    fn test_order_for_three_axes() {
        let axes: Vec<Vec<usize>> = axis_combinations(3, 1)
            .unwrap()
            .map(|s| s.axes().as_slice().to_vec())
            .collect();
        assert_eq!(
            axes,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn test_assignments_change_last_axis_fastest() {
        let fixed: Vec<Vec<usize>> = axis_combinations(3, 2)
            .unwrap()
            .take(4)
            .map(|s| s.fixed().as_slice().to_vec())
            .collect();
        assert_eq!(fixed, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_is_restartable() {
        let iter = axis_combinations(3, 3).unwrap();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_is_fused() {
        let mut iter = axis_combinations(2, 2).unwrap();
        iter.by_ref().for_each(drop);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    proptest! {
        #[test]
        fn test_yields_each_pair_once(dim in 1usize..5, size in 1usize..5) {
            let iter = axis_combinations(dim, size).unwrap();
            let total = iter.total().unwrap();
            let slices: Vec<_> = iter.collect();
            prop_assert_eq!(slices.len(), total);
            let unique: HashSet<_> = slices.iter().cloned().collect();
            prop_assert_eq!(unique.len(), total);
            for slice in &slices {
                prop_assert!(slice.fixed().iter().all(|&v| v < size));
                prop_assert_eq!(slice.axes().len() + slice.fixed().len(), dim);
            }
        }

        #[test]
        fn test_extents_are_ascending(dim in 1usize..5, size in 1usize..4) {
            let extents: Vec<_> = axis_combinations(dim, size).unwrap().map(|s| s.dim()).collect();
            prop_assert!(extents.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(extents.first().copied(), Some(1));
            prop_assert_eq!(extents.last().copied(), Some(dim));
        }
    }
}
