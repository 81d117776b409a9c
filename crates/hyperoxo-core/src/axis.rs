//! Sets of varying axes.

use std::fmt;

use tinyvec::TinyVec;

use crate::GridError;

/// A non-empty set of axes, stored in ascending order.
///
/// The axes in the set are the ones that vary along a line or slice; the
/// remaining axes of the grid are held fixed.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::AxisSet;
///
/// let axes = AxisSet::new(4, [3, 1])?;
/// assert_eq!(axes.as_slice(), &[1, 3]);
/// assert_eq!(axes.complement(4).collect::<Vec<_>>(), vec![0, 2]);
/// # Ok::<(), hyperoxo_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisSet {
    axes: TinyVec<[usize; 4]>,
}

impl AxisSet {
    /// Creates an axis set for a grid with `dim` axes.
    ///
    /// The axes may be given in any order; duplicates are merged.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAxisSet`] if no axes are given, or
    /// [`GridError::AxisOutOfRange`] if an axis is not below `dim`.
    pub fn new<I>(dim: usize, axes: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut given: TinyVec<[usize; 4]> = axes.into_iter().collect();
        if let Some(&axis) = given.iter().find(|&&axis| axis >= dim) {
            return Err(GridError::AxisOutOfRange { axis, dim });
        }
        given.sort_unstable();
        let mut axes = TinyVec::<[usize; 4]>::new();
        for axis in given {
            if axes.last() != Some(&axis) {
                axes.push(axis);
            }
        }
        if axes.is_empty() {
            return Err(GridError::EmptyAxisSet);
        }
        Ok(Self { axes })
    }

    /// Wraps axes that are already strictly ascending and non-empty.
    pub(crate) fn from_sorted(axes: &[usize]) -> Self {
        debug_assert!(!axes.is_empty());
        debug_assert!(axes.windows(2).all(|w| w[0] < w[1]));
        Self {
            axes: axes.iter().copied().collect(),
        }
    }

    /// Returns the number of axes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always `false`: an axis set has at least one axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Returns the axes in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.axes
    }

    /// Returns an iterator over the axes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.axes.iter().copied()
    }

    /// Returns `true` if `axis` belongs to the set.
    #[must_use]
    pub fn contains(&self, axis: usize) -> bool {
        self.axes.binary_search(&axis).is_ok()
    }

    /// Returns the axes of a `dim`-axis grid that are not in the set, in ascending order.
    pub fn complement(&self, dim: usize) -> impl Iterator<Item = usize> + '_ {
        (0..dim).filter(move |&axis| !self.contains(axis))
    }
}

impl fmt::Display for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, axis) in self.axes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{axis}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_merges() {
        let axes = AxisSet::new(5, [4, 0, 4, 2]).unwrap();
        assert_eq!(axes.as_slice(), &[0, 2, 4]);
        assert_eq!(axes.len(), 3);
        assert!(axes.contains(2));
        assert!(!axes.contains(3));
        assert_eq!(axes.to_string(), "{0, 2, 4}");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(AxisSet::new(3, []), Err(GridError::EmptyAxisSet));
    }

    #[test]
    fn test_rejects_out_of_range_axis() {
        assert_eq!(
            AxisSet::new(3, [0, 3]),
            Err(GridError::AxisOutOfRange { axis: 3, dim: 3 })
        );
    }

    #[test]
    fn test_complement() {
        let axes = AxisSet::new(3, [1]).unwrap();
        assert_eq!(axes.complement(3).collect::<Vec<_>>(), vec![0, 2]);
        let all = AxisSet::new(3, 0..3).unwrap();
        assert_eq!(all.complement(3).count(), 0);
    }
}
