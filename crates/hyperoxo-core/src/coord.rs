//! Cell coordinates in tuple and flattened form.

use std::{fmt, ops::Deref};

use tinyvec::TinyVec;

/// Inline storage for coordinate components; grids up to four axes never allocate.
type Components = TinyVec<[usize; 4]>;

/// A cell coordinate in tuple form: one component per axis.
///
/// A `Coord` does not know which grid it belongs to; [`Grid`](crate::Grid)
/// validates components against its dimension and size.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::Coord;
///
/// let coord = Coord::from([1, 0, 2]);
/// assert_eq!(coord.len(), 3);
/// assert_eq!(coord[2], 2);
/// assert_eq!(coord.to_string(), "(1, 0, 2)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    components: Components,
}

impl Coord {
    /// Creates a coordinate from its components.
    #[must_use]
    pub fn new<I>(components: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// Creates a coordinate with `len` zero components.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(std::iter::repeat_n(0, len))
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.components
    }

    /// Returns the components as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.components
    }
}

impl Deref for Coord {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[usize]> for Coord {
    fn as_ref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl<const N: usize> From<[usize; N]> for Coord {
    fn from(components: [usize; N]) -> Self {
        Self::new(components)
    }
}

impl From<&[usize]> for Coord {
    fn from(components: &[usize]) -> Self {
        Self::new(components.iter().copied())
    }
}

impl From<Vec<usize>> for Coord {
    fn from(components: Vec<usize>) -> Self {
        Self::new(components)
    }
}

impl FromIterator<usize> for Coord {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// A cell coordinate in flattened form.
///
/// Flattening is row-major: axis 0 is the most significant digit in base `n`.
/// See [`Grid::flatten`](crate::Grid::flatten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Wraps a raw index. The index is only checked when used with a grid.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for CellIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_agree() {
        let a = Coord::from([3, 1, 4]);
        let b = Coord::from(vec![3, 1, 4]);
        let c: Coord = [3, 1, 4].into_iter().collect();
        let d = Coord::from(&[3, 1, 4][..]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let coord = Coord::new(0..7);
        assert_eq!(coord.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(coord, Coord::from(vec![0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Coord::from([0, 2]) < Coord::from([1, 0]));
        assert!(Coord::from([1, 0]) < Coord::from([1, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::zeros(2).to_string(), "(0, 0)");
        assert_eq!(Coord::default().to_string(), "()");
        assert_eq!(CellIndex::new(7).to_string(), "7");
    }
}
