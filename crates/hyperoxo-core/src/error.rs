//! Error types for grid construction and coordinate lookups.

/// A resource whose size is bounded by [`Limits`](crate::Limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Resource {
    /// Cells of the grid (`n^d`).
    #[display("grid cells")]
    Cells,
    /// Cell references stored by the line list (`num_lines(d, n) * n`).
    #[display("line cell references")]
    LineCells,
}

/// Errors reported by grid construction and coordinate conversion.
///
/// The variants fall into three groups:
///
/// - **Invalid configuration**: [`InvalidDimension`] and [`InvalidSize`] are
///   reported when the parameters describe no grid at all. The caller must
///   supply different parameters.
/// - **Resource exhausted**: [`ResourceExhausted`] is reported when a grid (or
///   something derived from it) would exceed a configured ceiling. Raising the
///   ceiling, or choosing a smaller grid, resolves it.
/// - **Out of range**: the remaining variants are caller errors on lookups.
///   They never leave side effects behind.
///
/// [`InvalidDimension`]: GridError::InvalidDimension
/// [`InvalidSize`]: GridError::InvalidSize
/// [`ResourceExhausted`]: GridError::ResourceExhausted
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum GridError {
    /// The grid has no axes.
    #[display("invalid dimension {dim}: a grid needs at least one axis")]
    InvalidDimension {
        /// The rejected dimension.
        dim: usize,
    },
    /// The grid has no cells along an axis.
    #[display("invalid size {size}: every axis needs at least one cell")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// Building the grid would exceed a configured ceiling.
    ///
    /// `required` saturates at `usize::MAX` when the exact amount overflows.
    #[display("{resource} required ({required}) exceed the limit of {limit}")]
    ResourceExhausted {
        /// The bounded resource.
        resource: Resource,
        /// The amount the grid would need.
        required: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// A coordinate or assignment has the wrong number of components.
    #[display("expected {expected} components, got {actual}")]
    ArityMismatch {
        /// The number of components the grid expects.
        expected: usize,
        /// The number of components supplied.
        actual: usize,
    },
    /// A coordinate component lies outside `[0, size)`.
    #[display("coordinate {value} on axis {axis} is outside 0..{size}")]
    CoordinateOutOfRange {
        /// The offending axis.
        axis: usize,
        /// The offending value.
        value: usize,
        /// The grid size.
        size: usize,
    },
    /// A flattened cell index lies outside `[0, size^dim)`.
    #[display("cell index {index} is outside 0..{cell_count}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of cells in the grid.
        cell_count: usize,
    },
    /// An axis number lies outside `[0, dim)`.
    #[display("axis {axis} is outside 0..{dim}")]
    AxisOutOfRange {
        /// The offending axis.
        axis: usize,
        /// The grid dimension.
        dim: usize,
    },
    /// An axis set names no axes.
    #[display("an axis set needs at least one axis")]
    EmptyAxisSet,
}

impl GridError {
    /// Returns `true` if the dimension or size describes no grid.
    ///
    /// A [`ResourceExhausted`](GridError::ResourceExhausted) error is not an
    /// invalid configuration: the same parameters succeed under higher limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperoxo_core::{Grid, Limits};
    ///
    /// let err = Grid::new(0, 3).unwrap_err();
    /// assert!(err.is_invalid_configuration());
    /// assert!(!err.is_out_of_range());
    ///
    /// let err = Grid::with_limits(3, 4, &Limits::default().with_max_cells(10)).unwrap_err();
    /// assert!(err.is_resource_exhausted());
    /// assert!(!err.is_invalid_configuration());
    /// ```
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. } | Self::InvalidSize { .. })
    }

    /// Returns `true` for lookups outside the grid.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Self::ArityMismatch { .. }
            | Self::CoordinateOutOfRange { .. }
            | Self::IndexOutOfRange { .. }
            | Self::AxisOutOfRange { .. }
            | Self::EmptyAxisSet => true,
            Self::InvalidDimension { .. }
            | Self::InvalidSize { .. }
            | Self::ResourceExhausted { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GridError::InvalidDimension { dim: 0 }.to_string(),
            "invalid dimension 0: a grid needs at least one axis"
        );
        assert_eq!(
            GridError::ResourceExhausted {
                resource: Resource::Cells,
                required: 1000,
                limit: 10,
            }
            .to_string(),
            "grid cells required (1000) exceed the limit of 10"
        );
        assert_eq!(
            GridError::CoordinateOutOfRange {
                axis: 1,
                value: 4,
                size: 3,
            }
            .to_string(),
            "coordinate 4 on axis 1 is outside 0..3"
        );
    }

    #[test]
    fn test_resource_exhausted_is_its_own_group() {
        let err = GridError::ResourceExhausted {
            resource: Resource::Cells,
            required: 64,
            limit: 10,
        };
        assert!(err.is_resource_exhausted());
        assert!(!err.is_invalid_configuration());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_grouping() {
        assert!(GridError::InvalidSize { size: 0 }.is_invalid_configuration());
        assert!(GridError::InvalidDimension { dim: 0 }.is_invalid_configuration());
        assert!(!GridError::InvalidDimension { dim: 0 }.is_out_of_range());
        assert!(GridError::EmptyAxisSet.is_out_of_range());
        assert!(
            GridError::IndexOutOfRange {
                index: 9,
                cell_count: 9,
            }
            .is_out_of_range()
        );
    }
}
