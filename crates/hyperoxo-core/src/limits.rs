//! Resource ceilings applied before anything large is allocated.

use crate::{GridError, Resource};

/// Upper bounds on the memory a grid and its line list may claim.
///
/// Both the number of cells (`n^d`) and the number of cell references held by
/// the line list (`num_lines(d, n) * n`) grow steeply with `d` and `n`.
/// Construction fails with [`GridError::ResourceExhausted`] instead of
/// allocating past these ceilings.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::{Grid, Limits};
///
/// let limits = Limits::default().with_max_cells(100);
/// assert!(Grid::with_limits(2, 10, &limits).is_ok());
/// assert!(Grid::with_limits(3, 10, &limits).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of grid cells.
    pub max_cells: usize,
    /// Maximum number of cell references across all lines.
    pub max_line_cells: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_cells: Self::DEFAULT_MAX_CELLS,
            max_line_cells: Self::DEFAULT_MAX_LINE_CELLS,
        }
    }
}

impl Limits {
    /// Default ceiling on grid cells (2^24).
    pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

    /// Default ceiling on line cell references (2^26).
    pub const DEFAULT_MAX_LINE_CELLS: usize = 1 << 26;

    /// Limits that only reject arithmetic overflow.
    pub const UNLIMITED: Self = Self {
        max_cells: usize::MAX,
        max_line_cells: usize::MAX,
    };

    /// Returns a copy with a different cell ceiling.
    #[must_use]
    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Returns a copy with a different line cell ceiling.
    #[must_use]
    pub const fn with_max_line_cells(mut self, max_line_cells: usize) -> Self {
        self.max_line_cells = max_line_cells;
        self
    }

    /// Returns the ceiling configured for `resource`.
    #[must_use]
    pub const fn limit(&self, resource: Resource) -> usize {
        match resource {
            Resource::Cells => self.max_cells,
            Resource::LineCells => self.max_line_cells,
        }
    }

    /// Checks a required amount against the ceiling for `resource`.
    ///
    /// `None` stands for an amount that overflowed `usize` and is always rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ResourceExhausted`] if the amount is unknown or too large.
    pub fn check(&self, resource: Resource, required: Option<usize>) -> Result<usize, GridError> {
        let limit = self.limit(resource);
        match required {
            Some(required) if required <= limit => Ok(required),
            _ => Err(GridError::ResourceExhausted {
                resource,
                required: required.unwrap_or(usize::MAX),
                limit,
            }),
        }
    }
}
