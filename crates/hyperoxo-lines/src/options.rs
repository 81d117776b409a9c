//! Options controlling how lines are assembled and checked.

use hyperoxo_core::Limits;

/// How thoroughly an assembled line set is checked before it is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verification {
    /// Compare the number of lines with the closed-form count.
    ///
    /// This check is always performed.
    #[default]
    Count,
    /// Additionally check every structural invariant: line lengths, distinct
    /// members, unit steps, duplicate lines, coordinate round trips, and cell
    /// coverage (see [`LineSet::verify`](crate::LineSet::verify)).
    ///
    /// [`Hypercube`](crate::Hypercube) also checks its cell-to-line index.
    Full,
}

/// Options controlling line assembly.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::Limits;
/// use hyperoxo_lines::{BuildOptions, Hypercube, Verification};
///
/// let options = BuildOptions::default()
///     .with_limits(Limits::default().with_max_cells(1 << 12))
///     .with_parallel(true)
///     .with_verification(Verification::Full);
/// let cube = Hypercube::with_options(3, 4, &options)?;
/// assert_eq!(cube.line_count(), 76);
/// # Ok::<(), hyperoxo_lines::LineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Ceilings on cells and stored line cells.
    pub limits: Limits,
    /// Extract slice diagonals on the rayon thread pool.
    ///
    /// The resulting line order is the same as in a sequential build.
    pub parallel: bool,
    /// Checks run on the assembled lines.
    pub verification: Verification,
}

impl BuildOptions {
    /// Returns a copy with different limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns a copy that does (or does not) build in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns a copy with a different verification level.
    #[must_use]
    pub const fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }
}
