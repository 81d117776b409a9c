//! Errors reported while assembling and checking lines.

use hyperoxo_core::{CellIndex, GridError};

use crate::LineId;

/// A violated invariant of an assembled line set.
///
/// These errors indicate a defect in the engine, not bad input: given valid
/// parameters, assembly is deterministic and must always agree with the
/// closed-form count and the structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// The number of assembled lines differs from `num_lines(d, n)`.
    #[display("assembled {actual} lines, but the closed form gives {expected}")]
    LineCountMismatch {
        /// The closed-form count.
        expected: usize,
        /// The number of lines assembled.
        actual: usize,
    },
    /// A line does not have exactly `n` cells.
    #[display("line {line} has {actual} cells instead of {expected}")]
    LineLength {
        /// The offending line.
        line: LineId,
        /// The grid size.
        expected: usize,
        /// The line's length.
        actual: usize,
    },
    /// A line visits the same cell twice.
    #[display("line {line} visits cell {cell} more than once")]
    RepeatedCell {
        /// The offending line.
        line: LineId,
        /// The repeated cell.
        cell: CellIndex,
    },
    /// Two consecutive cells of a line are not one unit step apart along its axes.
    #[display("line {line} does not take a unit step after position {position}")]
    BrokenStep {
        /// The offending line.
        line: LineId,
        /// Position of the first cell of the broken step.
        position: usize,
    },
    /// Two lines share an identity, or (for `n >= 2`) the same member cells.
    #[display("lines {first} and {second} are duplicates")]
    DuplicateLine {
        /// The earlier line.
        first: LineId,
        /// The later line.
        second: LineId,
    },
    /// A cell lies on no line.
    #[display("cell {cell} lies on no line")]
    UncoveredCell {
        /// The uncovered cell.
        cell: CellIndex,
    },
    /// Flattening and unflattening a cell does not give it back.
    #[display("cell {index} does not survive a coordinate round trip")]
    RoundTrip {
        /// The offending cell index.
        index: CellIndex,
    },
    /// The cell index holds a different number of references than the lines.
    #[display("cell index holds {actual} line references, expected {expected}")]
    IndexSize {
        /// Total cells across all lines.
        expected: usize,
        /// References stored in the index.
        actual: usize,
    },
}

/// Errors returned while building a line set or hypercube.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum LineError {
    /// The grid parameters were rejected.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// The assembled structure failed an internal check.
    #[display("internal consistency check failed: {_0}")]
    Inconsistent(#[from] ConsistencyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_source() {
        let err = LineError::from(ConsistencyError::LineCountMismatch {
            expected: 6,
            actual: 5,
        });
        assert_eq!(
            err.to_string(),
            "internal consistency check failed: assembled 5 lines, but the closed form gives 6"
        );
        assert!(err.is_inconsistent());
    }

    #[test]
    fn test_grid_errors_convert() {
        let err: LineError = GridError::InvalidSize { size: 0 }.into();
        assert_eq!(err, LineError::Grid(GridError::InvalidSize { size: 0 }));
        assert_eq!(
            err.to_string(),
            "invalid size 0: every axis needs at least one cell"
        );
    }
}
