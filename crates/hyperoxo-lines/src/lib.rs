//! Winning-line engine for noughts and crosses on hypercubes.
//!
//! A line of `h(d, n)` is a maximal run of `n` collinear cells: a row or
//! column along one axis, or a diagonal across several. This crate
//! enumerates every line exactly once, indexes which lines pass through
//! each cell, and checks the result against the closed-form count
//! `Σ C(d, k) · n^(d-k) · 2^(k-1)`.
//!
//! # Overview
//!
//! 1. **Assembly**
//!    - [`diagonal`]: the diagonals of a single sub-grid.
//!    - [`LineSet`]: every line of a grid, grouped by extent.
//!    - [`BuildOptions`]: limits, parallelism and verification level.
//!
//! 2. **Lookup**
//!    - [`CellLines`]: the lines through each cell.
//!    - [`Hypercube`]: grid, lines and index together, with coordinate queries.
//!
//! 3. **Consumers**
//!    - [`LineTally`]: mark counts along a line for one player.
//!    - [`testing`]: a brute-force reference enumeration.
//!
//! # Examples
//!
//! ```
//! use hyperoxo_lines::Hypercube;
//!
//! // Classic 3×3 noughts and crosses.
//! let board = Hypercube::new(2, 3)?;
//! assert_eq!(board.line_count(), 8);
//! assert_eq!(board.membership(&[1, 1])?, 4);
//! assert_eq!(board.membership(&[0, 1])?, 2);
//!
//! // Qubic.
//! let qubic = Hypercube::new(3, 4)?;
//! assert_eq!(qubic.line_count(), 76);
//! assert_eq!(qubic.lines_with_extent(3).len(), 4);
//! # Ok::<(), hyperoxo_lines::LineError>(())
//! ```

mod cell_lines;
pub mod diagonal;
mod error;
mod hypercube;
mod line;
mod line_set;
mod options;
mod tally;
pub mod testing;

pub use self::{
    cell_lines::CellLines,
    error::{ConsistencyError, LineError},
    hypercube::Hypercube,
    line::{Line, LineId, LineKey, Orientation},
    line_set::LineSet,
    options::{BuildOptions, Verification},
    tally::LineTally,
};
