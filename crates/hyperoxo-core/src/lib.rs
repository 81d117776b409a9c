//! Core geometry for noughts and crosses on hypercubes.
//!
//! A hypercube grid `h(d, n)` has `d` axes with `n` cells along each, for
//! `n^d` cells in total. This crate provides the coordinate model shared by
//! the line engine and anything that consumes it.
//!
//! # Overview
//!
//! 1. **Grid and coordinates**
//!    - [`grid`]: [`Grid`], the shape of a hypercube and conversions between
//!      tuple coordinates and flattened indices.
//!    - [`coord`]: [`Coord`] (tuple form) and [`CellIndex`] (flattened form).
//!
//! 2. **Sub-grids**
//!    - [`axis`]: [`AxisSet`], the non-empty set of axes that vary along a line.
//!    - [`slice`]: [`Slice`], a sub-grid with some axes held fixed.
//!    - [`combinations`]: [`AxisCombinations`], every (axis set, fixed
//!      assignment) pair of a grid.
//!
//! 3. **Counting and limits**
//!    - [`count`]: closed-form line counts.
//!    - [`limits`]: [`Limits`], ceilings checked before large allocations.
//!
//! # Examples
//!
//! ```
//! use hyperoxo_core::{Coord, Grid, count};
//!
//! let grid = Grid::new(3, 4)?;
//! assert_eq!(grid.cell_count(), 64);
//! assert_eq!(count::num_lines(grid.dim(), grid.size()), Some(76));
//!
//! let index = grid.flatten(&[1, 2, 3])?;
//! assert_eq!(grid.unflatten(index)?, Coord::from([1, 2, 3]));
//!
//! // 3 axis sets of size 1 with 16 placements each, and so on.
//! assert_eq!(grid.axis_combinations().count(), 3 * 16 + 3 * 4 + 1);
//! # Ok::<(), hyperoxo_core::GridError>(())
//! ```

pub mod axis;
pub mod combinations;
pub mod coord;
pub mod count;
pub mod error;
pub mod grid;
pub mod limits;
pub mod slice;

pub use self::{
    axis::AxisSet,
    combinations::{AxisCombinations, axis_combinations},
    coord::{CellIndex, Coord},
    error::{GridError, Resource},
    grid::Grid,
    limits::Limits,
    slice::Slice,
};
