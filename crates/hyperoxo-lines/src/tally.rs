//! Per-line mark counts for game consumers.

use hyperoxo_core::CellIndex;

use crate::Line;

/// Counts of the marks along one line, seen from one player.
///
/// `own` counts cells holding the mover's mark, `opponent` cells holding any
/// other mark, and `empty` unmarked cells. The runs are the longest stretches
/// of consecutive cells, in walk order, holding the same side's marks.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::Grid;
/// use hyperoxo_lines::{LineSet, LineTally};
///
/// let lines = LineSet::build(Grid::new(1, 4)?)?;
/// let board = [Some('x'), Some('x'), None, Some('o')];
/// let tally = LineTally::of(&lines.as_slice()[0], &'x', |cell| board[cell.get()]);
/// assert_eq!((tally.own, tally.opponent, tally.empty), (2, 1, 1));
/// assert_eq!((tally.own_run, tally.opponent_run), (2, 1));
/// assert!(tally.is_blocked());
/// # Ok::<(), hyperoxo_lines::LineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineTally {
    /// Cells holding the mover's mark.
    pub own: usize,
    /// Longest run of the mover's marks.
    pub own_run: usize,
    /// Cells holding another mark.
    pub opponent: usize,
    /// Longest run of other marks.
    pub opponent_run: usize,
    /// Unmarked cells.
    pub empty: usize,
}

impl LineTally {
    /// Tallies `line` for `mover`, reading each cell's mark through `mark`.
    pub fn of<M, F>(line: &Line, mover: &M, mut mark: F) -> Self
    where
        M: PartialEq,
        F: FnMut(CellIndex) -> Option<M>,
    {
        let mut tally = Self::default();
        let (mut own_run, mut opponent_run) = (0, 0);
        for &cell in line.cells() {
            match mark(cell) {
                Some(m) if m == *mover => {
                    tally.own += 1;
                    own_run += 1;
                    opponent_run = 0;
                }
                Some(_) => {
                    tally.opponent += 1;
                    opponent_run += 1;
                    own_run = 0;
                }
                None => {
                    tally.empty += 1;
                    own_run = 0;
                    opponent_run = 0;
                }
            }
            tally.own_run = tally.own_run.max(own_run);
            tally.opponent_run = tally.opponent_run.max(opponent_run);
        }
        tally
    }

    /// Returns the number of cells tallied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.own + self.opponent + self.empty
    }

    /// Returns `true` if no cells were tallied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the mover holds every cell.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.own > 0 && self.own == self.len()
    }

    /// Returns `true` if the opponent holds every cell.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.opponent > 0 && self.opponent == self.len()
    }

    /// Returns `true` if both sides hold a cell, so neither can complete the line.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.own > 0 && self.opponent > 0
    }

    /// Returns `true` if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }
}
