//! Cell-to-line index.

use hyperoxo_core::{CellIndex, Grid};

use crate::{ConsistencyError, Line, LineId};

/// For every cell, the ids of the lines passing through it.
///
/// Stored in compressed form: one contiguous array of line ids plus one
/// offset per cell. Each cell's ids are in ascending order, and the cell
/// order matches [`Grid::indices`].
///
/// # Examples
///
/// ```
/// use hyperoxo_core::{CellIndex, Grid};
/// use hyperoxo_lines::{CellLines, LineSet};
///
/// let grid = Grid::new(2, 3)?;
/// let lines = LineSet::build(grid)?;
/// let index = CellLines::build(grid, lines.as_slice());
/// // The centre lies on a row, a column, and both diagonals.
/// assert_eq!(index.membership(CellIndex::new(4)), Some(4));
/// assert_eq!(index.membership(CellIndex::new(1)), Some(2));
/// # Ok::<(), hyperoxo_lines::LineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLines {
    /// `offsets[i]..offsets[i + 1]` delimits cell `i`'s entries in `line_ids`.
    offsets: Box<[usize]>,
    line_ids: Box<[LineId]>,
}

impl CellLines {
    /// Builds the index of `lines` over `grid`.
    ///
    /// Cells outside `grid` are ignored.
    #[must_use]
    pub fn build(grid: Grid, lines: &[Line]) -> Self {
        let cell_count = grid.cell_count();
        let mut offsets = vec![0; cell_count + 1];
        for cell in lines.iter().flat_map(Line::cells) {
            if cell.get() < cell_count {
                offsets[cell.get() + 1] += 1;
            }
        }
        for i in 0..cell_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut line_ids = vec![LineId::new(0); offsets[cell_count]];
        // Lines are visited in id order, so every cell's ids come out sorted.
        for (id, line) in lines.iter().enumerate() {
            for cell in line.cells().iter().filter(|cell| cell.get() < cell_count) {
                let slot = &mut cursor[cell.get()];
                line_ids[*slot] = LineId::new(id);
                *slot += 1;
            }
        }

        log::debug!(
            "indexed {} line references over {cell_count} cells",
            line_ids.len()
        );
        Self {
            offsets: offsets.into(),
            line_ids: line_ids.into(),
        }
    }

    /// Returns the number of indexed cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the ids of the lines through `cell`, or `None` if `cell` is out of range.
    #[must_use]
    pub fn lines_through(&self, cell: CellIndex) -> Option<&[LineId]> {
        let i = cell.get();
        let start = *self.offsets.get(i)?;
        let end = *self.offsets.get(i + 1)?;
        Some(&self.line_ids[start..end])
    }

    /// Returns the number of lines through `cell`, or `None` if `cell` is out of range.
    #[must_use]
    pub fn membership(&self, cell: CellIndex) -> Option<usize> {
        self.lines_through(cell).map(<[LineId]>::len)
    }

    /// Returns the total number of (cell, line) memberships.
    #[must_use]
    pub fn total_memberships(&self) -> usize {
        self.line_ids.len()
    }

    /// Returns every cell with the ids of the lines through it.
    #[must_use]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CellIndex, &[LineId])> + '_ {
        self.offsets
            .windows(2)
            .enumerate()
            .map(|(i, range)| (CellIndex::new(i), &self.line_ids[range[0]..range[1]]))
    }

    /// Checks the index against the lines it was built from.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::IndexSize`] if the index does not hold
    /// one reference per line cell, or [`ConsistencyError::UncoveredCell`]
    /// if some cell lies on no line.
    pub fn verify(&self, lines: &[Line]) -> Result<(), ConsistencyError> {
        let expected = lines.iter().map(Line::len).sum();
        if self.total_memberships() != expected {
            return Err(ConsistencyError::IndexSize {
                expected,
                actual: self.total_memberships(),
            });
        }
        if let Some((cell, _)) = self.iter().find(|(_, ids)| ids.is_empty()) {
            return Err(ConsistencyError::UncoveredCell { cell });
        }
        Ok(())
    }
}
