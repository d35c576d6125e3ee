//! Generation stepping with wraparound boundaries and the resulting grid
//!
//! Every row depends only on its predecessor, so the simulation is a
//! sequential fold: `simulate` hands rows out one at a time and a `Grid`
//! collects them in generation order.

use crate::automaton::row::Row;
use crate::automaton::rule::TransitionTable;
use bitvec::prelude::*;
use ndarray::Array2;
use std::iter::FusedIterator;

/// Pad a row circularly so every cell has a full neighborhood
///
/// Prepends the last `floor(w / 2)` cells and appends the first
/// `w - floor(w / 2) - 1` cells. Rows narrower than the padding wrap around
/// as many times as needed.
pub fn wraparound_padded(row: &Row, neighborhood_width: usize) -> BitVec {
    let width = row.width();
    if width == 0 {
        return BitVec::new();
    }

    let left = neighborhood_width / 2;
    let right = neighborhood_width.saturating_sub(left + 1);
    let start = width - left % width;

    (0..width + left + right)
        .map(|i| row.is_alive((start + i) % width))
        .collect()
}

/// Compute the generation following `row`
///
/// Slides a `neighborhood_width` window over the padded row, keeping the
/// window as a big-endian pattern index that shifts in one cell per step.
pub fn next_generation(row: &Row, table: &TransitionTable) -> Row {
    let neighborhood_width = table.neighborhood_width();
    let padded = wraparound_padded(row, neighborhood_width);
    let mask = (1_usize << neighborhood_width) - 1;

    let mut next = BitVec::with_capacity(row.width());
    let mut pattern = 0_usize;
    for (index, cell) in padded.iter().by_vals().enumerate() {
        pattern = ((pattern << 1) | usize::from(cell)) & mask;
        if index + 1 >= neighborhood_width {
            next.push(table.output(pattern));
        }
    }

    Row::from_bits(next)
}

/// Lazy sequence of generations, starting with the initial row
///
/// Yields exactly `generations + 1` rows and cannot be restarted.
pub struct Generations<'a> {
    table: &'a TransitionTable,
    current: Option<Row>,
    remaining: usize,
}

/// Run the automaton for `generations` steps from `initial`
pub const fn simulate(initial: Row, table: &TransitionTable, generations: usize) -> Generations<'_> {
    Generations {
        table,
        current: Some(initial),
        remaining: generations,
    }
}

impl Iterator for Generations<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = self.current.take()?;
        if self.remaining > 0 {
            self.remaining -= 1;
            self.current = Some(next_generation(&row, self.table));
        }
        log::trace!("{row}");
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.current.is_some() {
            self.remaining + 1
        } else {
            0
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Generations<'_> {}

impl FusedIterator for Generations<'_> {}

/// Grid position of a cell: column within the row, row within the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    /// Index within the row
    pub column: usize,
    /// Generation index within the grid
    pub row: usize,
}

/// Rows in generation order
///
/// Rows are only ever appended. Leading generations that are not displayed are
/// skipped while collecting and never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create an empty grid
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append the next generation
    pub fn push(&mut self, row: Row) {
        debug_assert!(
            self.rows.first().is_none_or(|first| first.width() == row.width()),
            "rows must share one width"
        );
        self.rows.push(row);
    }

    /// Collect generations after skipping the first `discard`
    ///
    /// The skipped rows are still consumed, so they take part in the evolution
    /// that produced the remaining ones; only their storage is avoided.
    pub fn from_generations(generations: impl IntoIterator<Item = Row>, discard: usize) -> Self {
        generations.into_iter().skip(discard).collect()
    }

    /// All rows, oldest first
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Test whether the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells per row, or zero for an empty grid
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Row::width)
    }

    /// Coordinates of every living cell, row by row in ascending order
    pub fn living_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.living().map(move |column| CellCoord { column, row })
        })
    }

    /// Dense `(rows, columns)` copy of the cell states
    pub fn to_array(&self) -> Array2<bool> {
        let mut array = Array2::from_elem((self.len(), self.width()), false);
        for coord in self.living_cells() {
            if let Some(cell) = array.get_mut([coord.row, coord.column]) {
                *cell = true;
            }
        }
        array
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        let mut grid = Self::new();
        for row in iter {
            grid.push(row);
        }
        grid
    }
}
