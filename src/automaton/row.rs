use crate::io::error::{PosterError, Result, invalid_initial_condition};
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Living/dead state of every cell in one generation
///
/// The width is fixed at construction; rows derived from one another always
/// share it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    cells: BitVec,
}

impl Row {
    /// Create a row of `width` dead cells
    pub fn dead(width: usize) -> Self {
        Self {
            cells: bitvec![0; width],
        }
    }

    /// Wrap an existing bit vector
    pub const fn from_bits(cells: BitVec) -> Self {
        Self { cells }
    }

    /// Number of cells in the row
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the cell at `index` is alive
    ///
    /// Out-of-range indices read as dead.
    pub fn is_alive(&self, index: usize) -> bool {
        self.cells.get(index).as_deref() == Some(&true)
    }

    /// Set the state of the cell at `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, alive: bool) {
        if index < self.cells.len() {
            self.cells.set(index, alive);
        }
    }

    /// Indices of all living cells in ascending order
    pub fn living(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter_ones()
    }

    /// Count living cells
    pub fn living_count(&self) -> usize {
        self.cells.count_ones()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells.iter().by_vals() {
            f.write_str(if cell { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Row {
    type Err = PosterError;

    /// Parse a string of '0' and '1' characters, leftmost cell first
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(invalid_initial_condition(&format!(
                    "unexpected character '{other}' in bit string '{s}'"
                ))),
            })
            .collect::<Result<BitVec>>()
            .map(Self::from_bits)
    }
}
