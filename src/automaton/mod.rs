//! One-dimensional cellular automaton engine
//!
//! Rule numbers are decoded into transition tables, initial conditions into
//! rows, and rows are stepped forward with wraparound boundaries.

/// Initial condition parsing and resolution into a starting row
pub mod initial;
/// Fixed-width rows of living and dead cells
pub mod row;
/// Rule numbers and the transition tables they encode
pub mod rule;
/// Generation stepping and the resulting grid
pub mod simulation;

pub use row::Row;
pub use rule::{Rule, TransitionTable};
pub use simulation::{CellCoord, Grid, simulate};
