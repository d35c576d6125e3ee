//! Cellular automaton posters
//!
//! Decodes Wolfram-style rule numbers (including "higher" rules whose
//! neighborhoods are wider than three cells), simulates a grid of generations
//! with wraparound boundaries and draws the result as an SVG poster.

#![forbid(unsafe_code)]

/// Rule decoding, initial conditions and generation stepping
pub mod automaton;
/// Command line, configuration, errors and output formats
pub mod io;
/// Page layout, colors and poster composition
pub mod render;

pub use io::error::{PosterError, Result};
