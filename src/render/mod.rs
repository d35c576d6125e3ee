//! Drawing a simulated grid onto a poster page
//!
//! This module contains the rendering side of the pipeline:
//! - Page geometry and cell placement
//! - Colors and grid line modes
//! - The label band and the composed page

/// Label band with title, pictogram and fun facts
pub mod label;
/// Grid dimensions, cell size and the grid-to-page transform
pub mod layout;
/// Colors, palettes and grid line modes
pub mod palette;
/// Page composition
pub mod poster;

pub use poster::PosterRenderer;
