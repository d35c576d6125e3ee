//! Page geometry: grid dimensions, cell size and the grid-to-page transform
//!
//! The grid is laid out in its own frame with the first row at the top, then
//! rotated about the page center. Its frame is sized to the bounding box of the
//! rotated page, so any angle still covers the whole page.

use crate::automaton::CellCoord;
use crate::io::configuration::{Dimension, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_configuration};

/// Page size in PostScript points and the rotation of the grid on it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Clockwise rotation of the grid in degrees
    pub angle: f64,
}

impl PageGeometry {
    /// Extent the unrotated grid frame needs so the rotated frame covers the page
    ///
    /// Returns `(width, height)`; equal to the page size at 0°.
    pub fn covered_extent(&self) -> (f64, f64) {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        (
            self.width.mul_add(cos, self.height * sin),
            self.width.mul_add(sin, self.height * cos),
        )
    }

    /// Shorter page side, the unit label elements are sized in
    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Test whether the rotation is a multiple of a full turn
    pub fn is_upright(&self) -> bool {
        self.angle.rem_euclid(360.0) == 0.0
    }
}

/// Resolve grid dimensions, deriving an `auto` side from the page aspect ratio
///
/// An automatic height gets one extra row when the display offset shifts the
/// grid upwards by a fraction of a cell.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if both sides are automatic, a derived side
/// comes out as zero, or a side exceeds `MAX_GRID_DIMENSION`
pub fn resolve_dimensions(
    width: Dimension,
    height: Dimension,
    page: &PageGeometry,
    display_offset: f64,
) -> Result<(usize, usize)> {
    let (cover_width, cover_height) = page.covered_extent();

    let (columns, rows) = match (width, height) {
        (Dimension::Auto, Dimension::Auto) => {
            return Err(invalid_configuration(
                "width",
                &"auto",
                &"width and height cannot both be auto",
            ));
        }
        (Dimension::Cells(columns), Dimension::Cells(rows)) => (columns, rows),
        (Dimension::Auto, Dimension::Cells(rows)) => {
            let columns = (cover_width / cover_height * rows as f64).floor() as usize;
            (columns, rows)
        }
        (Dimension::Cells(columns), Dimension::Auto) => {
            let mut rows = (cover_height / cover_width * columns as f64).ceil() as usize;
            if display_offset > 0.0 {
                rows += 1;
            }
            (columns, rows)
        }
    };

    for (option, value) in [("width", columns), ("height", rows)] {
        if value == 0 {
            return Err(invalid_configuration(
                option,
                &value,
                &"derived dimension is zero; increase the other side",
            ));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                option,
                &value,
                &format!("exceeds the maximum of {MAX_GRID_DIMENSION} cells"),
            ));
        }
    }

    Ok((columns, rows))
}

/// Placement of grid cells on the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    page: PageGeometry,
    cover: (f64, f64),
    cell_size: f64,
    display_offset: f64,
}

impl Layout {
    /// Lay out a grid `columns` cells wide across the covered page extent
    pub fn new(page: PageGeometry, columns: usize, display_offset: f64) -> Self {
        let cover = page.covered_extent();
        Self {
            page,
            cover,
            cell_size: cover.0 / columns.max(1) as f64,
            display_offset,
        }
    }

    /// Edge length of one cell in points
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Top-left corner of a cell in the grid frame
    ///
    /// Rows are shifted up by the fractional display offset.
    pub fn cell_origin(&self, coord: CellCoord) -> (f64, f64) {
        (
            coord.column as f64 * self.cell_size,
            (coord.row as f64 - self.display_offset) * self.cell_size,
        )
    }

    /// Vertical extent `(top, bottom)` of `rows` rows in the grid frame
    pub fn row_span(&self, rows: usize) -> (f64, f64) {
        (
            -self.display_offset * self.cell_size,
            (rows as f64 - self.display_offset) * self.cell_size,
        )
    }

    /// SVG transform from the grid frame to the page, or `None` for an upright grid
    ///
    /// Centers the covered extent on the page and rotates it about the page
    /// center.
    pub fn svg_transform(&self) -> Option<String> {
        if self.page.is_upright() {
            return None;
        }
        Some(format!(
            "translate({:.3} {:.3}) rotate({:.3}) translate({:.3} {:.3})",
            self.page.width / 2.0,
            self.page.height / 2.0,
            self.page.angle,
            -self.cover.0 / 2.0,
            -self.cover.1 / 2.0,
        ))
    }
}
