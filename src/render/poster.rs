//! Composes the finished page: background, cells, grid lines and label

use crate::automaton::{CellCoord, Grid, TransitionTable};
use crate::io::configuration::{CellShape, GRID_LINE_WIDTH_DIVISOR, PosterConfig};
use crate::io::svg::{SvgDocument, SvgElement, SvgStyle};
use crate::render::label::Label;
use crate::render::layout::Layout;
use crate::render::palette::Rgb;

/// Draws a simulated grid as a poster page
pub struct PosterRenderer<'a> {
    config: &'a PosterConfig,
    layout: Layout,
}

impl<'a> PosterRenderer<'a> {
    /// Prepare a renderer for grids `config.width` cells wide
    pub fn new(config: &'a PosterConfig) -> Self {
        let layout = Layout::new(config.page, config.width, config.display_offset);
        Self { config, layout }
    }

    /// Render the page
    ///
    /// Rows are drawn in ascending generation order; `on_row` is called with
    /// each generation index once that row is complete.
    pub fn render(
        &self,
        grid: &Grid,
        table: &TransitionTable,
        facts: &[String],
        mut on_row: impl FnMut(usize),
    ) -> SvgDocument {
        let page = &self.config.page;
        let mut document = SvgDocument::new(page.width, page.height);

        document.push(SvgElement::Rect {
            x: 0.0,
            y: 0.0,
            width: page.width,
            height: page.height,
            style: SvgStyle::fill(self.config.colors.dead),
        });

        let mut elements = Vec::new();
        for (generation, row) in grid.rows().iter().enumerate() {
            elements.extend(row.living().map(|column| {
                self.cell_element(CellCoord {
                    column,
                    row: generation,
                })
            }));
            on_row(generation);
        }

        if let Some(color) = self.config.grid_color {
            elements.extend(self.grid_lines(grid, color));
        }

        document.push(SvgElement::Group {
            transform: self.layout.svg_transform(),
            elements,
        });

        if self.config.show_label {
            Label {
                rule: &self.config.rule,
                table,
                font: &self.config.font,
                facts,
            }
            .draw(&mut document, page);
        }

        document
    }

    fn cell_element(&self, coord: CellCoord) -> SvgElement {
        let size = self.layout.cell_size();
        let (x, y) = self.layout.cell_origin(coord);
        let style = SvgStyle::fill(self.config.colors.living);

        match self.config.cell_shape {
            CellShape::Square => SvgElement::Rect {
                x,
                y,
                width: size,
                height: size,
                style,
            },
            CellShape::Circle => SvgElement::Circle {
                cx: size.mul_add(0.5, x),
                cy: size.mul_add(0.5, y),
                r: size / 2.0,
                style,
            },
        }
    }

    // One line per cell boundary instead of one outline per cell; same picture
    fn grid_lines(&self, grid: &Grid, color: Rgb) -> Vec<SvgElement> {
        let size = self.layout.cell_size();
        let style = SvgStyle::stroke(color, size / GRID_LINE_WIDTH_DIVISOR);
        let (top, bottom) = self.layout.row_span(grid.len());
        let right = grid.width() as f64 * size;

        let verticals = (0..=grid.width()).map(|column| {
            let x = column as f64 * size;
            SvgElement::Line {
                x1: x,
                y1: top,
                x2: x,
                y2: bottom,
                style: style.clone(),
            }
        });
        let horizontals = (0..=grid.len()).map(|row| {
            let y = (row as f64).mul_add(size, top);
            SvgElement::Line {
                x1: 0.0,
                y1: y,
                x2: right,
                y2: y,
                style: style.clone(),
            }
        });

        verticals.chain(horizontals).collect()
    }
}
