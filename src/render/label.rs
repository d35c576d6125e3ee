//! Label band: rule title, transition pictogram and fun facts
//!
//! All measurements are fractions of the shorter page side so the label keeps
//! its proportions on any page size.

use crate::automaton::{Rule, TransitionTable};
use crate::io::configuration::{LABEL_TITLE_MAX_DIGITS, MAX_FACT_CHARS};
use crate::io::svg::{GradientStop, LinearGradient, SvgDocument, SvgElement, SvgStyle};
use crate::render::layout::PageGeometry;
use crate::render::palette::Rgb;

const BAND_HEIGHT: f64 = 0.14;
const BAND_BOTTOM: f64 = 0.9;
const TOP_SHADOW: f64 = 0.004;
const BOTTOM_SHADOW: f64 = 0.006;
const TITLE_SIZE: f64 = 0.054;
const TITLE_LEFT: f64 = 0.1;
const TITLE_RAISE: f64 = 0.0505;
const FACT_SIZE: f64 = 0.014;
const FACT_RAISES: [f64; 2] = [0.026, 0.010];
const PICTOGRAM_RIGHT: f64 = 0.115;
const PICTOGRAM_RAISE: f64 = 0.084;
const PICTOGRAM_CELLS_PER_SIDE: f64 = 78.0;

/// Everything the label shows
pub struct Label<'a> {
    /// Rule named in the title
    pub rule: &'a Rule,
    /// Table drawn as a pictogram for 3-cell rules
    pub table: &'a TransitionTable,
    /// Title font family
    pub font: &'a str,
    /// Fun facts shown below the title
    pub facts: &'a [String],
}

impl Label<'_> {
    /// Draw the label band onto the page
    pub fn draw(&self, document: &mut SvgDocument, page: &PageGeometry) {
        let unit = page.short_side();
        let bottom = BAND_BOTTOM * page.height;
        let top = BAND_HEIGHT.mul_add(-unit, bottom);

        document.push(SvgElement::Rect {
            x: 0.0,
            y: top,
            width: page.width,
            height: BAND_HEIGHT * unit,
            style: SvgStyle::fill(Rgb::WHITE),
        });

        // Soft light from just above: the upper shadow is shorter and fainter
        draw_shadow(document, page, "label-shadow-top", top, -TOP_SHADOW * unit, 0.1);
        draw_shadow(document, page, "label-shadow-bottom", bottom, BOTTOM_SHADOW * unit, 0.2);

        let digits = self.rule.to_string().len();
        let shrink = (LABEL_TITLE_MAX_DIGITS as f64 / digits as f64).min(1.0);
        document.push(SvgElement::Text {
            x: TITLE_LEFT * unit,
            y: TITLE_RAISE.mul_add(-unit, bottom),
            content: format!("RULE {}", self.rule),
            font_family: self.font.to_string(),
            font_size: TITLE_SIZE * unit * shrink,
            bold: true,
            color: Rgb::BLACK,
        });

        for (fact, raise) in self.facts.iter().zip(FACT_RAISES) {
            document.push(SvgElement::Text {
                x: TITLE_LEFT * unit,
                y: raise.mul_add(-unit, bottom),
                content: truncate(fact, MAX_FACT_CHARS),
                font_family: self.font.to_string(),
                font_size: FACT_SIZE * unit,
                bold: false,
                color: Rgb::BLACK,
            });
        }

        if self.rule.is_elementary() {
            self.draw_pictogram(document, page);
        }
    }

    // Patterns run right to left starting at 000, each with its output cell
    // centered below it
    fn draw_pictogram(&self, document: &mut SvgDocument, page: &PageGeometry) {
        let unit = page.short_side();
        let cell = unit / PICTOGRAM_CELLS_PER_SIDE;
        let line = SvgStyle::stroke(Rgb::BLACK, cell / 10.0);
        let y = PICTOGRAM_RAISE.mul_add(-unit, BAND_BOTTOM * page.height);
        let mut x = PICTOGRAM_RIGHT.mul_add(-unit, page.width);

        let square = |document: &mut SvgDocument, x: f64, y: f64, filled: bool| {
            if filled {
                document.push(SvgElement::Rect {
                    x,
                    y,
                    width: cell,
                    height: cell,
                    style: SvgStyle::fill(Rgb::BLACK),
                });
            }
            document.push(SvgElement::Rect {
                x,
                y,
                width: cell,
                height: cell,
                style: line.clone(),
            });
        };

        for (pattern, output) in self.table.entries() {
            for bit in pattern.chars().rev() {
                square(document, x, y, bit == '1');
                x -= cell * 1.25;
            }
            square(document, cell.mul_add(2.5, x), cell.mul_add(1.25, y), output);
            x -= cell * 0.7;
        }
    }
}

fn draw_shadow(
    document: &mut SvgDocument,
    page: &PageGeometry,
    id: &str,
    edge: f64,
    extent: f64,
    opacity: f64,
) {
    document.add_gradient(LinearGradient {
        id: id.to_string(),
        from: (0.0, edge),
        to: (0.0, edge + extent),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgb::BLACK,
                opacity,
            },
            GradientStop {
                offset: 1.0,
                color: Rgb::BLACK,
                opacity: 0.0,
            },
        ],
    });
    document.push(SvgElement::Rect {
        x: 0.0,
        y: edge.min(edge + extent),
        width: page.width,
        height: extent.abs(),
        style: SvgStyle::gradient(id),
    });
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
