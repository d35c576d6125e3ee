//! Minimal SVG page writer
//!
//! Documents are built from a flat list of elements (groups nest) plus
//! gradient definitions, then serialized in one pass through `Display`.

use crate::io::error::{PosterError, Result};
use crate::render::palette::Rgb;
use std::fmt::{self, Write};
use std::path::Path;

/// How an element's interior is painted
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Leave the interior transparent
    None,
    /// Solid color
    Color(Rgb),
    /// Reference to a gradient registered with `SvgDocument::add_gradient`
    Gradient(String),
}

/// Outline of an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line color
    pub color: Rgb,
    /// Line width in points
    pub width: f64,
}

/// Fill and stroke of one element
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Interior paint
    pub fill: Paint,
    /// Optional outline
    pub stroke: Option<Stroke>,
}

impl SvgStyle {
    /// Solid fill, no outline
    pub const fn fill(color: Rgb) -> Self {
        Self {
            fill: Paint::Color(color),
            stroke: None,
        }
    }

    /// Outline only
    pub const fn stroke(color: Rgb, width: f64) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some(Stroke { color, width }),
        }
    }

    /// Fill with a registered gradient
    pub fn gradient(id: &str) -> Self {
        Self {
            fill: Paint::Gradient(id.to_string()),
            stroke: None,
        }
    }

    fn write_attributes(&self, out: &mut impl Write) -> fmt::Result {
        match &self.fill {
            Paint::None => write!(out, " fill=\"none\"")?,
            Paint::Color(color) => write!(out, " fill=\"{color}\"")?,
            Paint::Gradient(id) => write!(out, " fill=\"url(#{})\"", escape(id))?,
        }
        if let Some(stroke) = &self.stroke {
            write!(
                out,
                " stroke=\"{}\" stroke-width=\"{:.3}\"",
                stroke.color, stroke.width
            )?;
        }
        Ok(())
    }
}

/// Color stop of a linear gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`
    pub offset: f64,
    /// Stop color
    pub color: Rgb,
    /// Stop opacity in `[0, 1]`
    pub opacity: f64,
}

/// Linear gradient in page coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Identifier referenced by `Paint::Gradient`
    pub id: String,
    /// Start point
    pub from: (f64, f64),
    /// End point
    pub to: (f64, f64),
    /// Color stops in ascending offset order
    pub stops: Vec<GradientStop>,
}

/// Drawable element
#[derive(Clone, Debug, PartialEq)]
pub enum SvgElement {
    /// Axis-aligned rectangle
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Paint
        style: SvgStyle,
    },
    /// Circle
    Circle {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Radius
        r: f64,
        /// Paint
        style: SvgStyle,
    },
    /// Straight line segment
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
        /// Paint; only the stroke is visible
        style: SvgStyle,
    },
    /// Single line of text anchored at its baseline start
    Text {
        /// Baseline start x
        x: f64,
        /// Baseline y
        y: f64,
        /// Text to show, escaped on output
        content: String,
        /// Font family name
        font_family: String,
        /// Font size in points
        font_size: f64,
        /// Whether to use the bold weight
        bold: bool,
        /// Text color
        color: Rgb,
    },
    /// Elements sharing one transform
    Group {
        /// SVG transform list applied to every child
        transform: Option<String>,
        /// Children in drawing order
        elements: Vec<SvgElement>,
    },
}

impl SvgElement {
    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                style,
            } => {
                write!(
                    out,
                    "<rect x=\"{x:.3}\" y=\"{y:.3}\" width=\"{width:.3}\" height=\"{height:.3}\""
                )?;
                style.write_attributes(out)?;
                writeln!(out, "/>")
            }
            Self::Circle { cx, cy, r, style } => {
                write!(out, "<circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{r:.3}\"")?;
                style.write_attributes(out)?;
                writeln!(out, "/>")
            }
            Self::Line {
                x1,
                y1,
                x2,
                y2,
                style,
            } => {
                write!(
                    out,
                    "<line x1=\"{x1:.3}\" y1=\"{y1:.3}\" x2=\"{x2:.3}\" y2=\"{y2:.3}\""
                )?;
                style.write_attributes(out)?;
                writeln!(out, "/>")
            }
            Self::Text {
                x,
                y,
                content,
                font_family,
                font_size,
                bold,
                color,
            } => {
                write!(
                    out,
                    "<text x=\"{x:.3}\" y=\"{y:.3}\" font-family=\"{}\" font-size=\"{font_size:.3}\" fill=\"{color}\"",
                    escape(font_family)
                )?;
                if *bold {
                    write!(out, " font-weight=\"bold\"")?;
                }
                writeln!(out, ">{}</text>", escape(content))
            }
            Self::Group {
                transform,
                elements,
            } => {
                match transform {
                    Some(transform) => writeln!(out, "<g transform=\"{}\">", escape(transform))?,
                    None => writeln!(out, "<g>")?,
                }
                for element in elements {
                    element.write_to(out)?;
                }
                writeln!(out, "</g>")
            }
        }
    }
}

/// Single SVG page measured in points
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    gradients: Vec<LinearGradient>,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Create an empty page
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            gradients: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Append an element; later elements are drawn on top
    pub fn push(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Register a gradient definition
    pub fn add_gradient(&mut self, gradient: LinearGradient) {
        self.gradients.push(gradient);
    }

    /// Top-level elements in drawing order
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Registered gradients
    pub fn gradients(&self) -> &[LinearGradient] {
        &self.gradients
    }

    /// Serialize and write the document, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `OutputWrite` if the directory or the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PosterError::OutputWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path, self.to_string()).map_err(|e| PosterError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.3}pt\" height=\"{h:.3}pt\" viewBox=\"0 0 {w:.3} {h:.3}\">",
            w = self.width,
            h = self.height
        )?;

        if !self.gradients.is_empty() {
            writeln!(f, "<defs>")?;
            for gradient in &self.gradients {
                writeln!(
                    f,
                    "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\">",
                    escape(&gradient.id),
                    gradient.from.0,
                    gradient.from.1,
                    gradient.to.0,
                    gradient.to.1
                )?;
                for stop in &gradient.stops {
                    writeln!(
                        f,
                        "<stop offset=\"{:.3}\" stop-color=\"{}\" stop-opacity=\"{:.3}\"/>",
                        stop.offset, stop.color, stop.opacity
                    )?;
                }
                writeln!(f, "</linearGradient>")?;
            }
            writeln!(f, "</defs>")?;
        }

        for element in &self.elements {
            element.write_to(f)?;
        }

        writeln!(f, "</svg>")
    }
}

/// Escape text for use in XML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
