//! Poster constants, option defaults and the validated runtime configuration

use crate::automaton::Rule;
use crate::automaton::initial::InitialCondition;
use crate::io::cli::Cli;
use crate::io::error::{PosterError, Result, invalid_configuration};
use crate::render::layout::{PageGeometry, resolve_dimensions};
use crate::render::palette::{ColorPair, Rgb};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// Neighborhood limits for rule decoding
/// Width of the classical Wolfram neighborhood, and the minimum for any rule
pub const MIN_NEIGHBORHOOD_WIDTH: usize = 3;
// 2^24 table entries; wider neighborhoods need rule numbers millions of digits long
/// Widest neighborhood a rule may require
pub const MAX_NEIGHBORHOOD_WIDTH: usize = 24;

// Input bounds; only the displayed rows are stored, so memory follows width and height
/// Maximum allowed grid width or height in cells
pub const MAX_GRID_DIMENSION: usize = 100_000;
/// Maximum number of leading generations that may be discarded
pub const MAX_GENERATION_OFFSET: usize = 1_000_000;

// Default values for configurable parameters
/// Default rule number
pub const DEFAULT_RULE: &str = "30";
/// Default initial condition
pub const DEFAULT_INITIAL_CONDITION: &str = "middle";
/// Default grid width in cells
pub const DEFAULT_WIDTH: &str = "280";
/// Default grid height in generations
pub const DEFAULT_HEIGHT: &str = "auto";
/// Default palette
pub const DEFAULT_COLOR_SCHEME: &str = "blue";
/// Default grid line mode
pub const DEFAULT_GRID_MODE: &str = "dead";
/// Default label font
pub const DEFAULT_FONT: &str = "Helvetica";
/// Default page width in PostScript points (DIN A4)
pub const DEFAULT_PAGE_WIDTH: f64 = 595.0;
/// Default page height in PostScript points (DIN A4)
pub const DEFAULT_PAGE_HEIGHT: f64 = 842.0;

// Drawing settings
/// Grid lines are this many times thinner than a cell
pub const GRID_LINE_WIDTH_DIVISOR: f64 = 16.0;
/// Rule numbers longer than this shrink the label title
pub const LABEL_TITLE_MAX_DIGITS: usize = 12;
/// Fun facts are cut to this many characters on the label
pub const MAX_FACT_CHARS: usize = 90;
/// Edge length in pixels of one cell in the raster preview
pub const PREVIEW_CELL_PIXELS: u32 = 4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Fun fact lookup
/// Maximum number of fun facts shown on the label
pub const MAX_FUN_FACTS: usize = 2;
/// Timeout for the fun fact request
pub const FACTS_REQUEST_TIMEOUT_SECS: u64 = 10;
/// WolframAlpha full-results API endpoint
pub const WOLFRAM_ALPHA_ENDPOINT: &str = "https://api.wolframalpha.com/v2/query";

/// Grid side length: explicit cell count or derived from the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// Derive from the other side and the page aspect ratio
    Auto,
    /// Fixed number of cells
    Cells(usize),
}

impl FromStr for Dimension {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match trimmed.parse::<usize>() {
            Ok(0) | Err(_) => Err(invalid_configuration(
                "dimension",
                &trimmed,
                &"expected 'auto' or a positive integer",
            )),
            Ok(cells) => Ok(Self::Cells(cells)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Cells(cells) => write!(f, "{cells}"),
        }
    }
}

/// Shape drawn for each living cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CellShape {
    /// Cell-filling square
    #[default]
    Square,
    /// Circle inscribed in the cell
    Circle,
}

/// Validated, immutable poster configuration
///
/// Built once at startup and passed by reference to everything that needs it.
#[derive(Clone, Debug, PartialEq)]
pub struct PosterConfig {
    /// Rule to simulate
    pub rule: Rule,
    /// How the first generation is populated
    pub initial_condition: InitialCondition,
    /// Seed for random initial conditions; drawn at run time when absent
    pub seed: Option<u64>,
    /// Shape of living cells
    pub cell_shape: CellShape,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in generations, not counting the initial row
    pub height: usize,
    /// Leading generations computed but not drawn
    pub generation_offset: usize,
    /// Fraction of a cell the drawing is shifted upwards
    pub display_offset: f64,
    /// Page size and rotation
    pub page: PageGeometry,
    /// Living and dead cell colors
    pub colors: ColorPair,
    /// Grid line color, `None` to hide the grid
    pub grid_color: Option<Rgb>,
    /// Whether to draw the label band
    pub show_label: bool,
    /// Label font family
    pub font: String,
    /// Output SVG path
    pub output: PathBuf,
    /// Optional raster preview path
    pub preview: Option<PathBuf>,
    /// Credential for the fun fact service; lookup is skipped when absent
    pub facts_app_id: Option<String>,
    /// Verbose logging, and fun fact failures become fatal
    pub debug: bool,
    /// Hide progress output
    pub quiet: bool,
}

impl PosterConfig {
    /// Validate parsed command-line options into a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a value is out of range or the
    /// options contradict each other
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        for (option, value) in [("page-width", cli.page_width), ("page-height", cli.page_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_configuration(
                    option,
                    &value,
                    &"must be a positive number of points",
                ));
            }
        }
        if !cli.angle.is_finite() {
            return Err(invalid_configuration("angle", &cli.angle, &"must be finite"));
        }
        if !cli.offset.is_finite() || cli.offset < 0.0 {
            return Err(invalid_configuration(
                "offset",
                &cli.offset,
                &"must be a non-negative number",
            ));
        }
        if cli.offset >= MAX_GENERATION_OFFSET as f64 {
            return Err(invalid_configuration(
                "offset",
                &cli.offset,
                &format!("must be below {MAX_GENERATION_OFFSET}"),
            ));
        }
        if cli.font.trim().is_empty() {
            return Err(invalid_configuration("font", &cli.font, &"must not be empty"));
        }

        let generation_offset = cli.offset.trunc() as usize;
        let display_offset = cli.offset.fract();

        let page = PageGeometry {
            width: cli.page_width,
            height: cli.page_height,
            angle: cli.angle,
        };
        let (width, height) = resolve_dimensions(cli.width, cli.height, &page, display_offset)?;

        let colors = cli.color_scheme.colors();
        let grid_color = cli.grid_mode.color(&colors);

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("rule{}.svg", cli.rule)));

        let facts_app_id = cli
            .wolfram_app_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self {
            rule: cli.rule.clone(),
            initial_condition: cli.initial_condition.clone(),
            seed: cli.seed,
            cell_shape: cli.cell_shape,
            width,
            height,
            generation_offset,
            display_offset,
            page,
            colors,
            grid_color,
            show_label: cli.show_label,
            font: cli.font.trim().to_string(),
            output,
            preview: cli.preview.clone(),
            facts_app_id,
            debug: cli.debug,
            quiet: cli.quiet,
        })
    }

    /// Generations to simulate after the initial row
    pub const fn total_generations(&self) -> usize {
        self.height + self.generation_offset
    }
}
