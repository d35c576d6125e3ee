//! Command-line interface and the poster pipeline it drives

use crate::automaton::initial::InitialCondition;
use crate::automaton::{Grid, Row, Rule, TransitionTable, simulate};
use crate::io::configuration::{
    CellShape, DEFAULT_COLOR_SCHEME, DEFAULT_FONT, DEFAULT_GRID_MODE, DEFAULT_HEIGHT,
    DEFAULT_INITIAL_CONDITION, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, DEFAULT_RULE,
    DEFAULT_WIDTH, Dimension, PREVIEW_CELL_PIXELS, PosterConfig,
};
use crate::io::error::Result;
use crate::io::facts::{FactSource, WolframAlphaFacts, gather_facts};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::svg::SvgDocument;
use crate::render::PosterRenderer;
use crate::render::palette::{ColorScheme, GridMode};
use clap::{ArgAction, Parser};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caposters")]
#[command(
    author,
    version,
    about = "Render elementary and higher cellular automata as vector posters"
)]
#[command(after_help = "Every option can also be set through the CAP_* environment variable \
                        shown next to it.")]
/// Command-line arguments for the poster generator
pub struct Cli {
    /// Rule number; 0-255 are the classical rules, larger ones widen the neighborhood
    #[arg(short, long, env = "CAP_RULE", default_value = DEFAULT_RULE)]
    pub rule: Rule,

    /// Initial row: middle, left, right, random or a bit string like 0001011
    #[arg(short, long, env = "CAP_INITIAL_CONDITION", default_value = DEFAULT_INITIAL_CONDITION)]
    pub initial_condition: InitialCondition,

    /// Seed for the random initial condition
    #[arg(short, long, env = "CAP_SEED")]
    pub seed: Option<u64>,

    /// Shape of living cells
    #[arg(long, env = "CAP_CELL_SHAPE", value_enum, default_value_t = CellShape::Square)]
    pub cell_shape: CellShape,

    /// Grid width in cells, or auto to derive it from the height
    #[arg(short = 'w', long, env = "CAP_WIDTH", default_value = DEFAULT_WIDTH)]
    pub width: Dimension,

    /// Grid height in generations, or auto to fill the page
    #[arg(short = 'H', long, env = "CAP_HEIGHT", default_value = DEFAULT_HEIGHT)]
    pub height: Dimension,

    /// First generation to show; a fractional part shifts the grid by part of a cell
    #[arg(long, env = "CAP_OFFSET", default_value_t = 0.0)]
    pub offset: f64,

    /// Clockwise rotation of the grid in degrees
    #[arg(short, long, env = "CAP_ANGLE", default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f64,

    /// Palette name or '#living,#dead' color pair
    #[arg(short, long, env = "CAP_COLOR_SCHEME", default_value = DEFAULT_COLOR_SCHEME)]
    pub color_scheme: ColorScheme,

    /// Grid line color: living, dead, a blend ratio between 0 and 1, or none
    #[arg(short, long, env = "CAP_GRID_MODE", default_value = DEFAULT_GRID_MODE)]
    pub grid_mode: GridMode,

    /// Whether to draw the label band
    #[arg(long, env = "CAP_SHOW_LABEL", default_value_t = true, action = ArgAction::Set)]
    pub show_label: bool,

    /// Label font family
    #[arg(long, env = "CAP_FONT", default_value = DEFAULT_FONT)]
    pub font: String,

    /// Page width in PostScript points
    #[arg(long, env = "CAP_PAGE_WIDTH", default_value_t = DEFAULT_PAGE_WIDTH)]
    pub page_width: f64,

    /// Page height in PostScript points
    #[arg(long, env = "CAP_PAGE_HEIGHT", default_value_t = DEFAULT_PAGE_HEIGHT)]
    pub page_height: f64,

    /// Output SVG file [default: rule<N>.svg]
    #[arg(short, long, env = "CAP_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Also write a raster PNG preview of the grid
    #[arg(long, env = "CAP_PREVIEW")]
    pub preview: Option<PathBuf>,

    /// WolframAlpha app id for fun facts on the label
    #[arg(long, env = "CAP_WOLFRAM_APP_ID", hide_env_values = true)]
    pub wolfram_app_id: Option<String>,

    /// Verbose logging; fun fact failures abort instead of being skipped
    #[arg(
        short,
        long,
        env = "CAP_DEBUG",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub debug: bool,

    /// Suppress progress output
    #[arg(
        short,
        long,
        env = "CAP_QUIET",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub quiet: bool,
}

/// Result of the pipeline before anything is written
pub struct Poster {
    /// Displayed generations, after the offset was discarded
    pub grid: Grid,
    /// Rendered page
    pub document: SvgDocument,
    /// Fun facts shown on the label
    pub facts: Vec<String>,
    /// Seed the initial condition was resolved with
    pub seed: u64,
}

/// Runs the whole pipeline: rule, initial row, simulation, drawing, output
pub struct PosterRunner {
    config: PosterConfig,
    progress: Option<ProgressManager>,
    fact_source: Option<Box<dyn FactSource>>,
}

impl PosterRunner {
    /// Validate the command line and prepare a runner
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the options cannot be turned into a
    /// configuration, or `ExternalService` in debug mode if the fun fact client
    /// cannot be created
    pub fn new(cli: &Cli) -> Result<Self> {
        Self::from_config(PosterConfig::from_cli(cli)?)
    }

    /// Prepare a runner for an already validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ExternalService` in debug mode if the fun fact client cannot be
    /// created
    pub fn from_config(config: PosterConfig) -> Result<Self> {
        let fact_source: Option<Box<dyn FactSource>> = match &config.facts_app_id {
            Some(app_id) => match WolframAlphaFacts::new(app_id) {
                Ok(client) => Some(Box::new(client)),
                Err(error) if config.debug => return Err(error),
                Err(error) => {
                    log::debug!("Fun facts disabled: {error}");
                    None
                }
            },
            None => None,
        };
        let progress = (!config.quiet).then(ProgressManager::new);

        Ok(Self {
            config,
            progress,
            fact_source,
        })
    }

    /// Replace the fun fact source
    #[must_use]
    pub fn with_fact_source(mut self, source: Box<dyn FactSource>) -> Self {
        self.fact_source = Some(source);
        self
    }

    /// Configuration this runner was built with
    pub const fn config(&self) -> &PosterConfig {
        &self.config
    }

    /// Build the poster and write it, plus the optional preview
    ///
    /// # Errors
    ///
    /// Returns an error if building fails or an output cannot be written
    pub fn run(&self) -> Result<()> {
        let poster = self.build()?;

        log::info!("Writing poster to '{}'", self.config.output.display());
        poster.document.save(&self.config.output)?;

        if let Some(preview) = &self.config.preview {
            log::info!("Writing preview to '{}'", preview.display());
            export_grid_as_png(
                &poster.grid,
                &self.config.colors,
                PREVIEW_CELL_PIXELS,
                preview,
            )?;
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    /// Derive the rule, simulate and draw, without writing anything
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` or `InvalidInitialCondition` for inputs that
    /// cannot be simulated, and `ExternalService` if the fun fact lookup fails
    /// in debug mode
    pub fn build(&self) -> Result<Poster> {
        let config = &self.config;

        let table = TransitionTable::derive(&config.rule)?;
        log::info!(
            "Rule {} uses a {}-cell neighborhood ({} patterns)",
            config.rule,
            table.neighborhood_width(),
            table.len()
        );
        if config.rule.is_zero() {
            log::warn!("Rule 0 leaves every cell dead after the first generation");
        }

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("Seed: {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = config.initial_condition.resolve(config.width, &mut rng)?;
        log::debug!("Initial state: {initial}");

        let facts = match &self.fact_source {
            Some(source) => gather_facts(source.as_ref(), &config.rule, config.debug)?,
            None => Vec::new(),
        };

        let grid = self.simulate_grid(initial, &table);

        log::debug!("Drawing {} rows", grid.len());
        if let Some(ref pm) = self.progress {
            pm.start_stage("Drawing", grid.len());
        }
        let document = PosterRenderer::new(config).render(&grid, &table, &facts, |_| {
            if let Some(ref pm) = self.progress {
                pm.advance();
            }
        });

        Ok(Poster {
            grid,
            document,
            facts,
            seed,
        })
    }

    fn simulate_grid(&self, initial: Row, table: &TransitionTable) -> Grid {
        let generations = self.config.total_generations();
        log::debug!(
            "Running rule {} for {generations} generations",
            self.config.rule
        );

        if let Some(ref pm) = self.progress {
            pm.start_stage("Simulating", generations + 1);
        }
        let rows = simulate(initial, table, generations).inspect(|_| {
            if let Some(ref pm) = self.progress {
                pm.advance();
            }
        });

        Grid::from_generations(rows, self.config.generation_offset)
    }
}
