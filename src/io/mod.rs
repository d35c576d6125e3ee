//! Input/output: command line, configuration, logging, errors and file formats

/// Command-line interface and the poster pipeline
pub mod cli;
/// Constants, option defaults and the validated configuration
pub mod configuration;
/// Error types
pub mod error;
/// Fun fact lookup
pub mod facts;
/// Raster preview export
pub mod image;
/// Logger setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// SVG page writer
pub mod svg;
