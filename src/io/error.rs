//! Error types for configuration, simulation setup and poster output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all poster operations
#[derive(Debug)]
pub enum PosterError {
    /// An option value was rejected before simulation started
    InvalidConfiguration {
        /// Name of the offending option
        option: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rule number cannot be turned into a transition table
    InvalidRule {
        /// Rule text as provided
        value: String,
        /// Explanation of why the rule is invalid
        reason: String,
    },

    /// Initial condition cannot be resolved into a row
    InvalidInitialCondition {
        /// Description of what's wrong with the initial condition
        reason: String,
    },

    /// Optional third-party lookup failed
    ///
    /// Only fatal in debug mode; otherwise the poster is drawn without the
    /// decoration the service would have supplied.
    ExternalService {
        /// Name of the service that failed
        service: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to write the poster document to disk
    OutputWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the raster preview
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                option,
                value,
                reason,
            } => {
                write!(f, "Invalid option '{option}' = '{value}': {reason}")
            }
            Self::InvalidRule { value, reason } => {
                write!(f, "Invalid rule '{value}': {reason}")
            }
            Self::InvalidInitialCondition { reason } => {
                write!(f, "Invalid initial condition: {reason}")
            }
            Self::ExternalService { service, reason } => {
                write!(f, "External service '{service}' failed: {reason}")
            }
            Self::OutputWrite { path, source } => {
                write!(f, "Failed to write poster to '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutputWrite { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for poster results
pub type Result<T> = std::result::Result<T, PosterError>;

impl From<reqwest::Error> for PosterError {
    fn from(err: reqwest::Error) -> Self {
        Self::ExternalService {
            service: "http",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    option: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PosterError {
    PosterError::InvalidConfiguration {
        option,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid rule error
pub fn invalid_rule(value: &impl ToString, reason: &impl ToString) -> PosterError {
    PosterError::InvalidRule {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid initial condition error
pub fn invalid_initial_condition(reason: &impl ToString) -> PosterError {
    PosterError::InvalidInitialCondition {
        reason: reason.to_string(),
    }
}

/// Create an external service error
pub fn external_service(service: &'static str, reason: &impl ToString) -> PosterError {
    PosterError::ExternalService {
        service,
        reason: reason.to_string(),
    }
}
