//! Structured errors
//!
//! Every error carries a stable machine-readable code and, where one helps,
//! a suggestion for the caller. Nothing in Metron substitutes a default unit
//! when something goes wrong: errors propagate to the caller of `display`.

use thiserror::Error;
use crate::Dimension;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_DIMENSION: &str = "UNSUPPORTED_DIMENSION";
    pub const INVALID_MAGNITUDE: &str = "INVALID_MAGNITUDE";
    pub const UNKNOWN_SCHEMA: &str = "UNKNOWN_SCHEMA";
    pub const UNKNOWN_LOCALE: &str = "UNKNOWN_LOCALE";
    pub const UNKNOWN_DIMENSION: &str = "UNKNOWN_DIMENSION";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetronError {
    /// The schema has no display unit for this dimension
    #[error("unit schema '{schema}' cannot display {}", describe(.dimension))]
    UnsupportedDimension {
        schema: &'static str,
        dimension: Dimension,
    },

    /// Non-finite magnitude handed to the display pipeline
    #[error("invalid magnitude: {0} is not a finite number")]
    InvalidMagnitude(f64),

    #[error("unknown unit schema: {0}")]
    UnknownSchema(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("configuration error: {0}")]
    Config(String),
}

fn describe(dimension: &Dimension) -> String {
    match dimension.name() {
        Some(name) => format!("{} [{}]", name, dimension),
        None => format!("[{}]", dimension),
    }
}

impl MetronError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            MetronError::UnsupportedDimension { .. } => codes::UNSUPPORTED_DIMENSION,
            MetronError::InvalidMagnitude(_) => codes::INVALID_MAGNITUDE,
            MetronError::UnknownSchema(_) => codes::UNKNOWN_SCHEMA,
            MetronError::UnknownLocale(_) => codes::UNKNOWN_LOCALE,
            MetronError::UnknownDimension(_) => codes::UNKNOWN_DIMENSION,
            MetronError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            MetronError::UnsupportedDimension { .. } => {
                Some("Add a display rule for this dimension to the schema table")
            }
            MetronError::InvalidMagnitude(_) => Some("Check the upstream computation for NaN or infinity"),
            MetronError::UnknownSchema(_) => {
                Some("Use one of: internal, metric, mks, building-metric, mm-min, imperial-decimal, imperial-civil, fem")
            }
            MetronError::UnknownLocale(_) => Some("Use a built-in locale such as c, en-US, de-DE or fr-FR"),
            MetronError::UnknownDimension(_) => Some("Use a dimension name like length, mass or pressure, or an exponent array"),
            MetronError::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetronError>;
