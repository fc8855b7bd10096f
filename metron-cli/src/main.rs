//! Metron CLI
//!
//! Line-oriented JSON front end: one display request per stdin line,
//! one response per stdout line. Logs go to stderr.
//!
//! Request:
//!   {"value": 12.7, "dimension": "length", "format": {"precision": 3},
//!    "schema": "imperial-decimal", "locale": "de-DE"}
//! `dimension` is a name or an array of 8 exponents; `format`, `schema` and
//! `locale` are optional and default to the configured settings.
//!
//! Response:
//!   {"text": "0,500 in", "value": 0.5, "factor": 25.4, "symbol": "in"}
//!   {"error": {"code": "UNSUPPORTED_DIMENSION", "message": "...", "suggestion": "..."}}
//!
//! Configuration comes from METRON_CONFIG, METRON_SCHEMA, METRON_LOCALE and
//! METRON_DECIMALS; log level from RUST_LOG (default `info`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use metron_core::{Dimension, MetronError, Quantity, QuantityFormat};
use metron_units::{display_with, settings, DisplaySettings, LocaleDescriptor, UnitSchema};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Code for lines that are not a valid request
const PARSE_ERROR: &str = "PARSE_ERROR";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayRequest {
    value: f64,
    dimension: DimensionSpec,
    #[serde(default)]
    format: Option<QuantityFormat>,
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DimensionSpec {
    Named(String),
    Exponents(Dimension),
}

impl DimensionSpec {
    fn resolve(self) -> Result<Dimension, MetronError> {
        match self {
            DimensionSpec::Named(name) => {
                Dimension::from_name(&name).ok_or(MetronError::UnknownDimension(name))
            }
            DimensionSpec::Exponents(dimension) => Ok(dimension),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DisplayResponse {
    Rendered {
        text: String,
        value: f64,
        factor: f64,
        symbol: &'static str,
    },
    Failed {
        error: ErrorBody,
    },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'static str>,
}

impl From<MetronError> for DisplayResponse {
    fn from(e: MetronError) -> Self {
        DisplayResponse::Failed {
            error: ErrorBody {
                code: e.code(),
                message: e.to_string(),
                suggestion: e.suggestion(),
            },
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let configured = match DisplaySettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!(code = e.code(), "{}", e);
            return ExitCode::FAILURE;
        }
    };
    settings::install(configured);

    let active = settings::current();
    info!(
        version = VERSION,
        schema = %active.schema,
        locale = %active.locale.name,
        precision = active.default_format.precision,
        "metron ready, reading requests from stdin"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = handle_line(line, &settings::current());
                let json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("cannot encode response: {}", e);
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
                    error!("error writing response: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                error!("error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Answer one request line against a settings snapshot
fn handle_line(line: &str, active: &DisplaySettings) -> DisplayResponse {
    let request: DisplayRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("malformed request: {}", e);
            return DisplayResponse::Failed {
                error: ErrorBody {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {}", e),
                    suggestion: Some(r#"Send one JSON object per line, e.g. {"value": 12.7, "dimension": "length"}"#),
                },
            };
        }
    };

    match handle_request(request, active) {
        Ok(response) => response,
        Err(e) => {
            debug!(code = e.code(), "request failed: {}", e);
            e.into()
        }
    }
}

fn handle_request(request: DisplayRequest, active: &DisplaySettings) -> Result<DisplayResponse, MetronError> {
    let mut settings = DisplaySettings::clone(active);
    if let Some(key) = &request.schema {
        settings.schema = key.parse::<UnitSchema>()?;
    }
    if let Some(name) = &request.locale {
        settings.locale = LocaleDescriptor::from_name(name)?;
    }

    let dimension = request.dimension.resolve()?;
    let mut quantity = Quantity::new(request.value, dimension);
    if let Some(format) = request.format {
        quantity = quantity.with_format(format);
    }

    let text = display_with(&quantity, &settings)?;
    let translation = settings.schema.translate(&quantity)?;
    Ok(DisplayResponse::Rendered {
        text,
        value: translation.scale(quantity.value()),
        factor: translation.factor,
        symbol: translation.symbol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as JsonValue};

    fn respond(line: &str) -> JsonValue {
        let response = handle_line(line, &DisplaySettings::default());
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn test_named_dimension() {
        let out = respond(r#"{"value": 12.7, "dimension": "length"}"#);
        assert_eq!(out, json!({"text": "12.70 mm", "value": 12.7, "factor": 1.0, "symbol": "mm"}));
    }

    #[test]
    fn test_exponent_dimension_and_overrides() {
        let out = respond(
            r#"{"value": 12.7, "dimension": [1,0,0,0,0,0,0,0], "schema": "imperial-decimal", "locale": "de-DE", "format": {"precision": 3}}"#,
        );
        assert_eq!(out["text"], "0,500 in");
        assert_eq!(out["symbol"], "in");
        assert_eq!(out["factor"], 25.4);
    }

    #[test]
    fn test_unsupported_dimension() {
        let out = respond(r#"{"value": 100, "dimension": "luminous flux"}"#);
        assert_eq!(out["error"]["code"], "UNSUPPORTED_DIMENSION");
        assert!(out["error"]["suggestion"].is_string());
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(respond(r#"{"value": 1, "dimension": "spin"}"#)["error"]["code"], "UNKNOWN_DIMENSION");
        assert_eq!(
            respond(r#"{"value": 1, "dimension": "length", "schema": "cubits"}"#)["error"]["code"],
            "UNKNOWN_SCHEMA",
        );
        assert_eq!(
            respond(r#"{"value": 1, "dimension": "length", "locale": "tlh"}"#)["error"]["code"],
            "UNKNOWN_LOCALE",
        );
    }

    #[test]
    fn test_parse_error() {
        let out = respond("not json");
        assert_eq!(out["error"]["code"], PARSE_ERROR);
        let out = respond(r#"{"value": 1}"#);
        assert_eq!(out["error"]["code"], PARSE_ERROR);
    }

    #[test]
    fn test_huge_precision_still_answers() {
        let out = respond(r#"{"value": 1, "dimension": "length", "format": {"precision": 70000}}"#);
        let expected = format!("1.{} mm", "0".repeat(metron_units::MAX_PRECISION as usize));
        assert_eq!(out["text"], expected.as_str());
        assert_eq!(out["symbol"], "mm");
    }

    #[test]
    fn test_matches_library_rendering() {
        let active = DisplaySettings::default();
        let line = r#"{"value": 0.5, "dimension": "dimensionless", "locale": "de-DE"}"#;
        let out = serde_json::to_value(handle_line(line, &active)).unwrap();
        let q = Quantity::dimensionless(0.5);
        let expected = display_with(&q, &active.clone().with_locale(LocaleDescriptor::from_name("de-DE").unwrap())).unwrap();
        assert_eq!(out["text"], expected.as_str());
        assert_eq!(out["text"], "0,50 ");
    }

    #[test]
    fn test_uses_snapshot_default_format() {
        let active = DisplaySettings::default().with_default_format(QuantityFormat::new(0));
        let response = handle_line(r#"{"value": 1500, "dimension": "length"}"#, &active);
        let out = serde_json::to_value(&response).unwrap();
        assert_eq!(out["text"], "2 m");
    }
}
