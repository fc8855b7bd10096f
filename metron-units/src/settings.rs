//! Display settings and the process-wide active snapshot
//!
//! Settings are immutable once installed. Changing the schema or locale
//! builds a new snapshot and swaps the shared pointer, so readers holding
//! an older `Arc` keep rendering consistently.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;
use metron_core::{MetronError, QuantityFormat, Result};
use crate::locale::LocaleDescriptor;
use crate::schema::UnitSchema;

/// Environment variables read by `DisplaySettings::from_env`
pub mod vars {
    pub const CONFIG: &str = "METRON_CONFIG";
    pub const SCHEMA: &str = "METRON_SCHEMA";
    pub const LOCALE: &str = "METRON_LOCALE";
    pub const DECIMALS: &str = "METRON_DECIMALS";
}

/// Everything `display` needs besides the quantity itself
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub schema: UnitSchema,
    /// Either a built-in locale name or a full descriptor
    #[serde(deserialize_with = "deserialize_locale")]
    pub locale: LocaleDescriptor,
    /// Used for quantities without their own format
    pub default_format: QuantityFormat,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleSpec {
    Named(String),
    Custom(LocaleDescriptor),
}

fn deserialize_locale<'de, D>(deserializer: D) -> std::result::Result<LocaleDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    match LocaleSpec::deserialize(deserializer)? {
        LocaleSpec::Named(name) => LocaleDescriptor::from_name(&name).map_err(serde::de::Error::custom),
        LocaleSpec::Custom(locale) => Ok(locale),
    }
}

impl DisplaySettings {
    pub fn new(schema: UnitSchema, locale: LocaleDescriptor) -> Self {
        DisplaySettings { schema, locale, default_format: QuantityFormat::default() }
    }

    pub fn with_schema(mut self, schema: UnitSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_locale(mut self, locale: LocaleDescriptor) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_default_format(mut self, format: QuantityFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MetronError::Config(format!("invalid settings JSON: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| MetronError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Load from `METRON_CONFIG` (if set), then apply the
    /// `METRON_SCHEMA`, `METRON_LOCALE` and `METRON_DECIMALS` overrides.
    pub fn from_env() -> Result<Self> {
        let base = match env::var(vars::CONFIG) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|name| env::var(name).ok())
    }

    /// Apply variable-style overrides from any lookup function
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(key) = lookup(vars::SCHEMA) {
            self.schema = key.parse()?;
        }
        if let Some(name) = lookup(vars::LOCALE) {
            self.locale = LocaleDescriptor::from_name(&name)?;
        }
        if let Some(decimals) = lookup(vars::DECIMALS) {
            self.default_format.precision = decimals.trim().parse().map_err(|_| {
                MetronError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    vars::DECIMALS, decimals
                ))
            })?;
        }
        Ok(self)
    }
}

static ACTIVE: LazyLock<RwLock<Arc<DisplaySettings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(DisplaySettings::default())));

/// The active settings snapshot.
///
/// The read lock is held only long enough to clone the `Arc`.
pub fn current() -> Arc<DisplaySettings> {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replace the active snapshot, returning the previous one
pub fn install(settings: DisplaySettings) -> Arc<DisplaySettings> {
    info!(schema = %settings.schema, locale = %settings.locale.name, "installing display settings");
    let next = Arc::new(settings);
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *active, next)
}

/// Switch the active unit schema
pub fn set_schema(schema: UnitSchema) -> Arc<DisplaySettings> {
    update(|settings| settings.schema = schema)
}

/// Switch the active locale
pub fn set_locale(locale: LocaleDescriptor) -> Arc<DisplaySettings> {
    update(|settings| settings.locale = locale)
}

/// Copy-on-write update under the write lock, so concurrent changes
/// never lose each other's edits.
fn update(edit: impl FnOnce(&mut DisplaySettings)) -> Arc<DisplaySettings> {
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    let mut next = DisplaySettings::clone(&active);
    edit(&mut next);
    info!(schema = %next.schema, locale = %next.locale.name, "display settings changed");
    let next = Arc::new(next);
    *active = Arc::clone(&next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use metron_core::Quantity;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.schema, UnitSchema::Metric);
        assert_eq!(settings.locale, LocaleDescriptor::c());
        assert_eq!(settings.default_format, QuantityFormat::new(2));
    }

    #[test]
    fn test_from_json_named_locale() {
        let settings = DisplaySettings::from_json(
            r#"{"schema": "imperial-decimal", "locale": "de-DE", "default_format": {"precision": 3}}"#,
        ).unwrap();
        assert_eq!(settings.schema, UnitSchema::ImperialDecimal);
        assert_eq!(settings.locale.decimal_separator, ',');
        assert_eq!(settings.default_format.precision, 3);
    }

    #[test]
    fn test_from_json_custom_locale() {
        let settings = DisplaySettings::from_json(
            r#"{"locale": {"name": "pt-BR", "decimal_separator": ",", "group_separator": "."}}"#,
        ).unwrap();
        assert_eq!(settings.schema, UnitSchema::Metric);
        assert_eq!(settings.locale.name, "pt-BR");
        assert_eq!(settings.locale.group_separator, '.');
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(DisplaySettings::from_json("{"), Err(MetronError::Config(_))));
        assert!(matches!(
            DisplaySettings::from_json(r#"{"locale": "xx-YY"}"#),
            Err(MetronError::Config(_))
        ));
        assert!(matches!(
            DisplaySettings::from_json(r#"{"schema": "cubits"}"#),
            Err(MetronError::Config(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let err = DisplaySettings::from_file("/nonexistent/metron.json").unwrap_err();
        assert_eq!(err.code(), metron_core::codes::CONFIG_ERROR);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (vars::SCHEMA, "mks"),
            (vars::LOCALE, "fr_FR"),
            (vars::DECIMALS, " 4 "),
        ]);
        let settings = DisplaySettings::default()
            .with_overrides(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.schema, UnitSchema::Mks);
        assert_eq!(settings.locale.name, "fr-FR");
        assert_eq!(settings.default_format.precision, 4);
    }

    #[test]
    fn test_override_errors() {
        let bad_decimals = DisplaySettings::default()
            .with_overrides(|name| (name == vars::DECIMALS).then(|| "-1".to_string()));
        assert!(matches!(bad_decimals, Err(MetronError::Config(_))));

        let bad_schema = DisplaySettings::default()
            .with_overrides(|name| (name == vars::SCHEMA).then(|| "furlongs".to_string()));
        assert!(matches!(bad_schema, Err(MetronError::UnknownSchema(_))));
    }

    // The only test that touches the process-wide snapshot
    #[test]
    fn test_active_snapshot_swaps() {
        let original = install(DisplaySettings::default());
        let before = current();
        let q = Quantity::length(1524.0);
        assert_eq!(crate::display(&q).unwrap(), "1.52 m");
        assert_eq!(crate::translate(&q).unwrap().into_parts(), (1e3, "m"));

        let after = set_schema(UnitSchema::ImperialCivil);
        assert_eq!(after.schema, UnitSchema::ImperialCivil);
        assert_eq!(current().schema, UnitSchema::ImperialCivil);
        // Readers holding the old snapshot are unaffected
        assert_eq!(before.schema, UnitSchema::Metric);
        assert_eq!(crate::display(&q).unwrap(), "5.00 ft");
        assert_eq!(crate::translate(&q).unwrap().into_parts(), (304.8, "ft"));

        set_locale(LocaleDescriptor::from_name("de-DE").unwrap());
        let now = current();
        assert_eq!(now.schema, UnitSchema::ImperialCivil);
        assert_eq!(now.locale.name, "de-DE");
        assert_eq!(crate::display(&q).unwrap(), "5,00 ft");
        assert_eq!(crate::translate(&q).unwrap().symbol, "ft");

        install(DisplaySettings::clone(&original));
    }
}
