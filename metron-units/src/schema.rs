//! Unit schemas: which unit the user sees for each dimension

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};
use metron_core::{MetronError, Quantity, QuantityFormat, Result};
use crate::locale::LocaleDescriptor;
use crate::render;
use crate::tables::{self, SchemaTable};

/// Scale factor and symbol chosen by a schema.
///
/// `value / factor` is the number to show next to `symbol`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub factor: f64,
    pub symbol: &'static str,
}

impl Translation {
    /// Convert a value in internal units into this display unit
    pub fn scale(&self, value: f64) -> f64 {
        value / self.factor
    }

    pub fn into_parts(self) -> (f64, &'static str) {
        (self.factor, self.symbol)
    }
}

/// A unit system policy.
///
/// Variants differ only in their display table; rendering is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSchema {
    /// Internal units everywhere (mm, kg, s, °), factor 1
    Internal,
    /// Metric with magnitude-dependent prefixes
    #[default]
    Metric,
    /// Meter-oriented metric (m, kg, s, °)
    Mks,
    /// Building trades (cm, m², m³)
    BuildingMetric,
    /// Small parts and CNC (mm, mm/min)
    #[serde(rename = "mm-min")]
    MmPerMinute,
    /// Imperial decimal (in, lb)
    ImperialDecimal,
    /// Imperial for civil engineering (ft, ft/s, mph)
    ImperialCivil,
    /// Finite element work (mm, t, s, N)
    #[serde(rename = "fem")]
    FemMilliMeterNewton,
}

impl UnitSchema {
    pub const ALL: [UnitSchema; 8] = [
        UnitSchema::Internal,
        UnitSchema::Metric,
        UnitSchema::Mks,
        UnitSchema::BuildingMetric,
        UnitSchema::MmPerMinute,
        UnitSchema::ImperialDecimal,
        UnitSchema::ImperialCivil,
        UnitSchema::FemMilliMeterNewton,
    ];

    /// Stable configuration key
    pub fn key(&self) -> &'static str {
        match self {
            UnitSchema::Internal => "internal",
            UnitSchema::Metric => "metric",
            UnitSchema::Mks => "mks",
            UnitSchema::BuildingMetric => "building-metric",
            UnitSchema::MmPerMinute => "mm-min",
            UnitSchema::ImperialDecimal => "imperial-decimal",
            UnitSchema::ImperialCivil => "imperial-civil",
            UnitSchema::FemMilliMeterNewton => "fem",
        }
    }

    /// Human-readable description for settings dialogs
    pub fn description(&self) -> &'static str {
        match self {
            UnitSchema::Internal => "Internal (mm, kg, s, °)",
            UnitSchema::Metric => "Standard (mm/m/km, kg, s, °)",
            UnitSchema::Mks => "MKS (m, kg, s, °)",
            UnitSchema::BuildingMetric => "Building Euro (cm, m², m³)",
            UnitSchema::MmPerMinute => "Metric small parts & CNC (mm, mm/min)",
            UnitSchema::ImperialDecimal => "Imperial decimal (in, lb)",
            UnitSchema::ImperialCivil => "Imperial for Civil Eng (ft, ft/s)",
            UnitSchema::FemMilliMeterNewton => "FEM (mm, N, s)",
        }
    }

    /// The unit lengths are usually entered in
    pub fn basic_length_unit(&self) -> &'static str {
        match self {
            UnitSchema::Mks => "m",
            UnitSchema::BuildingMetric => "cm",
            UnitSchema::ImperialDecimal => "in",
            UnitSchema::ImperialCivil => "ft",
            UnitSchema::Internal
            | UnitSchema::Metric
            | UnitSchema::MmPerMinute
            | UnitSchema::FemMilliMeterNewton => "mm",
        }
    }

    fn table(&self) -> &'static SchemaTable {
        match self {
            UnitSchema::Internal => &tables::INTERNAL,
            UnitSchema::Metric => &tables::METRIC,
            UnitSchema::Mks => &tables::MKS,
            UnitSchema::BuildingMetric => &tables::BUILDING_METRIC,
            UnitSchema::MmPerMinute => &tables::MM_PER_MINUTE,
            UnitSchema::ImperialDecimal => &tables::IMPERIAL_DECIMAL,
            UnitSchema::ImperialCivil => &tables::IMPERIAL_CIVIL,
            UnitSchema::FemMilliMeterNewton => &tables::FEM,
        }
    }

    /// Pick the display unit and scale factor for a quantity.
    ///
    /// Depends only on the quantity's dimension and magnitude.
    pub fn translate(&self, quantity: &Quantity) -> Result<Translation> {
        let value = quantity.value();
        if !value.is_finite() {
            return Err(MetronError::InvalidMagnitude(value));
        }

        let dimension = quantity.dimension();
        let rule = match self.table().lookup(dimension) {
            Some(rule) => rule,
            None => {
                warn!(schema = self.key(), %dimension, "no display unit for dimension");
                return Err(MetronError::UnsupportedDimension { schema: self.key(), dimension });
            }
        };

        let translation = rule.scale.pick(value);
        debug!(
            schema = self.key(),
            %dimension,
            value,
            factor = translation.factor,
            symbol = translation.symbol,
            "translated quantity"
        );
        Ok(translation)
    }

    /// Translate and render in one step.
    ///
    /// The quantity's own format wins over `default_format`.
    pub fn display(
        &self,
        quantity: &Quantity,
        locale: &LocaleDescriptor,
        default_format: QuantityFormat,
    ) -> Result<String> {
        let translation = self.translate(quantity)?;
        let format = quantity.format().unwrap_or(default_format);
        Ok(render::to_locale(
            translation.scale(quantity.value()),
            &format,
            translation.symbol,
            locale,
        ))
    }
}

impl fmt::Display for UnitSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for UnitSchema {
    type Err = MetronError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        UnitSchema::ALL.iter()
            .find(|schema| schema.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| MetronError::UnknownSchema(s.to_string()))
    }
}
