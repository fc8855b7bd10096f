//! Metron Units - Unit schemas and locale-aware quantity display
//!
//! Turns a `Quantity` held in internal units into user-facing text:
//! - `UnitSchema`: picks the display unit and scale factor per dimension
//! - `LocaleDescriptor`: decimal and group separators, sign and exponent style
//! - `render`: number formatting with a fixed precision
//! - `settings`: the active schema/locale/format snapshot and its config sources
//!
//! Schemas:
//! - internal (mm, kg, s, °)
//! - metric (mm/m/km, g/kg/t, Pa/kPa/MPa, ...)
//! - mks (m, kg, s)
//! - building-metric (cm, m², m³)
//! - mm-min (mm, mm/min)
//! - imperial-decimal (in, lb, psi)
//! - imperial-civil (ft, mph)
//! - fem (mm, t, N, MPa)

mod tables;
mod schema;
mod locale;
mod display;
pub mod render;
pub mod settings;

pub use schema::{Translation, UnitSchema};
pub use locale::{GroupingRule, LocaleDefaults, LocaleDescriptor, BUILTIN_LOCALES};
pub use display::{display, display_in, display_with, translate};
pub use render::{format_number, to_locale, MAX_PRECISION};
pub use settings::DisplaySettings;

#[cfg(test)]
mod scenarios {
    use super::*;
    use metron_core::{Dimension, MetronError, Quantity, QuantityFormat};

    fn settings(schema: UnitSchema, locale: &str) -> DisplaySettings {
        DisplaySettings::new(schema, LocaleDescriptor::from_name(locale).unwrap())
    }

    #[test]
    fn metric_length() {
        let q = Quantity::length(12.7);
        assert_eq!(display_with(&q, &settings(UnitSchema::Metric, "c")).unwrap(), "12.70 mm");
    }

    #[test]
    fn imperial_length() {
        let q = Quantity::length(12.7);
        assert_eq!(display_with(&q, &settings(UnitSchema::ImperialDecimal, "c")).unwrap(), "0.50 in");
    }

    #[test]
    fn adaptive_prefix() {
        let q = Quantity::length(1500.0);
        assert_eq!(display_with(&q, &settings(UnitSchema::Metric, "c")).unwrap(), "1.50 m");
    }

    #[test]
    fn comma_decimal_locale() {
        let q = Quantity::length(12.7);
        assert_eq!(display_with(&q, &settings(UnitSchema::Metric, "de-DE")).unwrap(), "12,70 mm");
    }

    #[test]
    fn unsupported_dimension() {
        let q = Quantity::new(100.0, Dimension::LUMINOUS_FLUX);
        let err = display_with(&q, &settings(UnitSchema::Metric, "c")).unwrap_err();
        assert!(matches!(err, MetronError::UnsupportedDimension { schema: "metric", .. }));
        assert!(err.to_string().contains("luminous_flux"));
    }

    #[test]
    fn explicit_format_and_grouping() {
        let q = Quantity::new(1.2346e6, Dimension::PRESSURE).with_format(QuantityFormat::new(3));
        assert_eq!(display_with(&q, &settings(UnitSchema::Metric, "en-US")).unwrap(), "1.235 GPa");
        assert_eq!(display_with(&q, &settings(UnitSchema::Internal, "en-US")).unwrap(), "1,234,600.000 kPa");
    }

    #[test]
    fn angle_and_dimensionless() {
        let c = settings(UnitSchema::Mks, "c");
        assert_eq!(display_with(&Quantity::angle(45.0), &c).unwrap(), "45.00 °");
        assert_eq!(display_with(&Quantity::dimensionless(0.5), &c).unwrap(), "0.50 ");
    }
}
