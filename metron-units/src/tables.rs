//! Display unit tables, one per schema, organized by dimension
//!
//! All factors convert *from* the display unit *to* internal units
//! (mm, kg, s, A, K, mol, cd, °): `internal = shown * factor`.
//!
//! Each table only lists the dimensions it treats differently and falls back
//! to another table for the rest. Every chain ends in `INTERNAL`, which
//! covers all of `Dimension::RECOGNIZED`.

use metron_core::Dimension;
use crate::schema::Translation;

/// How a schema picks the display unit for one dimension
#[derive(Debug)]
pub(crate) enum Scale {
    /// Always the same unit
    Fixed(Translation),
    /// First step whose bound exceeds |value|; `zero` for a zero value
    Adaptive {
        zero: Translation,
        steps: &'static [Step],
    },
}

/// One band of an adaptive scale: used while |value| < `below` (internal units)
#[derive(Debug)]
pub(crate) struct Step {
    pub below: f64,
    pub unit: Translation,
}

#[derive(Debug)]
pub(crate) struct Rule {
    pub dimension: Dimension,
    pub scale: Scale,
}

#[derive(Debug)]
pub(crate) struct SchemaTable {
    pub rules: &'static [Rule],
    pub fallback: Option<&'static SchemaTable>,
}

impl SchemaTable {
    /// Find the rule for a dimension, walking the fallback chain
    pub fn lookup(&'static self, dimension: Dimension) -> Option<&'static Rule> {
        let mut table = Some(self);
        while let Some(current) = table {
            if let Some(rule) = current.rules.iter().find(|r| r.dimension == dimension) {
                return Some(rule);
            }
            table = current.fallback;
        }
        None
    }
}

impl Scale {
    pub fn pick(&self, value: f64) -> Translation {
        match self {
            Scale::Fixed(unit) => *unit,
            Scale::Adaptive { zero, steps } => {
                if value == 0.0 {
                    return *zero;
                }
                let magnitude = value.abs();
                steps.iter()
                    .find(|step| magnitude < step.below)
                    .or_else(|| steps.last())
                    .map(|step| step.unit)
                    .unwrap_or(*zero)
            }
        }
    }
}

const fn unit(symbol: &'static str, factor: f64) -> Translation {
    Translation { factor, symbol }
}

const fn step(below: f64, symbol: &'static str, factor: f64) -> Step {
    Step { below, unit: unit(symbol, factor) }
}

const fn fixed(dimension: Dimension, symbol: &'static str, factor: f64) -> Rule {
    Rule { dimension, scale: Scale::Fixed(unit(symbol, factor)) }
}

macro_rules! adaptive {
    ($dimension:expr, $zero:expr, [$($step:expr),+ $(,)?]) => {
        Rule {
            dimension: $dimension,
            scale: Scale::Adaptive { zero: $zero, steps: &[$($step),+] },
        }
    };
}

const INF: f64 = f64::INFINITY;

// Conversion factors into internal units
const INCH: f64 = 25.4;
const FOOT: f64 = 304.8;
const POUND: f64 = 0.45359237;
const PSI: f64 = 6.894757293168361; // kPa
const POUND_FORCE: f64 = 4448.2216152605; // mN
const FOOT_POUND_FORCE: f64 = 1_355_817.948_331_400_4; // µJ
const HORSEPOWER: f64 = 745_699_871.582_270_2; // µW
const MILE_PER_HOUR: f64 = 447.04; // mm/s

// ============ internal ============

pub(crate) static INTERNAL: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::DIMENSIONLESS, "", 1.0),
        fixed(Dimension::LENGTH, "mm", 1.0),
        fixed(Dimension::AREA, "mm^2", 1.0),
        fixed(Dimension::VOLUME, "mm^3", 1.0),
        fixed(Dimension::ANGLE, "°", 1.0),
        fixed(Dimension::MASS, "kg", 1.0),
        fixed(Dimension::TIME, "s", 1.0),
        fixed(Dimension::CURRENT, "A", 1.0),
        fixed(Dimension::TEMPERATURE, "K", 1.0),
        fixed(Dimension::AMOUNT, "mol", 1.0),
        fixed(Dimension::LUMINOUS_INTENSITY, "cd", 1.0),
        fixed(Dimension::VELOCITY, "mm/s", 1.0),
        fixed(Dimension::ACCELERATION, "mm/s^2", 1.0),
        fixed(Dimension::FORCE, "mN", 1.0),
        fixed(Dimension::PRESSURE, "kPa", 1.0),
        fixed(Dimension::ENERGY, "µJ", 1.0),
        fixed(Dimension::POWER, "µW", 1.0),
        fixed(Dimension::FREQUENCY, "Hz", 1.0),
        fixed(Dimension::DENSITY, "kg/mm^3", 1.0),
        fixed(Dimension::ELECTRIC_POTENTIAL, "µV", 1.0),
        fixed(Dimension::ELECTRIC_CHARGE, "C", 1.0),
        fixed(Dimension::RESISTANCE, "µΩ", 1.0),
    ],
    fallback: None,
};

// ============ metric (adaptive) ============

pub(crate) static METRIC: SchemaTable = SchemaTable {
    rules: &[
        adaptive!(Dimension::LENGTH, unit("mm", 1.0), [
            step(1e-3, "nm", 1e-6),
            step(0.1, "µm", 1e-3),
            step(1e3, "mm", 1.0),
            step(1e6, "m", 1e3),
            step(INF, "km", 1e6),
        ]),
        adaptive!(Dimension::AREA, unit("mm^2", 1.0), [
            step(1e2, "mm^2", 1.0),
            step(1e6, "cm^2", 1e2),
            step(1e12, "m^2", 1e6),
            step(INF, "km^2", 1e12),
        ]),
        adaptive!(Dimension::VOLUME, unit("mm^3", 1.0), [
            step(1e3, "mm^3", 1.0),
            step(1e6, "ml", 1e3),
            step(1e9, "l", 1e6),
            step(INF, "m^3", 1e9),
        ]),
        adaptive!(Dimension::MASS, unit("kg", 1.0), [
            step(1e-6, "µg", 1e-9),
            step(1e-3, "mg", 1e-6),
            step(1.0, "g", 1e-3),
            step(1e3, "kg", 1.0),
            step(INF, "t", 1e3),
        ]),
        adaptive!(Dimension::VELOCITY, unit("mm/s", 1.0), [
            step(1e3, "mm/s", 1.0),
            step(INF, "m/s", 1e3),
        ]),
        adaptive!(Dimension::FORCE, unit("N", 1e3), [
            step(1e3, "mN", 1.0),
            step(1e6, "N", 1e3),
            step(1e9, "kN", 1e6),
            step(INF, "MN", 1e9),
        ]),
        adaptive!(Dimension::PRESSURE, unit("kPa", 1.0), [
            step(1.0, "Pa", 1e-3),
            step(1e3, "kPa", 1.0),
            step(1e6, "MPa", 1e3),
            step(INF, "GPa", 1e6),
        ]),
        adaptive!(Dimension::ENERGY, unit("J", 1e6), [
            step(1e3, "µJ", 1.0),
            step(1e6, "mJ", 1e3),
            step(1e9, "J", 1e6),
            step(1e12, "kJ", 1e9),
            step(INF, "MJ", 1e12),
        ]),
        adaptive!(Dimension::POWER, unit("W", 1e6), [
            step(1e3, "µW", 1.0),
            step(1e6, "mW", 1e3),
            step(1e9, "W", 1e6),
            step(1e12, "kW", 1e9),
            step(INF, "MW", 1e12),
        ]),
        adaptive!(Dimension::FREQUENCY, unit("Hz", 1.0), [
            step(1e3, "Hz", 1.0),
            step(1e6, "kHz", 1e3),
            step(1e9, "MHz", 1e6),
            step(INF, "GHz", 1e9),
        ]),
        fixed(Dimension::DENSITY, "kg/m^3", 1e-9),
        adaptive!(Dimension::ELECTRIC_POTENTIAL, unit("V", 1e6), [
            step(1e3, "µV", 1.0),
            step(1e6, "mV", 1e3),
            step(1e9, "V", 1e6),
            step(INF, "kV", 1e9),
        ]),
        adaptive!(Dimension::RESISTANCE, unit("Ω", 1e6), [
            step(1e6, "mΩ", 1e3),
            step(1e9, "Ω", 1e6),
            step(1e12, "kΩ", 1e9),
            step(INF, "MΩ", 1e12),
        ]),
    ],
    fallback: Some(&INTERNAL),
};

// ============ MKS ============

pub(crate) static MKS: SchemaTable = SchemaTable {
    rules: &[
        adaptive!(Dimension::LENGTH, unit("m", 1e3), [
            step(1e-3, "nm", 1e-6),
            step(0.1, "µm", 1e-3),
            step(1e4, "mm", 1.0),
            step(1e7, "m", 1e3),
            step(INF, "km", 1e6),
        ]),
        fixed(Dimension::VELOCITY, "m/s", 1e3),
        fixed(Dimension::ACCELERATION, "m/s^2", 1e3),
        adaptive!(Dimension::PRESSURE, unit("Pa", 1e-3), [
            step(10.0, "Pa", 1e-3),
            step(1e4, "kPa", 1.0),
            step(1e7, "MPa", 1e3),
            step(INF, "GPa", 1e6),
        ]),
    ],
    fallback: Some(&METRIC),
};

// ============ building metric ============

pub(crate) static BUILDING_METRIC: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::LENGTH, "cm", 10.0),
        fixed(Dimension::AREA, "m^2", 1e6),
        fixed(Dimension::VOLUME, "m^3", 1e9),
        fixed(Dimension::VELOCITY, "m/s", 1e3),
    ],
    fallback: Some(&METRIC),
};

// ============ mm/min ============

pub(crate) static MM_PER_MINUTE: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::LENGTH, "mm", 1.0),
        fixed(Dimension::VELOCITY, "mm/min", 1.0 / 60.0),
    ],
    fallback: Some(&METRIC),
};

// ============ imperial decimal ============

pub(crate) static IMPERIAL_DECIMAL: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::LENGTH, "in", INCH),
        fixed(Dimension::AREA, "in^2", INCH * INCH),
        fixed(Dimension::VOLUME, "in^3", INCH * INCH * INCH),
        fixed(Dimension::MASS, "lb", POUND),
        fixed(Dimension::VELOCITY, "in/min", INCH / 60.0),
        fixed(Dimension::ACCELERATION, "in/s^2", INCH),
        fixed(Dimension::FORCE, "lbf", POUND_FORCE),
        fixed(Dimension::PRESSURE, "psi", PSI),
        fixed(Dimension::ENERGY, "ft·lbf", FOOT_POUND_FORCE),
        fixed(Dimension::POWER, "hp", HORSEPOWER),
        fixed(Dimension::DENSITY, "lb/in^3", POUND / (INCH * INCH * INCH)),
    ],
    fallback: Some(&METRIC),
};

// ============ imperial civil ============

pub(crate) static IMPERIAL_CIVIL: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::LENGTH, "ft", FOOT),
        fixed(Dimension::AREA, "ft^2", FOOT * FOOT),
        fixed(Dimension::VOLUME, "ft^3", FOOT * FOOT * FOOT),
        fixed(Dimension::VELOCITY, "mph", MILE_PER_HOUR),
        fixed(Dimension::ACCELERATION, "ft/s^2", FOOT),
        fixed(Dimension::DENSITY, "lb/ft^3", POUND / (FOOT * FOOT * FOOT)),
    ],
    fallback: Some(&IMPERIAL_DECIMAL),
};

// ============ FEM (mm, t, s, N) ============

pub(crate) static FEM: SchemaTable = SchemaTable {
    rules: &[
        fixed(Dimension::MASS, "t", 1e3),
        fixed(Dimension::FORCE, "N", 1e3),
        fixed(Dimension::PRESSURE, "MPa", 1e3),
        fixed(Dimension::ENERGY, "mJ", 1e3),
        fixed(Dimension::POWER, "mW", 1e3),
        fixed(Dimension::DENSITY, "t/mm^3", 1e3),
    ],
    fallback: Some(&INTERNAL),
};

#[cfg(test)]
mod tests {
    use super::*;

    static ALL_TABLES: [&SchemaTable; 8] = [
        &INTERNAL, &METRIC, &MKS, &BUILDING_METRIC,
        &MM_PER_MINUTE, &IMPERIAL_DECIMAL, &IMPERIAL_CIVIL, &FEM,
    ];

    #[test]
    fn test_internal_is_identity() {
        for rule in INTERNAL.rules {
            match &rule.scale {
                Scale::Fixed(unit) => assert_eq!(unit.factor, 1.0, "{}", unit.symbol),
                Scale::Adaptive { .. } => panic!("internal table must not adapt"),
            }
        }
        assert_eq!(INTERNAL.rules.len(), Dimension::RECOGNIZED.len());
    }

    #[test]
    fn test_every_table_covers_recognized() {
        for table in ALL_TABLES {
            for dim in Dimension::RECOGNIZED {
                assert!(table.lookup(*dim).is_some(), "missing {}", dim);
            }
            assert!(table.lookup(Dimension::LUMINOUS_FLUX).is_none());
        }
    }

    #[test]
    fn test_adaptive_steps_are_increasing() {
        for table in ALL_TABLES {
            for rule in table.rules {
                if let Scale::Adaptive { steps, .. } = &rule.scale {
                    assert!(steps.windows(2).all(|w| w[0].below < w[1].below));
                    assert_eq!(steps.last().map(|s| s.below), Some(INF));
                }
            }
        }
    }

    #[test]
    fn test_pick_bands() {
        let length = METRIC.lookup(Dimension::LENGTH).unwrap();
        assert_eq!(length.scale.pick(0.0).symbol, "mm");
        assert_eq!(length.scale.pick(0.0005).symbol, "nm");
        assert_eq!(length.scale.pick(0.05).symbol, "µm");
        assert_eq!(length.scale.pick(999.9).symbol, "mm");
        assert_eq!(length.scale.pick(1000.0).symbol, "m");
        assert_eq!(length.scale.pick(-1500.0).symbol, "m");
        assert_eq!(length.scale.pick(2.5e6).symbol, "km");
    }

    #[test]
    fn test_fallback_chain() {
        // Civil -> imperial decimal -> metric -> internal
        assert_eq!(IMPERIAL_CIVIL.lookup(Dimension::MASS).unwrap().scale.pick(1.0).symbol, "lb");
        assert_eq!(IMPERIAL_CIVIL.lookup(Dimension::FREQUENCY).unwrap().scale.pick(5e3).symbol, "kHz");
        assert_eq!(IMPERIAL_CIVIL.lookup(Dimension::AMOUNT).unwrap().scale.pick(1.0).symbol, "mol");
    }
}
