//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as an 8-element vector:
//! [length, mass, time, current, temperature, amount, luminous intensity, angle]
//!
//! Angle is carried as its own base dimension so that plane angles and
//! solid angles (steradian = angle^2) stay distinguishable from plain numbers.

use std::fmt;
use std::ops::{Div, Mul};
use serde::{Serialize, Deserialize};

/// Number of base dimensions
pub const BASE_COUNT: usize = 8;

/// Dimension indices for the 8 base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOUS_INTENSITY: usize = 6;
pub const ANGLE: usize = 7;

/// Represents the dimensions of a physical quantity
/// as exponents of the 8 base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminous intensity, angle]
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 0] };

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0, 0] };

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0, 0] };

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0, 0] };

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0, 0] };

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0, 0] };

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0, 0] };

    /// Luminous intensity dimension [J]
    pub const LUMINOUS_INTENSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1, 0] };

    /// Plane angle [A]
    pub const ANGLE: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 1] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0, 0] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0, 0] };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0, 0] };

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension { exponents: [1, 0, -2, 0, 0, 0, 0, 0] };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2, 0, 0, 0, 0, 0] };

    /// Pressure and stress [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0, 0] };

    /// Energy and work [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0, 0] };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension { exponents: [2, 1, -3, 0, 0, 0, 0, 0] };

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 0] };

    /// Density [M L^-3]
    pub const DENSITY: Dimension = Dimension { exponents: [-3, 1, 0, 0, 0, 0, 0, 0] };

    /// Electric potential [M L^2 T^-3 I^-1]
    pub const ELECTRIC_POTENTIAL: Dimension = Dimension { exponents: [2, 1, -3, -1, 0, 0, 0, 0] };

    /// Electric charge [I T]
    pub const ELECTRIC_CHARGE: Dimension = Dimension { exponents: [0, 0, 1, 1, 0, 0, 0, 0] };

    /// Electrical resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension { exponents: [2, 1, -3, -2, 0, 0, 0, 0] };

    /// Luminous flux [J A^2] (candela times steradian)
    pub const LUMINOUS_FLUX: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1, 2] };

    /// Every dimension the shipped unit schemas are able to display.
    pub const RECOGNIZED: &'static [Dimension] = &[
        Dimension::DIMENSIONLESS,
        Dimension::LENGTH,
        Dimension::AREA,
        Dimension::VOLUME,
        Dimension::ANGLE,
        Dimension::MASS,
        Dimension::TIME,
        Dimension::CURRENT,
        Dimension::TEMPERATURE,
        Dimension::AMOUNT,
        Dimension::LUMINOUS_INTENSITY,
        Dimension::VELOCITY,
        Dimension::ACCELERATION,
        Dimension::FORCE,
        Dimension::PRESSURE,
        Dimension::ENERGY,
        Dimension::POWER,
        Dimension::FREQUENCY,
        Dimension::DENSITY,
        Dimension::ELECTRIC_POTENTIAL,
        Dimension::ELECTRIC_CHARGE,
        Dimension::RESISTANCE,
    ];

    /// Create a new dimension from exponents
    pub const fn new(exponents: [i32; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, i32::saturating_add)
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, i32::saturating_sub)
    }

    /// Raise to integer power (multiply exponents)
    ///
    /// Exponent arithmetic saturates at the `i32` bounds.
    pub fn power(&self, exp: i32) -> Dimension {
        Dimension { exponents: self.exponents.map(|e| e.saturating_mul(exp)) }
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }

    /// Get the dimension name if it matches a named dimension
    pub fn name(&self) -> Option<&'static str> {
        NAMED.iter()
            .find(|(dim, _)| dim == self)
            .map(|(_, name)| *name)
    }

    /// Look up a named dimension ("length", "pressure", ...)
    ///
    /// Matching ignores case and treats spaces and dashes like underscores,
    /// so "Luminous Flux" and "luminous-flux" both resolve.
    pub fn from_name(name: &str) -> Option<Dimension> {
        let key = name.trim().to_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        NAMED.iter()
            .find(|(_, n)| *n == key)
            .map(|(dim, _)| *dim)
    }

    fn zip_with(&self, other: &Dimension, op: impl Fn(i32, i32) -> i32) -> Dimension {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = op(self.exponents[i], other.exponents[i]);
        }
        Dimension { exponents: result }
    }
}

static NAMED: [(Dimension, &str); 23] = [
    (Dimension::DIMENSIONLESS, "dimensionless"),
    (Dimension::LENGTH, "length"),
    (Dimension::AREA, "area"),
    (Dimension::VOLUME, "volume"),
    (Dimension::ANGLE, "angle"),
    (Dimension::MASS, "mass"),
    (Dimension::TIME, "time"),
    (Dimension::CURRENT, "current"),
    (Dimension::TEMPERATURE, "temperature"),
    (Dimension::AMOUNT, "amount"),
    (Dimension::LUMINOUS_INTENSITY, "luminous_intensity"),
    (Dimension::VELOCITY, "velocity"),
    (Dimension::ACCELERATION, "acceleration"),
    (Dimension::FORCE, "force"),
    (Dimension::PRESSURE, "pressure"),
    (Dimension::ENERGY, "energy"),
    (Dimension::POWER, "power"),
    (Dimension::FREQUENCY, "frequency"),
    (Dimension::DENSITY, "density"),
    (Dimension::ELECTRIC_POTENTIAL, "electric_potential"),
    (Dimension::ELECTRIC_CHARGE, "electric_charge"),
    (Dimension::RESISTANCE, "resistance"),
    (Dimension::LUMINOUS_FLUX, "luminous_flux"),
];

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "A"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
