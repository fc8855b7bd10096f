//! Quantity type - a magnitude tagged with a dimension
//!
//! Magnitudes are always stored in the internal unit system
//! (millimeter, kilogram, second, ampere, kelvin, mole, candela, degree).
//! Choosing what the user sees is the job of a unit schema.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{Dimension, QuantityFormat};

/// A physical quantity: a value in internal units with its dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<QuantityFormat>,
}

impl Quantity {
    /// Create a new quantity.
    ///
    /// The value should be finite; NaN and infinities are rejected with
    /// `InvalidMagnitude` when the quantity is translated or displayed.
    pub fn new(value: f64, dimension: Dimension) -> Self {
        Quantity { value, dimension, format: None }
    }

    /// Create a dimensionless quantity (pure number)
    pub fn dimensionless(value: f64) -> Self {
        Quantity::new(value, Dimension::DIMENSIONLESS)
    }

    /// Length in millimeters
    pub fn length(mm: f64) -> Self {
        Quantity::new(mm, Dimension::LENGTH)
    }

    /// Mass in kilograms
    pub fn mass(kg: f64) -> Self {
        Quantity::new(kg, Dimension::MASS)
    }

    /// Plane angle in degrees
    pub fn angle(degrees: f64) -> Self {
        Quantity::new(degrees, Dimension::ANGLE)
    }

    /// The value in internal units
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Explicit display format, if one was attached
    pub fn format(&self) -> Option<QuantityFormat> {
        self.format
    }

    /// Copy with a different value
    pub fn with_value(&self, value: f64) -> Quantity {
        Quantity::new(value, self.dimension).with_format_opt(self.format)
    }

    /// Copy with an explicit display format
    pub fn with_format(&self, format: QuantityFormat) -> Quantity {
        self.with_format_opt(Some(format))
    }

    /// Copy with the display format cleared (use configured defaults)
    pub fn without_format(&self) -> Quantity {
        self.with_format_opt(None)
    }

    fn with_format_opt(&self, format: Option<QuantityFormat>) -> Quantity {
        Quantity { format, ..*self }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Check if two quantities have the same dimension
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.dimension == other.dimension
    }

    /// Multiply by a plain number
    pub fn scale(&self, factor: f64) -> Quantity {
        self.with_value(self.value * factor)
    }

    /// Multiply two quantities (dimensions are multiplied)
    pub fn mul(&self, other: &Quantity) -> Quantity {
        Quantity::new(self.value * other.value, self.dimension.multiply(&other.dimension))
            .with_format_opt(self.format)
    }

    /// Divide two quantities (dimensions are divided)
    pub fn div(&self, other: &Quantity) -> Quantity {
        Quantity::new(self.value / other.value, self.dimension.divide(&other.dimension))
            .with_format_opt(self.format)
    }

    /// Raise quantity to an integer power
    pub fn pow(&self, exp: i32) -> Quantity {
        Quantity::new(self.value.powi(exp), self.dimension.power(exp))
            .with_format_opt(self.format)
    }
}

impl fmt::Display for Quantity {
    /// Raw internal representation, e.g. `12.7 [L]`. User-facing text goes
    /// through a unit schema instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value, self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_creation() {
        let q = Quantity::length(12.7);
        assert_eq!(q.value(), 12.7);
        assert_eq!(q.dimension(), Dimension::LENGTH);
        assert_eq!(q.format(), None);
    }

    #[test]
    fn test_dimensionless() {
        let q = Quantity::dimensionless(42.0);
        assert!(q.is_dimensionless());
    }

    #[test]
    fn test_edits_produce_new_values() {
        let q = Quantity::length(5.0);
        let formatted = q.with_format(QuantityFormat::new(4));
        assert_eq!(q.format(), None);
        assert_eq!(formatted.format(), Some(QuantityFormat::new(4)));

        let moved = formatted.with_value(7.0);
        assert_eq!(moved.value(), 7.0);
        assert_eq!(moved.format(), Some(QuantityFormat::new(4)));
        assert_eq!(moved.without_format().format(), None);
    }

    #[test]
    fn test_mul() {
        let length = Quantity::length(5.0);
        let width = Quantity::length(3.0);
        let area = length.mul(&width);

        assert_eq!(area.value(), 15.0);
        assert_eq!(area.dimension(), Dimension::AREA);
    }

    #[test]
    fn test_div() {
        let distance = Quantity::length(100.0);
        let time = Quantity::new(10.0, Dimension::TIME);
        let velocity = distance.div(&time);

        assert_eq!(velocity.value(), 10.0);
        assert_eq!(velocity.dimension(), Dimension::VELOCITY);
    }

    #[test]
    fn test_pow() {
        let volume = Quantity::length(5.0).pow(3);
        assert_eq!(volume.value(), 125.0);
        assert_eq!(volume.dimension(), Dimension::VOLUME);
    }

    #[test]
    fn test_pow_extreme_exponent() {
        let q = Quantity::length(1.0).pow(i32::MAX);
        assert_eq!(q.value(), 1.0);
        assert_eq!(q.dimension().exponents[0], i32::MAX);
    }

    #[test]
    fn test_compatible() {
        assert!(Quantity::length(1.0).is_compatible(&Quantity::length(2.0)));
        assert!(!Quantity::length(1.0).is_compatible(&Quantity::mass(1.0)));
        assert_eq!(Quantity::mass(2.0).scale(1.5).value(), 3.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Quantity::length(12.5)), "12.5 [L]");
    }

    #[test]
    fn test_json() {
        let q: Quantity = serde_json::from_str(
            r#"{"value": 12.7, "dimension": [1,0,0,0,0,0,0,0]}"#,
        ).unwrap();
        assert_eq!(q, Quantity::length(12.7));
    }
}
