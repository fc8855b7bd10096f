//! Numeric rendering preferences attached to a quantity

use serde::{Serialize, Deserialize};

/// Default number of digits after the decimal point
pub const DEFAULT_PRECISION: u32 = 2;

/// How a number is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Fixed-point: `precision` digits after the decimal point
    Fixed,
    /// Scientific: mantissa with `precision` fractional digits and an exponent
    Scientific,
    /// `precision` significant digits, scientific only for very large or small values
    Auto,
}

/// Explicit per-call overrides of the locale's numeric defaults.
///
/// Every field is a tri-state: `None` inherits whatever the locale
/// descriptor says, `Some(_)` overrides it for a single rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Insert group separators into the integer part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<bool>,

    /// Fixed, scientific or automatic layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<Notation>,

    /// Prefix non-negative values with a plus sign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_sign: Option<bool>,

    /// Keep trailing zeros in the fractional part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_zeros: Option<bool>,

    /// Pad exponents to at least two digits (`e+04` rather than `e+4`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponent_leading_zero: Option<bool>,
}

impl FormatOptions {
    /// No overrides: defer everything to the locale
    pub const INHERIT: FormatOptions = FormatOptions {
        grouping: None,
        notation: None,
        force_sign: None,
        trailing_zeros: None,
        exponent_leading_zero: None,
    };

    /// True when no field overrides the locale
    pub fn is_inherit(&self) -> bool {
        *self == Self::INHERIT
    }
}

/// Precision plus option overrides used to render a quantity's number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantityFormat {
    /// Fractional digits (fixed, scientific) or significant digits (auto)
    pub precision: u32,
    /// Overrides of the locale's defaults
    #[serde(default, skip_serializing_if = "FormatOptions::is_inherit")]
    pub options: FormatOptions,
}

impl QuantityFormat {
    pub const fn new(precision: u32) -> Self {
        QuantityFormat { precision, options: FormatOptions::INHERIT }
    }

    /// Fixed-point notation regardless of the locale default
    pub fn fixed(precision: u32) -> Self {
        Self::new(precision).with_notation(Notation::Fixed)
    }

    /// Scientific notation regardless of the locale default
    pub fn scientific(precision: u32) -> Self {
        Self::new(precision).with_notation(Notation::Scientific)
    }

    /// Significant-digit notation regardless of the locale default
    pub fn auto(precision: u32) -> Self {
        Self::new(precision).with_notation(Notation::Auto)
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.options.notation = Some(notation);
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.options.grouping = Some(grouping);
        self
    }

    pub fn with_force_sign(mut self, force_sign: bool) -> Self {
        self.options.force_sign = Some(force_sign);
        self
    }

    pub fn with_trailing_zeros(mut self, keep: bool) -> Self {
        self.options.trailing_zeros = Some(keep);
        self
    }

    pub fn with_exponent_leading_zero(mut self, pad: bool) -> Self {
        self.options.exponent_leading_zero = Some(pad);
        self
    }
}

impl Default for QuantityFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
