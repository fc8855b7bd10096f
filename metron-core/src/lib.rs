//! Metron Core - Fundamental types
//!
//! This crate provides the value types shared by every Metron crate:
//! - `Dimension`: exponent vector over the 8 base dimensions
//! - `Quantity`: a finite magnitude in internal units plus its dimension
//! - `QuantityFormat`: precision and locale overrides for rendering
//! - `MetronError`: structured errors with stable codes

mod dimension;
mod quantity;
mod format;
mod error;

pub use dimension::{Dimension, BASE_COUNT};
pub use quantity::Quantity;
pub use format::{QuantityFormat, FormatOptions, Notation, DEFAULT_PRECISION};
pub use error::{MetronError, Result, codes};

/// Dimension indices into `Dimension::exponents`
pub mod base {
    pub use crate::dimension::{
        LENGTH, MASS, TIME, CURRENT, TEMPERATURE, AMOUNT, LUMINOUS_INTENSITY, ANGLE,
    };
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, Quantity, QuantityFormat, FormatOptions, Notation, MetronError};
}
