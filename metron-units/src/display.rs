//! Quantity to text, end to end

use metron_core::{Quantity, Result};
use crate::locale::LocaleDescriptor;
use crate::schema::{Translation, UnitSchema};
use crate::settings::{self, DisplaySettings};

/// Render a quantity with the active settings
pub fn display(quantity: &Quantity) -> Result<String> {
    display_with(quantity, &settings::current())
}

/// Render a quantity with an explicit settings snapshot
pub fn display_with(quantity: &Quantity, settings: &DisplaySettings) -> Result<String> {
    settings.schema.display(quantity, &settings.locale, settings.default_format)
}

/// Translation chosen by the active schema
pub fn translate(quantity: &Quantity) -> Result<Translation> {
    settings::current().schema.translate(quantity)
}

/// One-off rendering in a given schema and locale, with the default format
pub fn display_in(quantity: &Quantity, schema: UnitSchema, locale: &LocaleDescriptor) -> Result<String> {
    display_with(quantity, &DisplaySettings::new(schema, locale.clone()))
}
