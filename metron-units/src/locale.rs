//! Locale descriptors: culture-specific numeric formatting rules
//!
//! A descriptor is plain data. Per-call overrides never modify it; the
//! renderer resolves `FormatOptions` against a descriptor's defaults into a
//! private, call-local set of options.

use serde::{Serialize, Deserialize};
use metron_core::{MetronError, Notation, FormatOptions, Result};

/// Digits per group in the integer part.
///
/// `primary` is the group nearest the decimal separator, `secondary` every
/// group after it (`3;2` gives Indian-style `12,34,567`). A `primary` of
/// zero disables grouping for the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingRule {
    pub primary: u8,
    #[serde(default)]
    pub secondary: u8,
}

impl GroupingRule {
    pub const THOUSANDS: GroupingRule = GroupingRule { primary: 3, secondary: 3 };
    pub const INDIAN: GroupingRule = GroupingRule { primary: 3, secondary: 2 };
}

impl Default for GroupingRule {
    fn default() -> Self {
        Self::THOUSANDS
    }
}

/// Option values used when a `QuantityFormat` does not override them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleDefaults {
    pub grouping: bool,
    pub notation: Notation,
    pub force_sign: bool,
    pub trailing_zeros: bool,
    pub exponent_leading_zero: bool,
}

impl Default for LocaleDefaults {
    fn default() -> Self {
        LocaleDefaults {
            grouping: true,
            notation: Notation::Fixed,
            force_sign: false,
            trailing_zeros: true,
            exponent_leading_zero: true,
        }
    }
}

/// Numeric formatting rules of one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleDescriptor {
    pub name: String,
    pub decimal_separator: char,
    pub group_separator: char,
    pub grouping: GroupingRule,
    pub exponent_char: char,
    pub minus_sign: char,
    pub plus_sign: char,
    pub defaults: LocaleDefaults,
}

/// Options after applying per-call overrides to the locale defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedOptions {
    pub grouping: bool,
    pub notation: Notation,
    pub force_sign: bool,
    pub trailing_zeros: bool,
    pub exponent_leading_zero: bool,
}

/// Names accepted by `LocaleDescriptor::from_name`
pub const BUILTIN_LOCALES: [&str; 7] = ["c", "en-US", "en-GB", "de-DE", "fr-FR", "de-CH", "en-IN"];

impl LocaleDescriptor {
    /// The C/POSIX locale: `.` decimal point, no grouping by default
    pub fn c() -> Self {
        LocaleDescriptor {
            name: "c".to_string(),
            decimal_separator: '.',
            group_separator: ',',
            grouping: GroupingRule::THOUSANDS,
            exponent_char: 'e',
            minus_sign: '-',
            plus_sign: '+',
            defaults: LocaleDefaults { grouping: false, ..LocaleDefaults::default() },
        }
    }

    /// Build a descriptor from separators, starting from C conventions
    /// with grouping enabled.
    pub fn custom(name: &str, decimal_separator: char, group_separator: char) -> Self {
        LocaleDescriptor {
            name: name.to_string(),
            decimal_separator,
            group_separator,
            defaults: LocaleDefaults::default(),
            ..Self::c()
        }
    }

    pub fn with_grouping_rule(mut self, grouping: GroupingRule) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_defaults(mut self, defaults: LocaleDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Look up a built-in locale.
    ///
    /// Case-insensitive; `_` and `-` are interchangeable, and `posix` or an
    /// empty name mean the C locale.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        let locale = match key.as_str() {
            "" | "c" | "posix" => Self::c(),
            "en-us" => Self::custom("en-US", '.', ','),
            "en-gb" => Self::custom("en-GB", '.', ','),
            "de-de" => Self::custom("de-DE", ',', '.'),
            "fr-fr" => Self::custom("fr-FR", ',', '\u{202F}'),
            "de-ch" => Self::custom("de-CH", '.', '\u{2019}'),
            "en-in" => Self::custom("en-IN", '.', ',').with_grouping_rule(GroupingRule::INDIAN),
            _ => return Err(MetronError::UnknownLocale(name.to_string())),
        };
        Ok(locale)
    }

    pub(crate) fn resolve(&self, options: &FormatOptions) -> ResolvedOptions {
        let defaults = &self.defaults;
        let notation = options.notation.unwrap_or(defaults.notation);
        ResolvedOptions {
            grouping: options.grouping.unwrap_or(defaults.grouping),
            notation,
            force_sign: options.force_sign.unwrap_or(defaults.force_sign),
            // Significant-digit output drops trailing zeros unless asked not to
            trailing_zeros: match notation {
                Notation::Auto => options.trailing_zeros.unwrap_or(false),
                _ => options.trailing_zeros.unwrap_or(defaults.trailing_zeros),
            },
            exponent_leading_zero: options.exponent_leading_zero
                .unwrap_or(defaults.exponent_leading_zero),
        }
    }
}

impl Default for LocaleDescriptor {
    fn default() -> Self {
        Self::c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        for name in BUILTIN_LOCALES {
            let locale = LocaleDescriptor::from_name(name).unwrap();
            assert_eq!(locale.name, name);
        }
        assert_eq!(LocaleDescriptor::from_name("de_de").unwrap().decimal_separator, ',');
        assert_eq!(LocaleDescriptor::from_name("POSIX").unwrap(), LocaleDescriptor::c());
        assert_eq!(LocaleDescriptor::from_name("en-IN").unwrap().grouping, GroupingRule::INDIAN);
    }

    #[test]
    fn test_unknown_locale() {
        let err = LocaleDescriptor::from_name("tlh-KL").unwrap_err();
        assert_eq!(err, MetronError::UnknownLocale("tlh-KL".to_string()));
    }

    #[test]
    fn test_resolve_inherits() {
        let locale = LocaleDescriptor::c();
        let resolved = locale.resolve(&FormatOptions::INHERIT);
        assert!(!resolved.grouping);
        assert_eq!(resolved.notation, Notation::Fixed);
        assert!(resolved.trailing_zeros);
    }

    #[test]
    fn test_resolve_overrides_without_mutating() {
        let locale = LocaleDescriptor::c();
        let before = locale.clone();
        let options = FormatOptions { grouping: Some(true), force_sign: Some(true), ..FormatOptions::INHERIT };
        let resolved = locale.resolve(&options);
        assert!(resolved.grouping);
        assert!(resolved.force_sign);
        assert_eq!(locale, before);
    }

    #[test]
    fn test_auto_notation_drops_trailing_zeros_by_default() {
        let locale = LocaleDescriptor::c();
        let auto = FormatOptions { notation: Some(Notation::Auto), ..FormatOptions::INHERIT };
        assert!(!locale.resolve(&auto).trailing_zeros);
        let keep = FormatOptions { trailing_zeros: Some(true), ..auto };
        assert!(locale.resolve(&keep).trailing_zeros);
    }

    #[test]
    fn test_partial_json_descriptor() {
        let locale: LocaleDescriptor = serde_json::from_str(
            r#"{"name": "sv-SE", "decimal_separator": ",", "group_separator": " "}"#,
        ).unwrap();
        assert_eq!(locale.decimal_separator, ',');
        assert_eq!(locale.group_separator, ' ');
        assert_eq!(locale.grouping, GroupingRule::THOUSANDS);
        assert_eq!(locale.minus_sign, '-');
    }
}
