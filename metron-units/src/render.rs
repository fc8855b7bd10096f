//! Locale-aware number rendering
//!
//! Digits are produced by Rust's float formatting, which rounds the exact
//! binary value half-to-even, then decorated with the locale's signs,
//! separators and exponent style.

use metron_core::{Notation, QuantityFormat};
use crate::locale::{GroupingRule, LocaleDescriptor, ResolvedOptions};

/// Largest precision honoured; larger requests are clamped.
///
/// An `f64` holds at most 17 significant decimal digits.
pub const MAX_PRECISION: u32 = 20;

/// Unsigned ASCII digits of a rounded number, before localization
struct Digits {
    integer: String,
    fraction: String,
    exponent: Option<i32>,
}

impl Digits {
    fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }
}

/// Render `value` with `format` in `locale`, without a unit.
///
/// `value` must be finite.
pub fn format_number(value: f64, format: &QuantityFormat, locale: &LocaleDescriptor) -> String {
    let options = locale.resolve(&format.options);
    let mut digits = layout(value.abs(), format.precision, options.notation);

    if !options.trailing_zeros {
        let kept = digits.fraction.trim_end_matches('0').len();
        digits.fraction.truncate(kept);
    }

    let mut out = String::new();
    if value.is_sign_negative() && !digits.is_zero() {
        out.push(locale.minus_sign);
    } else if options.force_sign {
        out.push(locale.plus_sign);
    }

    if options.grouping {
        out.push_str(&group(&digits.integer, locale.grouping, locale.group_separator));
    } else {
        out.push_str(&digits.integer);
    }

    if !digits.fraction.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(&digits.fraction);
    }

    if let Some(exp) = digits.exponent {
        push_exponent(&mut out, exp, &options, locale);
    }

    out
}

/// Render a scaled value followed by its unit symbol: `"12.70 mm"`.
///
/// The separating space is always written, so a dimensionless quantity
/// (empty symbol) ends in a space: `"0.50 "`.
pub fn to_locale(value: f64, format: &QuantityFormat, symbol: &str, locale: &LocaleDescriptor) -> String {
    format!("{} {}", format_number(value, format, locale), symbol)
}

fn layout(magnitude: f64, precision: u32, notation: Notation) -> Digits {
    let precision = precision.min(MAX_PRECISION) as usize;
    match notation {
        Notation::Fixed => fixed(magnitude, precision),
        Notation::Scientific => scientific(magnitude, precision),
        Notation::Auto => {
            let significant = precision.max(1);
            let sci = scientific(magnitude, significant - 1);
            // Decide on the exponent after rounding, so 9.9996 at 4 digits is 10.00
            let exp = sci.exponent.unwrap_or(0);
            if exp < -4 || exp >= significant as i32 {
                sci
            } else {
                fixed(magnitude, (significant as i32 - 1 - exp) as usize)
            }
        }
    }
}

fn fixed(magnitude: f64, places: usize) -> Digits {
    let text = format!("{:.*}", places, magnitude);
    let (integer, fraction) = split_point(&text);
    Digits { integer, fraction, exponent: None }
}

fn scientific(magnitude: f64, places: usize) -> Digits {
    let text = format!("{:.*e}", places, magnitude);
    let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (integer, fraction) = split_point(mantissa);
    Digits {
        integer,
        fraction,
        exponent: Some(exp.parse().unwrap_or(0)),
    }
}

fn split_point(text: &str) -> (String, String) {
    match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (text.to_string(), String::new()),
    }
}

fn group(integer: &str, rule: GroupingRule, separator: char) -> String {
    let primary = rule.primary as usize;
    if primary == 0 || integer.len() <= primary {
        return integer.to_string();
    }
    let secondary = match rule.secondary {
        0 => primary,
        n => n as usize,
    };

    // Digits are ASCII, so byte offsets are char offsets
    let (mut rest, tail) = integer.split_at(integer.len() - primary);
    let mut groups = vec![tail];
    while rest.len() > secondary {
        let (head, chunk) = rest.split_at(rest.len() - secondary);
        groups.push(chunk);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();

    let mut out = String::with_capacity(integer.len() + groups.len());
    for (i, chunk) in groups.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(chunk);
    }
    out
}

fn push_exponent(out: &mut String, exp: i32, options: &ResolvedOptions, locale: &LocaleDescriptor) {
    out.push(locale.exponent_char);
    out.push(if exp < 0 { locale.minus_sign } else { locale.plus_sign });
    let width = if options.exponent_leading_zero { 2 } else { 1 };
    out.push_str(&format!("{:0width$}", exp.unsigned_abs(), width = width));
}
