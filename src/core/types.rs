//! src/core/types.rs
//!
//! Core type definitions for base conversion
//!
//! This module defines the fundamental types used throughout the application:
//! - `Base`: a validated radix in the range 2-36, with its conventional name
//! - `DigitString`: a normalized (uppercase, alphanumeric) digit sequence
//! - `Conversion`: a completed conversion with input echo for display
//!
//! All types implement serialization so an embedding host can persist or
//! transport them, and are immutable once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while constructing a [`Base`]
#[derive(Debug, Error, PartialEq)]
pub enum BaseError {
    /// Radix outside the supported 2-36 range
    #[error("Base {0} is out of range (supported bases: 2-36)")]
    OutOfRange(u32),

    /// Input matched neither a radix nor a known base name
    #[error("Unknown base '{0}': expected a number from 2 to 36 or a name like 'hexadecimal'")]
    UnknownName(String),
}

/// Conventional English names for bases 2 through 36, in radix order
const BASE_NAMES: [&str; 35] = [
    "Binary",
    "Ternary",
    "Quaternary",
    "Quinary",
    "Senary",
    "Septenary",
    "Octal",
    "Nonary",
    "Decimal",
    "Undecimal",
    "Duodecimal",
    "Tridecimal",
    "Tetradecimal",
    "Pentadecimal",
    "Hexadecimal",
    "Heptadecimal",
    "Octodecimal",
    "Enneadecimal",
    "Vigesimal",
    "Unvigesimal",
    "Duovigesimal",
    "Trivigesimal",
    "Tetravigesimal",
    "Pentavigesimal",
    "Hexavigesimal",
    "Heptavigesimal",
    "Octovigesimal",
    "Enneavigesimal",
    "Trigesimal",
    "Untrigesimal",
    "Duotrigesimal",
    "Tritrigesimal",
    "Tetratrigesimal",
    "Pentatrigesimal",
    "Hexatrigesimal",
];

/// A positional numeral base in the inclusive range 2-36
///
/// Identifies an alphabet consisting of the first `radix` symbols of
/// "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ". Construction always validates
/// the range, so every `Base` in circulation is usable as-is; the allowed
/// digit range is derived arithmetically from the radix, never from
/// display text.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u32")]
pub struct Base(u32);

impl Base {
    /// Smallest supported radix
    pub const MIN: u32 = 2;

    /// Largest supported radix (digits 0-9 plus letters A-Z)
    pub const MAX: u32 = 36;

    /// Base ten, the canonical intermediate of every conversion
    pub const DECIMAL: Base = Base(10);

    /// Create a base from a radix, rejecting anything outside 2-36
    pub fn new(radix: u32) -> Result<Self, BaseError> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(BaseError::OutOfRange(radix))
        }
    }

    /// The radix as a plain integer
    pub fn radix(self) -> u32 {
        self.0
    }

    /// Highest digit value a character may take in this base
    pub fn max_digit(self) -> u32 {
        self.0 - 1
    }

    /// Conventional English name ("Binary", "Octal", "Hexatrigesimal", ...)
    pub fn name(self) -> &'static str {
        BASE_NAMES[(self.0 - Self::MIN) as usize]
    }

    /// Human-readable digit range, e.g. "0-7" or "0-9, A-F"
    pub fn allowed_chars(self) -> String {
        if self.0 <= 10 {
            format!("0-{}", self.max_digit())
        } else {
            // Letters start at value 10, so 'A' + (radix - 11) is the last one
            let last = char::from(b'A' + (self.0 as u8) - 11);
            format!("0-9, A-{last}")
        }
    }

    /// Whether this is base ten
    pub fn is_decimal(self) -> bool {
        self == Self::DECIMAL
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Base {
    type Error = BaseError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl FromStr for Base {
    type Err = BaseError;

    /// Accepts a radix ("16") or a base name, case-insensitively
    /// ("hexadecimal", "Binary")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(radix) = trimmed.parse::<u32>() {
                return Self::new(radix);
            }
            // Digit strings too large for u32 are still out of range
            return Err(BaseError::UnknownName(trimmed.to_string()));
        }

        BASE_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|index| Self(index as u32 + Self::MIN))
            .ok_or_else(|| BaseError::UnknownName(trimmed.to_string()))
    }
}

/// A normalized digit string
///
/// Non-empty, uppercase, alphanumeric, interpreted most-significant digit
/// first. Only the input parser and the encoder produce these, which is
/// what keeps the invariant local to the core.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DigitString(String);

impl DigitString {
    /// Callers uphold the normalization invariant (parser and encoder only)
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    /// The digits as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the digit characters, most significant first
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed conversion
///
/// Carries the normalized input and both bases alongside the result so the
/// presentation layer can display the full request without re-deriving
/// anything.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Conversion {
    /// Input as normalized by the parser (trimmed, uppercased)
    pub input: DigitString,

    /// Base the input was read under
    pub from: Base,

    /// Base the output is encoded under
    pub to: Base,

    /// The converted digit string
    pub output: DigitString,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (base {}) = {} (base {})",
            self.input, self.from, self.output, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_accepts_full_range() {
        for radix in Base::MIN..=Base::MAX {
            assert!(Base::new(radix).is_ok());
        }
    }

    #[test]
    fn test_base_rejects_out_of_range() {
        assert_eq!(Base::new(0), Err(BaseError::OutOfRange(0)));
        assert_eq!(Base::new(1), Err(BaseError::OutOfRange(1)));
        assert_eq!(Base::new(37), Err(BaseError::OutOfRange(37)));
    }

    #[test]
    fn test_base_names() {
        let binary = Base::new(2).unwrap();
        let decimal = Base::new(10).unwrap();
        let hex = Base::new(16).unwrap();
        let max = Base::new(36).unwrap();

        assert_eq!(binary.name(), "Binary");
        assert_eq!(decimal.name(), "Decimal");
        assert_eq!(hex.name(), "Hexadecimal");
        assert_eq!(max.name(), "Hexatrigesimal");
    }

    #[test]
    fn test_allowed_chars_digits_only() {
        assert_eq!(Base::new(2).unwrap().allowed_chars(), "0-1");
        assert_eq!(Base::new(8).unwrap().allowed_chars(), "0-7");
        assert_eq!(Base::new(10).unwrap().allowed_chars(), "0-9");
    }

    #[test]
    fn test_allowed_chars_with_letters() {
        assert_eq!(Base::new(11).unwrap().allowed_chars(), "0-9, A-A");
        assert_eq!(Base::new(16).unwrap().allowed_chars(), "0-9, A-F");
        assert_eq!(Base::new(36).unwrap().allowed_chars(), "0-9, A-Z");
    }

    #[test]
    fn test_base_from_radix_string() {
        assert_eq!("16".parse::<Base>(), Base::new(16));
        assert_eq!(" 2 ".parse::<Base>(), Base::new(2));
        assert_eq!("37".parse::<Base>(), Err(BaseError::OutOfRange(37)));
    }

    #[test]
    fn test_base_from_name() {
        assert_eq!("hexadecimal".parse::<Base>(), Base::new(16));
        assert_eq!("Binary".parse::<Base>(), Base::new(2));
        assert_eq!("OCTAL".parse::<Base>(), Base::new(8));
        assert_eq!(
            "hex".parse::<Base>(),
            Err(BaseError::UnknownName("hex".to_string()))
        );
    }

    #[test]
    fn test_max_digit() {
        assert_eq!(Base::new(2).unwrap().max_digit(), 1);
        assert_eq!(Base::new(36).unwrap().max_digit(), 35);
    }

    #[test]
    fn test_conversion_display() {
        let conversion = Conversion {
            input: DigitString::new_unchecked("FF".to_string()),
            from: Base::new(16).unwrap(),
            to: Base::new(10).unwrap(),
            output: DigitString::new_unchecked("255".to_string()),
        };

        assert_eq!(format!("{}", conversion), "FF (base 16) = 255 (base 10)");
    }
}
