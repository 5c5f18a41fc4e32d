// Copyright 2025 Daniel Glover (dtechish@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/convert.rs
//!
//! Decoder, encoder, and the conversion orchestrator
//!
//! Every conversion passes through an unbounded decimal intermediate:
//! the decoder folds a digit string into a `BigUint`, the encoder expands
//! a `BigUint` back into digits, and `convert` sequences normalization,
//! validation, and the two codecs for a complete request. Arbitrary
//! precision is non-negotiable here: base-36 strings of modest length
//! overflow any fixed-width integer.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

use crate::core::codec;
use crate::core::parser::{self, ParseError};
use crate::core::types::{Base, Conversion, DigitString};
use crate::core::validator::{self, ValidationError};

/// Errors that can occur during a conversion request
///
/// Aggregates the stage-specific errors so callers get a single result
/// type; each variant still exposes the underlying structured error for
/// rendering.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// Input failed normalization or well-formedness
    #[error("Invalid input: {0}")]
    Parse(#[from] ParseError),

    /// A digit is out of range for the source base
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Folds a digit string, most significant digit first, into its magnitude
///
/// Classic positional fold: `acc = acc * base + digit`. Leading zeros
/// contribute zero terms and need no stripping. Input is expected to have
/// passed [`validator::validate_for_base`] already, but every digit is
/// still range-checked so an unvalidated call fails with the same typed
/// error instead of computing garbage.
pub fn decode(digits: &DigitString, base: Base) -> Result<BigUint, ValidationError> {
    let mut value = BigUint::zero();

    for ch in digits.chars() {
        match codec::char_to_value(ch) {
            Some(digit) if digit < base.radix() => {
                value = value * base.radix() + digit;
            }
            _ => return Err(ValidationError::digit_out_of_range(ch, base)),
        }
    }

    Ok(value)
}

/// Expands a magnitude into a digit string under the target base
///
/// Zero encodes as "0"; every other result carries no leading zeros. The
/// radix expansion itself (repeated division, most significant digit
/// first) comes from `BigUint`, leaving only the alphabet mapping here.
pub fn encode(value: &BigUint, base: Base) -> DigitString {
    let digits = value.to_radix_be(base.radix());

    let mut out = String::with_capacity(digits.len());
    for digit in digits {
        // to_radix_be only yields values below the radix, so the lookup
        // cannot miss
        out.extend(codec::value_to_char(u32::from(digit)));
    }

    DigitString::new_unchecked(out)
}

/// Runs one conversion request end to end
///
/// Steps, each short-circuiting on failure:
/// 1. Normalize and well-formedness-check the raw input
/// 2. Validate every digit against the source base
/// 3. Decode to the decimal intermediate (under base 10 this fold *is* the
///    decimal parse, so a decimal source needs no separate arm)
/// 4. Encode under the target base, or render the intermediate directly
///    when the target is decimal
///
/// The returned [`Conversion`] echoes the normalized input and both bases
/// for display; rendering is entirely the caller's concern.
pub fn convert(input: &str, from: Base, to: Base) -> Result<Conversion, ConvertError> {
    let digits = parser::parse_digit_string(input)?;
    validator::validate_for_base(&digits, from)?;

    let value = decode(&digits, from)?;
    let output = if to.is_decimal() {
        DigitString::new_unchecked(value.to_string())
    } else {
        encode(&value, to)
    };

    Ok(Conversion {
        input: digits,
        from,
        to,
        output,
    })
}
