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

//! src/core/parser.rs
//!
//! Raw input normalization and well-formedness
//!
//! This module turns raw user text into a [`DigitString`]:
//! - Trims surrounding whitespace
//! - Uppercases (digit strings are case-insensitive on input)
//! - Checks the result is non-empty and entirely ASCII alphanumeric
//!
//! The parser only structures text; whether the digits actually fit the
//! claimed source base is checked afterwards in validator.rs.

use nom::{bytes::complete::take_while1, combinator::all_consuming, IResult, Parser};
use thiserror::Error;

use crate::core::types::DigitString;

/// Errors produced while normalizing raw input
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// Input was empty after trimming
    #[error("Input is empty")]
    EmptyInput,

    /// Input contains a character outside 0-9/A-Z after normalization
    #[error("Input '{0}' is not alphanumeric")]
    NotAlphanumeric(String),
}

/// Recognizes a run of ASCII alphanumeric characters spanning the whole input
fn well_formed(input: &str) -> IResult<&str, &str> {
    all_consuming(take_while1(|c: char| c.is_ascii_alphanumeric())).parse(input)
}

/// Normalize raw user text into a digit string
///
/// This is the only constructor of [`DigitString`] from the outside world,
/// so everything downstream can assume trimmed, uppercase, alphanumeric
/// input.
///
/// # Example
/// ```ignore
/// let digits = parse_digit_string("  ff ")?;
/// assert_eq!(digits.as_str(), "FF");
/// ```
pub fn parse_digit_string(input: &str) -> Result<DigitString, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized = trimmed.to_uppercase();
    if well_formed(&normalized).is_err() {
        return Err(ParseError::NotAlphanumeric(normalized));
    }

    Ok(DigitString::new_unchecked(normalized))
}
