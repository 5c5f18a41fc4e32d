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

//! Parser module tests
//!
//! Tests for raw input normalization:
//! - Empty and whitespace-only rejection
//! - Case normalization
//! - Well-formedness (ASCII alphanumeric only)

use crate::core::parser::{parse_digit_string, ParseError};

#[test]
fn test_accepts_plain_digits() {
    let digits = parse_digit_string("255").unwrap();
    assert_eq!(digits.as_str(), "255");
}

#[test]
fn test_uppercases_input() {
    let digits = parse_digit_string("ff").unwrap();
    assert_eq!(digits.as_str(), "FF");

    let digits = parse_digit_string("dEaDbEeF").unwrap();
    assert_eq!(digits.as_str(), "DEADBEEF");
}

#[test]
fn test_trims_surrounding_whitespace() {
    let digits = parse_digit_string("  1010  ").unwrap();
    assert_eq!(digits.as_str(), "1010");

    let digits = parse_digit_string("\tZ\n").unwrap();
    assert_eq!(digits.as_str(), "Z");
}

#[test]
fn test_rejects_empty_input() {
    assert_eq!(parse_digit_string(""), Err(ParseError::EmptyInput));
}

#[test]
fn test_rejects_whitespace_only_input() {
    assert_eq!(parse_digit_string("   "), Err(ParseError::EmptyInput));
    assert_eq!(parse_digit_string("\t\n"), Err(ParseError::EmptyInput));
}

#[test]
fn test_rejects_interior_whitespace() {
    assert_eq!(
        parse_digit_string("12 34"),
        Err(ParseError::NotAlphanumeric("12 34".to_string()))
    );
}

#[test]
fn test_rejects_punctuation() {
    assert!(matches!(
        parse_digit_string("FF!"),
        Err(ParseError::NotAlphanumeric(_))
    ));
    assert!(matches!(
        parse_digit_string("-255"),
        Err(ParseError::NotAlphanumeric(_))
    ));
    assert!(matches!(
        parse_digit_string("1.5"),
        Err(ParseError::NotAlphanumeric(_))
    ));
}

#[test]
fn test_rejects_non_ascii_digits() {
    // Digit symbols from other scripts are out of scope
    assert!(matches!(
        parse_digit_string("٣٢"),
        Err(ParseError::NotAlphanumeric(_))
    ));
}

#[test]
fn test_error_carries_normalized_input() {
    assert_eq!(
        parse_digit_string("f f"),
        Err(ParseError::NotAlphanumeric("F F".to_string()))
    );
}
