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

//! Digit-range validation against a source base
//!
//! A digit string that parsed cleanly may still be illegal for the base it
//! claims to be written in ("G" is alphanumeric but means nothing in base
//! 16). This module performs that check, failing fast on the first
//! offending character. The error carries the character, the base, and the
//! base's allowed digit range so the presentation layer can render a
//! precise message without re-deriving anything.

use thiserror::Error;

use crate::core::codec;
use crate::core::types::{Base, DigitString};

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A character's digit value is not strictly below the declared base
    #[error("Invalid character '{ch}' for base {base} (allowed: {allowed})")]
    DigitOutOfRange {
        /// The offending character
        ch: char,
        /// The declared source base
        base: Base,
        /// Human-readable allowed digit range for that base
        allowed: String,
    },
}

impl ValidationError {
    /// Shared constructor so the decoder reports identical errors
    pub(crate) fn digit_out_of_range(ch: char, base: Base) -> Self {
        Self::DigitOutOfRange {
            ch,
            base,
            allowed: base.allowed_chars(),
        }
    }
}

/// Checks every digit value against the claimed source base
///
/// Side-effect-free. Fails fast on the first character whose digit value is
/// not strictly below the base, matching the single-error contract the
/// presentation layer expects.
pub fn validate_for_base(digits: &DigitString, base: Base) -> Result<(), ValidationError> {
    for ch in digits.chars() {
        match codec::char_to_value(ch) {
            Some(value) if value < base.radix() => {}
            _ => return Err(ValidationError::digit_out_of_range(ch, base)),
        }
    }

    Ok(())
}
