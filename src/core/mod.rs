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

//! src/core/mod.rs
//!
//! Core conversion logic
//!
//! This module contains the complete base-conversion pipeline:
//! - Type definitions for bases, digit strings, and conversion results
//! - The shared digit alphabet codec
//! - Input normalization and well-formedness parsing
//! - Per-digit validation against a source base
//! - Decoding, encoding, and the conversion orchestrator
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! blocking. Each conversion request is independent, so concurrent calls
//! from an embedding host are safe without locking. All rendering concerns
//! live with the caller.

pub mod codec;
pub mod convert;
pub mod parser;
pub mod types;
pub mod validator;

pub use convert::{convert, decode, encode, ConvertError};
pub use parser::{parse_digit_string, ParseError};
pub use types::*;
pub use validator::{validate_for_base, ValidationError};

#[cfg(test)]
mod tests;
