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

//! Number Base Converter
//!
//! Converts textual representations of non-negative integers between any
//! two positional numeral bases from 2 to 36, with arbitrary-precision
//! magnitudes and precise, structured validation errors.
//!
//! # Features
//!
//! - **Any base pair:** All 35 bases from binary to hexatrigesimal
//! - **Unbounded magnitudes:** `BigUint` intermediates, no overflow at any
//!   input length
//! - **Structured errors:** The offending character, the base, and its
//!   allowed digit range, ready for rendering
//! - **Case-insensitive input:** "ff", "FF", and "  fF " all convert alike
//! - **Pure core:** No I/O, no shared state, safe to call concurrently
//!
//! # Architecture
//!
//! - **`core`:** The whole conversion pipeline (types, codec, parser,
//!   validator, decode/encode, orchestrator)
//! - **`main.rs`:** A thin CLI shell that renders results and errors;
//!   nothing in the library formats user-facing text
//!
//! # Examples
//!
//! ## Converting between bases
//!
//! ```
//! use base_converter::core::{convert, Base};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hex = Base::new(16)?;
//! let binary = Base::new(2)?;
//!
//! let conversion = convert("FF", hex, binary)?;
//! assert_eq!(conversion.output.as_str(), "11111111");
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling a validation failure
//!
//! ```
//! use base_converter::core::{convert, Base, ConvertError, ValidationError};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = convert("G", Base::new(16)?, Base::new(10)?);
//!
//! match result {
//!     Err(ConvertError::Validation(ValidationError::DigitOutOfRange {
//!         ch, base, allowed,
//!     })) => {
//!         assert_eq!(ch, 'G');
//!         assert_eq!(base.radix(), 16);
//!         assert_eq!(allowed, "0-9, A-F");
//!     }
//!     other => panic!("expected a validation error, got {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{convert, Base, BaseError, Conversion, ConvertError, DigitString};
