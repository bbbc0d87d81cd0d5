//! Grade-level types and rules.
//!
//! This module contains the pieces a record is derived from:
//! - `LetterGrade` - letter grades (A, B, C, D, F)
//! - `PassStatus` - pass/fail outcome and honor roll rule
//! - `GradeSelector` - index-or-value deletion target
//! - Grade validation and parsing helpers

mod letter;
mod selector;
mod status;
mod value;

pub use letter::*;
pub use selector::*;
pub use status::*;
pub use value::*;
