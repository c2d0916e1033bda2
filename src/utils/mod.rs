//! Generic utility primitives with zero domain knowledge.
//!
//! - `case` - Identifier case conversion
//! - `io` - File I/O with consistent error handling
//! - `template` - String template rendering
//! - `validation` - Input validation helpers

pub mod case;
pub mod io;
pub(crate) mod template;
pub mod validation;
