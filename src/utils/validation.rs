//! Input validation primitives.
//!
//! - Word-token checks shared by names and actions
//! - Comma-list splitting
//! - Non-empty string requirements

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

// ASCII word class, matching `\w` in the generated target language.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// True when `value` is one or more ASCII letters, digits or underscores.
pub fn is_word(value: &str) -> bool {
    WORD_PATTERN.is_match(value)
}

/// Split a comma-separated option value into raw tokens.
///
/// An empty value yields no tokens. Empty segments (`"a,,b"`, `"a,"`) are kept
/// so validation can reject them.
pub fn split_comma_list(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').collect()
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}
