//! Identifier case conversion.
//!
//! Both conversions keep existing capitals: `snake_case` splits before every
//! uppercase letter and `studly_case` only raises the first letter of each
//! word, so `showAPI` -> `show_a_p_i` -> `ShowAPI`.

/// Lowercase `value`, inserting `_` before every uppercase letter that is not
/// the first character.
pub fn snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);

    for (i, ch) in value.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

/// Uppercase the first letter of each `_`/`-` separated word and drop the
/// separators. Letters inside a word are left as written.
pub fn studly_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;

    for ch in value.chars() {
        match ch {
            '_' | '-' => word_start = true,
            _ if word_start => {
                out.push(ch.to_ascii_uppercase());
                word_start = false;
            }
            _ => out.push(ch),
        }
    }

    out
}
