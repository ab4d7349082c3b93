//! Shared naming helpers for code generation.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "statusCode" -> "StatusCode").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched
/// (e.g., "PetOwner" -> "petOwner").
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert an upper or lower snake case value to camelCase
/// (e.g., "PLAY_AGAIN" -> "playAgain").
///
/// The whole value is lowercased first; every underscore is then dropped and
/// the character following it uppercased. Runs of underscores collapse.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.to_lowercase().chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
