//! Participant name normalization
//!
//! The normalized name doubles as the base file name of the stored photo, so
//! it must never contain path separators or control characters.

/// Upper bound on the normalized name, in characters
pub const MAX_NAME_CHARS: usize = 64;

/// Characters that are unsafe in a file name on any common filesystem
const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Normalizes a user-supplied name
///
/// Splits on whitespace, removes unsafe characters, title-cases every word
/// and joins the words with `_`. Returns `None` when nothing usable is left.
///
/// # Example
///
/// ```
/// use contest_bot::conversation::normalize_name;
///
/// assert_eq!(normalize_name("  john   smith ").as_deref(), Some("John_Smith"));
/// ```
pub fn normalize_name(raw: &str) -> Option<String> {
    let joined = raw
        .split_whitespace()
        .map(strip_unsafe)
        .filter(|word| !word.is_empty())
        .map(|word| title_case(&word))
        .collect::<Vec<_>>()
        .join("_");

    let trimmed: String = joined.trim_start_matches('.').chars().take(MAX_NAME_CHARS).collect();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn strip_unsafe(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_control() && !FORBIDDEN_CHARS.contains(c))
        .collect()
}

/// Word-boundary title case: a letter is upper-cased unless it follows
/// another letter, in which case it is lower-cased
///
/// Letters whose case mapping expands to several characters (`ß`) are kept
/// as they are, otherwise a second pass would change them again.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            let mapped = if prev_is_letter {
                single_char(c.to_lowercase())
            } else {
                single_char(c.to_uppercase())
            };
            out.push(mapped.unwrap_or(c));
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
