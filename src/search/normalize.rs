//! Search Term Normalization
//!
//! Queries and catalog fields are compared through the same folding: trim,
//! map full-width ASCII letters/digits and the ideographic space to their
//! half-width forms, then lowercase. Mixed-width input is common on Japanese
//! keyboards, so "ＹＯＡＳＯＢＩ" and "yoasobi" must match the same records.

/// Normalizes a string for substring comparison.
pub fn normalize_for_search(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(fold_char)
        .collect::<String>()
        .to_lowercase()
}

/// Folds one character to its half-width equivalent where one exists.
///
/// Full-width ASCII (U+FF01..U+FF5E) sits at a fixed offset of 0xFEE0 from
/// the half-width range; the ideographic space folds to a plain space.
fn fold_char(c: char) -> char {
    match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}
