//! Image location and spoken-text canonicalization.
//!
//! The board indexes everything by image location, so the same file must map to
//! the same key no matter how its path was spelled.

/// Marker that starts an item line in a board file.
pub const ITEM_MARKER: char = '>';

/// Normalize path separators in an image location.
///
/// Backslashes become forward slashes and runs of separators collapse to one:
/// `img\\food//fries.png` becomes `img/food/fries.png`. Surrounding whitespace is
/// trimmed.
pub fn normalize_image_loc(image_loc: &str) -> String {
    let mut normalized = String::with_capacity(image_loc.len());
    let mut previous_was_separator = false;

    for c in image_loc.trim().chars() {
        let is_separator = c == '/' || c == '\\';
        if is_separator {
            if !previous_was_separator {
                normalized.push('/');
            }
        } else {
            normalized.push(c);
        }
        previous_was_separator = is_separator;
    }

    normalized
}

/// Collapse whitespace runs in spoken text to single spaces.
///
/// Board files separate words with single spaces, so this is the only form of a
/// phrase that survives a save/load cycle unchanged.
pub fn canonical_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
