//! Bounds-checked access into a character sequence.
//!
//! ## Summary
//! Every position here is a *logical character position*: the index of an
//! extended grapheme cluster, never a byte offset. Out-of-range requests
//! produce `None` instead of panicking, and ranges that merely overrun the
//! end are truncated to what is available.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Number of characters (grapheme clusters) in `s`.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the boundary before character `position`.
///
/// `position == char_count(s)` maps to `s.len()`; anything beyond is `None`.
fn byte_offset(s: &str, position: usize) -> Option<usize> {
    s.grapheme_indices(true)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .nth(position)
}

/// Returns the character at logical position `index`.
///
/// "Hello World!" at 3 is `Some("l")`, at 20 is `None`.
#[must_use]
pub fn character_at(s: &str, index: isize) -> Option<&str> {
    let index = usize::try_from(index).ok()?;
    s.graphemes(true).nth(index)
}

#[must_use]
pub fn first_character(s: &str) -> Option<&str> {
    s.graphemes(true).next()
}

#[must_use]
pub fn last_character(s: &str) -> Option<&str> {
    s.graphemes(true).next_back()
}

/// Returns the characters in `[range.start, range.end)`.
///
/// The lower bound is clamped to zero, and the width is taken from the
/// requested bounds. A lower bound past the end or a negative width yields
/// `None`; an upper bound past the end is truncated.
///
/// "Hello World!" over `6..11` is `Some("World")`, over `21..110` is `None`.
#[must_use]
pub fn slice(s: &str, range: Range<isize>) -> Option<&str> {
    let width = range.end.checked_sub(range.start)?;
    let width = usize::try_from(width).ok()?;
    let lower = usize::try_from(range.start.max(0)).ok()?;

    let len = char_count(s);
    if lower > len {
        return None;
    }
    let upper = lower.saturating_add(width).min(len);

    let start = byte_offset(s, lower)?;
    let end = byte_offset(s, upper)?;
    s.get(start..end)
}

/// Returns `length` characters starting at `index`.
///
/// Requires `length >= 0` and `0 <= index < char_count(s)`. A request running
/// past the end returns the tail from `index`.
#[must_use]
pub fn slicing(s: &str, index: isize, length: isize) -> Option<&str> {
    if length < 0 || index < 0 {
        return None;
    }
    let len = isize::try_from(char_count(s)).ok()?;
    if index >= len {
        return None;
    }

    match index.checked_add(length) {
        Some(end) if end <= len => {
            if length == 0 {
                return Some("");
            }
            slice(s, index..end)
        }
        _ => slice(s, index..len),
    }
}
