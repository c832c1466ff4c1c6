//! In-place counterparts of the access operations.
//!
//! Each mutator either replaces the string with a valid result or leaves it
//! untouched; none of them panic on bad positions.

use unicode_segmentation::UnicodeSegmentation;

use crate::access::slicing;
use crate::transform::camelized;

/// Replaces `s` with `length` characters starting at `index`.
///
/// Leaves `s` unchanged when [`slicing`] would return `None`.
pub fn slice_from(s: &mut String, index: isize, length: isize) {
    if let Some(sliced) = slicing(s, index, length) {
        *s = sliced.to_owned();
    } else {
        tracing::trace!(index, length, "slice_from out of range, string unchanged");
    }
}

/// Replaces `s` with its tail starting at character `index`.
///
/// Indices at or past the end (and negative ones) are a no-op.
pub fn slice_at(s: &mut String, index: isize) {
    let Ok(index) = usize::try_from(index) else {
        return;
    };
    let Some(offset) = s.grapheme_indices(true).nth(index).map(|(offset, _)| offset) else {
        return;
    };
    s.replace_range(..offset, "");
}

/// Reverses the order of characters in `s`.
///
/// Operates on grapheme clusters as segmented by `unicode-segmentation`;
/// no normalization is applied beyond what segmentation already composes.
pub fn reverse(s: &mut String) {
    *s = s.graphemes(true).rev().collect();
}

pub fn camelize(s: &mut String) {
    *s = camelized(s);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_from_replaces_with_substring() {
        let mut s = String::from("Hello World");
        slice_from(&mut s, 6, 5);
        assert_eq!(s, "World");
    }

    #[test]
    fn slice_from_invalid_is_noop() {
        let mut s = String::from("Hello World");
        slice_from(&mut s, 11, 1);
        assert_eq!(s, "Hello World");
        slice_from(&mut s, 2, -1);
        assert_eq!(s, "Hello World");
    }

    #[test]
    fn slice_at_keeps_tail() {
        let mut s = String::from("Hello World");
        slice_at(&mut s, 6);
        assert_eq!(s, "World");
    }

    #[test]
    fn slice_at_past_end_is_noop() {
        let mut s = String::from("Hello");
        slice_at(&mut s, 5);
        assert_eq!(s, "Hello");
        slice_at(&mut s, 50);
        assert_eq!(s, "Hello");
        slice_at(&mut s, -1);
        assert_eq!(s, "Hello");
    }

    #[test]
    fn slice_at_multibyte() {
        let mut s = String::from("🦀日本e\u{301}");
        slice_at(&mut s, 2);
        assert_eq!(s, "本e\u{301}");
    }

    #[test]
    fn reverse_by_character() {
        let mut s = String::from("Julia");
        reverse(&mut s);
        assert_eq!(s, "ailuJ");

        let mut combined = String::from("ae\u{301}b");
        reverse(&mut combined);
        assert_eq!(combined, "be\u{301}a");

        let mut empty = String::new();
        reverse(&mut empty);
        assert_eq!(empty, "");
    }

    #[test]
    fn camelize_in_place() {
        let mut s = String::from("sOme vaRiabLe Name");
        camelize(&mut s);
        assert_eq!(s, "someVariableName");
    }
}
