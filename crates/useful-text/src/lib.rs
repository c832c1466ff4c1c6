//! Safe, character-counted access to strings.
//!
//! ## Overview
//!
//! [`TextExt`] adds bounds-checked indexing and slicing to `str`, where every
//! position counts user-perceived characters (extended grapheme clusters)
//! rather than bytes. Requests outside the string produce `None`; ranges that
//! only overrun the end are truncated. [`TextExtMut`] adds the in-place forms
//! to `String`, which leave the string untouched when the request is invalid.
//!
//! ```rust
//! use useful_text::{TextExt, TextExtMut};
//!
//! let s = "Hello World!";
//! assert_eq!(s.character_at(3), Some("l"));
//! assert_eq!(s.slice(6..11), Some("World"));
//! assert_eq!(s.slice(21..110), None);
//!
//! let mut owned = String::from("Hello World");
//! owned.slice_at(6);
//! assert_eq!(owned, "World");
//! ```
//!
//! ## Submodules
//!
//! - [`access`] - indexing and slicing
//! - [`mutate`] - in-place slicing, reversal and camel-casing
//! - [`inspect`] - predicates and value conversions
//! - [`transform`] - encoding, diacritic folding, splitting, searching
//! - [`repeat`] - repetition, including the `*` operator

use std::ops::Range;

pub mod access;
pub mod inspect;
pub mod lorem;
pub mod mutate;
pub mod repeat;
pub mod transform;

pub use inspect::NumberFormat;
pub use lorem::lorem_ipsum;
pub use repeat::{Repeat, repeat};
pub use url::Url;

/// Read-only string extensions. Positions are character counts.
pub trait TextExt {
    fn char_count(&self) -> usize;
    fn character_at(&self, index: isize) -> Option<&str>;
    fn first_character(&self) -> Option<&str>;
    fn last_character(&self) -> Option<&str>;
    fn slice(&self, range: Range<isize>) -> Option<&str>;
    fn slicing(&self, index: isize, length: isize) -> Option<&str>;

    fn is_email(&self) -> bool;
    fn is_valid_url(&self) -> bool;
    fn url(&self) -> Option<Url>;
    fn is_whitespace_only(&self) -> bool;
    fn has_letters(&self) -> bool;
    fn has_numbers(&self) -> bool;
    fn is_alphabetic(&self) -> bool;
    fn is_alphanumeric(&self) -> bool;
    fn to_bool(&self) -> Option<bool>;
    fn to_int(&self) -> Option<i64>;
    fn to_float(&self, format: &NumberFormat) -> Option<f64>;

    fn url_encoded(&self) -> String;
    fn url_decoded(&self) -> String;
    fn latinized(&self) -> String;
    fn camelized(&self) -> String;
    fn split_lines(&self) -> Vec<&str>;
    fn words(&self) -> Vec<&str>;
    fn word_count(&self) -> usize;
    fn contains_with(&self, needle: &str, case_sensitive: bool) -> bool;
    fn count_of(&self, needle: &str, case_sensitive: bool) -> usize;
}

impl TextExt for str {
    fn char_count(&self) -> usize {
        access::char_count(self)
    }

    fn character_at(&self, index: isize) -> Option<&str> {
        access::character_at(self, index)
    }

    fn first_character(&self) -> Option<&str> {
        access::first_character(self)
    }

    fn last_character(&self) -> Option<&str> {
        access::last_character(self)
    }

    fn slice(&self, range: Range<isize>) -> Option<&str> {
        access::slice(self, range)
    }

    fn slicing(&self, index: isize, length: isize) -> Option<&str> {
        access::slicing(self, index, length)
    }

    fn is_email(&self) -> bool {
        inspect::is_email(self)
    }

    fn is_valid_url(&self) -> bool {
        inspect::is_valid_url(self)
    }

    fn url(&self) -> Option<Url> {
        inspect::url(self)
    }

    fn is_whitespace_only(&self) -> bool {
        inspect::is_whitespace_only(self)
    }

    fn has_letters(&self) -> bool {
        inspect::has_letters(self)
    }

    fn has_numbers(&self) -> bool {
        inspect::has_numbers(self)
    }

    fn is_alphabetic(&self) -> bool {
        inspect::is_alphabetic(self)
    }

    fn is_alphanumeric(&self) -> bool {
        inspect::is_alphanumeric(self)
    }

    fn to_bool(&self) -> Option<bool> {
        inspect::to_bool(self)
    }

    fn to_int(&self) -> Option<i64> {
        inspect::to_int(self)
    }

    fn to_float(&self, format: &NumberFormat) -> Option<f64> {
        inspect::to_float(self, format)
    }

    fn url_encoded(&self) -> String {
        transform::url_encoded(self)
    }

    fn url_decoded(&self) -> String {
        transform::url_decoded(self)
    }

    fn latinized(&self) -> String {
        transform::latinized(self)
    }

    fn camelized(&self) -> String {
        transform::camelized(self)
    }

    fn split_lines(&self) -> Vec<&str> {
        transform::split_lines(self)
    }

    fn words(&self) -> Vec<&str> {
        transform::words(self)
    }

    fn word_count(&self) -> usize {
        transform::word_count(self)
    }

    fn contains_with(&self, needle: &str, case_sensitive: bool) -> bool {
        transform::contains_with(self, needle, case_sensitive)
    }

    fn count_of(&self, needle: &str, case_sensitive: bool) -> usize {
        transform::count_of(self, needle, case_sensitive)
    }
}

/// In-place string extensions. Invalid requests leave the string unchanged.
pub trait TextExtMut {
    fn slice_from(&mut self, index: isize, length: isize);
    fn slice_at(&mut self, index: isize);
    fn reverse(&mut self);
    fn camelize(&mut self);
}

impl TextExtMut for String {
    fn slice_from(&mut self, index: isize, length: isize) {
        mutate::slice_from(self, index, length);
    }

    fn slice_at(&mut self, index: isize) {
        mutate::slice_at(self, index);
    }

    fn reverse(&mut self) {
        mutate::reverse(self);
    }

    fn camelize(&mut self) {
        mutate::camelize(self);
    }
}
