//! Pure string transformations: encoding, folding, casing and splitting.

use icu::casemap::CaseMapper;
use icu::normalizer::DecomposingNormalizerBorrowed;
use icu::properties::CodePointMapData;
use icu::properties::props::{GeneralCategory, GeneralCategoryGroup};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use unicode_segmentation::UnicodeSegmentation;

/// Characters left unescaped in the host component of a URL.
const URL_HOST_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'[')
    .remove(b']')
    .remove(b'_')
    .remove(b'~');

/// "it's easy to encode strings" -> "it's%20easy%20to%20encode%20strings"
#[must_use]
pub fn url_encoded(s: &str) -> String {
    utf8_percent_encode(s, URL_HOST_ALLOWED).to_string()
}

/// Percent-decodes `s`, returning it unchanged if the result is not UTF-8.
#[must_use]
pub fn url_decoded(s: &str) -> String {
    percent_decode_str(s)
        .decode_utf8()
        .map_or_else(|_| s.to_owned(), |decoded| decoded.into_owned())
}

/// Folds diacritics away: "Hèllö Wórld!" -> "Hello World!".
#[must_use]
pub fn latinized(s: &str) -> String {
    let categories = CodePointMapData::<GeneralCategory>::new();
    DecomposingNormalizerBorrowed::new_nfd()
        .normalize(s)
        .chars()
        .filter(|&c| categories.get(c) != GeneralCategory::NonspacingMark)
        .collect()
}

/// Lowercases `s`, then capitalizes every word after the first and removes
/// spaces and newlines: "sOme vaRiabLe Name" -> "someVariableName".
#[must_use]
pub fn camelized(s: &str) -> String {
    let source = s.to_lowercase();
    let Some(first) = source.graphemes(true).next() else {
        return source;
    };
    if !source.contains(' ') {
        return source;
    }

    let camel: String = capitalized(&source)
        .chars()
        .filter(|&c| c != ' ' && c != '\n')
        .collect();
    let rest = camel
        .grapheme_indices(true)
        .nth(1)
        .map_or("", |(offset, _)| &camel[offset..]);

    format!("{first}{rest}")
}

/// Uppercases the first character of every whitespace-separated word.
fn capitalized(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// "Hello\ntest" -> ["Hello", "test"]
#[must_use]
pub fn split_lines(s: &str) -> Vec<&str> {
    s.lines().collect()
}

/// Splits on whitespace and punctuation, dropping empty pieces:
/// "Rust is amazing" -> ["Rust", "is", "amazing"].
#[must_use]
pub fn words(s: &str) -> Vec<&str> {
    let categories = CodePointMapData::<GeneralCategory>::new();
    s.split(|c: char| {
        c.is_whitespace() || GeneralCategoryGroup::Punctuation.contains(categories.get(c))
    })
    .filter(|word| !word.is_empty())
    .collect()
}

#[must_use]
pub fn word_count(s: &str) -> usize {
    words(s).len()
}

/// Substring search with optional case folding. An empty needle never matches.
///
/// Case-insensitive matching uses full Unicode case folding, so "Straße"
/// contains "STRASSE" and final sigma matches `σ`.
#[must_use]
pub fn contains_with(s: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return false;
    }
    if case_sensitive {
        s.contains(needle)
    } else {
        let folder = CaseMapper::new();
        folder
            .fold_string(s)
            .contains(folder.fold_string(needle).as_ref())
    }
}

/// Counts non-overlapping occurrences of `needle`. An empty needle counts zero.
///
/// Case-insensitive counting folds both sides the same way as [`contains_with`].
#[must_use]
pub fn count_of(s: &str, needle: &str, case_sensitive: bool) -> usize {
    if needle.is_empty() {
        return 0;
    }
    if case_sensitive {
        s.matches(needle).count()
    } else {
        let folder = CaseMapper::new();
        folder
            .fold_string(s)
            .matches(folder.fold_string(needle).as_ref())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_round_trip() {
        let plain = "it's easy to encode strings";
        let encoded = url_encoded(plain);
        assert_eq!(encoded, "it's%20easy%20to%20encode%20strings");
        assert_eq!(url_decoded("it's%20easy%20to%20decode%20strings"), "it's easy to decode strings");
    }

    #[test]
    fn url_decoded_keeps_invalid_utf8_input() {
        assert_eq!(url_decoded("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn latinized_strips_diacritics() {
        assert_eq!(latinized("Hèllö Wórld!"), "Hello World!");
        assert_eq!(latinized("plain"), "plain");
    }

    #[test]
    fn camelized_variants() {
        assert_eq!(camelized("sOme vaRiabLe Name"), "someVariableName");
        assert_eq!(camelized("Single"), "single");
        assert_eq!(camelized("two\nlines here"), "twoLinesHere");
        assert_eq!(camelized(""), "");
    }

    #[test]
    fn lines_and_words() {
        assert_eq!(split_lines("Hello\ntest"), vec!["Hello", "test"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(words("Rust is amazing"), vec!["Rust", "is", "amazing"]);
        assert_eq!(words("Hi, there... friend!"), vec!["Hi", "there", "friend"]);
        assert_eq!(word_count("Rust is amazing"), 3);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn contains_and_count() {
        assert!(!contains_with("Hello World!", "O", true));
        assert!(contains_with("Hello World!", "o", false));
        assert!(!contains_with("Hello", "", true));

        assert_eq!(count_of("Hello World!", "o", true), 2);
        assert_eq!(count_of("Hello World!", "L", false), 3);
        assert_eq!(count_of("aaaa", "aa", true), 2);
        assert_eq!(count_of("abc", "", true), 0);
    }

    #[test]
    fn case_insensitive_matching_folds_case() {
        assert!(contains_with("Straße", "STRASSE", false));
        assert!(contains_with("STRASSE", "straße", false));
        assert!(!contains_with("Straße", "STRASSE", true));

        // Final sigma folds to the ordinary sigma.
        assert!(contains_with("ΣΊΣΥΦΟΣ", "σίσυφος", false));
        assert!(contains_with("ΣΊΣΥΦΟΣ", "σίσυφοσ", false));

        assert_eq!(count_of("Straße and STRASSE", "ss", false), 2);
        assert_eq!(count_of("ὈΔΥΣΣΕΎΣ", "ς", false), 3);
    }
}
