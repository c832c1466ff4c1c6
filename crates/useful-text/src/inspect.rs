//! Predicates and value conversions over strings.

use std::sync::LazyLock;

use icu::properties::CodePointMapData;
use icu::properties::props::GeneralCategory;
use regex_lite::Regex;
use url::Url;
use useful_core::config::TextConfig;
use useful_core::error::CoreResult;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Whether `s` contains something shaped like an e-mail address.
///
/// The match is unanchored: "write to alexdneprin@gmail.com" also passes.
#[must_use]
pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Whether `s` is empty once surrounding whitespace and newlines are removed.
#[must_use]
pub fn is_whitespace_only(s: &str) -> bool {
    s.trim().is_empty()
}

#[must_use]
pub fn has_letters(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// Whether `s` contains a decimal digit (category `Nd`), so "٣" counts and "½" does not.
#[must_use]
pub fn has_numbers(s: &str) -> bool {
    let categories = CodePointMapData::<GeneralCategory>::new();
    s.chars()
        .any(|c| categories.get(c) == GeneralCategory::DecimalNumber)
}

/// Letters present and no digits: "abc" passes, "123abc" does not.
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    has_letters(s) && !has_numbers(s)
}

/// Only letters and digits, with at least one of each: "123abc" passes, "abc" does not.
#[must_use]
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(char::is_alphanumeric) && has_letters(s) && has_numbers(s)
}

/// Parses `s` as an absolute URL: "https://google.com" parses, "not url" does not.
#[must_use]
pub fn url(s: &str) -> Option<Url> {
    Url::parse(s)
        .inspect_err(|e| tracing::trace!(error = %e, input = s, "Not a URL"))
        .ok()
}

#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    url(s).is_some()
}

/// Parses `"true"`/`"1"` and `"false"`/`"0"`, ignoring case and surrounding whitespace.
#[must_use]
pub fn to_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn to_int(s: &str) -> Option<i64> {
    s.parse().ok()
}

/// Decimal number conventions used by [`to_float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl NumberFormat {
    #[must_use]
    pub const fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// ## Summary
    /// Builds a number format from the `text` configuration section.
    ///
    /// ## Errors
    /// Returns an error if the configured separator is not a single non-digit character.
    pub fn from_config(config: &TextConfig) -> CoreResult<Self> {
        Ok(Self::new(config.decimal_separator()?))
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new('.')
    }
}

/// Parses a finite decimal number written with `format`'s separator.
///
/// "3,5" parses with a `','` separator; under the same format "3.5" does not.
#[must_use]
pub fn to_float(s: &str, format: &NumberFormat) -> Option<f64> {
    let trimmed = s.trim();
    let separator = format.decimal_separator();
    if separator != '.' && trimmed.contains('.') {
        return None;
    }

    let normalized = trimmed.replace(separator, ".");
    let value = normalized.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_detection() {
        assert!(is_email("alexdneprin@gmail.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("alexdneprin@gmail"));
        assert!(!is_email("not an email"));
    }

    #[test]
    fn whitespace_only() {
        assert!(is_whitespace_only("  \n\t "));
        assert!(is_whitespace_only(""));
        assert!(!is_whitespace_only(" a "));
    }

    #[test]
    fn letters_and_numbers() {
        assert!(has_letters("123abc"));
        assert!(!has_letters("123"));
        assert!(has_numbers("123abc"));
        assert!(!has_numbers("abcd"));

        assert!(is_alphabetic("abc"));
        assert!(!is_alphabetic("123abc"));

        assert!(is_alphanumeric("123abc"));
        assert!(!is_alphanumeric("abc"));
        assert!(!is_alphanumeric("123 abc"));
    }

    #[test]
    fn only_decimal_digits_count_as_numbers() {
        assert!(!has_numbers("½"));
        assert!(!has_numbers("Ⅻ"));
        assert!(has_numbers("٣"));
        assert!(is_alphabetic("abc½"));
        assert!(!is_alphanumeric("abc½"));
    }

    #[test_log::test]
    fn url_parsing() {
        let parsed = url("https://google.com").expect("absolute URL");
        assert_eq!(parsed.host_str(), Some("google.com"));
        assert!(is_valid_url("https://google.com/search?q=rust"));

        assert_eq!(url("not url"), None);
        assert!(!is_valid_url("google.com"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn bool_parsing() {
        assert_eq!(to_bool("1"), Some(true));
        assert_eq!(to_bool(" True \n"), Some(true));
        assert_eq!(to_bool("False"), Some(false));
        assert_eq!(to_bool("0"), Some(false));
        assert_eq!(to_bool("Hello"), None);
    }

    #[test]
    fn int_parsing() {
        assert_eq!(to_int("101"), Some(101));
        assert_eq!(to_int("-7"), Some(-7));
        assert_eq!(to_int("1.5"), None);
        assert_eq!(to_int(" 1"), None);
    }

    #[test]
    fn float_parsing_respects_separator() {
        let dot = NumberFormat::default();
        let comma = NumberFormat::new(',');

        assert_eq!(to_float("3.5", &dot), Some(3.5));
        assert_eq!(to_float(" 3,5 ", &comma), Some(3.5));
        assert_eq!(to_float("3.5", &comma), None);
        assert_eq!(to_float("inf", &dot), None);
        assert_eq!(to_float("abc", &dot), None);
    }

    #[test]
    fn number_format_from_config() {
        let config = TextConfig {
            decimal_separator: ",".to_string(),
        };
        assert_eq!(
            NumberFormat::from_config(&config).ok(),
            Some(NumberFormat::new(','))
        );
    }
}
