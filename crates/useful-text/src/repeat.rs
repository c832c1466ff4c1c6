//! String repetition with a permissive count.

use std::ops::Mul;

/// Returns `s` concatenated `count` times, or an empty string for `count <= 0`.
#[must_use]
pub fn repeat(s: &str, count: isize) -> String {
    usize::try_from(count).map_or_else(|_| String::new(), |count| s.repeat(count))
}

/// Wrapper that lets a string be repeated with `*` from either side.
///
/// ```
/// use useful_text::Repeat;
///
/// assert_eq!(Repeat("bar") * 3, "barbarbar");
/// assert_eq!(3 * Repeat("bar"), "barbarbar");
/// assert_eq!(Repeat("bar") * -1, "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat<S>(pub S);

impl<S: AsRef<str>> Mul<isize> for Repeat<S> {
    type Output = String;

    fn mul(self, rhs: isize) -> String {
        repeat(self.0.as_ref(), rhs)
    }
}

impl<S: AsRef<str>> Mul<Repeat<S>> for isize {
    type Output = String;

    fn mul(self, rhs: Repeat<S>) -> String {
        repeat(rhs.0.as_ref(), self)
    }
}
