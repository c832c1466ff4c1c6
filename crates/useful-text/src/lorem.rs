use unicode_segmentation::UnicodeSegmentation;

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Full length of the placeholder paragraph, in characters.
pub const LOREM_IPSUM_LEN: usize = 445;

/// Returns the first `length` characters of the lorem ipsum paragraph.
#[must_use]
pub fn lorem_ipsum(length: isize) -> &'static str {
    let Ok(length) = usize::try_from(length) else {
        return "";
    };
    LOREM_IPSUM
        .grapheme_indices(true)
        .nth(length)
        .map_or(LOREM_IPSUM, |(offset, _)| &LOREM_IPSUM[..offset])
}
