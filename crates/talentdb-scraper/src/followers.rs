//! Recognizer for displayed follower counts such as `"12,345"` or `"3.4k"`.

use std::sync::LazyLock;

use regex::Regex;

static FOLLOWER_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,]+(\.[0-9]+)?[kKmM]?$").expect("valid regex"));

/// Returns the trimmed input if the whole string is a follower count, `None`
/// otherwise.
///
/// Accepted shape: digits optionally grouped with commas, an optional decimal
/// fraction, and an optional single `k`/`K`/`m`/`M` magnitude letter. The
/// value is kept verbatim; no numeric normalization happens here.
#[must_use]
pub fn recognize_follower_count(text: &str) -> Option<String> {
    let trimmed = text.trim();
    FOLLOWER_COUNT_RE
        .is_match(trimmed)
        .then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_grouped_digits() {
        assert_eq!(recognize_follower_count("12345").as_deref(), Some("12345"));
        assert_eq!(
            recognize_follower_count("12,345").as_deref(),
            Some("12,345")
        );
    }

    #[test]
    fn accepts_fraction_with_magnitude_suffix() {
        assert_eq!(recognize_follower_count("3.4k").as_deref(), Some("3.4k"));
        assert_eq!(recognize_follower_count("1.2M").as_deref(), Some("1.2M"));
        assert_eq!(recognize_follower_count("850K").as_deref(), Some("850K"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            recognize_follower_count("  \n12.3k\t").as_deref(),
            Some("12.3k")
        );
    }

    #[test]
    fn rejects_empty_and_words() {
        assert_eq!(recognize_follower_count(""), None);
        assert_eq!(recognize_follower_count("   "), None);
        assert_eq!(recognize_follower_count("12k followers"), None);
        assert_eq!(recognize_follower_count("Instagram"), None);
    }

    #[test]
    fn rejects_extra_letters_and_symbols() {
        assert_eq!(recognize_follower_count("12kk"), None);
        assert_eq!(recognize_follower_count("12b"), None);
        assert_eq!(recognize_follower_count("+12k"), None);
        assert_eq!(recognize_follower_count("12 345"), None);
        assert_eq!(recognize_follower_count(".5k"), None);
        assert_eq!(recognize_follower_count("1.k"), None);
    }
}
