//! Episode number extraction from file names.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `e`, `x`, `episode` or the start of the name, optional whitespace, then exactly two digits.
static RE_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:e|x|episode|^)\s*(\d{2})").expect("Failed to create regex pattern for episode number")
});

/// Two-character episode number as it appears in the file name.
///
/// Kept as a string so leading zeros survive: `"01"` stays `"01"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodeTag(String);

impl EpisodeTag {
    /// Find the leftmost episode number in the given file name.
    #[must_use]
    pub fn extract(filename: &str) -> Option<Self> {
        RE_EPISODE
            .captures(filename)
            .and_then(|captures| captures.get(1))
            .map(|number| Self(number.as_str().to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
