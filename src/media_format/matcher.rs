//! Cascading file matcher.
//!
//! Tries each tokenization [`Strategy`] in priority order and stops at the first token
//! that matches at least one file in the listing.

use regex::{Regex, RegexBuilder};

use crate::media_format::{DirectoryListing, FormatError, Result, Strategy};

/// Files selected for renaming, together with what selected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    strategy: Strategy,
    token: String,
    files: Vec<String>,
}

impl MatchSet {
    /// Strategy that produced the match.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Token that produced the match.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Matched file names in listing order. Never empty.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Matches a base title hint against a directory listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadingMatcher {
    ignore_case: bool,
}

impl CascadingMatcher {
    #[must_use]
    pub const fn new(ignore_case: bool) -> Self {
        Self { ignore_case }
    }

    /// Find the files belonging to the series named by `hint`.
    ///
    /// # Errors
    /// Returns [`FormatError::EmptyHint`] for a blank hint,
    /// [`FormatError::EmptyDirectory`] for an empty listing,
    /// and [`FormatError::NoMatch`] when no strategy matches any file.
    pub fn find_matches(&self, listing: &DirectoryListing, hint: &str) -> Result<MatchSet> {
        if hint.trim().is_empty() {
            return Err(FormatError::EmptyHint);
        }
        listing.ensure_not_empty()?;

        Strategy::CASCADE
            .into_iter()
            .find_map(|strategy| self.attempt(strategy, listing, hint))
            .ok_or_else(|| FormatError::NoMatch { hint: hint.to_string() })
    }

    /// Try a single strategy: the first token with a non-empty match wins.
    #[must_use]
    pub fn attempt(&self, strategy: Strategy, listing: &DirectoryListing, hint: &str) -> Option<MatchSet> {
        strategy.tokens(hint).into_iter().find_map(|token| {
            let files = self.match_token(listing, &token);
            (!files.is_empty()).then_some(MatchSet { strategy, token, files })
        })
    }

    /// All files containing `token`, equivalent to the glob `*token*`.
    fn match_token(&self, listing: &DirectoryListing, token: &str) -> Vec<String> {
        let Some(pattern) = self.token_pattern(token) else {
            return Vec::new();
        };
        listing
            .files()
            .iter()
            .filter(|name| pattern.is_match(name))
            .cloned()
            .collect()
    }

    fn token_pattern(&self, token: &str) -> Option<Regex> {
        // An escaped literal only fails to compile if it exceeds the size limit.
        RegexBuilder::new(&regex::escape(token))
            .case_insensitive(self.ignore_case)
            .build()
            .ok()
    }
}
