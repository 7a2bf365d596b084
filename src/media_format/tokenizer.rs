//! Splitting a base title hint into search tokens.

use std::fmt;

/// Delimiters tried by [`Strategy::Delimiter`], in priority order.
pub const DELIMITERS: [char; 3] = ['.', '_', '-'];

/// Tokenization strategy, from most to least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The entire hint as a single token.
    WholeHint,
    /// One token per whitespace-separated word.
    Whitespace,
    /// Words split on `.`, then `_`, then `-`.
    Delimiter,
    /// Words split on camel case boundaries.
    CamelCase,
}

impl Strategy {
    /// All strategies in the order the matcher tries them.
    pub const CASCADE: [Self; 4] = [Self::WholeHint, Self::Whitespace, Self::Delimiter, Self::CamelCase];

    /// Tokens for the given hint, in the order they should be tried.
    ///
    /// Empty tokens are never produced.
    #[must_use]
    pub fn tokens(self, hint: &str) -> Vec<String> {
        let tokens: Vec<String> = match self {
            Self::WholeHint => vec![hint.to_string()],
            Self::Whitespace => hint.split_whitespace().map(str::to_string).collect(),
            Self::Delimiter => DELIMITERS
                .iter()
                .flat_map(|delimiter| hint.split(*delimiter))
                .map(str::to_string)
                .collect(),
            Self::CamelCase => split_camel_case(hint),
        };
        tokens.into_iter().filter(|token| !token.is_empty()).collect()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WholeHint => "whole title",
            Self::Whitespace => "whitespace split",
            Self::Delimiter => "delimiter split",
            Self::CamelCase => "camel case split",
        };
        write!(f, "{name}")
    }
}

/// Split text into camel case words.
///
/// A word is an uppercase letter followed by lowercase letters,
/// or a run of uppercase letters that is not followed by a lowercase letter.
/// Anything outside such a word is dropped.
///
/// ```rust
/// use media_formatter::media_format::split_camel_case;
///
/// assert_eq!(split_camel_case("MyCoolShow"), vec!["My", "Cool", "Show"]);
/// assert_eq!(split_camel_case("FOOBar"), vec!["FOO", "Bar"]);
/// ```
#[must_use]
pub fn split_camel_case(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut words = Vec::new();
    let mut index = 0;

    while index < len {
        if !chars[index].is_ascii_uppercase() {
            index += 1;
            continue;
        }

        let next = index + 1;
        if next < len && chars[next].is_ascii_lowercase() {
            let end = chars[next..]
                .iter()
                .position(|c| !c.is_ascii_lowercase())
                .map_or(len, |offset| next + offset);
            words.push(chars[index..end].iter().collect());
            index = end;
            continue;
        }

        let run_end = chars[next..]
            .iter()
            .position(|c| !c.is_ascii_uppercase())
            .map_or(len, |offset| next + offset);

        if run_end == len {
            words.push(chars[index..len].iter().collect());
            index = len;
        } else if run_end > next {
            // The last capital of the run starts the next word.
            words.push(chars[index..run_end - 1].iter().collect());
            index = run_end - 1;
        } else {
            index += 1;
        }
    }

    words
}
