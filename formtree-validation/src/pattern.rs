// Comparison patterns for the email, password and pattern rules

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const EMAIL_SOURCE: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

const PASSWORD_SOURCE: &str =
    r"^(?=.*[0-9])(?=.*[\^$*.\[\]{}\(\)?\-“!@#%&/,><’:;|_~`])\S{8,99}$";

// `regex` has no lookahead, so the password pattern is split into parts that
// must all match.
const PASSWORD_PARTS: &[&str] = &[
    r"[0-9]",
    r"[\^$*.\[\]{}()?\-“!@#%&/,><’:;|_~`]",
    r"^\S{8,99}$",
];

/// Default pattern for the `email` rule. Values are lowercased before matching.
pub static EMAIL_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(EMAIL_SOURCE).unwrap());

/// Default pattern for the `password` rule: one digit, one special
/// character, 8 to 99 non-whitespace characters.
pub static PASSWORD_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::all_of(PASSWORD_SOURCE, PASSWORD_PARTS).unwrap());

#[derive(Clone)]
enum Matcher {
    Single(Regex),
    AllOf(Vec<Regex>),
}

/// A pattern a leaf value is compared against
///
/// Matching is unanchored unless the expression anchors itself, so a pattern
/// behaves like a `test` against the string form of the value.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

impl Pattern {
    /// Compile a pattern from a regular expression
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            source: source.to_string(),
            matcher: Matcher::Single(Regex::new(source)?),
        })
    }

    /// Build a pattern that matches only when every part matches.
    ///
    /// `source` is what the pattern reports in messages.
    pub fn all_of(source: &str, parts: &[&str]) -> Result<Self, regex::Error> {
        let parts = parts
            .iter()
            .map(|part| Regex::new(part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            matcher: Matcher::AllOf(parts),
        })
    }

    /// Test a string against the pattern
    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.matcher {
            Matcher::Single(regex) => regex.is_match(haystack),
            Matcher::AllOf(parts) => parts.iter().all(|regex| regex.is_match(haystack)),
        }
    }

    /// The expression this pattern was built from
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self {
            source: regex.as_str().to_string(),
            matcher: Matcher::Single(regex),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}
