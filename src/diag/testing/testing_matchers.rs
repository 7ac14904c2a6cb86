//! Text matching for node values

use regex::Regex;
use std::fmt;

/// How a node's text value is compared
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    Prefix(String),
    Contains(String),
    /// Regex search over the value, e.g. `^std::`
    Pattern(Regex),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::Prefix(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
            TextMatch::Pattern(pattern) => pattern.is_match(actual),
        }
    }

    /// Panics with `context` when `actual` doesn't match
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: expected text {}, got {:?}",
            context,
            self,
            actual
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "== {:?}", expected),
            TextMatch::Prefix(prefix) => write!(f, "starting with {:?}", prefix),
            TextMatch::Contains(needle) => write!(f, "containing {:?}", needle),
            TextMatch::Pattern(pattern) => write!(f, "matching /{}/", pattern.as_str()),
        }
    }
}
