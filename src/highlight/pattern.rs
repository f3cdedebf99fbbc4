//! Regex wrapper used by grammar rules
//!
//! Grammars are data and may be loaded from files, so patterns serialize as their regex
//! source and compile on deserialization. Two patterns are equal when their sources are.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }

    /// Leftmost non-empty match starting at or after `from`.
    ///
    /// The whole haystack stays visible to the regex, so `\b` at `from` sees the
    /// preceding character.
    pub fn find_from(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        let mut start = from;
        while start <= haystack.len() {
            let m = self.0.find_at(haystack, start)?;
            if !m.range().is_empty() {
                return Some(m.range());
            }
            start = next_char_boundary(haystack, m.start());
        }
        None
    }

    /// Like [find_from](Self::find_from), but narrows the match to the named group when the
    /// pattern declares it and it participated.
    pub fn find_group_from(
        &self,
        haystack: &str,
        from: usize,
        group: &str,
    ) -> Option<(Range<usize>, Range<usize>)> {
        let mut start = from;
        while start <= haystack.len() {
            let caps = self.0.captures_at(haystack, start)?;
            let whole = caps.get(0)?.range();
            if !whole.is_empty() {
                let inner = caps.name(group).map(|m| m.range()).unwrap_or(whole.clone());
                return Some((whole, inner));
            }
            start = next_char_boundary(haystack, whole.start);
        }
        None
    }

    /// True when the whole of `text` is one match
    pub fn matches_fully(&self, text: &str) -> bool {
        self.0
            .find(text)
            .map(|m| m.start() == 0 && m.end() == text.len())
            .unwrap_or(false)
    }
}

/// Byte index of the character after the one starting at `index`
pub(crate) fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern(regex)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}
