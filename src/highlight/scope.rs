//! Token classifications
//!
//!     A scope is the class a token is tagged with. The names match the class names used by
//!     highlighting themes (`built_in` keeps its underscore), so a renderer can map them to
//!     styles directly.
//!
//!     Rule scopes:
//!         comment, number, string, function, class, title
//!     Word scopes (from the keyword table):
//!         keyword, built_in, literal
//!     Fallback scopes (top level only):
//!         identifier: word-shaped text with no classification
//!         plain: everything else (whitespace, punctuation, operators)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification carried by a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Comment,
    Number,
    String,
    Function,
    Class,
    Title,
    Keyword,
    BuiltIn,
    Literal,
    Identifier,
    Plain,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Comment => "comment",
            Scope::Number => "number",
            Scope::String => "string",
            Scope::Function => "function",
            Scope::Class => "class",
            Scope::Title => "title",
            Scope::Keyword => "keyword",
            Scope::BuiltIn => "built_in",
            Scope::Literal => "literal",
            Scope::Identifier => "identifier",
            Scope::Plain => "plain",
        }
    }

    /// Word scopes come from the keyword table rather than from a match rule
    pub fn is_word_class(&self) -> bool {
        matches!(self, Scope::Keyword | Scope::BuiltIn | Scope::Literal)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
