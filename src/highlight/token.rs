//! Classified spans of source text
//!
//!     Tokens borrow their text from the scanned source and live only as long as the caller
//!     keeps them. A token produced by a region or header rule holds the tokens recognized
//!     inside it as children (the anchor keyword and title of a header, for instance).
//!     Children only cover classified text; unclassified text inside a rule is part of the
//!     parent's span and nothing more.

use crate::highlight::scope::Scope;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'s> {
    pub scope: Scope,
    /// Byte range in the source
    pub range: Range<usize>,
    pub text: &'s str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token<'s>>,
}

impl<'s> Token<'s> {
    pub fn new(scope: Scope, range: Range<usize>, source: &'s str) -> Self {
        Token {
            text: &source[range.clone()],
            scope,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Token<'s>>) -> Self {
        self.children = children;
        self
    }

    /// First descendant (depth-first, self excluded) with the given scope
    pub fn find_child(&self, scope: Scope) -> Option<&Token<'s>> {
        self.children.iter().find_map(|child| {
            if child.scope == scope {
                Some(child)
            } else {
                child.find_child(scope)
            }
        })
    }

    /// This token and all of its descendants, depth-first
    pub fn walk(&self) -> Vec<&Token<'s>> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}
