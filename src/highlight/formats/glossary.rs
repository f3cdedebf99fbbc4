//! Glossary formatter
//!
//! Lists each distinct keyword, built-in and literal used in the tokens (at any depth), in
//! first-use order, with its Python name when one is known:
//!
//!     นิยาม keyword def
//!     พิมพ์ built_in print

use super::registry::{FormatError, Formatter};
use crate::highlight::languages::piyathon::python_name;
use crate::highlight::token::Token;
use std::collections::HashSet;

pub struct GlossaryFormatter;

impl Formatter for GlossaryFormatter {
    fn name(&self) -> &'static str {
        "glossary"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for token in tokens.iter().flat_map(Token::walk) {
            if token.scope.is_word_class() && seen.insert(token.text) {
                lines.push(format!(
                    "{} {} {}",
                    token.text,
                    token.scope,
                    python_name(token.text).unwrap_or("-")
                ));
            }
        }
        Ok(lines.join("\n"))
    }

    fn description(&self) -> &'static str {
        "Distinct classified words with their Python names"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::scope::Scope;

    #[test]
    fn test_glossary_lists_each_word_once() {
        let source = "พิมพ์ x พิมพ์ foo";
        let tokens = vec![
            Token::new(Scope::BuiltIn, 0..15, source),
            Token::new(Scope::Identifier, 16..17, source),
            Token::new(Scope::BuiltIn, 18..33, source),
            Token::new(Scope::Keyword, 34..37, source),
        ];
        let output = GlossaryFormatter.render(&tokens).unwrap();
        assert_eq!(output, "พิมพ์ built_in print\nfoo keyword -");
    }
}
