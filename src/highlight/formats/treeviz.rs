//! Treeviz formatter for token sequences
//!
//! One line per token, nesting shown as indentation (2 spaces per level), so a dump can be
//! scanned quickly and diffed line by line.
//!
//! The format is:
//! <indentation><icon> <scope> <byte range> <quoted text>, with the text truncated to 30 characters
//!
//! Example:
//!
//!   ƒ function 0..34 "นิยาม ทดสอบ():"
//!     κ keyword 0..15 "นิยาม"
//!     ⊤ title 16..31 "ทดสอบ"
//!   · plain 34..35 "\n"
//!
//! Icons
//!     Rules:
//!         Comment: ※
//!         Number: №
//!         String: ❞
//!         Function: ƒ
//!         Class: ◈
//!         Title: ⊤
//!     Words:
//!         Keyword: κ
//!         BuiltIn: β
//!         Literal: ℓ
//!         Identifier: ◦
//!     Other:
//!         Plain: ·

use super::registry::{FormatError, Formatter};
use crate::highlight::scope::Scope;
use crate::highlight::token::Token;

const MAX_TEXT_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Make control characters visible so each token stays on one line
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

/// Get the icon for a scope
fn get_icon(scope: Scope) -> &'static str {
    match scope {
        Scope::Comment => "※",
        Scope::Number => "№",
        Scope::String => "❞",
        Scope::Function => "ƒ",
        Scope::Class => "◈",
        Scope::Title => "⊤",
        Scope::Keyword => "κ",
        Scope::BuiltIn => "β",
        Scope::Literal => "ℓ",
        Scope::Identifier => "◦",
        Scope::Plain => "·",
    }
}

fn write_token(token: &Token<'_>, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} {} {}..{} \"{}\"",
        "  ".repeat(depth),
        get_icon(token.scope),
        token.scope,
        token.range.start,
        token.range.end,
        escape(&truncate(token.text, MAX_TEXT_CHARS)),
    ));
    for child in &token.children {
        write_token(child, depth + 1, lines);
    }
}

/// Render tokens as treeviz, one line per token
pub fn to_treeviz_str(tokens: &[Token<'_>]) -> String {
    let mut lines = Vec::new();
    for token in tokens {
        write_token(token, 0, &mut lines);
    }
    lines.join("\n")
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tokens))
    }

    fn description(&self) -> &'static str {
        "One line per token, nesting by indentation"
    }
}
