//! Reusable rule building blocks shared by grammars
//!
//! These mirror the stock modes a highlighting engine ships with: hash comments, decimal
//! numbers, backslash escapes, and quoted strings.

use crate::highlight::grammar::{
    HeaderRule, KeywordTable, LexemeRule, MatchRule, RegionRule, RegionVariant, TitleRule,
    WordClass,
};
use crate::highlight::pattern::Pattern;
use crate::highlight::scope::Scope;
use once_cell::sync::Lazy;

/// Words made of Thai script, ASCII letters, digits and underscore, not starting with a digit
pub const THAI_IDENTIFIER: &str = r"[ก-๛a-zA-Z_][ก-๛a-zA-Z0-9_]*";

static HASH_COMMENT: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"#[^\r\n]*").unwrap());
static NUMBER: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\b[0-9]+(?:\.[0-9]+)?").unwrap());
static BACKSLASH_ESCAPE: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\\(?s:.)").unwrap());
static HEADER_END: Lazy<Pattern> = Lazy::new(|| Pattern::new(":").unwrap());
static TITLE: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(&format!(r"\s+(?P<title>{})", THAI_IDENTIFIER)).unwrap());

pub fn identifier() -> Pattern {
    static IDENTIFIER: Lazy<Pattern> = Lazy::new(|| Pattern::new(THAI_IDENTIFIER).unwrap());
    IDENTIFIER.clone()
}

/// `#` to end of line
pub fn hash_comment() -> MatchRule {
    MatchRule::Lexeme(LexemeRule {
        scope: Some(Scope::Comment),
        pattern: HASH_COMMENT.clone(),
    })
}

/// Decimal integers and fractions
pub fn number() -> MatchRule {
    MatchRule::Lexeme(LexemeRule {
        scope: Some(Scope::Number),
        pattern: NUMBER.clone(),
    })
}

/// A backslash and the character after it, consumed without a token
pub fn backslash_escape() -> MatchRule {
    MatchRule::Lexeme(LexemeRule {
        scope: None,
        pattern: BACKSLASH_ESCAPE.clone(),
    })
}

/// Python-style strings: triple quotes first, then single quotes
pub fn python_string() -> MatchRule {
    let variant = |delimiter: &str, relevance: u32| RegionVariant {
        begin: literal(delimiter),
        end: literal(delimiter),
        relevance,
    };
    MatchRule::Region(RegionRule {
        scope: Scope::String,
        variants: vec![
            variant("'''", 10),
            variant("\"\"\"", 10),
            variant("'", 0),
            variant("\"", 0),
        ],
        contains: vec![backslash_escape()],
    })
}

/// A block header anchored on `anchor`, ending at `:`, with the declared name as title
pub fn block_header(scope: Scope, anchor: &str) -> MatchRule {
    MatchRule::Header(HeaderRule {
        scope,
        begin: word(anchor),
        end: HEADER_END.clone(),
        keywords: KeywordTable::new().with_words(WordClass::Keyword, anchor),
        title: TitleRule {
            pattern: TITLE.clone(),
            relevance: 0,
            ends_with_parent: true,
        },
    })
}

/// Pattern matching `text` literally
fn literal(text: &str) -> Pattern {
    Pattern::new(&regex::escape(text)).unwrap()
}

/// Pattern matching `text` as a whole word
fn word(text: &str) -> Pattern {
    Pattern::new(&format!(r"\b{}\b", regex::escape(text))).unwrap()
}
