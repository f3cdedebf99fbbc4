//! Grammar descriptors
//!
//!     A grammar descriptor is the declarative description of one language's lexical shape.
//!     It carries no behavior of its own: the [engine](super::engine) interprets it.
//!
//! Parts
//!
//!     - Identity: `name` and `aliases` (registry keys), plus the file `extensions` and
//!       `mime_types` used to associate files with the language.
//!     - Words: the [KeywordTable] (keyword, built_in, literal) and the identifier pattern
//!       that decides what counts as a word at all.
//!     - Rules: an ordered list of [MatchRule]s. At a scan position the first rule that
//!       applies wins, so the order is part of the grammar.
//!
//! Word precedence
//!
//!     A surface form should live in exactly one word set. Nothing prevents a grammar from
//!     listing it twice, so lookup resolves in the order keyword > built_in > literal and
//!     [GrammarDescriptor::validate] reports the overlap.

pub mod modes;

use crate::highlight::pattern::Pattern;
use crate::highlight::scope::Scope;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Errors found when validating a grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    EmptyName,
    EmptyAlias {
        language: String,
    },
    /// The same word sits in two word sets
    DuplicateWord {
        word: String,
        first: WordClass,
        second: WordClass,
    },
    /// The identifier pattern can never produce this word, so it is never classified
    UnmatchableWord {
        word: String,
        class: WordClass,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::EmptyName => write!(f, "Grammar has an empty name"),
            GrammarError::EmptyAlias { language } => {
                write!(f, "Grammar '{}' has an empty alias", language)
            }
            GrammarError::DuplicateWord {
                word,
                first,
                second,
            } => write!(f, "Word '{}' is listed as both {} and {}", word, first, second),
            GrammarError::UnmatchableWord { word, class } => write!(
                f,
                "{} word '{}' does not match the identifier pattern",
                class, word
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// The three word sets of a keyword table, in lookup precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Keyword,
    BuiltIn,
    Literal,
}

impl WordClass {
    pub const ALL: [WordClass; 3] = [WordClass::Keyword, WordClass::BuiltIn, WordClass::Literal];

    pub fn scope(&self) -> Scope {
        match self {
            WordClass::Keyword => Scope::Keyword,
            WordClass::BuiltIn => Scope::BuiltIn,
            WordClass::Literal => Scope::Literal,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.scope(), f)
    }
}

/// Serialized shape of a keyword table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeywordSets {
    #[serde(default)]
    keyword: BTreeSet<String>,
    #[serde(default)]
    built_in: BTreeSet<String>,
    #[serde(default)]
    literal: BTreeSet<String>,
}

/// Classified word sets with a precomputed lookup index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "KeywordSets", into = "KeywordSets")]
pub struct KeywordTable {
    sets: KeywordSets,
    index: HashMap<String, WordClass>,
    folded: HashMap<String, WordClass>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add whitespace-separated words to one set
    pub fn with_words(mut self, class: WordClass, words: &str) -> Self {
        self.insert_all(class, words.split_whitespace());
        self
    }

    pub fn insert_all<'a, I>(&mut self, class: WordClass, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set = self.set_mut(class);
        for word in words {
            set.insert(word.to_string());
        }
        self.reindex();
    }

    pub fn words(&self, class: WordClass) -> &BTreeSet<String> {
        match class {
            WordClass::Keyword => &self.sets.keyword,
            WordClass::BuiltIn => &self.sets.built_in,
            WordClass::Literal => &self.sets.literal,
        }
    }

    fn set_mut(&mut self, class: WordClass) -> &mut BTreeSet<String> {
        match class {
            WordClass::Keyword => &mut self.sets.keyword,
            WordClass::BuiltIn => &mut self.sets.built_in,
            WordClass::Literal => &mut self.sets.literal,
        }
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.folded.clear();
        for class in WordClass::ALL {
            let words = match class {
                WordClass::Keyword => &self.sets.keyword,
                WordClass::BuiltIn => &self.sets.built_in,
                WordClass::Literal => &self.sets.literal,
            };
            for word in words {
                self.index.entry(word.clone()).or_insert(class);
                self.folded.entry(word.to_lowercase()).or_insert(class);
            }
        }
    }

    /// Classify a word. Earlier classes in [WordClass::ALL] win on overlap.
    pub fn lookup(&self, word: &str, case_insensitive: bool) -> Option<WordClass> {
        if case_insensitive {
            self.folded.get(&word.to_lowercase()).copied()
        } else {
            self.index.get(word).copied()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn len(&self) -> usize {
        WordClass::ALL.iter().map(|c| self.words(*c).len()).sum()
    }

    /// Words listed in more than one set, with the set that wins and the one that loses
    pub fn duplicates(&self) -> Vec<(String, WordClass, WordClass)> {
        let mut found = Vec::new();
        for (i, first) in WordClass::ALL.iter().enumerate() {
            for second in &WordClass::ALL[i + 1..] {
                for word in self.words(*first).intersection(self.words(*second)) {
                    found.push((word.clone(), *first, *second));
                }
            }
        }
        found
    }
}

impl From<KeywordSets> for KeywordTable {
    fn from(sets: KeywordSets) -> Self {
        let mut table = KeywordTable {
            sets,
            index: HashMap::new(),
            folded: HashMap::new(),
        };
        table.reindex();
        table
    }
}

impl From<KeywordTable> for KeywordSets {
    fn from(table: KeywordTable) -> Self {
        table.sets
    }
}

impl PartialEq for KeywordTable {
    fn eq(&self, other: &Self) -> bool {
        self.sets.keyword == other.sets.keyword
            && self.sets.built_in == other.sets.built_in
            && self.sets.literal == other.sets.literal
    }
}

impl Eq for KeywordTable {}

/// One pattern-based instruction for recognizing and classifying a span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchRule {
    /// A single lexeme: comment, number, escape
    Lexeme(LexemeRule),
    /// A span between a begin and an end delimiter
    Region(RegionRule),
    /// A keyword-anchored header ending at a terminator, with a title inside
    Header(HeaderRule),
}

impl MatchRule {
    /// Scope of the tokens this rule produces, if any
    pub fn scope(&self) -> Option<Scope> {
        match self {
            MatchRule::Lexeme(rule) => rule.scope,
            MatchRule::Region(rule) => Some(rule.scope),
            MatchRule::Header(rule) => Some(rule.scope),
        }
    }
}

/// A plain lexical class. A rule without a scope consumes its match silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeRule {
    #[serde(default)]
    pub scope: Option<Scope>,
    pub pattern: Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRule {
    pub scope: Scope,
    pub variants: Vec<RegionVariant>,
    #[serde(default)]
    pub contains: Vec<MatchRule>,
}

/// One delimiter pair of a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionVariant {
    pub begin: Pattern,
    pub end: Pattern,
    /// Preferred over lower-relevance variants starting at the same position
    #[serde(default)]
    pub relevance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRule {
    pub scope: Scope,
    pub begin: Pattern,
    pub end: Pattern,
    /// Words classified inside the header (the anchor keyword)
    #[serde(default)]
    pub keywords: KeywordTable,
    pub title: TitleRule,
}

/// The name captured inside a header.
///
/// When the pattern has a group named `title`, only that group becomes the title token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    pub pattern: Pattern,
    #[serde(default)]
    pub relevance: u32,
    /// The title is closed by the header's terminator and never runs past it
    #[serde(default)]
    pub ends_with_parent: bool,
}

/// Declarative description of one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDescriptor {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub case_insensitive: bool,
    pub identifier: Pattern,
    #[serde(default)]
    pub keywords: KeywordTable,
    #[serde(default)]
    pub rules: Vec<MatchRule>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub mime_types: Vec<String>,
}

impl GrammarDescriptor {
    /// Classify a word against the keyword table, honoring case sensitivity
    pub fn classify(&self, word: &str) -> Option<WordClass> {
        self.keywords.lookup(word, self.case_insensitive)
    }

    /// Check the invariants the data itself cannot enforce.
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<GrammarError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(GrammarError::EmptyName);
        }
        if self.aliases.iter().any(|alias| alias.trim().is_empty()) {
            errors.push(GrammarError::EmptyAlias {
                language: self.name.clone(),
            });
        }

        for (word, first, second) in self.keywords.duplicates() {
            errors.push(GrammarError::DuplicateWord {
                word,
                first,
                second,
            });
        }

        for class in WordClass::ALL {
            for word in self.keywords.words(class) {
                if !self.identifier.matches_fully(word) {
                    errors.push(GrammarError::UnmatchableWord {
                        word: word.clone(),
                        class,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(keywords: KeywordTable) -> GrammarDescriptor {
        GrammarDescriptor {
            name: "test".into(),
            aliases: vec!["t".into()],
            case_insensitive: false,
            identifier: Pattern::new(r"[a-zA-Z_][a-zA-Z0-9_]*").unwrap(),
            keywords,
            rules: vec![],
            extensions: vec![],
            mime_types: vec![],
        }
    }

    #[test]
    fn test_lookup_by_class() {
        let table = KeywordTable::new()
            .with_words(WordClass::Keyword, "if else")
            .with_words(WordClass::BuiltIn, "print")
            .with_words(WordClass::Literal, "True");

        assert_eq!(table.lookup("if", false), Some(WordClass::Keyword));
        assert_eq!(table.lookup("print", false), Some(WordClass::BuiltIn));
        assert_eq!(table.lookup("True", false), Some(WordClass::Literal));
        assert_eq!(table.lookup("other", false), None);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_lookup_precedence_on_duplicates() {
        let table = KeywordTable::new()
            .with_words(WordClass::Literal, "both")
            .with_words(WordClass::BuiltIn, "both")
            .with_words(WordClass::Keyword, "both");
        assert_eq!(table.lookup("both", false), Some(WordClass::Keyword));

        let table = KeywordTable::new()
            .with_words(WordClass::Literal, "pair")
            .with_words(WordClass::BuiltIn, "pair");
        assert_eq!(table.lookup("pair", false), Some(WordClass::BuiltIn));
    }

    #[test]
    fn test_case_folding() {
        let table = KeywordTable::new().with_words(WordClass::Keyword, "Select");
        assert_eq!(table.lookup("SELECT", false), None);
        assert_eq!(table.lookup("SELECT", true), Some(WordClass::Keyword));
        assert_eq!(table.lookup("Select", false), Some(WordClass::Keyword));
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let grammar = descriptor(
            KeywordTable::new()
                .with_words(WordClass::Keyword, "print")
                .with_words(WordClass::BuiltIn, "print len"),
        );
        let errors = grammar.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![GrammarError::DuplicateWord {
                word: "print".into(),
                first: WordClass::Keyword,
                second: WordClass::BuiltIn,
            }]
        );
    }

    #[test]
    fn test_validate_reports_unmatchable_words() {
        let grammar = descriptor(KeywordTable::new().with_words(WordClass::Literal, "1st ok"));
        let errors = grammar.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![GrammarError::UnmatchableWord {
                word: "1st".into(),
                class: WordClass::Literal,
            }]
        );
    }

    #[test]
    fn test_validate_reports_empty_identity() {
        let mut grammar = descriptor(KeywordTable::new());
        grammar.name = " ".into();
        grammar.aliases.push(String::new());
        let errors = grammar.validate().unwrap_err();
        assert!(errors.contains(&GrammarError::EmptyName));
        assert!(errors.contains(&GrammarError::EmptyAlias {
            language: " ".into()
        }));
    }

    #[test]
    fn test_keyword_table_serde_rebuilds_index() {
        let table = KeywordTable::new()
            .with_words(WordClass::Keyword, "def")
            .with_words(WordClass::BuiltIn, "len");
        let json = serde_json::to_string(&table).unwrap();
        let back: KeywordTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
        assert_eq!(back.lookup("len", false), Some(WordClass::BuiltIn));
    }

    #[test]
    fn test_error_display() {
        let err = GrammarError::DuplicateWord {
            word: "x".into(),
            first: WordClass::Keyword,
            second: WordClass::Literal,
        };
        assert_eq!(err.to_string(), "Word 'x' is listed as both keyword and literal");
    }
}
