//! Main module for highlighting functionality

pub mod config;
pub mod engine;
pub mod formats;
pub mod grammar;
pub mod grammar_file;
pub mod languages;
pub mod pattern;
pub mod registry;
pub mod scope;
pub mod token;

pub use engine::{tokenize, HighlightError, Highlighter, Tokens};
pub use grammar::{GrammarDescriptor, GrammarError, KeywordTable, MatchRule, WordClass};
pub use languages::piyathon;
pub use registry::LanguageRegistry;
pub use scope::Scope;
pub use token::Token;
