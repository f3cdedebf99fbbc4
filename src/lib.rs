//! # piyathon-highlight
//!
//! Syntax-highlighting grammar for Piyathon, the Thai-keyword variant of Python, together
//! with the small rule-based tokenizer that interprets it.
//!
//! The grammar is data: word lists and ordered match rules, see
//! [grammar](highlight::grammar). The engine in [engine](highlight::engine) scans text with
//! a grammar and lazily yields classified tokens. Languages are kept in an explicit
//! [LanguageRegistry](highlight::registry::LanguageRegistry) rather than process-wide state.

pub mod highlight;
