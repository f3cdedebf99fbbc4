//! Rule-based tokenizer
//!
//!     The engine interprets a [GrammarDescriptor] over a source string. It keeps no state
//!     between scans and never mutates the grammar, so one grammar can serve any number of
//!     concurrent scans.
//!
//! Scanning
//!
//!     From the cursor, the engine looks for the earliest position where some rule's begin
//!     pattern matches. On a tie the rule declared first wins; between the variants of one
//!     region, the higher relevance and then the longer delimiter win (so `'''` beats `'`).
//!
//!     Text before that position is split into words with the grammar's identifier pattern.
//!     Words found in the keyword table take its scope, other words are `identifier`, and the
//!     rest is `plain`.
//!
//!     A region or header rule then scans its own body: its nested rules (and title) are tried
//!     before its end pattern at the same position, recursively. A region without a closing
//!     match runs to the end of input.
//!
//!     Top-level tokens tile the input: their texts concatenate back to the source. Empty
//!     matches are never accepted, so every step moves the cursor forward.

use crate::highlight::config::HighlightConfig;
use crate::highlight::grammar::{GrammarDescriptor, KeywordTable, MatchRule, TitleRule};
use crate::highlight::grammar_file::{self, GrammarFileError};
use crate::highlight::languages;
use crate::highlight::pattern::Pattern;
use crate::highlight::registry::LanguageRegistry;
use crate::highlight::scope::Scope;
use crate::highlight::token::Token;
use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

/// Errors raised when highlighting through a [Highlighter]
#[derive(Debug)]
pub enum HighlightError {
    UnknownLanguage(String),
    Config(config::ConfigError),
    GrammarFile(GrammarFileError),
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::UnknownLanguage(name) => write!(f, "Unknown language '{}'", name),
            HighlightError::Config(err) => write!(f, "Configuration error: {}", err),
            HighlightError::GrammarFile(err) => write!(f, "Grammar file error: {}", err),
        }
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighlightError::UnknownLanguage(_) => None,
            HighlightError::Config(err) => Some(err),
            HighlightError::GrammarFile(err) => Some(err),
        }
    }
}

impl From<config::ConfigError> for HighlightError {
    fn from(err: config::ConfigError) -> Self {
        HighlightError::Config(err)
    }
}

impl From<GrammarFileError> for HighlightError {
    fn from(err: GrammarFileError) -> Self {
        HighlightError::GrammarFile(err)
    }
}

/// Tokenize `source` with `grammar`.
///
/// The returned iterator is lazy: each call to `next` scans only as far as needed.
pub fn tokenize<'g, 's>(grammar: &'g GrammarDescriptor, source: &'s str) -> Tokens<'g, 's> {
    tracing::trace!(language = %grammar.name, bytes = source.len(), "scan started");
    Tokens {
        scan: Scan { grammar, source },
        rules: RuleSet::new(&grammar.rules),
        cursor: 0,
        pending: VecDeque::new(),
    }
}

/// Lazy sequence of top-level tokens
pub struct Tokens<'g, 's> {
    scan: Scan<'g, 's>,
    rules: RuleSet<'g>,
    cursor: usize,
    pending: VecDeque<Token<'s>>,
}

impl<'g, 's> Tokens<'g, 's> {
    /// Byte offset up to which the source has been consumed
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn step(&mut self) {
        let source = self.scan.source;
        let Some((alt, begin)) = self.rules.next_match(source, self.cursor) else {
            let gap = self.cursor..source.len();
            self.pending.extend(self.scan.gap_tokens(gap));
            self.cursor = source.len();
            return;
        };

        // A word that starts before the rule and runs into it is consumed whole
        if let Some(word_end) = self.scan.word_across(self.cursor, begin.start) {
            let gap = self.cursor..word_end;
            self.pending.extend(self.scan.gap_tokens(gap));
            self.cursor = word_end;
            return;
        }

        let gap = self.cursor..begin.start;
        self.pending.extend(self.scan.gap_tokens(gap));

        let (rule, variant) = self.rules.rule_of(alt);
        let start = begin.start;
        let (token, end) = self.scan.apply(rule, variant, begin);
        // Rules without a scope still occupy their span at the top level.
        let token = token.unwrap_or_else(|| Token::new(Scope::Plain, start..end, source));
        self.pending.push_back(token);
        self.cursor = end;
    }
}

impl<'g, 's> Iterator for Tokens<'g, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.cursor >= self.scan.source.len() {
                return None;
            }
            self.step();
        }
    }
}

/// One way a rule can begin: the rule itself, or one variant of a region
struct Alternative<'g> {
    rule: &'g MatchRule,
    rule_index: usize,
    variant: usize,
    begin: &'g Pattern,
    relevance: u32,
}

/// Ordered rules with a cache of each alternative's next match.
///
/// A cached match stays valid while the cursor has not moved past its start, which keeps
/// repeated searches over one level linear in the input.
struct RuleSet<'g> {
    alternatives: Vec<Alternative<'g>>,
    cache: Vec<Option<Option<Range<usize>>>>,
}

impl<'g> RuleSet<'g> {
    fn new(rules: &'g [MatchRule]) -> Self {
        let mut alternatives = Vec::new();
        for (rule_index, rule) in rules.iter().enumerate() {
            match rule {
                MatchRule::Lexeme(lexeme) => alternatives.push(Alternative {
                    rule,
                    rule_index,
                    variant: 0,
                    begin: &lexeme.pattern,
                    relevance: 0,
                }),
                MatchRule::Region(region) => {
                    for (variant, v) in region.variants.iter().enumerate() {
                        alternatives.push(Alternative {
                            rule,
                            rule_index,
                            variant,
                            begin: &v.begin,
                            relevance: v.relevance,
                        });
                    }
                }
                MatchRule::Header(header) => alternatives.push(Alternative {
                    rule,
                    rule_index,
                    variant: 0,
                    begin: &header.begin,
                    relevance: 0,
                }),
            }
        }
        let cache = vec![None; alternatives.len()];
        RuleSet {
            alternatives,
            cache,
        }
    }

    fn rule_of(&self, alt: usize) -> (&'g MatchRule, usize) {
        let alternative = &self.alternatives[alt];
        (alternative.rule, alternative.variant)
    }

    /// The winning alternative at the earliest position at or after `from`
    fn next_match(&mut self, source: &str, from: usize) -> Option<(usize, Range<usize>)> {
        let mut best: Option<(usize, Range<usize>)> = None;
        for (i, alternative) in self.alternatives.iter().enumerate() {
            let fresh = match &self.cache[i] {
                Some(Some(range)) => range.start >= from,
                Some(None) => true,
                None => false,
            };
            if !fresh {
                self.cache[i] = Some(alternative.begin.find_from(source, from));
            }
            let Some(Some(range)) = self.cache[i].clone() else {
                continue;
            };
            let better = match &best {
                None => true,
                Some((j, current)) => {
                    let other = &self.alternatives[*j];
                    let key = (
                        range.start,
                        alternative.rule_index,
                        std::cmp::Reverse(alternative.relevance),
                        std::cmp::Reverse(range.len()),
                    );
                    let current_key = (
                        current.start,
                        other.rule_index,
                        std::cmp::Reverse(other.relevance),
                        std::cmp::Reverse(current.len()),
                    );
                    key < current_key
                }
            };
            if better {
                best = Some((i, range));
            }
        }
        best
    }
}

/// The last result of one search, reused while the cursor has not passed its start.
///
/// A search that found nothing stays empty: nothing can match later in the same text.
struct Lookahead<T> {
    cached: Option<Option<T>>,
}

impl<T> Default for Lookahead<T> {
    fn default() -> Self {
        Lookahead { cached: None }
    }
}

impl<T: Clone> Lookahead<T> {
    fn get(
        &mut self,
        pos: usize,
        start: impl Fn(&T) -> usize,
        search: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        let fresh = match &self.cached {
            Some(Some(found)) => start(found) >= pos,
            Some(None) => true,
            None => false,
        };
        if !fresh {
            self.cached = Some(search());
        }
        self.cached.clone().flatten()
    }
}

/// What ends the body of a region or header, and what may appear inside it
struct Body<'g> {
    end: &'g Pattern,
    contains: &'g [MatchRule],
    keywords: Option<&'g KeywordTable>,
    title: Option<&'g TitleRule>,
}

enum Next<'g> {
    Rule(usize, Range<usize>),
    Title(&'g TitleRule, Range<usize>, Range<usize>),
    End(Range<usize>),
}

impl<'g> Next<'g> {
    /// Sort key: position first, then nested rules, title, and end in that order
    fn key(&self) -> (usize, u8) {
        match self {
            Next::Rule(_, range) => (range.start, 0),
            Next::Title(_, whole, _) => (whole.start, 1),
            Next::End(range) => (range.start, 2),
        }
    }
}

struct Scan<'g, 's> {
    grammar: &'g GrammarDescriptor,
    source: &'s str,
}

impl<'g, 's> Scan<'g, 's> {
    /// Apply a rule whose begin matched `begin`. Returns its token, if the rule has a scope,
    /// and the byte offset where it ends.
    fn apply(
        &self,
        rule: &'g MatchRule,
        variant: usize,
        begin: Range<usize>,
    ) -> (Option<Token<'s>>, usize) {
        match rule {
            MatchRule::Lexeme(lexeme) => {
                let token = lexeme
                    .scope
                    .map(|scope| Token::new(scope, begin.clone(), self.source));
                (token, begin.end)
            }
            MatchRule::Region(region) => {
                let body = Body {
                    end: &region.variants[variant].end,
                    contains: &region.contains,
                    keywords: None,
                    title: None,
                };
                let (children, end) = self.body(begin.end, body);
                let token =
                    Token::new(region.scope, begin.start..end, self.source).with_children(children);
                (Some(token), end)
            }
            MatchRule::Header(header) => {
                let mut children = Vec::new();
                self.classified_words(begin.clone(), &header.keywords, &mut children);
                let body = Body {
                    end: &header.end,
                    contains: &[],
                    keywords: Some(&header.keywords),
                    title: Some(&header.title),
                };
                let (inner, end) = self.body(begin.end, body);
                children.extend(inner);
                let token =
                    Token::new(header.scope, begin.start..end, self.source).with_children(children);
                (Some(token), end)
            }
        }
    }

    /// Scan from `from` until the body's end pattern, collecting nested tokens
    fn body(&self, from: usize, body: Body<'g>) -> (Vec<Token<'s>>, usize) {
        let source = self.source;
        let mut rules = RuleSet::new(body.contains);
        let mut title = body.title;
        let mut children = Vec::new();
        let mut pos = from;
        let mut end_match: Lookahead<Range<usize>> = Lookahead::default();
        let mut title_match: Lookahead<(Range<usize>, Range<usize>)> = Lookahead::default();

        loop {
            let end = end_match.get(pos, |r| r.start, || body.end.find_from(source, pos));
            let mut candidates: Vec<Next<'g>> = Vec::with_capacity(3);
            if let Some((alt, range)) = rules.next_match(source, pos) {
                candidates.push(Next::Rule(alt, range));
            }
            if let Some(rule) = title {
                let found = title_match.get(
                    pos,
                    |(whole, _)| whole.start,
                    || rule.pattern.find_group_from(source, pos, "title"),
                );
                if let Some((whole, name)) = found {
                    candidates.push(Next::Title(rule, whole, name));
                }
            }
            if let Some(range) = end.clone() {
                candidates.push(Next::End(range));
            }

            let Some(next) = candidates.into_iter().min_by_key(|c| c.key()) else {
                self.body_words(pos..source.len(), &body, &mut children);
                return (children, source.len());
            };

            match next {
                Next::End(range) => {
                    self.body_words(pos..range.start, &body, &mut children);
                    return (children, range.end);
                }
                Next::Rule(alt, range) => {
                    self.body_words(pos..range.start, &body, &mut children);
                    let (rule, variant) = rules.rule_of(alt);
                    let (token, stop) = self.apply(rule, variant, range);
                    children.extend(token);
                    pos = stop;
                }
                Next::Title(rule, whole, mut name) => {
                    self.body_words(pos..whole.start, &body, &mut children);
                    let mut stop = whole.end;
                    if rule.ends_with_parent {
                        if let Some(terminator) = end.filter(|e| e.start < whole.end) {
                            stop = terminator.start;
                            name.end = name.end.min(stop);
                        }
                    }
                    if name.start < name.end {
                        children.push(Token::new(Scope::Title, name, source));
                    }
                    pos = stop;
                    title = None;
                }
            }
        }
    }

    fn body_words(&self, gap: Range<usize>, body: &Body<'g>, out: &mut Vec<Token<'s>>) {
        if let Some(keywords) = body.keywords {
            self.classified_words(gap, keywords, out);
        }
    }

    /// Words in `gap` that `keywords` classifies; everything else is dropped
    fn classified_words(
        &self,
        gap: Range<usize>,
        keywords: &KeywordTable,
        out: &mut Vec<Token<'s>>,
    ) {
        let case_insensitive = self.grammar.case_insensitive;
        for word in self.words(gap) {
            if let Some(class) = keywords.lookup(&self.source[word.clone()], case_insensitive) {
                out.push(Token::new(class.scope(), word, self.source));
            }
        }
    }

    /// Tokens covering `gap` exactly: classified words, identifiers, and plain text between
    fn gap_tokens(&self, gap: Range<usize>) -> Vec<Token<'s>> {
        let mut tokens = Vec::new();
        let mut pos = gap.start;
        for word in self.words(gap.clone()) {
            if pos < word.start {
                tokens.push(Token::new(Scope::Plain, pos..word.start, self.source));
            }
            let scope = self
                .grammar
                .classify(&self.source[word.clone()])
                .map(|class| class.scope())
                .unwrap_or(Scope::Identifier);
            pos = word.end;
            tokens.push(Token::new(scope, word, self.source));
        }
        if pos < gap.end {
            tokens.push(Token::new(Scope::Plain, pos..gap.end, self.source));
        }
        tokens
    }

    /// End of the word that starts at or after `from`, before `at`, and runs past `at`
    fn word_across(&self, from: usize, at: usize) -> Option<usize> {
        self.grammar
            .identifier
            .regex()
            .find_iter(&self.source[from..])
            .map(|m| m.start() + from..m.end() + from)
            .take_while(|word| word.start < at)
            .find(|word| word.end > at)
            .map(|word| word.end)
    }

    /// Identifier-pattern matches inside `gap`, in source offsets
    fn words(&self, gap: Range<usize>) -> Vec<Range<usize>> {
        if gap.is_empty() {
            return Vec::new();
        }
        let offset = gap.start;
        self.grammar
            .identifier
            .regex()
            .find_iter(&self.source[gap])
            .filter(|m| !m.range().is_empty())
            .map(|m| m.start() + offset..m.end() + offset)
            .collect()
    }
}

/// Tokenizer front end owning a registry of languages
pub struct Highlighter {
    registry: LanguageRegistry,
}

impl Highlighter {
    pub fn new(registry: LanguageRegistry) -> Self {
        Highlighter { registry }
    }

    /// Highlighter with the built-in languages registered
    pub fn with_defaults() -> Self {
        Highlighter::new(LanguageRegistry::with_defaults())
    }

    /// Build a highlighter from configuration: built-in languages, then the configured
    /// grammar files (validated first when `engine.validate_grammars` is set).
    pub fn from_config(config: &HighlightConfig) -> Result<Self, HighlightError> {
        let mut registry = LanguageRegistry::new();
        languages::register_all(&mut registry);
        for path in &config.engine.grammar_files {
            let grammar = if config.engine.validate_grammars {
                grammar_file::load_validated(path)?
            } else {
                grammar_file::load(path)?
            };
            let name = grammar.name.clone();
            registry.register(&name, grammar);
        }
        Ok(Highlighter::new(registry))
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LanguageRegistry {
        &mut self.registry
    }

    pub fn grammar(&self, language: &str) -> Result<&Arc<GrammarDescriptor>, HighlightError> {
        self.registry
            .get(language)
            .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))
    }

    /// Tokenize `source` in the named language (name or alias)
    pub fn highlight<'a, 's>(
        &'a self,
        language: &str,
        source: &'s str,
    ) -> Result<Tokens<'a, 's>, HighlightError> {
        let grammar = self.grammar(language)?;
        Ok(tokenize(grammar, source))
    }

    /// Tokenize `source` in the language associated with `path`'s extension
    pub fn highlight_path<'a, 's>(
        &'a self,
        path: &Path,
        source: &'s str,
    ) -> Result<Tokens<'a, 's>, HighlightError> {
        let grammar = self
            .registry
            .find_by_path(path)
            .ok_or_else(|| HighlightError::UnknownLanguage(path.display().to_string()))?;
        Ok(tokenize(grammar, source))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::grammar::modes;
    use crate::highlight::grammar::WordClass;

    fn grammar() -> GrammarDescriptor {
        GrammarDescriptor {
            name: "mini".into(),
            aliases: vec![],
            case_insensitive: false,
            identifier: modes::identifier(),
            keywords: KeywordTable::new()
                .with_words(WordClass::Keyword, "if")
                .with_words(WordClass::BuiltIn, "len")
                .with_words(WordClass::Literal, "None"),
            rules: vec![
                modes::hash_comment(),
                modes::number(),
                modes::python_string(),
                modes::block_header(Scope::Function, "def"),
            ],
            extensions: vec![],
            mime_types: vec![],
        }
    }

    fn scopes(tokens: &[Token<'_>]) -> Vec<(Scope, String)> {
        tokens
            .iter()
            .map(|t| (t.scope, t.text.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let g = grammar();
        assert_eq!(tokenize(&g, "").count(), 0);
    }

    #[test]
    fn test_words_and_plain_text() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "if len(x) None").collect();
        assert_eq!(
            scopes(&tokens),
            vec![
                (Scope::Keyword, "if".into()),
                (Scope::Plain, " ".into()),
                (Scope::BuiltIn, "len".into()),
                (Scope::Plain, "(".into()),
                (Scope::Identifier, "x".into()),
                (Scope::Plain, ") ".into()),
                (Scope::Literal, "None".into()),
            ]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "x # note\ny").collect();
        assert_eq!(
            scopes(&tokens),
            vec![
                (Scope::Identifier, "x".into()),
                (Scope::Plain, " ".into()),
                (Scope::Comment, "# note".into()),
                (Scope::Plain, "\n".into()),
                (Scope::Identifier, "y".into()),
            ]
        );
    }

    #[test]
    fn test_number_inside_word_is_not_a_number() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "x1 2.5").collect();
        assert_eq!(
            scopes(&tokens),
            vec![
                (Scope::Identifier, "x1".into()),
                (Scope::Plain, " ".into()),
                (Scope::Number, "2.5".into()),
            ]
        );
    }

    #[test]
    fn test_triple_quote_beats_single_quote() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "'''a ' b'''").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::String);
        assert_eq!(tokens[0].text, "'''a ' b'''");
    }

    #[test]
    fn test_triple_double_quote_beats_double_quote() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, r#""""ab " c""""#).collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::String);
        assert_eq!(tokens[0].text, r#""""ab " c""""#);
    }

    #[test]
    fn test_rule_starting_inside_a_word_does_not_split_it() {
        // ฿ is an identifier character but not a regex word character, so `\b` holds after it
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "฿def x: ฿1").collect();
        assert_eq!(
            scopes(&tokens),
            vec![
                (Scope::Identifier, "฿def".into()),
                (Scope::Plain, " ".into()),
                (Scope::Identifier, "x".into()),
                (Scope::Plain, ": ".into()),
                (Scope::Identifier, "฿1".into()),
            ]
        );
    }

    #[test]
    fn test_rule_at_word_start_still_wins() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "฿ 12").collect();
        assert_eq!(
            scopes(&tokens),
            vec![
                (Scope::Identifier, "฿".into()),
                (Scope::Plain, " ".into()),
                (Scope::Number, "12".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_with_many_escapes() {
        let g = grammar();
        let source = format!("'{}", "\\n".repeat(50_000));
        let tokens: Vec<_> = tokenize(&g, &source).collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::String);
        assert_eq!(tokens[0].range, 0..source.len());
    }

    #[test]
    fn test_lookahead_reuses_result_until_passed() {
        let mut lookahead: Lookahead<Range<usize>> = Lookahead::default();
        let mut searches = 0;
        let mut search = |pos: usize| {
            lookahead.get(pos, |r| r.start, || {
                searches += 1;
                Some(10..11)
            })
        };
        assert_eq!(search(0), Some(10..11));
        assert_eq!(search(5), Some(10..11));
        assert_eq!(search(10), Some(10..11));
        assert_eq!(search(11), Some(10..11));
        drop(search);
        assert_eq!(searches, 2);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, r#""a\"b" c"#).collect();
        assert_eq!(tokens[0].scope, Scope::String);
        assert_eq!(tokens[0].text, r#""a\"b""#);
        // Escapes have no scope, so the string has no children
        assert!(tokens[0].children.is_empty());
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "x = 'open\nstill").collect();
        let last = tokens.last().unwrap();
        assert_eq!(last.scope, Scope::String);
        assert_eq!(last.text, "'open\nstill");
    }

    #[test]
    fn test_header_with_title() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "def run(a, b): pass").collect();
        let header = &tokens[0];
        assert_eq!(header.scope, Scope::Function);
        assert_eq!(header.text, "def run(a, b):");
        assert_eq!(
            scopes(&header.children),
            vec![(Scope::Keyword, "def".into()), (Scope::Title, "run".into())]
        );
    }

    #[test]
    fn test_header_without_terminator_runs_to_end() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "def broken(").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "def broken(");
        assert_eq!(tokens[0].find_child(Scope::Title).unwrap().text, "broken");
    }

    #[test]
    fn test_header_terminator_before_title() {
        let g = grammar();
        let tokens: Vec<_> = tokenize(&g, "def: x").collect();
        assert_eq!(tokens[0].text, "def:");
        assert_eq!(tokens[0].find_child(Scope::Title), None);
    }

    #[test]
    fn test_tokens_tile_the_source() {
        let g = grammar();
        let source = "def f(x):\n    # c\n    return len('s\\'') + 10 if x else None\n";
        let joined: String = tokenize(&g, source).map(|t| t.text).collect();
        assert_eq!(joined, source);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut g = grammar();
        g.case_insensitive = true;
        let tokens: Vec<_> = tokenize(&g, "IF").collect();
        assert_eq!(tokens[0].scope, Scope::Keyword);
    }

    #[test]
    fn test_iterator_is_lazy() {
        let g = grammar();
        let mut tokens = tokenize(&g, "a b c");
        assert_eq!(tokens.position(), 0);
        let first = tokens.next().unwrap();
        assert_eq!(first.text, "a");
        assert_eq!(tokens.position(), 5);
    }

    #[test]
    fn test_highlighter_unknown_language() {
        let highlighter = Highlighter::new(LanguageRegistry::new());
        let err = highlighter.highlight("nope", "x").err().unwrap();
        assert_eq!(err.to_string(), "Unknown language 'nope'");
    }
}
