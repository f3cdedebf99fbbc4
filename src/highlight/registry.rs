//! Language registry
//!
//! Holds grammar descriptors keyed by language name, with aliases and file extensions
//! resolving to the same entry. A registry is an ordinary value: each [Highlighter] owns its
//! own, so independent instances can hold different grammars.
//!
//! Names, aliases and extensions are matched case-insensitively.
//!
//! [Highlighter]: crate::highlight::engine::Highlighter

use crate::highlight::grammar::GrammarDescriptor;
use crate::highlight::languages;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of grammar descriptors
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<GrammarDescriptor>>,
    aliases: HashMap<String, String>,
    extensions: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in languages
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        languages::register_all(&mut registry);
        registry
    }

    /// Register a grammar under `name`.
    ///
    /// Registering a name again replaces the earlier grammar, along with the aliases and
    /// extensions it brought.
    pub fn register(&mut self, name: &str, grammar: GrammarDescriptor) {
        let key = name.to_lowercase();
        self.aliases.retain(|_, target| *target != key);
        self.extensions.retain(|_, target| *target != key);

        for alias in &grammar.aliases {
            let alias = alias.to_lowercase();
            if alias != key {
                self.aliases.insert(alias, key.clone());
            }
        }
        for extension in &grammar.extensions {
            self.extensions
                .insert(extension.trim_start_matches('.').to_lowercase(), key.clone());
        }

        tracing::debug!(
            language = %key,
            aliases = ?grammar.aliases,
            "registered language"
        );
        self.languages.insert(key, Arc::new(grammar));
        tracing::debug!(languages = ?self.list_languages(), "known languages");
    }

    /// Look up a grammar by name or alias
    pub fn get(&self, name: &str) -> Option<&Arc<GrammarDescriptor>> {
        let key = name.to_lowercase();
        self.languages.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|target| self.languages.get(target))
        })
    }

    /// Check if a language exists under this name or alias
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a grammar by file extension (with or without the leading dot)
    pub fn find_by_extension(&self, extension: &str) -> Option<&Arc<GrammarDescriptor>> {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.extensions
            .get(&key)
            .and_then(|target| self.languages.get(target))
    }

    /// Look up a grammar by the extension of `path`
    pub fn find_by_path(&self, path: &Path) -> Option<&Arc<GrammarDescriptor>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.find_by_extension(ext))
    }

    /// Look up a grammar by MIME type
    pub fn find_by_mime_type(&self, mime_type: &str) -> Option<&Arc<GrammarDescriptor>> {
        self.languages
            .values()
            .find(|grammar| grammar.mime_types.iter().any(|m| m.eq_ignore_ascii_case(mime_type)))
    }

    /// List all registered language names (sorted)
    pub fn list_languages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.languages.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over registered grammars, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<GrammarDescriptor>)> {
        let mut entries: Vec<_> = self
            .languages
            .iter()
            .map(|(name, grammar)| (name.as_str(), grammar))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
