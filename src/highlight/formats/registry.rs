//! Dump formats by name
//!
//!     Formats are looked up by the name given in `output.format` (or on the command line),
//!     ignoring case. An unknown name is an error that carries the names that would have
//!     worked, so a caller can report it without asking the registry again.
//!
//!     Custom formatters sit next to the built-in ones. Adding one under a taken name
//!     replaces the earlier formatter and hands it back.

use crate::highlight::config::OutputConfig;
use crate::highlight::token::Token;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat {
        name: String,
        available: Vec<String>,
    },
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "Unknown format '{}' (available: {})",
                name,
                available.join(", ")
            ),
            FormatError::Serialization(msg) => write!(f, "Could not serialize tokens: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// A way of dumping a token sequence as text
pub trait Formatter: Send + Sync {
    /// Lowercase name the format is selected by
    fn name(&self) -> &'static str;

    /// One line shown by `--list-formats`
    fn description(&self) -> &'static str;

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all
    pub fn empty() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// treeviz, json and glossary
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.add(super::TreevizFormatter);
        registry.add(super::JsonFormatter);
        registry.add(super::GlossaryFormatter);
        registry
    }

    /// Add a formatter, returning the one it replaces
    pub fn add<F: Formatter + 'static>(&mut self, formatter: F) -> Option<Box<dyn Formatter>> {
        self.formatters.insert(formatter.name(), Box::new(formatter))
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        let key = name.to_ascii_lowercase();
        self.formatters
            .get(key.as_str())
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Format names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.formatters.keys().map(|name| name.to_string()).collect()
    }

    /// `(name, description)` pairs in sorted order
    pub fn describe(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .values()
            .map(|formatter| (formatter.name(), formatter.description()))
    }

    pub fn render(&self, tokens: &[Token<'_>], format: &str) -> Result<String, FormatError> {
        self.resolve(format)?.render(tokens)
    }

    /// Render in the format selected by `output.format`
    pub fn render_configured(
        &self,
        tokens: &[Token<'_>],
        output: &OutputConfig,
    ) -> Result<String, FormatError> {
        self.render(tokens, &output.format)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::scope::Scope;

    struct CountFormatter;

    impl Formatter for CountFormatter {
        fn name(&self) -> &'static str {
            "json"
        }

        fn description(&self) -> &'static str {
            "Token count"
        }

        fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
            Ok(tokens.len().to_string())
        }
    }

    fn sample() -> Vec<Token<'static>> {
        vec![Token::new(Scope::Identifier, 0..1, "x")]
    }

    #[test]
    fn test_builtin_names_are_sorted() {
        assert_eq!(
            FormatRegistry::builtin().names(),
            vec!["glossary", "json", "treeviz"]
        );
        assert!(FormatRegistry::empty().names().is_empty());
    }

    #[test]
    fn test_unknown_format_lists_the_alternatives() {
        let registry = FormatRegistry::builtin();
        let err = registry.render(&sample(), "html").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnknownFormat {
                name: "html".into(),
                available: vec!["glossary".into(), "json".into(), "treeviz".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown format 'html' (available: glossary, json, treeviz)"
        );
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let registry = FormatRegistry::builtin();
        assert_eq!(registry.resolve("TreeViz").map(|f| f.name()), Ok("treeviz"));
    }

    #[test]
    fn test_add_replaces_and_returns_previous() {
        let mut registry = FormatRegistry::builtin();
        let previous = registry.add(CountFormatter);
        assert_eq!(previous.map(|f| f.description()), Some("Tokens as a JSON array"));
        assert_eq!(registry.render(&sample(), "json").unwrap(), "1");
        assert_eq!(registry.names().len(), 3);
    }

    #[test]
    fn test_render_configured_follows_output_format() {
        let registry = FormatRegistry::builtin();
        let output = OutputConfig {
            format: "treeviz".into(),
        };
        assert_eq!(
            registry.render_configured(&sample(), &output).unwrap(),
            "◦ identifier 0..1 \"x\""
        );
    }

    #[test]
    fn test_describe_pairs_names_with_descriptions() {
        let registry = FormatRegistry::builtin();
        let described: Vec<_> = registry.describe().map(|(name, _)| name).collect();
        assert_eq!(described, vec!["glossary", "json", "treeviz"]);
        assert!(registry.describe().all(|(_, description)| !description.is_empty()));
    }
}
