//! Grammar descriptors stored as files
//!
//! A grammar file is a serialized [GrammarDescriptor] in YAML (`.yaml`, `.yml`) or JSON
//! (`.json`). Patterns are written as regex source strings and compiled on load.
//!
//! ```yaml
//! name: Mini
//! aliases: [mini]
//! identifier: "[a-z_][a-z0-9_]*"
//! keywords:
//!   keyword: [if, else]
//! rules:
//!   - kind: lexeme
//!     scope: comment
//!     pattern: "#[^\\n]*"
//! ```

use crate::highlight::grammar::{GrammarDescriptor, GrammarError};
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum GrammarFileError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
    Invalid(Vec<GrammarError>),
}

impl fmt::Display for GrammarFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarFileError::Io(err) => write!(f, "IO error: {}", err),
            GrammarFileError::Yaml(err) => write!(f, "Invalid YAML grammar: {}", err),
            GrammarFileError::Json(err) => write!(f, "Invalid JSON grammar: {}", err),
            GrammarFileError::UnsupportedFormat(path) => {
                write!(f, "Unsupported grammar file format: {}", path)
            }
            GrammarFileError::Invalid(errors) => {
                write!(f, "Grammar failed validation:")?;
                for err in errors {
                    write!(f, "\n  - {}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GrammarFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarFileError::Io(err) => Some(err),
            GrammarFileError::Yaml(err) => Some(err),
            GrammarFileError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GrammarFileError {
    fn from(err: std::io::Error) -> Self {
        GrammarFileError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarFormat {
    Yaml,
    Json,
}

impl GrammarFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(GrammarFormat::Yaml),
            "json" => Some(GrammarFormat::Json),
            _ => None,
        }
    }
}

/// Parse a grammar from text in the given format
pub fn parse(text: &str, format: GrammarFormat) -> Result<GrammarDescriptor, GrammarFileError> {
    match format {
        GrammarFormat::Yaml => serde_yaml::from_str(text).map_err(GrammarFileError::Yaml),
        GrammarFormat::Json => serde_json::from_str(text).map_err(GrammarFileError::Json),
    }
}

/// Serialize a grammar to text in the given format
pub fn to_string(
    grammar: &GrammarDescriptor,
    format: GrammarFormat,
) -> Result<String, GrammarFileError> {
    match format {
        GrammarFormat::Yaml => serde_yaml::to_string(grammar).map_err(GrammarFileError::Yaml),
        GrammarFormat::Json => {
            serde_json::to_string_pretty(grammar).map_err(GrammarFileError::Json)
        }
    }
}

/// Load a grammar file, choosing the format from its extension
pub fn load(path: impl AsRef<Path>) -> Result<GrammarDescriptor, GrammarFileError> {
    let path = path.as_ref();
    let format = GrammarFormat::from_path(path)
        .ok_or_else(|| GrammarFileError::UnsupportedFormat(path.display().to_string()))?;
    let text = std::fs::read_to_string(path)?;
    let grammar = parse(&text, format)?;
    tracing::info!(path = %path.display(), language = %grammar.name, "loaded grammar file");
    Ok(grammar)
}

/// Load a grammar file and reject it if it fails validation
pub fn load_validated(path: impl AsRef<Path>) -> Result<GrammarDescriptor, GrammarFileError> {
    let grammar = load(path)?;
    grammar.validate().map_err(GrammarFileError::Invalid)?;
    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::languages::piyathon;

    const MINI: &str = r##"
name: Mini
aliases: [mini]
identifier: "[a-z_][a-z0-9_]*"
keywords:
  keyword: [if, else]
  built_in: [print]
rules:
  - kind: lexeme
    scope: comment
    pattern: "#[^\\n]*"
  - kind: region
    scope: string
    variants:
      - begin: "'"
        end: "'"
"##;

    #[test]
    fn test_parse_yaml() {
        let grammar = parse(MINI, GrammarFormat::Yaml).unwrap();
        assert_eq!(grammar.name, "Mini");
        assert_eq!(grammar.rules.len(), 2);
        assert!(!grammar.case_insensitive);
        assert_eq!(grammar.classify("print"), Some(crate::highlight::WordClass::BuiltIn));
        assert_eq!(grammar.validate(), Ok(()));
    }

    #[test]
    fn test_piyathon_roundtrips_through_both_formats() {
        let original = piyathon::grammar();
        for format in [GrammarFormat::Yaml, GrammarFormat::Json] {
            let text = to_string(&original, format).unwrap();
            assert_eq!(parse(&text, format).unwrap(), original);
        }
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let text = MINI.replace("[a-z_][a-z0-9_]*", "[a-z");
        let err = parse(&text, GrammarFormat::Yaml).unwrap_err();
        assert!(matches!(err, GrammarFileError::Yaml(_)));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(GrammarFormat::from_path(Path::new("a.yml")), Some(GrammarFormat::Yaml));
        assert_eq!(GrammarFormat::from_path(Path::new("a.JSON")), Some(GrammarFormat::Json));
        assert_eq!(GrammarFormat::from_path(Path::new("a.toml")), None);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = load("grammar.txt").unwrap_err();
        assert!(matches!(err, GrammarFileError::UnsupportedFormat(_)));
    }
}
