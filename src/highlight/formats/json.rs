//! JSON formatter for token sequences

use super::registry::{FormatError, Formatter};
use crate::highlight::token::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Tokens as a JSON array"
    }
}
