//! Token dump formats
//!
//! Plain-text and JSON views of a token sequence, for inspecting what the engine produced.
//! These are diagnostics, not rendering: nothing here applies styles.

pub mod glossary;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use glossary::GlossaryFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
