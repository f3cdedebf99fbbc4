//! Built-in languages

pub mod piyathon;

use crate::highlight::registry::LanguageRegistry;

/// Register every built-in language into `registry`
pub fn register_all(registry: &mut LanguageRegistry) {
    piyathon::register(Some(registry));
}
