//! Placeholder token scanning and key derivation

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::normalize_field_key;

lazy_static! {
    /// One `[` ... `]` pair with no brackets inside
    pub(crate) static ref PLACEHOLDER_PATTERN: Regex = Regex::new(r"\[[^\[\]]+\]").unwrap();
}

/// A placeholder token found in a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Token exactly as written, brackets included (e.g. `[Employee Name]`)
    pub token: String,
    /// Lookup key into the field values (e.g. `employee_name`)
    pub key: String,
}

/// Distinct placeholder tokens in order of first appearance
pub fn extract_placeholders(template: &str) -> Vec<Placeholder> {
    let mut seen = HashSet::new();

    PLACEHOLDER_PATTERN
        .find_iter(template)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .map(|token| Placeholder {
            token: token.to_string(),
            key: placeholder_key(token),
        })
        .collect()
}

/// Derive the lookup key for a token: strip the brackets, lowercase, and
/// join whitespace runs with `_`.
pub fn placeholder_key(token: &str) -> String {
    let inner = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(token);
    normalize_field_key(inner)
}
