//! Form schemas for document categories
//!
//! Each category has a list of fields the user fills in before the editor
//! opens. Field labels are turned into lookup keys with
//! [`normalize_field_key`] so that `"Employee Name"` submits as
//! `employee_name`.

use serde::{Deserialize, Serialize};

use crate::types::FieldValues;

/// HTML input type used to render a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Date,
    Number,
    Email,
    Textarea,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Date => "date",
            InputType::Number => "number",
            InputType::Email => "email",
            InputType::Textarea => "textarea",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input on a category form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub label: String,
    #[serde(default)]
    pub input_type: InputType,
    /// Hint text shown inside the empty input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl FormField {
    pub fn new(label: impl Into<String>, input_type: InputType) -> Self {
        Self {
            label: label.into(),
            input_type,
            placeholder: None,
            required: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Lookup key this field submits under
    pub fn key(&self) -> String {
        normalize_field_key(&self.label)
    }
}

/// The set of fields collected for one document category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find a field by its normalized key
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key() == key)
    }

    /// Turn a raw submission into field values.
    ///
    /// Entries may be addressed either by label or by key; both normalize to
    /// the same lookup key.
    pub fn collect<I, K, V>(&self, submitted: I) -> FieldValues
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        submitted
            .into_iter()
            .map(|(name, value)| (normalize_field_key(name.as_ref()), value.into()))
            .collect()
    }

    /// Required fields with no value or only whitespace
    pub fn missing_required(&self, values: &FieldValues) -> Vec<&FormField> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| {
                values
                    .get(&f.key())
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }
}

/// Lowercase a label and replace each run of whitespace with one underscore.
///
/// Already-normalized keys come back unchanged.
pub fn normalize_field_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for c in label.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
        } else {
            key.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    key
}
