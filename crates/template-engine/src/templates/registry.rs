//! Template catalog and metadata

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::{FieldValues, FormField, FormSchema};

use super::embedded;
use crate::errors::CatalogError;
use crate::resolver::{extract_placeholders, render_template, RenderReport};

/// One document category: its template body and the form that feeds it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Exact category identifier chosen on the category page
    pub category: String,
    /// Form heading; defaults to the category name
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Template text with `[Placeholder]` tokens
    pub body: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl TemplateEntry {
    pub fn form_schema(&self) -> FormSchema {
        FormSchema::new(self.fields.clone())
    }
}

/// Information about an available template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub category: String,
    pub title: String,
    pub description: String,
    /// Distinct placeholder keys in the template body
    pub placeholder_keys: Vec<String>,
    pub field_count: usize,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

/// Read-only lookup from category to template, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the templates embedded in this crate
    pub fn builtin() -> Self {
        Self {
            entries: embedded::embedded_entries(),
        }
    }

    /// Parse a catalog from TOML
    ///
    /// ```
    /// use template_engine::TemplateCatalog;
    ///
    /// let catalog = TemplateCatalog::from_toml_str(r#"
    ///     [[templates]]
    ///     category = "Rental Agreement"
    ///     body = "Rent of Rs. [Monthly Rent] is due on [Due Day]."
    ///
    ///     [[templates.fields]]
    ///     label = "Monthly Rent"
    ///     input_type = "number"
    /// "#).unwrap();
    ///
    /// assert!(catalog.get("Rental Agreement").is_some());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(s)?;
        let mut catalog = Self::new();
        for entry in file.templates {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A category is empty or listed twice
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template catalog: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse template catalog: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            templates = catalog.len(),
            "loaded template catalog"
        );
        Ok(catalog)
    }

    /// Add an entry; the category must be non-empty and not already present
    pub fn insert(&mut self, mut entry: TemplateEntry) -> Result<(), CatalogError> {
        if entry.category.trim().is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        if self.get(&entry.category).is_some() {
            return Err(CatalogError::DuplicateCategory(entry.category));
        }
        if entry.title.is_empty() {
            entry.title = entry.category.clone();
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Raw template body for a category
    pub fn template(&self, category: &str) -> Option<&str> {
        self.get(category).map(|e| e.body.as_str())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List all available templates
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.entries
            .iter()
            .map(|e| TemplateInfo {
                category: e.category.clone(),
                title: e.title.clone(),
                description: e.description.clone(),
                placeholder_keys: extract_placeholders(&e.body)
                    .into_iter()
                    .map(|p| p.key)
                    .collect(),
                field_count: e.fields.len(),
            })
            .collect()
    }

    /// Render a category's template with the submitted values.
    ///
    /// Without values the raw template comes back with placeholders showing.
    /// An unknown category yields [`crate::TEMPLATE_NOT_FOUND`].
    pub fn render(&self, category: &str, values: Option<&FieldValues>) -> String {
        self.render_report(category, values).text
    }

    /// Like [`TemplateCatalog::render`], also listing unresolved placeholders
    pub fn render_report(&self, category: &str, values: Option<&FieldValues>) -> RenderReport {
        match self.template(category) {
            Some(body) => render_template(body, values),
            None => {
                tracing::debug!(category, "no template for category");
                RenderReport::not_found()
            }
        }
    }
}
