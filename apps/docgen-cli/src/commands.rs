//! Subcommand implementations
//!
//! Each command writes its user-facing output to the given writer; logs go
//! through `tracing` to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use editor_core::{EditorSession, ExportFormat};
use shared_types::{field_values_from_json, FieldValues, FormSchema};
use template_engine::{TemplateCatalog, TemplateEntry};

use crate::output::save_artifact;

/// Parse a `KEY=VALUE` argument
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("empty field name in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Field values from an optional JSON file plus `--set` overrides.
///
/// Returns `None` when neither was given, which renders the raw template.
pub fn collect_values(
    entry: Option<&TemplateEntry>,
    values_file: Option<&Path>,
    assignments: &[(String, String)],
) -> anyhow::Result<Option<FieldValues>> {
    if values_file.is_none() && assignments.is_empty() {
        return Ok(None);
    }

    let mut values = match values_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read values file: {}", path.display()))?;
            field_values_from_json(&json)
                .with_context(|| format!("Invalid values file: {}", path.display()))?
        }
        None => FieldValues::new(),
    };

    let schema = entry.map(|e| e.form_schema()).unwrap_or_default();
    values.extend(schema.collect(assignments.iter().map(|(k, v)| (k, v.clone()))));

    if !schema.is_empty() {
        for key in unknown_keys(&schema, &values) {
            tracing::warn!(key = %key, "value does not match any form field");
        }
        for field in schema.missing_required(&values) {
            tracing::warn!(field = %field.label, key = %field.key(), "required field has no value");
        }
    }

    Ok(Some(values))
}

/// Submitted keys the form has no field for, sorted
fn unknown_keys<'a>(schema: &FormSchema, values: &'a FieldValues) -> Vec<&'a str> {
    let mut keys: Vec<&str> = values
        .keys()
        .map(String::as_str)
        .filter(|key| schema.field(key).is_none())
        .collect();
    keys.sort_unstable();
    keys
}

pub fn list_categories(catalog: &TemplateCatalog, out: &mut impl Write) -> anyhow::Result<()> {
    for info in catalog.list() {
        writeln!(out, "{}", info.category)?;
        if !info.description.is_empty() {
            writeln!(out, "    {}", info.description)?;
        }
        writeln!(
            out,
            "    {} fields, {} placeholders",
            info.field_count,
            info.placeholder_keys.len()
        )?;
    }
    Ok(())
}

pub fn list_fields(
    catalog: &TemplateCatalog,
    category: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let entry = catalog
        .get(category)
        .with_context(|| format!("No template for category '{}'", category))?;

    writeln!(out, "{}", entry.title)?;
    for field in &entry.fields {
        let required = if field.required { "" } else { " (optional)" };
        writeln!(
            out,
            "  {:<40} {:<10} {}{}",
            field.key(),
            field.input_type,
            field.label,
            required
        )?;
    }
    Ok(())
}

pub fn render(
    catalog: &TemplateCatalog,
    category: &str,
    values: Option<&FieldValues>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = catalog.render_report(category, values);

    if !report.template_found {
        tracing::warn!(category, "no template for category");
    } else if values.is_some() {
        for token in &report.unresolved {
            tracing::warn!(placeholder = %token, "placeholder left unresolved");
        }
    }

    writeln!(out, "{}", report.text)?;
    Ok(())
}

pub struct ExportOptions<'a> {
    pub format: ExportFormat,
    pub output_dir: &'a Path,
    pub file_stem: &'a str,
}

pub fn export(
    catalog: &TemplateCatalog,
    category: &str,
    values: Option<&FieldValues>,
    options: ExportOptions<'_>,
) -> anyhow::Result<PathBuf> {
    if catalog.get(category).is_none() {
        anyhow::bail!("No template for category '{}'", category);
    }

    let session = EditorSession::open(catalog, category, values);
    let artifact = session
        .capture(options.format)
        .with_file_stem(options.file_stem)
        .run_default()
        .with_context(|| format!("Export to {} failed", options.format))?;

    save_artifact(&artifact, options.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOND: &str = "Employee Bond for Non-Compete";

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("Employee Name=Asha Rao").unwrap(),
            ("Employee Name".to_string(), "Asha Rao".to_string())
        );
        assert_eq!(
            parse_assignment("formula=a=b").unwrap(),
            ("formula".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("no equals").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn test_no_inputs_means_raw_template() {
        let catalog = TemplateCatalog::builtin();
        let values = collect_values(catalog.get(BOND), None, &[]).unwrap();
        assert!(values.is_none());
    }

    #[test]
    fn test_assignments_are_normalized() {
        let catalog = TemplateCatalog::builtin();
        let values = collect_values(
            catalog.get(BOND),
            None,
            &[("Employee Name".to_string(), "Asha".to_string())],
        )
        .unwrap()
        .unwrap();
        assert_eq!(values["employee_name"], "Asha");
    }

    #[test]
    fn test_assignments_override_values_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        std::fs::write(&path, r#"{"employee_name": "Ravi", "employer_name": "Acme"}"#).unwrap();

        let values = collect_values(
            None,
            Some(&path),
            &[("employee_name".to_string(), "Asha".to_string())],
        )
        .unwrap()
        .unwrap();
        assert_eq!(values["employee_name"], "Asha");
        assert_eq!(values["employer_name"], "Acme");
    }

    #[test]
    fn test_unknown_keys_are_reported_and_kept() {
        let catalog = TemplateCatalog::builtin();
        let entry = catalog.get(BOND);
        let values = collect_values(
            entry,
            None,
            &[
                ("Employee Name".to_string(), "Asha".to_string()),
                ("Favourite Colour".to_string(), "teal".to_string()),
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(values["favourite_colour"], "teal");
        let schema = entry.unwrap().form_schema();
        assert_eq!(unknown_keys(&schema, &values), vec!["favourite_colour"]);
    }

    #[test]
    fn test_list_categories() {
        let text = output_of(|out| list_categories(&TemplateCatalog::builtin(), out));
        assert!(text.contains("Employee Bond for Non-Compete"));
        assert!(text.contains("Employee Service Agreement"));
        assert!(text.contains("9 fields"));
    }

    #[test]
    fn test_list_fields_shows_keys() {
        let text = output_of(|out| list_fields(&TemplateCatalog::builtin(), BOND, out));
        assert!(text.contains("amount_of_liquidated_damages"));
        assert!(text.contains("Witness Signatures (optional)"));
    }

    #[test]
    fn test_list_fields_unknown_category() {
        let mut buf = Vec::new();
        assert!(list_fields(&TemplateCatalog::builtin(), "Will", &mut buf).is_err());
    }

    #[test]
    fn test_render_prints_document() {
        let mut values = FieldValues::new();
        values.insert("employee_name".to_string(), "Asha".to_string());
        let text = output_of(|out| render(&TemplateCatalog::builtin(), BOND, Some(&values), out));
        assert!(text.starts_with("By this Bond Asha residing at [Employee Address]"));
    }

    #[test]
    fn test_render_unknown_category_prints_fallback() {
        let text = output_of(|out| render(&TemplateCatalog::builtin(), "Will", None, out));
        assert_eq!(text, "Template not found.\n");
    }

    #[test]
    fn test_export_doc_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut values = FieldValues::new();
        values.insert("employee_name".to_string(), "Asha".to_string());

        let path = export(
            &TemplateCatalog::builtin(),
            BOND,
            Some(&values),
            ExportOptions {
                format: ExportFormat::Doc,
                output_dir: dir.path(),
                file_stem: "bond",
            },
        )
        .unwrap();

        assert_eq!(path, dir.path().join("bond.doc"));
        let text = String::from_utf8(std::fs::read(path).unwrap()).unwrap();
        assert!(text.starts_with("\u{feff}By this Bond Asha"));
    }

    #[test]
    fn test_export_unknown_category_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = export(
            &TemplateCatalog::builtin(),
            "Will",
            None,
            ExportOptions {
                format: ExportFormat::Pdf,
                output_dir: dir.path(),
                file_stem: "document",
            },
        );
        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
