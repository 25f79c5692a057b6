//! Placeholder substitution

use regex::Captures;
use serde::{Deserialize, Serialize};
use shared_types::FieldValues;

use super::placeholders::{extract_placeholders, placeholder_key, PLACEHOLDER_PATTERN};

/// Text shown in the editor when a category has no template
pub const TEMPLATE_NOT_FOUND: &str = "Template not found.";

/// Rendered text plus the placeholders that had no value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    pub text: String,
    /// Tokens left in the text as literal brackets, in order of first appearance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
    /// False when the category had no template and `text` is the fallback
    pub template_found: bool,
}

impl RenderReport {
    pub(crate) fn not_found() -> Self {
        Self {
            text: TEMPLATE_NOT_FOUND.to_string(),
            unresolved: Vec::new(),
            template_found: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.template_found && self.unresolved.is_empty()
    }
}

/// Replace every placeholder whose key has a value.
///
/// Tokens are matched against the template only, in a single pass, so a
/// value that itself contains `[...]` is copied through untouched. Values
/// are inserted as plain text.
pub fn substitute(template: &str, values: &FieldValues) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            match values.get(&placeholder_key(token)) {
                Some(value) => value.clone(),
                None => token.to_string(),
            }
        })
        .into_owned()
}

/// Render a template, returning it verbatim when no values were submitted
pub fn render_template(template: &str, values: Option<&FieldValues>) -> RenderReport {
    let placeholders = extract_placeholders(template);

    let Some(values) = values else {
        return RenderReport {
            text: template.to_string(),
            unresolved: placeholders.into_iter().map(|p| p.token).collect(),
            template_found: true,
        };
    };

    let unresolved: Vec<String> = placeholders
        .into_iter()
        .filter(|p| !values.contains_key(&p.key))
        .map(|p| p.token)
        .collect();

    if !unresolved.is_empty() {
        tracing::debug!(count = unresolved.len(), "placeholders left unresolved");
    }

    RenderReport {
        text: substitute(template, values),
        unresolved,
        template_found: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let template = "[employee_name] signs. Signed by [employee_name].";
        let out = substitute(template, &values(&[("employee_name", "Asha")]));
        assert_eq!(out, "Asha signs. Signed by Asha.");
    }

    #[test]
    fn test_unmapped_placeholder_stays_literal() {
        let template = "Name: [employee_name], Scope: [unmapped_field]";
        let out = substitute(template, &values(&[("employee_name", "Asha")]));
        assert_eq!(out, "Name: Asha, Scope: [unmapped_field]");
    }

    #[test]
    fn test_spaced_token_uses_normalized_key() {
        let out = substitute(
            "Pay [Employer Name] now",
            &values(&[("employer_name", "Acme Ltd")]),
        );
        assert_eq!(out, "Pay Acme Ltd now");
    }

    #[test]
    fn test_value_keys_are_not_renormalized() {
        // The form step normalizes keys; a raw label key never matches.
        let out = substitute("[Employee Name]", &values(&[("Employee Name", "Asha")]));
        assert_eq!(out, "[Employee Name]");
    }

    #[test]
    fn test_values_are_plain_text() {
        let out = substitute("Fee: [amount]", &values(&[("amount", "$1 (.*) \\d")]));
        assert_eq!(out, "Fee: $1 (.*) \\d");
    }

    #[test]
    fn test_value_that_looks_like_token_is_not_resubstituted() {
        let out = substitute(
            "[a] and [b]",
            &values(&[("a", "[b]"), ("b", "B")]),
        );
        assert_eq!(out, "[b] and B");
    }

    #[test]
    fn test_malformed_brackets_pass_through() {
        let template = "Clause [1 of [employee_name] and 2]";
        let out = substitute(template, &values(&[("employee_name", "Asha")]));
        assert_eq!(out, "Clause [1 of Asha and 2]");
    }

    #[test]
    fn test_empty_value_replaces_token() {
        let out = substitute("A[gap]B", &values(&[("gap", "")]));
        assert_eq!(out, "AB");
    }

    #[test]
    fn test_render_without_values_is_verbatim() {
        let template = "By this Bond [Employee Name] binds himself";
        let report = render_template(template, None);
        assert_eq!(report.text, template);
        assert_eq!(report.unresolved, vec!["[Employee Name]".to_string()]);
        assert!(report.template_found);
    }

    #[test]
    fn test_render_reports_unresolved_once() {
        let report = render_template(
            "[x] [y] [x]",
            Some(&values(&[("y", "Y")])),
        );
        assert_eq!(report.text, "[x] Y [x]");
        assert_eq!(report.unresolved, vec!["[x]".to_string()]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_render_complete() {
        let report = render_template("Hi [name]", Some(&values(&[("name", "Asha")])));
        assert!(report.is_complete());
    }

    #[test]
    fn test_not_found_report() {
        let report = RenderReport::not_found();
        assert_eq!(report.text, TEMPLATE_NOT_FOUND);
        assert!(!report.template_found);
        assert!(!report.is_complete());
    }
}
