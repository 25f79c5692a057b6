//! Embedded template loader
//!
//! This module loads the built-in document templates from external files at
//! compile time, embedding them directly in the binary.

use shared_types::{FormField, InputType};

use super::registry::TemplateEntry;

/// Employee Bond for Non-Compete - loaded from templates/employee_bond_non_compete.txt
const EMPLOYEE_BOND_TEMPLATE: &str = include_str!("../../templates/employee_bond_non_compete.txt");

/// Employee Service Agreement - loaded from templates/employee_service_agreement.txt
const EMPLOYEE_SERVICE_AGREEMENT_TEMPLATE: &str =
    include_str!("../../templates/employee_service_agreement.txt");

pub const EMPLOYEE_BOND: &str = "Employee Bond for Non-Compete";
pub const EMPLOYEE_SERVICE_AGREEMENT: &str = "Employee Service Agreement";

/// Full catalog entries for the embedded templates
pub(crate) fn embedded_entries() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry {
            category: EMPLOYEE_BOND.to_string(),
            title: "Employee Bond for Non-Compete".to_string(),
            description: "Bond binding an employee to confidentiality and a non-compete period, \
                          secured by liquidated damages"
                .to_string(),
            body: EMPLOYEE_BOND_TEMPLATE.to_string(),
            fields: vec![
                FormField::new("Employee Name", InputType::Text)
                    .with_placeholder("Full legal name of the employee"),
                FormField::new("Employee Address", InputType::Textarea),
                FormField::new("Employer Name", InputType::Text),
                FormField::new("Amount of Liquidated Damages", InputType::Number)
                    .with_placeholder("Amount in Rs."),
                FormField::new("Employer Business Details", InputType::Textarea),
                FormField::new("Non Compete Geographical Scope", InputType::Text)
                    .with_placeholder("e.g. the city of Mumbai"),
                FormField::new("Non Compete Duration", InputType::Text)
                    .with_placeholder("e.g. two years"),
                FormField::new("Date of Agreement", InputType::Date),
                FormField::new("Witness Signatures", InputType::Text).optional(),
            ],
        },
        TemplateEntry {
            category: EMPLOYEE_SERVICE_AGREEMENT.to_string(),
            title: "Employee Service Agreement".to_string(),
            description: "Appointment terms covering probation, posting, hours, salary and \
                          arbitration"
                .to_string(),
            body: EMPLOYEE_SERVICE_AGREEMENT_TEMPLATE.to_string(),
            fields: vec![
                FormField::new("Employer Name", InputType::Text),
                FormField::new("Employer Registered Office Address", InputType::Textarea),
                FormField::new("Date of Agreement", InputType::Date),
                FormField::new("Employee Name", InputType::Text),
                FormField::new("Employee Address", InputType::Textarea),
                FormField::new("Job Title Post", InputType::Text)
                    .with_placeholder("e.g. Senior Accountant"),
                FormField::new("Probation Period", InputType::Number)
                    .with_placeholder("Months"),
                FormField::new("Probation Stipend", InputType::Number)
                    .with_placeholder("Amount in Rs."),
                FormField::new("Employment Duration", InputType::Text),
                FormField::new("Place of Posting", InputType::Text),
                FormField::new("Work Hours", InputType::Text)
                    .with_placeholder("e.g. 9:30 AM to 6:00 PM"),
                FormField::new("Weekly Holiday", InputType::Text),
                FormField::new("Basic Salary After Confirmation", InputType::Number)
                    .with_placeholder("Amount in Rs."),
                FormField::new("Benefits Perks", InputType::Textarea).optional(),
                FormField::new("Arbitration Details", InputType::Textarea),
                FormField::new("Witness Signatures", InputType::Text).optional(),
            ],
        },
    ]
}
