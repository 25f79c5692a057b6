//! End-to-end flow: fill the form, edit, version, restore, export

use editor_core::{EditorError, EditorSession, ExportFormat};
use pretty_assertions::assert_eq;
use template_engine::TemplateCatalog;

const BOND: &str = "Employee Bond for Non-Compete";

fn submit_bond_form(catalog: &TemplateCatalog) -> shared_types::FieldValues {
    let form = catalog.get(BOND).unwrap().form_schema();
    form.collect(vec![
        ("Employee Name", "Asha Rao"),
        ("Employee Address", "12 MG Road, Pune"),
        ("Employer Name", "Acme Textiles Pvt. Ltd."),
        ("Amount of Liquidated Damages", "500000"),
        ("Employer Business Details", "textile manufacturing"),
        ("Non Compete Geographical Scope", "the state of Maharashtra"),
        ("Non Compete Duration", "two years"),
        ("Date of Agreement", "2024-01-15"),
    ])
}

#[test]
fn form_to_export_round_trip() {
    let catalog = TemplateCatalog::builtin();
    let values = submit_bond_form(&catalog);
    assert!(catalog
        .get(BOND)
        .unwrap()
        .form_schema()
        .missing_required(&values)
        .is_empty());

    let mut session = EditorSession::open(&catalog, BOND, Some(&values));
    let rendered = session.live_content().to_string();

    // Both occurrences of the employee name and the damages amount are filled
    assert_eq!(rendered.matches("Asha Rao").count(), 2);
    assert_eq!(rendered.matches("Rs. 500000").count(), 2);
    // The optional witness field was left blank in the form
    assert!(rendered.contains("1. [Witness Signatures]"));

    // Edit and commit twice
    session.set_live_content(rendered.replace("two years", "eighteen months"));
    let v2 = session.save_version().id;
    session.set_live_content(format!("{}\n2. Ravi Kumar", session.live_content()));
    let v3 = session.save_version().id;
    assert_eq!((v2, v3), (2, 3));

    // Back to the original render
    session.switch_version(1).unwrap();
    assert_eq!(session.live_content(), rendered);
    assert_eq!(session.current_version_id(), 1);

    // Unknown versions are reported and change nothing
    assert_eq!(session.switch_version(42), Err(EditorError::VersionNotFound(42)));
    assert_eq!(session.current_version_id(), 1);

    // Export what is on screen now
    let job = session.capture(ExportFormat::Doc);
    session.switch_version(v3).unwrap();
    let artifact = job.run_default().unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();
    assert!(text.starts_with('\u{feff}'));
    assert!(text.contains("for a period of two years"));
    assert!(!text.contains("Ravi Kumar"));

    let pdf = session.capture(ExportFormat::Pdf).run_default().unwrap();
    assert_eq!(pdf.mime_type, "application/pdf");
    assert!(pdf.bytes.starts_with(b"%PDF"));
}

#[test]
fn editor_without_form_shows_raw_template() {
    let catalog = TemplateCatalog::builtin();
    let session = EditorSession::open(&catalog, BOND, None);
    assert_eq!(session.live_content(), catalog.template(BOND).unwrap());
}

#[test]
fn history_preserves_every_snapshot() {
    let mut session = EditorSession::new("v1");
    for i in 2..=10 {
        session.set_live_content(format!("v{}", i));
        session.save_version();
    }

    let ids: Vec<u64> = session.versions().iter().map(|v| v.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    for version in session.versions() {
        assert_eq!(version.content, format!("v{}", version.id));
    }
}
