//! Editor session
//!
//! Owns everything the editor surface mutates: the version ledger and the
//! live content the user is typing into. Components that need the document
//! are handed the session; there is no shared global state.

use shared_types::FieldValues;
use template_engine::TemplateCatalog;

use crate::error::EditorError;
use crate::export::{ExportFormat, ExportJob};
use crate::ledger::{Version, VersionId, VersionLedger};

/// Session for editing a single generated document
#[derive(Debug, Clone)]
pub struct EditorSession {
    category: Option<String>,
    ledger: VersionLedger,
    live_content: String,
}

impl EditorSession {
    /// Start a session whose first version is `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            category: None,
            live_content: initial.clone(),
            ledger: VersionLedger::new(initial),
        }
    }

    /// Render the category template and seed version 1 with the result.
    ///
    /// With no values (the editor was opened without the form) the raw
    /// template is shown.
    pub fn open(catalog: &TemplateCatalog, category: &str, values: Option<&FieldValues>) -> Self {
        let rendered = catalog.render(category, values);
        tracing::debug!(category, bytes = rendered.len(), "opened editor session");
        let mut session = Self::new(rendered);
        session.category = Some(category.to_string());
        session
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn live_content(&self) -> &str {
        &self.live_content
    }

    /// Replace the live content with what the editor surface now holds
    pub fn set_live_content(&mut self, content: impl Into<String>) {
        self.live_content = content.into();
    }

    /// Commit the live content as a new version
    pub fn save_version(&mut self) -> &Version {
        self.ledger.commit(self.live_content.clone())
    }

    /// Load an earlier version into the live content.
    ///
    /// Unsaved edits are discarded. On an unknown id neither the pointer nor
    /// the live content changes.
    pub fn switch_version(&mut self, id: VersionId) -> Result<(), EditorError> {
        let content = self.ledger.restore(id)?;
        self.live_content = content.to_string();
        Ok(())
    }

    pub fn versions(&self) -> &[Version] {
        self.ledger.list()
    }

    pub fn current_version_id(&self) -> VersionId {
        self.ledger.current_id()
    }

    pub fn ledger(&self) -> &VersionLedger {
        &self.ledger
    }

    /// True when the live content differs from the current version
    pub fn has_unsaved_changes(&self) -> bool {
        self.live_content != self.ledger.current().content
    }

    /// Snapshot the live content for export.
    ///
    /// The job owns its copy, so edits or commits made while the export is
    /// running cannot change what gets written.
    pub fn capture(&self, format: ExportFormat) -> ExportJob {
        ExportJob::new(format, self.live_content.clone())
    }
}
