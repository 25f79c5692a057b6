use thiserror::Error;

use crate::ledger::VersionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Version {0} not found")]
    VersionNotFound(VersionId),
}

/// Export failures are terminal: the caller reports them and nothing is retried
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    PdfRender(String),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
