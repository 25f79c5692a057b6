//! Document editor core
//!
//! This crate provides the state behind the generated-document editor:
//! - Version ledger (append-only snapshots with restore)
//! - Editor session (ledger plus the live content being edited)
//! - PDF and DOC export of a captured snapshot

pub mod error;
pub mod export;
pub mod ledger;
pub mod session;

pub use error::{EditorError, ExportError};
pub use export::{
    plain_text, ExportArtifact, ExportFormat, ExportJob, PdfRenderer, TextPdfRenderer,
};
pub use ledger::{Version, VersionId, VersionLedger};
pub use session::EditorSession;
