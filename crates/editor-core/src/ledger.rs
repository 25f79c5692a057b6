//! Version history for the document editor
//!
//! An append-only, in-memory list of content snapshots. Version ids start
//! at 1 and grow by one per commit; nothing is ever edited or evicted, so
//! the current-version pointer can never dangle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

pub type VersionId = u64;

/// An immutable snapshot of the editor content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: VersionId,
    /// Serialized editor markup, stored and returned untouched
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VersionLedger {
    versions: Vec<Version>,
    current_id: VersionId,
}

impl VersionLedger {
    /// Start a ledger whose first version holds `initial`
    pub fn new(initial: String) -> Self {
        let first = Version {
            id: 1,
            content: initial,
            timestamp: Utc::now(),
        };
        Self {
            current_id: first.id,
            versions: vec![first],
        }
    }

    /// Append a snapshot and make it current
    pub fn commit(&mut self, content: String) -> &Version {
        let id = self.latest().id + 1;
        self.versions.push(Version {
            id,
            content,
            timestamp: Utc::now(),
        });
        self.current_id = id;
        tracing::debug!(version = id, "committed version");
        self.latest()
    }

    /// Point at an earlier version and hand back its content.
    ///
    /// An unknown id leaves the ledger as it was.
    pub fn restore(&mut self, id: VersionId) -> Result<&str, EditorError> {
        let index = self
            .index_of(id)
            .ok_or(EditorError::VersionNotFound(id))?;
        self.current_id = id;
        tracing::debug!(version = id, "restored version");
        Ok(&self.versions[index].content)
    }

    /// All versions in creation order
    pub fn list(&self) -> &[Version] {
        &self.versions
    }

    pub fn current_id(&self) -> VersionId {
        self.current_id
    }

    pub fn get(&self, id: VersionId) -> Option<&Version> {
        self.index_of(id).map(|i| &self.versions[i])
    }

    /// The version the pointer references
    pub fn current(&self) -> &Version {
        // current_id is only ever set to an id already in the list
        self.get(self.current_id).unwrap_or_else(|| self.latest())
    }

    /// Most recently created version
    pub fn latest(&self) -> &Version {
        &self.versions[self.versions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false; a ledger holds its first version from construction on
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    fn index_of(&self, id: VersionId) -> Option<usize> {
        // Ids are 1..=len in order, so the position is id - 1
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        (index < self.versions.len()).then_some(index)
    }
}
