//! Version History Display for WASM
//!
//! Provides display-friendly representations of the version ledger
//! for the frontend version dropdown.

use chrono::{DateTime, Utc};
use editor_core::{Version, VersionLedger};
use serde::{Deserialize, Serialize};

/// One entry of the version dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionListItem {
    pub id: u64,
    pub label: String,
    /// RFC 3339
    pub timestamp: String,
    pub display_time: String,
    pub is_current: bool,
}

/// Summary statistics for the version history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub total_versions: usize,
    pub current_id: u64,
    pub latest_id: u64,
    pub first_saved: String,
    pub last_saved: String,
}

impl VersionListItem {
    pub fn from_version(version: &Version, current_id: u64) -> Self {
        Self {
            id: version.id,
            label: format!("Version {}", version.id),
            timestamp: version.timestamp.to_rfc3339(),
            display_time: display_time(&version.timestamp),
            is_current: version.id == current_id,
        }
    }
}

fn display_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y %H:%M:%S UTC").to_string()
}

/// Dropdown entries in creation order
pub fn version_items(ledger: &VersionLedger) -> Vec<VersionListItem> {
    let current_id = ledger.current_id();
    ledger
        .list()
        .iter()
        .map(|v| VersionListItem::from_version(v, current_id))
        .collect()
}

pub fn version_summary(ledger: &VersionLedger) -> VersionSummary {
    let first = &ledger.list()[0];
    let latest = ledger.latest();
    VersionSummary {
        total_versions: ledger.len(),
        current_id: ledger.current_id(),
        latest_id: latest.id,
        first_saved: first.timestamp.to_rfc3339(),
        last_saved: latest.timestamp.to_rfc3339(),
    }
}
