//! Writing export artifacts to disk
//!
//! The artifact goes to a hidden `.partial` sibling first and is renamed
//! into place only once fully written, so a failed export never leaves a
//! truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use editor_core::ExportArtifact;

pub fn save_artifact(artifact: &ExportArtifact, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let target = dir.join(&artifact.filename);
    let partial = dir.join(format!(".{}.partial", artifact.filename));

    let written = fs::write(&partial, &artifact.bytes).and_then(|_| fs::rename(&partial, &target));
    if let Err(e) = written {
        // Best effort; the original error is the one worth reporting
        let _ = fs::remove_file(&partial);
        return Err(e).with_context(|| format!("Failed to save {}", target.display()));
    }

    tracing::info!(path = %target.display(), bytes = artifact.bytes.len(), "saved export");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str) -> ExportArtifact {
        ExportArtifact {
            filename: name.to_string(),
            mime_type: "application/msword",
            bytes: b"\xEF\xBB\xBFhello".to_vec(),
        }
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_artifact(&artifact("document.doc"), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("document.doc"));
        assert_eq!(fs::read(&path).unwrap(), b"\xEF\xBB\xBFhello".to_vec());
        assert!(!dir.path().join(".document.doc.partial").exists());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("2024");
        save_artifact(&artifact("bond.doc"), &nested).unwrap();
        assert!(nested.join("bond.doc").is_file());
    }

    #[test]
    fn test_failed_save_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on the target name makes the rename fail
        fs::create_dir(dir.path().join("document.doc")).unwrap();
        fs::write(dir.path().join("document.doc").join("keep"), b"x").unwrap();

        assert!(save_artifact(&artifact("document.doc"), dir.path()).is_err());
        assert!(!dir.path().join(".document.doc.partial").exists());
    }
}
