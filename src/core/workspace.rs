use crate::error::Result;
use crate::utils::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMP_DIR: &str = ".temp";
pub const ARCHIVE_FILE: &str = "temp.zip";
pub const EXTRACTED_DIR: &str = "dist-client-windows";

/// Entries an update run leaves behind in the workspace.
pub const EXPECTED_ARTIFACTS: [&str; 2] = [EXTRACTED_DIR, ARCHIVE_FILE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The whole workspace directory was deleted.
    Removed,
    /// Foreign entries were found; only the expected artifacts were deleted.
    Pruned { kept: Vec<String> },
}

/// Scratch directory holding the downloaded archive and its extracted tree.
#[derive(Debug)]
pub struct TempWorkspace {
    root: PathBuf,
}

impl TempWorkspace {
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::ensure_dir_exists(&root).await?;
        log::debug!("Using temp workspace {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE)
    }

    /// Deletes the workspace, or only its expected artifacts when anything
    /// else lives in it.
    pub async fn cleanup(self) -> Result<CleanupOutcome> {
        let entries = match fs::list_entries(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CleanupOutcome::Removed);
            }
            Err(e) => return Err(e.into()),
        };

        let kept: Vec<String> = entries
            .into_iter()
            .filter(|name| !EXPECTED_ARTIFACTS.contains(&name.as_str()))
            .collect();

        if kept.is_empty() {
            tokio::fs::remove_dir_all(&self.root).await?;
            log::debug!("Removed temp workspace {}", self.root.display());
            return Ok(CleanupOutcome::Removed);
        }

        log::info!(
            "Temp workspace {} holds other files ({}), removing only update artifacts",
            self.root.display(),
            kept.join(", ")
        );
        let extracted = self.root.join(EXTRACTED_DIR);
        let archive = self.archive_path();
        let (extracted_result, archive_result) =
            tokio::join!(fs::remove_path(&extracted), fs::remove_path(&archive));
        for (path, result) in [(extracted, extracted_result), (archive, archive_result)] {
            if let Err(e) = result {
                log::warn!("Could not remove {}: {e}", path.display());
            }
        }

        Ok(CleanupOutcome::Pruned { kept })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn workspace_with_artifacts(root: &Path) -> TempWorkspace {
        let workspace = TempWorkspace::create(root).await.unwrap();
        std::fs::write(workspace.archive_path(), b"zip").unwrap();
        let modules = root.join(EXTRACTED_DIR).join("modules");
        std::fs::create_dir_all(&modules).unwrap();
        std::fs::write(modules.join("js-client-v2.dll"), b"dll").unwrap();
        workspace
    }

    #[tokio::test]
    async fn test_cleanup_removes_whole_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(DEFAULT_TEMP_DIR);
        let workspace = workspace_with_artifacts(&root).await;

        assert_eq!(workspace.cleanup().await.unwrap(), CleanupOutcome::Removed);
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_cleanup_empty_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(DEFAULT_TEMP_DIR);
        let workspace = TempWorkspace::create(&root).await.unwrap();

        assert_eq!(workspace.cleanup().await.unwrap(), CleanupOutcome::Removed);
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_cleanup_keeps_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(DEFAULT_TEMP_DIR);
        let workspace = workspace_with_artifacts(&root).await;
        std::fs::write(root.join("notes.txt"), b"keep me").unwrap();

        let outcome = workspace.cleanup().await.unwrap();

        assert_eq!(
            outcome,
            CleanupOutcome::Pruned {
                kept: vec!["notes.txt".to_string()]
            }
        );
        assert_eq!(std::fs::read(root.join("notes.txt")).unwrap(), b"keep me");
        assert!(!root.join(ARCHIVE_FILE).exists());
        assert!(!root.join(EXTRACTED_DIR).exists());
    }

    #[tokio::test]
    async fn test_cleanup_tolerates_missing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(DEFAULT_TEMP_DIR);
        let workspace = TempWorkspace::create(&root).await.unwrap();
        std::fs::create_dir(root.join("manual")).unwrap();

        let outcome = workspace.cleanup().await.unwrap();

        assert_eq!(
            outcome,
            CleanupOutcome::Pruned {
                kept: vec!["manual".to_string()]
            }
        );
        assert!(root.join("manual").is_dir());
    }

    #[tokio::test]
    async fn test_cleanup_after_workspace_vanished() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(DEFAULT_TEMP_DIR);
        let workspace = TempWorkspace::create(&root).await.unwrap();
        std::fs::remove_dir(&root).unwrap();

        assert_eq!(workspace.cleanup().await.unwrap(), CleanupOutcome::Removed);
    }
}
