use crate::error::{Result, UpdaterError};
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Writes downloaded archive bytes to `archive_path`.
pub async fn save_archive(bytes: &[u8], archive_path: &Path) -> Result<()> {
    if let Some(parent) = archive_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(archive_path, bytes).await?;
    log::debug!("Saved archive to {}", archive_path.display());
    Ok(())
}

/// Unpacks the zip at `archive_path` into `destination`, creating it if needed.
pub async fn extract(archive_path: &Path, destination: &Path) -> Result<()> {
    log::info!(
        "Extracting {} to {}",
        archive_path.display(),
        destination.display()
    );

    let archive_path: PathBuf = archive_path.to_path_buf();
    let destination: PathBuf = destination.to_path_buf();
    tokio::task::spawn_blocking(move || {
        extract_zip(&archive_path, &destination)
            .map_err(|e| UpdaterError::extraction(&archive_path, e.to_string()))
    })
    .await?
}

fn extract_zip(archive_path: &Path, destination: &Path) -> zip::result::ZipResult<()> {
    std::fs::create_dir_all(destination)?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                log::warn!("Skipping unsafe archive entry {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                std::fs::create_dir_all(p)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_zip;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_extract_creates_tree() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("temp.zip");
        let bytes = build_zip(&[
            ("dist-client-windows/modules/js-client-v2.dll", b"dll"),
            ("dist-client-windows/README.md", b"readme"),
        ]);
        save_archive(&bytes, &archive).await.unwrap();

        let out = dir.path().join("out");
        extract(&archive, &out).await.unwrap();

        assert_eq!(
            std::fs::read(out.join("dist-client-windows/modules/js-client-v2.dll")).unwrap(),
            b"dll"
        );
        assert_eq!(
            std::fs::read(out.join("dist-client-windows/README.md")).unwrap(),
            b"readme"
        );
    }

    #[tokio::test]
    async fn test_extract_corrupt_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("temp.zip");
        save_archive(b"this is not a zip", &archive).await.unwrap();

        let err = extract(&archive, &dir.path().join("out")).await.unwrap_err();
        match err {
            UpdaterError::Extraction { path, .. } => assert_eq!(path, archive),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_extract_missing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("missing.zip"), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, UpdaterError::Extraction { .. }));
    }
}
