use crate::error::{Result, UpdaterError};
use crate::utils::fs;
use std::path::{Path, PathBuf};

/// Launcher executable that marks an alt:V installation root.
pub const MARKER_EXECUTABLE: &str = "altv.exe";

/// Module directory, relative to the installation root.
pub const MODULE_DIR: &str = "modules/js-client-v2";

/// Install payload, relative to the extraction root.
pub const MODULE_FILES: [&str; 2] = [
    "dist-client-windows/modules/js-client-v2.dll",
    "dist-client-windows/modules/js-client-v2.pdb",
];

pub fn module_dir(install_path: &Path) -> PathBuf {
    install_path.join(MODULE_DIR)
}

/// Checks that `install_path` exists and contains the launcher executable.
pub async fn validate_install_dir(install_path: &Path) -> Result<()> {
    if !fs::exists(install_path).await? {
        return Err(UpdaterError::InstallDirMissing {
            path: install_path.to_path_buf(),
        });
    }

    if !fs::is_file(&install_path.join(MARKER_EXECUTABLE)).await {
        return Err(UpdaterError::NotAnInstallFolder {
            path: install_path.to_path_buf(),
            marker: MARKER_EXECUTABLE.to_string(),
        });
    }

    log::debug!("{} is an alt:V installation", install_path.display());
    Ok(())
}

/// Copies the module files from `extracted_root` into the installation's
/// module directory and returns the destination paths.
///
/// Both copies are awaited even if one fails; nothing is rolled back.
pub async fn install(extracted_root: &Path, install_path: &Path) -> Result<Vec<PathBuf>> {
    let target_dir = module_dir(install_path);
    fs::ensure_dir_exists(&target_dir).await?;

    let [dll, pdb] = MODULE_FILES.map(|file| {
        let from = extracted_root.join(file);
        let to = match from.file_name() {
            Some(name) => target_dir.join(name),
            None => target_dir.clone(),
        };
        (from, to)
    });

    let (dll_result, pdb_result) = tokio::join!(copy_one(dll), copy_one(pdb));
    Ok(vec![dll_result?, pdb_result?])
}

async fn copy_one((from, to): (PathBuf, PathBuf)) -> Result<PathBuf> {
    match tokio::fs::copy(&from, &to).await {
        Ok(bytes) => {
            log::info!("Copied {} ({bytes} bytes) to {}", from.display(), to.display());
            Ok(to)
        }
        Err(source) => Err(UpdaterError::Copy { from, to, source }),
    }
}
