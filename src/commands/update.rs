use crate::core::config::{self, LoadedConfig};
use crate::core::release::ReleaseSource;
use crate::core::workspace::TempWorkspace;
use crate::core::{download, installer};
use crate::error::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub config_path: PathBuf,
    pub temp_dir: PathBuf,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(config::DEFAULT_CONFIG_FILE),
            temp_dir: PathBuf::from(crate::core::workspace::DEFAULT_TEMP_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// First run: a default configuration file was written.
    ConfigCreated { path: PathBuf },
    Updated {
        version: String,
        installed: Vec<PathBuf>,
    },
}

/// Runs the update and prints the result. Errors are reported, not returned.
pub async fn update<S: ReleaseSource>(source: &S, options: &UpdateOptions) {
    match run_update(source, options).await {
        Ok(UpdateOutcome::ConfigCreated { path }) => {
            println!(
                "{}",
                format!("A configuration file has been created at {}.", path.display()).green()
            );
            println!(
                "{}",
                "Please modify it with the path to the root of your alt:V launcher folder and re-execute this tool."
                    .yellow()
            );
        }
        Ok(UpdateOutcome::Updated { version, installed }) => {
            for path in &installed {
                println!("  {} {}", "+".green(), path.display());
            }
            println!(
                "{}",
                format!("JS V2 client module successfully updated to version {version}").green()
            );
        }
        Err(e) => eprintln!("{}", e.to_string().red()),
    }
}

/// Full update pipeline. The temp workspace is cleaned up on every exit path
/// once it has been created.
pub async fn run_update<S: ReleaseSource>(
    source: &S,
    options: &UpdateOptions,
) -> Result<UpdateOutcome> {
    let install_path = match config::load_install_path(&options.config_path).await? {
        LoadedConfig::Created => {
            return Ok(UpdateOutcome::ConfigCreated {
                path: options.config_path.clone(),
            })
        }
        LoadedConfig::Ready(path) => path,
    };

    installer::validate_install_dir(&install_path).await?;

    let workspace = TempWorkspace::create(&options.temp_dir).await?;
    let result = install_latest(source, &workspace, &install_path).await;

    if let Err(e) = workspace.cleanup().await {
        log::error!("Failed to clean up {}: {e}", options.temp_dir.display());
    }

    result
}

async fn install_latest<S: ReleaseSource>(
    source: &S,
    workspace: &TempWorkspace,
    install_path: &Path,
) -> Result<UpdateOutcome> {
    let version = source.latest_version().await?;
    let bytes = source.fetch_archive(&version).await?;

    let archive_path = workspace.archive_path();
    download::save_archive(&bytes, &archive_path).await?;
    download::extract(&archive_path, workspace.root()).await?;

    let installed = installer::install(workspace.root(), install_path).await?;
    Ok(UpdateOutcome::Updated { version, installed })
}
