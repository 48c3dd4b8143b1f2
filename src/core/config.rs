use crate::error::{Result, UpdaterError};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub const DEFAULT_CONFIG_FILE: &str = ".jsv2-client-updater.json";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Root of the alt:V launcher installation.
    #[serde(rename = "altVPath", default)]
    pub alt_v_path: String,
}

/// Result of reading the configuration file.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadedConfig {
    /// No file existed; a default one was written and there is nothing to do yet.
    Created,
    /// The configured installation path.
    Ready(PathBuf),
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serializes with four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn install_path(&self) -> Option<PathBuf> {
        let trimmed = self.alt_v_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

/// Reads the installation path from `config_path`, creating a default file
/// when none exists.
pub async fn load_install_path(config_path: &Path) -> Result<LoadedConfig> {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No configuration at {}, creating one", config_path.display());
            create_default(config_path).await?;
            return Ok(LoadedConfig::Created);
        }
        Err(e) => return Err(e.into()),
    };

    let config = Config::parse(&content)?;
    config
        .install_path()
        .map(LoadedConfig::Ready)
        .ok_or_else(|| UpdaterError::EmptyInstallPath {
            config_path: config_path.to_path_buf(),
        })
}

/// Writes `{ "altVPath": "" }` to `config_path`. Fails if the file already exists.
pub async fn create_default(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let content = Config::default().to_json()?;
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
