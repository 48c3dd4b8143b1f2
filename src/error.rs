use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpdaterError>;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Please add the path to your alt:V launcher folder in {}", config_path.display())]
    EmptyInstallPath { config_path: PathBuf },

    #[error("The configured alt:V launcher folder does not exist: {}", path.display())]
    InstallDirMissing { path: PathBuf },

    #[error("{} is not a valid installation folder: {marker} was not found", path.display())]
    NotAnInstallFolder { path: PathBuf, marker: String },

    #[error("Error downloading client module from {url}: {status}")]
    Download { url: String, status: String },

    #[error("The fetched version is undefined")]
    MissingVersion,

    #[error("Extraction failed for {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl UpdaterError {
    pub fn extraction<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        UpdaterError::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for the early exits that stop a run before any network activity.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            UpdaterError::EmptyInstallPath { .. }
                | UpdaterError::InstallDirMissing { .. }
                | UpdaterError::NotAnInstallFolder { .. }
        )
    }
}
