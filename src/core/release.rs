use crate::error::{Result, UpdaterError};
use serde::Deserialize;
use std::future::Future;

pub const UPDATE_MANIFEST_URL: &str =
    "https://cdn.alt-mp.com/js-module-v2/dev/x64_win32/update.json";
pub const ARCHIVE_BASE_URL: &str =
    "https://github.com/altmp/altv-js-module-v2/releases/download/dev";
pub const ARCHIVE_ASSET: &str = "js-module-v2-windows-client.zip";

/// Where a module release is looked up and downloaded from.
pub trait ReleaseSource {
    /// Version string of the most recent published build.
    fn latest_version(&self) -> impl Future<Output = Result<String>> + Send;

    /// Raw bytes of the client archive for `version`.
    fn fetch_archive(&self, version: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub update_manifest_url: String,
    pub archive_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            update_manifest_url: UPDATE_MANIFEST_URL.to_string(),
            archive_base_url: ARCHIVE_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn archive_url(&self, version: &str) -> String {
        format!(
            "{}/{}/{}",
            self.archive_base_url.trim_end_matches('/'),
            version,
            ARCHIVE_ASSET
        )
    }
}

#[derive(Debug, Deserialize)]
struct UpdateManifest {
    #[serde(default)]
    version: Option<String>,
}

pub struct HttpReleaseSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpReleaseSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jsv2-updater/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_endpoints(client, Endpoints::default()))
    }

    pub fn with_endpoints(client: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdaterError::Download {
                url: url.to_string(),
                status: status.to_string(),
            });
        }
        Ok(response)
    }
}

impl ReleaseSource for HttpReleaseSource {
    async fn latest_version(&self) -> Result<String> {
        let url = &self.endpoints.update_manifest_url;
        let manifest: UpdateManifest = self.get(url, "application/json").await?.json().await?;

        let version = manifest
            .version
            .filter(|v| !v.trim().is_empty())
            .ok_or(UpdaterError::MissingVersion)?;
        log::info!("Latest published module version is {version}");
        Ok(version)
    }

    async fn fetch_archive(&self, version: &str) -> Result<Vec<u8>> {
        let url = self.endpoints.archive_url(version);
        let bytes = self.get(&url, "application/octet-stream").await?.bytes().await?;
        log::info!("Downloaded {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}
