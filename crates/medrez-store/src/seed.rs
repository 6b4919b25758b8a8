//! Seed dataset sources
//!
//! The seed is a read-only JSON document matching the `AppData` shape. It
//! is fetched once at first load (or again on reset) and never written
//! back. Sources are trait objects so the store can be wired to a file, an
//! HTTP origin, or a fixture.

use crate::error::SeedError;
use async_trait::async_trait;
use medrez_model::AppData;
use std::path::{Path, PathBuf};

/// A source the seed dataset can be fetched from
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch and parse the seed dataset
    async fn fetch(&self) -> Result<AppData, SeedError>;
}

/// Seed loaded from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch(&self) -> Result<AppData, SeedError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Seed fetched from an HTTP origin
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Use a preconfigured client (timeouts, proxies)
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<AppData, SeedError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(SeedError::Status(response.status().as_u16()));
        }
        let raw = response.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Fixed in-memory seed, used by tests and the CLI's fixture mode
#[derive(Debug, Clone)]
pub struct StaticSeedSource {
    data: AppData,
}

impl StaticSeedSource {
    #[must_use]
    pub fn new(data: AppData) -> Self {
        Self { data }
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> Result<AppData, SeedError> {
        Ok(self.data.clone())
    }
}
