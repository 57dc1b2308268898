// src/registry/http.rs
//! HTTP registry backend
//!
//! Fetches `GET {base}/index.json` and `GET {base}/{name}.json` with an async
//! reqwest client. No retries: a failed request surfaces immediately.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use super::source::{check_component_name, RegistrySource};
use super::types::{RegistryComponent, RegistryIndex};

/// Default timeout for registry requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Registry served over HTTP(S)
pub struct HttpRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistry {
    /// Create a new HTTP registry for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("bearnie/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    pub fn component_url(&self, name: &str) -> String {
        format!("{}/{}.json", self.base_url, name)
    }
}

#[async_trait]
impl RegistrySource for HttpRegistry {
    async fn fetch_index(&self) -> Result<RegistryIndex> {
        let url = self.index_url();
        debug!("Fetching registry index: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            Error::RegistryUnavailable(format!("Failed to fetch {url}: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(Error::RegistryUnavailable(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response.json::<RegistryIndex>().await.map_err(|e| {
            Error::RegistryUnavailable(format!("Failed to parse registry index: {e}"))
        })
    }

    async fn fetch_component(&self, name: &str) -> Result<RegistryComponent> {
        check_component_name(name)?;
        let url = self.component_url(name);
        debug!("Fetching component {}: {}", name, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            Error::RegistryUnavailable(format!("Failed to fetch {url}: {e}"))
        })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(Error::ComponentNotFound(name.to_string())),
            status => {
                return Err(Error::RegistryUnavailable(format!("HTTP {status} from {url}")));
            }
        }

        let body = response.bytes().await.map_err(|e| {
            Error::RegistryUnavailable(format!("Failed to read {url}: {e}"))
        })?;

        serde_json::from_slice(&body).map_err(|e| Error::InvalidDocument {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}
