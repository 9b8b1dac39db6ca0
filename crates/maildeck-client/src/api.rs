//! Content backend REST client.
//!
//! Backend contract:
//!   `GET  /contents/`             → item list
//!   `GET  /contents/{id}`         → single item
//!   `POST /contents/search_query` → item list matching the filter body

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;

use maildeck_common::config::Config;
use maildeck_common::content::{ContentItem, SearchQuery};
use maildeck_common::error::{MaildeckError, Result};

/// Per-request budget. The backend is expected to answer well within this;
/// slow platform cold starts are the case it exists for.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ContentApi {
    client: Client,
    base_url: String,
}

impl ContentApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(MaildeckError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from configuration, falling back to the local
    /// development backend when no origin is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.client_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /contents/` — every content item the backend will share.
    #[instrument(skip(self))]
    pub async fn list_contents(&self) -> Result<Vec<ContentItem>> {
        let url = format!("{}/contents/", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let items: Vec<ContentItem> = Self::parse(resp).await?;
        debug!(count = items.len(), "listed contents");
        Ok(items)
    }

    /// `GET /contents/{id}` — a single content item.
    #[instrument(skip(self))]
    pub async fn get_content(&self, id: Uuid) -> Result<ContentItem> {
        let url = format!("{}/contents/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        Self::parse(resp).await
    }

    /// `POST /contents/search_query` — items matching the filter set.
    /// Unset filter fields are omitted from the body; the backend ANDs the
    /// rest. An empty query behaves like `list_contents`.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ContentItem>> {
        let url = format!("{}/contents/search_query", self.base_url);
        let resp = self.client.post(&url).json(query).send().await?;
        let items: Vec<ContentItem> = Self::parse(resp).await?;
        debug!(count = items.len(), "search returned results");
        Ok(items)
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MaildeckError::Backend { status: status.as_u16(), body });
        }
        Ok(resp.json::<T>().await?)
    }
}
