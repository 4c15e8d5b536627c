//! HTTP access to the remote movie catalog.

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::FetchError, protocol::SearchParams};
use tracing::debug;
use url::Url;

use crate::{config::CatalogSettings, error::ConfigError, CatalogFetcher, RawResponse};

pub struct CatalogClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    language: String,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, ConfigError> {
        Self::with_http_client(Client::builder().build()?, settings)
    }

    pub fn with_http_client(http: Client, settings: &CatalogSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            http,
            endpoint: settings.search_endpoint()?,
            api_key: settings.api_key.clone(),
            language: settings.language.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogFetcher for CatalogClient {
    async fn fetch_results(&self, query: &str) -> Result<RawResponse, FetchError> {
        let params = SearchParams::new(&self.api_key, &self.language, query);
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(FetchError::transport)?;
        debug!(status, bytes = body.len(), "catalog search responded");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
