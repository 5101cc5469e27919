//! PokeAPI HTTP client
//!
//! Fetches location listings and location-area details. Every request is
//! addressed by its full URL, which is also the cache key callers use.

use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::{LocationArea, LocationPage};
use crate::config::Config;

/// Errors that can occur when fetching PokeAPI data
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Anything that can produce PokeAPI records for a URL.
///
/// The REPL is generic over this so it can run against a canned source in
/// tests.
pub trait PokeSource {
    /// URL of the first page of the location listing
    fn first_page_url(&self) -> String;

    /// URL of the detail record for the named location area
    fn location_area_url(&self, name: &str) -> String;

    fn fetch_location_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<LocationPage, ApiError>> + Send;

    fn fetch_location_area(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<LocationArea, ApiError>> + Send;
}

/// Client for the public PokeAPI
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client from configuration, applying its request timeout
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.http_timeout()).build()?;
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Create a client with a custom HTTP client and base URL
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "Fetching from PokeAPI");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl PokeSource for PokeApiClient {
    fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    async fn fetch_location_page(&self, url: &str) -> Result<LocationPage, ApiError> {
        self.get_json(url).await
    }

    async fn fetch_location_area(&self, url: &str) -> Result<LocationArea, ApiError> {
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PokeApiClient {
        PokeApiClient::with_client(Client::new(), "https://pokeapi.co/api/v2")
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/"
        );
        assert_eq!(
            client.location_area_url("canalave-city-area"),
            "https://pokeapi.co/api/v2/location-area/canalave-city-area"
        );
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = Config {
            api_base_url: "http://localhost:8080/api".to_string(),
            ..Config::default()
        };
        let client = PokeApiClient::from_config(&config).unwrap();
        assert_eq!(client.first_page_url(), "http://localhost:8080/api/location-area/");
    }

    #[test]
    fn test_parse_error_display() {
        let err: ApiError = serde_json::from_str::<LocationPage>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Failed to parse JSON response"));
    }
}
