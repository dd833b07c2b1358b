// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarible API client
//!
//! This module provides an implementation of the `NftApi` trait for the
//! Rarible REST API. Identifiers are treated as opaque strings; the composite
//! `BLOCKCHAIN:contract:token:owner` syntax is never decoded here.

use std::time::Duration;

use nft_client::{ClientError, NftApi, Ownership, TraitProperty, TraitsRarity};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Configuration for the Rarible API client
#[derive(Debug, Clone)]
pub struct RaribleConfig {
    /// Base URL for the Rarible API
    pub base_url: String,
    /// API key sent as the `X-API-KEY` header
    pub api_key: String,
    /// Value sent as the `Referer` header
    pub referer: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RaribleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.rarible.org/v0.1".to_string(),
            api_key: "11111111-1111-1111-1111-111111111111".to_string(),
            referer: "https://docs.rarible.org".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Rarible API client implementation
#[derive(Debug)]
pub struct RaribleClient {
    client: Client,
    config: RaribleConfig,
}

/// Error body shape the upstream uses for non-success responses
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: String,
}

impl RaribleClient {
    /// Create a new Rarible API client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the API key or base URL is empty, or
    /// `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: RaribleConfig) -> Result<Self, ClientError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::Config("API key cannot be empty".to_string()));
        }

        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("nft-gateway/0.1.0")
            .build()
            .map_err(|e| ClientError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    fn transport_error(&self, error: &reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                timeout_seconds: self.config.timeout_seconds,
            }
        } else {
            ClientError::Transport {
                message: error.to_string(),
            }
        }
    }

    /// Decode a successful response body, or extract the upstream's error
    /// message from a non-success one
    async fn decode_response<T>(&self, response: Response) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::OK {
            return response.json().await.map_err(|e| ClientError::Decode {
                message: e.to_string(),
            });
        }

        debug!(status = %status, "Rarible API returned non-success status");

        let error_body: UpstreamErrorBody =
            response.json().await.map_err(|e| ClientError::Decode {
                message: e.to_string(),
            })?;

        Err(ClientError::Upstream {
            message: error_body.message,
        })
    }
}

impl NftApi for RaribleClient {
    async fn get_ownership(&self, id: &str) -> Result<Ownership, ClientError> {
        let url = format!("{}/ownerships/{}", self.config.base_url, id);

        debug!(url, "fetching NFT ownership from Rarible");

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Referer", &self.config.referer)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.decode_response(response).await
    }

    async fn get_traits_rarity(
        &self,
        collection_id: &str,
        properties: &[TraitProperty],
    ) -> Result<TraitsRarity, ClientError> {
        let url = format!("{}/items/traits/rarity", self.config.base_url);

        debug!(url, collection_id, "fetching traits rarity from Rarible");

        let body = json!({
            "collectionId": collection_id,
            "properties": properties,
        });

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Referer", &self.config.referer)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.decode_response(response).await
    }
}
