//! GraphQL transport for the work-tracking board API.

use std::time::Duration;

use claimboard_domain::constants::API_VERSION_HEADER;
use claimboard_domain::{ClaimboardConfig, ClaimboardError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::GraphqlResponse;
use crate::http::HttpClient;

/// GraphQL client for the board API.
///
/// Sends every query to the configured endpoint with the pinned API version
/// and surfaces HTTP-level and GraphQL-level failures as remote errors.
pub struct BoardClient {
    endpoint: String,
    api_version: String,
    http_client: HttpClient,
}

impl BoardClient {
    /// Create a client from the endpoint settings of `config`.
    pub fn new(config: &ClaimboardConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.api_endpoint.clone(),
            api_version: config.api_version.clone(),
            http_client,
        })
    }

    /// Execute a GraphQL query or mutation.
    ///
    /// # Arguments
    /// * `token` - API token sent in the `Authorization` header
    /// * `query` - GraphQL document
    /// * `variables` - Optional variables for the document
    ///
    /// # Returns
    /// The parsed `data` payload.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T> {
        let mut request_body = serde_json::json!({
            "query": query
        });

        if let Some(vars) = variables {
            request_body["variables"] = vars;
        }

        let request_builder = self
            .http_client
            .request(Method::POST, &self.endpoint)
            .header("Authorization", token)
            .header("Content-Type", "application/json")
            .header(API_VERSION_HEADER, &self.api_version)
            .json(&request_body);

        let response = self.http_client.send(request_builder).await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received board GraphQL response");

        if !status.is_success() {
            let error_text =
                response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClaimboardError::Remote(format!(
                "board API error (HTTP {}): {}",
                status, error_text
            )));
        }

        let graphql_response: GraphqlResponse<T> = response.json().await.map_err(|e| {
            ClaimboardError::Internal(format!("Failed to parse GraphQL response: {}", e))
        })?;

        if let Some(errors) = graphql_response.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(ClaimboardError::Remote(format!(
                    "GraphQL errors: {}",
                    messages.join(", ")
                )));
            }
        }

        graphql_response
            .data
            .ok_or_else(|| ClaimboardError::Internal("GraphQL response missing data field".into()))
    }
}
