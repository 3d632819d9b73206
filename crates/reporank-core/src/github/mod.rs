// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! A thin unauthenticated REST client: one shared `reqwest::Client`, one GET
//! per call, no retry and no pagination.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GitHubConfig;
use crate::error::RankError;

pub mod users;

/// Media type recommended by the GitHub REST API.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Error body returned by the GitHub REST API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Unauthenticated client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Builds a client from the GitHub section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RankError::Config` if the user agent is not a valid header value,
    /// or `RankError::Network` if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| RankError::Config {
            message: format!("invalid user_agent {:?}: {e}", config.user_agent),
        })?;
        headers.insert(USER_AGENT, agent);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the API root this client talks to, without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Joins a path onto the API root.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Issues a single GET request and decodes the JSON body.
    ///
    /// Non-success statuses become `RankError::Status`, carrying the GitHub
    /// `message` field when the error body has one.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> crate::Result<T> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.message);
            return Err(RankError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| RankError::InvalidResponse {
            url: url.to_string(),
            source,
        })
    }
}
