// SPDX-License-Identifier: Apache-2.0

//! Error types for reporank.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while ranking users.
#[derive(Error, Debug)]
pub enum RankError {
    /// Network/HTTP transport error from reqwest.
    ///
    /// The reqwest error is exposed as the source, so callers printing the
    /// error chain see the underlying cause.
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error(
        "GitHub API returned HTTP {status} for {url}{detail}",
        detail = format_api_message(.message.as_deref())
    )]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// `message` field of the GitHub error body, if any.
        message: Option<String>,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Invalid JSON response from {url}")]
    InvalidResponse {
        /// Requested URL.
        url: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl RankError {
    /// Returns the HTTP status code if this error came from a non-success response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            RankError::Status { status, .. } => Some(*status),
            RankError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if GitHub refused the request because of the anonymous rate limit.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        match self {
            RankError::Status { status: 429, .. } => true,
            RankError::Status {
                status: 403,
                message,
                ..
            } => message
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains("rate limit")),
            _ => false,
        }
    }
}

fn format_api_message(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl From<config::ConfigError> for RankError {
    fn from(err: config::ConfigError) -> Self {
        RankError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_api_message() {
        let err = RankError::Status {
            status: 404,
            url: "https://api.github.com/users/ghost".to_string(),
            message: Some("Not Found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "GitHub API returned HTTP 404 for https://api.github.com/users/ghost: Not Found"
        );
    }

    #[test]
    fn status_error_display_without_message() {
        let err = RankError::Status {
            status: 502,
            url: "https://api.github.com/users".to_string(),
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "GitHub API returned HTTP 502 for https://api.github.com/users"
        );
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn rate_limit_detection() {
        let limited = RankError::Status {
            status: 403,
            url: "https://api.github.com/users".to_string(),
            message: Some("API rate limit exceeded for 127.0.0.1.".to_string()),
        };
        assert!(limited.is_rate_limited());

        let forbidden = RankError::Status {
            status: 403,
            url: "https://api.github.com/users".to_string(),
            message: Some("Forbidden".to_string()),
        };
        assert!(!forbidden.is_rate_limited());

        let too_many = RankError::Status {
            status: 429,
            url: "https://api.github.com/users".to_string(),
            message: None,
        };
        assert!(too_many.is_rate_limited());
    }

    #[test]
    fn config_error_conversion() {
        let err: RankError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, RankError::Config { .. }));
        assert!(err.to_string().contains("bad value"));
    }
}
