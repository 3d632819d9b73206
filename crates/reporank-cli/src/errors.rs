// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `RankError` and appends a hint for the
//! failure modes users actually hit: the anonymous rate limit, connectivity,
//! and broken config files.

use std::fmt::Write;

use anyhow::Error;
use reporank_core::{RankError, config_file_path};

/// Formats an error for CLI display with helpful hints.
///
/// The message is the full context chain (outermost first). If the root
/// cause is a `RankError`, a hint is appended.
pub fn format_error(error: &Error) -> String {
    let mut msg = error
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");

    let Some(rank_err) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RankError>())
    else {
        return msg;
    };

    match rank_err {
        e if e.is_rate_limited() => {
            msg.push_str("\n\nTip: Unauthenticated GitHub API requests are limited to 60 per hour.");
            msg.push_str("\n- Wait for the limit to reset, or use --limit to look up fewer users.");
        }
        RankError::Status { status: 404, .. } => {
            msg.push_str("\n\nTip: Check that --api-url points at a GitHub REST API root.");
        }
        RankError::Status { .. } => {
            msg.push_str("\n\nTip: GitHub may be having trouble. Try again in a moment.");
        }
        RankError::Network(_) => {
            msg.push_str("\n\nTip: Check your internet connection and try again.");
        }
        RankError::InvalidResponse { .. } => {
            msg.push_str(
                "\n\nTip: The server did not answer like the GitHub REST API. Check --api-url.",
            );
        }
        RankError::Config { .. } => {
            let _ = write!(
                msg,
                "\n\nTip: Check your config file at {}",
                config_file_path().display()
            );
        }
    }

    msg
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    fn status(status: u16, message: Option<&str>) -> RankError {
        RankError::Status {
            status,
            url: "https://api.github.com/users".to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_format_rate_limited_error() {
        let err = anyhow::Error::new(status(403, Some("API rate limit exceeded for 1.2.3.4.")));
        let formatted = format_error(&err);

        assert!(formatted.contains("HTTP 403"));
        assert!(formatted.contains("60 per hour"));
        assert!(formatted.contains("--limit"));
    }

    #[test]
    fn test_format_not_found_error() {
        let err = anyhow::Error::new(status(404, Some("Not Found")));
        let formatted = format_error(&err);

        assert!(formatted.contains("HTTP 404"));
        assert!(formatted.contains("--api-url"));
    }

    #[test]
    fn test_format_server_error() {
        let err = anyhow::Error::new(status(503, None));
        let formatted = format_error(&err);

        assert!(formatted.contains("HTTP 503"));
        assert!(formatted.contains("Try again"));
        assert!(!formatted.contains("60 per hour"));
    }

    #[test]
    fn test_format_config_error() {
        let err = anyhow::Error::new(RankError::Config {
            message: "invalid type".to_string(),
        });
        let formatted = format_error(&err);

        assert!(formatted.contains("Configuration error: invalid type"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_format_keeps_context_chain() {
        let result: Result<(), RankError> = Err(status(500, None));
        let err = result.context("Failed to rank users").unwrap_err();
        let formatted = format_error(&err);

        assert!(formatted.starts_with("Failed to rank users: GitHub API returned HTTP 500"));
        assert!(formatted.contains("Tip:"));
    }

    #[test]
    fn test_format_non_rank_error() {
        let error = anyhow::anyhow!("Some generic error");
        let formatted = format_error(&error);

        assert_eq!(formatted, "Some generic error");
    }
}
