// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use reporank_core::RankReport;
use serde::Serialize;

/// Result from the rank command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RankResult {
    /// API root the users were fetched from.
    pub api_url: String,
    /// Ranked users and run statistics.
    #[serde(flatten)]
    pub report: RankReport,
}
