// SPDX-License-Identifier: Apache-2.0

//! Rank GitHub users by public repository count.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reporank_core::{
    AppConfig, FetchObserver, GitHubClient, GitHubConfig, ListedUser, NoopObserver, RankOptions,
    rank_users,
};
use tracing::debug;

use super::types::RankResult;
use crate::cli::OutputContext;

/// Progress bar over the detail stage.
struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_message("Fetching users...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl FetchObserver for ProgressObserver {
    fn on_list(&self, total: usize) {
        self.bar.set_length(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            self.bar.set_style(style.progress_chars("=> "));
        }
    }

    fn on_detail(&self, index: usize, user: &ListedUser) {
        self.bar.set_position(index as u64);
        self.bar.set_message(user.login.clone());
    }

    fn on_done(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressObserver {
    fn drop(&mut self) {
        // Clears the bar when the run aborts mid-fetch.
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Applies command-line overrides on top of the loaded configuration.
///
/// Flags win over config values; unset flags fall back to the config.
pub fn resolve_settings(
    config: &AppConfig,
    api_url: Option<String>,
    limit: Option<usize>,
) -> (GitHubConfig, RankOptions) {
    let mut github = config.github.clone();
    if let Some(url) = api_url {
        debug!("Overriding GitHub API URL to: {url}");
        github.api_url = url;
    }
    let options = RankOptions {
        limit: limit.or(config.ranking.limit),
    };
    (github, options)
}

/// Fetch, enrich, and rank users.
///
/// `api_url` and `limit` override the corresponding config values.
pub async fn run(
    config: &AppConfig,
    ctx: &OutputContext,
    api_url: Option<String>,
    limit: Option<usize>,
) -> Result<RankResult> {
    let (github, options) = resolve_settings(config, api_url, limit);
    let client = GitHubClient::new(&github).context("Failed to build GitHub client")?;

    // stderr keeps structured stdout parseable.
    if !ctx.quiet {
        eprintln!("Fetching users from {}...", client.api_url());
    }

    let report = if ctx.is_interactive() && config.ui.progress_bars {
        let observer = ProgressObserver::new();
        rank_users(&client, options, &observer).await
    } else {
        rank_users(&client, options, &NoopObserver).await
    }
    .context("Failed to rank GitHub users")?;

    Ok(RankResult {
        api_url: client.api_url().to_string(),
        report,
    })
}
