// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: list users, fetch each detail, sort.
//!
//! Requests are issued one at a time in list order. Any failure aborts the
//! whole run; there are no partial results.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::github::GitHubClient;
use crate::github::users::ListedUser;
use crate::sort::{SortStats, sort_by_public_repos};
use crate::user::UserRecord;

/// Options for a single ranking run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    /// Enrich at most this many users from the list.
    pub limit: Option<usize>,
}

/// Outcome of a ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    /// Users ordered by public repository count, highest first.
    pub users: Vec<UserRecord>,
    /// Number of users the list endpoint returned (before `limit`).
    pub listed: usize,
    /// Users dropped because their detail had no repository count.
    pub skipped: usize,
    /// Work done by the sort.
    pub stats: SortStats,
}

/// Receives progress notifications during the detail stage.
pub trait FetchObserver {
    /// Called once the list is known, with the number of details to fetch.
    fn on_list(&self, _total: usize) {}

    /// Called before the detail of `user` is requested.
    fn on_detail(&self, _index: usize, _user: &ListedUser) {}

    /// Called after the last detail was fetched.
    fn on_done(&self) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}

/// Fetches, enriches, and ranks users.
///
/// # Errors
///
/// Returns the first network, HTTP status, or decoding error encountered in
/// either stage.
#[instrument(skip(client, observer), fields(api_url = %client.api_url(), limit = ?options.limit))]
pub async fn rank_users(
    client: &GitHubClient,
    options: RankOptions,
    observer: &dyn FetchObserver,
) -> crate::Result<RankReport> {
    let mut listed = client.list_users().await?;
    let listed_count = listed.len();
    if let Some(limit) = options.limit {
        listed.truncate(limit);
    }

    observer.on_list(listed.len());
    let mut users = Vec::with_capacity(listed.len());
    let mut skipped = 0;
    for (index, entry) in listed.iter().enumerate() {
        observer.on_detail(index, entry);
        let detail = client.fetch_user_detail(entry).await?;
        match detail.into_record() {
            Some(record) => users.push(record),
            None => {
                warn!(login = %entry.login, "User detail has no public_repos, skipping");
                skipped += 1;
            }
        }
    }
    observer.on_done();

    let stats = sort_by_public_repos(&mut users);
    info!(
        ranked = users.len(),
        skipped,
        passes = stats.passes,
        swaps = stats.swaps,
        "Ranked users"
    );

    Ok(RankReport {
        users,
        listed: listed_count,
        skipped,
        stats,
    })
}
