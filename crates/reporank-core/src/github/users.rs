// SPDX-License-Identifier: Apache-2.0

//! User list and user detail endpoints.

use serde::Deserialize;
use tracing::{debug, instrument};

use super::GitHubClient;
use crate::user::UserRecord;

/// An entry of `GET /users`.
///
/// The list endpoint omits profile counters, so each entry carries the `url`
/// of its detail resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedUser {
    /// GitHub login.
    pub login: String,
    /// Numeric account id.
    pub id: u64,
    /// API URL of the user's detail resource.
    pub url: String,
}

/// The subset of `GET /users/{login}` reporank reads.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    /// GitHub login.
    pub login: String,
    /// Numeric account id.
    pub id: u64,
    /// Public repository count; absent for some account types.
    #[serde(default)]
    pub public_repos: Option<u32>,
}

impl UserDetail {
    /// Converts the detail into a rankable record, if it has a repository count.
    #[must_use]
    pub fn into_record(self) -> Option<UserRecord> {
        let public_repos = self.public_repos?;
        Some(UserRecord {
            login: self.login,
            id: self.id,
            public_repos,
        })
    }
}

impl GitHubClient {
    /// Fetches the first page of `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected body.
    #[instrument(skip(self), fields(api_url = %self.api_url()))]
    pub async fn list_users(&self) -> crate::Result<Vec<ListedUser>> {
        let url = self.endpoint("users");
        let users: Vec<ListedUser> = self.get_json(&url).await?;
        debug!(count = users.len(), "Fetched user list");
        Ok(users)
    }

    /// Fetches the detail resource of one listed user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected body.
    #[instrument(skip(self, user), fields(login = %user.login))]
    pub async fn fetch_user_detail(&self, user: &ListedUser) -> crate::Result<UserDetail> {
        self.get_json(&user.url).await
    }
}
