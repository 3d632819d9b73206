// SPDX-License-Identifier: Apache-2.0

//! The user record ranked by reporank.

use serde::{Deserialize, Serialize};

/// A GitHub user reduced to the fields the ranking needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// GitHub login (handle).
    pub login: String,
    /// Numeric GitHub account id.
    pub id: u64,
    /// Number of public repositories owned by the user.
    pub public_repos: u32,
}

impl UserRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(login: impl Into<String>, id: u64, public_repos: u32) -> Self {
        Self {
            login: login.into(),
            id,
            public_repos,
        }
    }
}
