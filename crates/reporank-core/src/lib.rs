// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # reporank core
//!
//! Core library for the reporank CLI: rank GitHub users by the number of
//! public repositories they own.
//!
//! This crate provides:
//! - An unauthenticated GitHub REST client for the user list and user detail
//!   endpoints
//! - The exchange sort that orders users by repository count
//! - The pipeline tying both together
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reporank_core::{GitHubClient, NoopObserver, RankOptions, load_config, rank_users};
//!
//! # async fn example() -> reporank_core::Result<()> {
//! let config = load_config()?;
//! let client = GitHubClient::new(&config.github)?;
//!
//! let report = rank_users(&client, RankOptions::default(), &NoopObserver).await?;
//! for user in &report.users {
//!     println!("{} {}", user.login, user.public_repos);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`facade`] - The fetch, enrich, and sort pipeline
//! - [`github`] - GitHub REST client
//! - [`sort`] - Exchange sort by repository count
//! - [`user`] - The user record

// ============================================================================
// Error Handling
// ============================================================================

pub use error::RankError;

/// Convenience Result type for reporank operations.
///
/// This is equivalent to `std::result::Result<T, RankError>`.
pub type Result<T> = std::result::Result<T, RankError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, GitHubConfig, RankingConfig, UiConfig, config_dir, config_file_path, load_config,
    load_config_from,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::GitHubClient;
pub use github::users::{ListedUser, UserDetail};

// ============================================================================
// Ranking
// ============================================================================

pub use facade::{FetchObserver, NoopObserver, RankOptions, RankReport, rank_users};
pub use sort::{
    SortStats, exchange_sort_by, is_sorted_desc, sort_by_public_repos, sorted_by_public_repos,
};
pub use user::UserRecord;

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod facade;
pub mod github;
pub mod sort;
pub mod user;
