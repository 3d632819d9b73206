// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the reporank CLI.

pub mod completion;
pub mod rank;
pub mod types;

use anyhow::{Context, Result};
use reporank_core::config;
use tracing::debug;

use crate::cli::{Commands, CompletionCommand, OutputContext};
use crate::output;

/// Dispatch to the appropriate command handler.
///
/// Configuration is only loaded by commands that read it, so a broken config
/// file never blocks `completion`.
pub async fn run(command: Commands, ctx: OutputContext) -> Result<()> {
    match command {
        Commands::Rank { api_url, limit } => {
            let config = config::load_config().context("Failed to load configuration")?;
            debug!("Configuration loaded successfully");

            let result = rank::run(&config, &ctx, api_url, limit).await?;
            output::render(&result, &ctx)
        }

        Commands::Completion(completion_cmd) => match completion_cmd {
            CompletionCommand::Generate { shell } => completion::run_generate(shell),
        },
    }
}
