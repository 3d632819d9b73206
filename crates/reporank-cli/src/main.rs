// SPDX-License-Identifier: Apache-2.0

//! reporank - rank GitHub users by public repository count.
//!
//! Fetches the GitHub user list, looks up each user's repository count one
//! request at a time, and prints the users from most to fewest repositories.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);
    commands::run(cli.command, output_ctx).await
}
