// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::RankResult;

use super::Renderable;

impl Renderable for RankResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let report = &self.report;

        if !ctx.quiet {
            writeln!(
                w,
                "Found {} users. Sorting by public repository count (highest first)...",
                report.users.len()
            )?;
            writeln!(w)?;
            writeln!(w, "{}", style("--- Ranking ---").bold())?;
        }

        for user in &report.users {
            writeln!(
                w,
                "User: {:<20} | Public repos: {}",
                user.login, user.public_repos
            )?;
        }

        if ctx.verbose {
            writeln!(w)?;
            writeln!(
                w,
                "{}",
                style(format!(
                    "Listed {} users from {}, skipped {} without a repository count.",
                    report.listed, self.api_url, report.skipped
                ))
                .dim()
            )?;
            writeln!(
                w,
                "{}",
                style(format!(
                    "Sort: {} passes, {} comparisons, {} swaps.",
                    report.stats.passes, report.stats.comparisons, report.stats.swaps
                ))
                .dim()
            )?;
        }

        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## GitHub users by public repositories\n")?;
        writeln!(w, "| Rank | User | ID | Public repos |")?;
        writeln!(w, "|-----:|------|---:|-------------:|")?;
        for (i, user) in self.report.users.iter().enumerate() {
            writeln!(
                w,
                "| {} | {} | {} | {} |",
                i + 1,
                user.login,
                user.id,
                user.public_repos
            )?;
        }
        Ok(())
    }
}
