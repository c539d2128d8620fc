use std::io;

use anyhow::Result;
use explorer_api::prelude::*;
use explorer_client::{collect_recent_with_termination, HttpNode, LedgerQuery, Termination};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;

use crate::cli::{Cli, Commands};
use crate::log;
use crate::render;

pub async fn handle_chain_commands(cli: &Cli, node: &HttpNode) -> Result<()> {
    let entries = match &cli.command {
        Commands::Recent { count } => collect_window(node, *count, cli.json).await?,
        Commands::Frontier {} => vec![node.frontier().await?],
        Commands::Block { hash } => vec![node.by_hash(hash).await?],
    };

    if cli.json {
        render::render_json(&mut io::stdout().lock(), &entries)?;
        return Ok(());
    }

    log::print_section_header("Blocks");
    log::print_divider();
    render::render_entries(&mut io::stdout().lock(), &entries, node.sentinel())?;
    log::print_divider();
    log::print_count(&format!("{} entries", entries.len()));

    Ok(())
}

async fn collect_window(node: &HttpNode, count: usize, quiet: bool) -> Result<Vec<LedgerEntry>> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .expect("Failed to set progress style"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Walking back up to {} entries from the frontier...", count));

    let result = collect_recent_with_termination(count, node, node.sentinel()).await;
    pb.finish_and_clear();

    let (entries, termination) = result?;
    if !quiet {
        match termination {
            Termination::Genesis => log::print_message("Reached genesis"),
            Termination::Bound => log::print_message(&format!("Showing the newest {} entries", count)),
        }
    }

    Ok(entries)
}
