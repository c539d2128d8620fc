mod cli;
mod commands;
mod log;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use explorer_client::HttpNode;
use tokio::time::Duration;

use cli::Cli;
use commands::chain;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if !cli.json {
        log::print_title("⛓ CHAIN EXPLORER");
    }

    let sentinel = cli.sentinel()?;
    let node = HttpNode::builder(&cli.node.url())
        .timeout(Duration::from_secs(cli.timeout))
        .retries(cli.retries)
        .sentinel(sentinel)
        .build()?;

    if !cli.json {
        log::print_message(&format!("Connected to: {}", node.base_url()));
    }

    // Never show a partial chain: on failure only the error is printed.
    if let Err(e) = chain::handle_chain_commands(&cli, &node).await {
        log::print_error(&format!("{:#}", e));
        process::exit(1);
    }

    Ok(())
}
