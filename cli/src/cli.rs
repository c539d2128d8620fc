use clap::{Parser, Subcommand};
use explorer_api::prelude::*;
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "explorer",
    about = "Inspect the newest blocks of a hash-linked ledger.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'u',
        long = "node",
        default_value = "l",
        global = true,
        help = "Node to query: l (localnet), or a custom URL (http:// or https://)"
    )]
    pub node: Node,

    #[arg(
        long = "hash-len",
        default_value_t = DEFAULT_HASH_LEN,
        global = true,
        help = "Length of the node's hex hash encoding"
    )]
    pub hash_len: usize,

    #[arg(
        long = "sentinel",
        global = true,
        conflicts_with = "hash_len",
        help = "Explicit all-zero predecessor hash marking genesis (overrides --hash-len)"
    )]
    pub sentinel: Option<Sentinel>,

    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS, global = true, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(
        long = "retries",
        default_value_t = DEFAULT_RETRIES,
        value_parser = clap::value_parser!(u32).range(0..=MAX_RETRIES as i64),
        global = true,
        help = "Retries for failed requests"
    )]
    pub retries: u32,

    #[arg(long = "json", help = "Print entries as JSON", global = true)]
    pub json: bool,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output", global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The genesis marker, from `--sentinel` if given, else `--hash-len` zeros.
    pub fn sentinel(&self) -> Result<Sentinel, SentinelError> {
        match &self.sentinel {
            Some(sentinel) => Ok(sentinel.clone()),
            None => Sentinel::zeros(self.hash_len),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Recent {
        #[arg(short = 'n', long = "count", default_value_t = DEFAULT_WINDOW, help = "Number of entries to show")]
        count: usize,
    },
    Frontier {},
    Block {
        #[arg(help = "Hash of the entry to show")]
        hash: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Localnet,
    Custom(String),
}

impl Node {
    pub fn url(&self) -> String {
        match self {
            Node::Localnet => LOCALNET_URL.to_string(),
            Node::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Node {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Node::Localnet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Node::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid node value: '{}'. Use l or a valid URL (http:// or https://)",
                s
            )),
        }
    }
}
