pub const DEFAULT_HASH_LEN: usize          = 64;  // Hex chars (sha-256)
pub const DEFAULT_WINDOW: usize            = 10;  // Entries shown by the explorer

pub const FRONTIER_ROUTE: &str             = "frontier_block";
pub const BLOCK_ROUTE: &str                = "block";

pub const LOCALNET_URL: &str               = "http://127.0.0.1:8000";

pub const DEFAULT_TIMEOUT_SECS: u64        = 8;
pub const DEFAULT_RETRIES: u32             = 0;
pub const MAX_RETRIES: u32                 = 8;
