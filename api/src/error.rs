use thiserror::Error;

/// Failures reported by a ledger query capability.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Entry not found: {0}")]
    NotFound(String),
    #[error("Node returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Invalid node url: {0}")]
    InvalidUrl(String),
}

impl QueryError {
    /// Whether issuing the same request again could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, QueryError::Transport(_) | QueryError::Status { status: 500..=599, .. })
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Malformed(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("Invalid bound: max count must be positive, got {0}")]
    InvalidBound(usize),
    #[error("Query failed: {0}")]
    Query(#[from] QueryError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SentinelError {
    #[error("Sentinel length must be positive")]
    EmptyLength,
    #[error("Sentinel must consist of zeros only: {0}")]
    NotZeros(String),
}
