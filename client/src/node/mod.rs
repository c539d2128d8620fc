mod http;

pub use http::*;

use std::sync::Arc;

use async_trait::async_trait;
use explorer_api::prelude::{LedgerEntry, QueryError};

/// Read access to a remote node's ledger.
///
/// Implementations own their transport concerns (timeouts, retries); callers
/// only see the entry or the reason it could not be produced.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// Fetches the current newest entry.
    async fn frontier(&self) -> Result<LedgerEntry, QueryError>;

    /// Fetches the entry whose `hash` equals `hash`.
    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError>;
}

#[async_trait]
impl<T: LedgerQuery + ?Sized> LedgerQuery for &T {
    async fn frontier(&self) -> Result<LedgerEntry, QueryError> {
        (**self).frontier().await
    }

    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError> {
        (**self).by_hash(hash).await
    }
}

#[async_trait]
impl<T: LedgerQuery + ?Sized> LedgerQuery for Box<T> {
    async fn frontier(&self) -> Result<LedgerEntry, QueryError> {
        (**self).frontier().await
    }

    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError> {
        (**self).by_hash(hash).await
    }
}

#[async_trait]
impl<T: LedgerQuery + ?Sized> LedgerQuery for Arc<T> {
    async fn frontier(&self) -> Result<LedgerEntry, QueryError> {
        (**self).frontier().await
    }

    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError> {
        (**self).by_hash(hash).await
    }
}
