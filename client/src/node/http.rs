use async_trait::async_trait;
use explorer_api::prelude::*;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use tokio::time::Duration;

use super::LedgerQuery;
use crate::utils::retry_transient;

/// A node reachable over its REST interface.
///
/// Routes:
/// - `GET {base}/frontier_block` returns the newest entry.
/// - `GET {base}/block/{hash}` returns the entry with that hash, 404 if unknown.
#[derive(Debug, Clone)]
pub struct HttpNode {
    http: HttpClient,
    base_url: String,
    sentinel: Sentinel,
    retries: u32,
}

#[derive(Debug, Clone)]
pub struct HttpNodeBuilder {
    base_url: String,
    timeout: Duration,
    retries: u32,
    sentinel: Sentinel,
}

impl HttpNodeBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the sentinel whose length every served hash must match.
    pub fn sentinel(mut self, sentinel: Sentinel) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn build(self) -> Result<HttpNode, QueryError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        Ok(HttpNode {
            http,
            base_url,
            sentinel: self.sentinel,
            retries: self.retries,
        })
    }
}

impl HttpNode {
    pub fn new(base_url: &str) -> Result<Self, QueryError> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: &str) -> HttpNodeBuilder {
        HttpNodeBuilder {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
            sentinel: Sentinel::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    fn frontier_url(&self) -> String {
        format!("{}/{}", self.base_url, FRONTIER_ROUTE)
    }

    fn block_url(&self, hash: &str) -> String {
        format!("{}/{}/{}", self.base_url, BLOCK_ROUTE, hash)
    }

    /// Issues a single GET and decodes the body into an entry.
    async fn fetch_entry(&self, url: &str, hash: Option<&str>) -> Result<LedgerEntry, QueryError> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(hash) = hash {
                return Err(QueryError::NotFound(hash.to_string()));
            }
        }
        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let entry = LedgerEntry::from_json(&body)?;
        self.check_encoding(&entry)?;

        if let Some(hash) = hash {
            if !entry.hash.eq_ignore_ascii_case(hash) {
                return Err(QueryError::Malformed(format!(
                    "asked for {}, node answered with {}",
                    hash, entry.hash
                )));
            }
        }
        Ok(entry)
    }

    fn check_encoding(&self, entry: &LedgerEntry) -> Result<(), QueryError> {
        for (field, value) in [("hash", &entry.hash), ("previous", &entry.previous_hash)] {
            if !self.sentinel.check_len(value) {
                return Err(QueryError::Malformed(format!(
                    "{} of entry {} has length {}, expected {}",
                    field,
                    entry.index,
                    value.len(),
                    self.sentinel.len()
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerQuery for HttpNode {
    async fn frontier(&self) -> Result<LedgerEntry, QueryError> {
        let url = self.frontier_url();
        retry_transient(self.retries, || self.fetch_entry(&url, None)).await
    }

    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError> {
        check_hex(hash)?;
        let url = self.block_url(hash);
        retry_transient(self.retries, || self.fetch_entry(&url, Some(hash))).await
    }
}

/// Hashes travel as a raw path segment, so only hex digits are let through.
fn check_hex(hash: &str) -> Result<(), QueryError> {
    if hash.is_empty() || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QueryError::Malformed(format!("not a hex hash: {:?}", hash)));
    }
    Ok(())
}

fn normalize_base_url(url: &str) -> Result<String, QueryError> {
    let url = url.trim();
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| QueryError::InvalidUrl(url.to_string()))?;

    if host.trim_end_matches('/').is_empty() {
        return Err(QueryError::InvalidUrl(url.to_string()));
    }

    Ok(url.trim_end_matches('/').to_string())
}
