#![allow(unused)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use explorer_api::prelude::*;
use explorer_client::LedgerQuery;

/// Hex hash for the entry at `index`, padded to `len` chars. Never all zeros.
pub fn hash_for(index: u64, len: usize) -> String {
    format!("{:0width$x}", index + 1, width = len)
}

/// Builds a linked chain of `len` entries, genesis first.
pub fn build_chain(len: usize, hash_len: usize) -> Vec<LedgerEntry> {
    let sentinel = Sentinel::zeros(hash_len).unwrap();
    let mut acc = 0.0;

    (0..len as u64)
        .map(|index| {
            let diff_bits = 1 + (index % 4) as u32;
            acc += 2f64.powi(diff_bits as i32);
            LedgerEntry {
                index,
                timestamp: 1_700_000_000 + index as i64 * 60,
                payload: format!("payload {}", index),
                previous_hash: if index == 0 {
                    sentinel.to_string()
                } else {
                    hash_for(index - 1, hash_len)
                },
                nonce: index * 31 + 7,
                hash: hash_for(index, hash_len),
                difficulty_bits: diff_bits,
                accumulated_difficulty: acc,
            }
        })
        .collect()
}

/// In-memory ledger serving the two query operations, with failure injection.
pub struct MemoryChain {
    entries: Vec<LedgerEntry>,
    by_hash: HashMap<String, usize>,
    fail_frontier: bool,
    fail_by_hash_call: Option<usize>,
    frontier_calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MemoryChain {
    pub fn new(len: usize) -> Self {
        Self::with_hash_len(len, DEFAULT_HASH_LEN)
    }

    pub fn with_hash_len(len: usize, hash_len: usize) -> Self {
        Self::from_entries(build_chain(len, hash_len))
    }

    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        let by_hash = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.hash.clone(), i))
            .collect();

        Self {
            entries,
            by_hash,
            fail_frontier: false,
            fail_by_hash_call: None,
            frontier_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_frontier(mut self) -> Self {
        self.fail_frontier = true;
        self
    }

    /// Makes the `n`th by-hash query (1-based) fail with a transport error.
    pub fn failing_by_hash_call(mut self, n: usize) -> Self {
        self.fail_by_hash_call = Some(n);
        self
    }

    /// Forgets the entry at `index`, as a pruned node would.
    pub fn prune(mut self, index: usize) -> Self {
        let hash = self.entries[index].hash.clone();
        self.by_hash.remove(&hash);
        self
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn frontier_calls(&self) -> usize {
        self.frontier_calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerQuery for MemoryChain {
    async fn frontier(&self) -> Result<LedgerEntry, QueryError> {
        self.frontier_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_frontier {
            return Err(QueryError::Transport("connection refused".into()));
        }
        self.entries
            .last()
            .cloned()
            .ok_or_else(|| QueryError::Malformed("empty chain".into()))
    }

    async fn by_hash(&self, hash: &str) -> Result<LedgerEntry, QueryError> {
        let call = {
            let mut requested = self.requested.lock().unwrap();
            requested.push(hash.to_string());
            requested.len()
        };

        if self.fail_by_hash_call == Some(call) {
            return Err(QueryError::Transport(format!("request {} timed out", call)));
        }

        self.by_hash
            .get(hash)
            .map(|&i| self.entries[i].clone())
            .ok_or_else(|| QueryError::NotFound(hash.to_string()))
    }
}
