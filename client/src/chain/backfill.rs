use explorer_api::prelude::*;
use log::debug;

use crate::node::LedgerQuery;

/// Why a backward walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last collected entry links to the sentinel.
    Genesis,
    /// The requested number of entries was collected.
    Bound,
}

/// Collects the newest `max_count` entries, frontier first.
///
/// Walks `previous` links backward from the frontier, one query at a time,
/// until the sentinel is reached or `max_count` entries are held. Any query
/// failure aborts the walk; no partial result is returned.
pub async fn collect_recent<Q>(
    max_count: usize,
    query: &Q,
    sentinel: &Sentinel,
) -> Result<Vec<LedgerEntry>, BackfillError>
where
    Q: LedgerQuery + ?Sized,
{
    collect_recent_with_termination(max_count, query, sentinel)
        .await
        .map(|(entries, _)| entries)
}

/// Like [`collect_recent`], also reporting which condition ended the walk.
pub async fn collect_recent_with_termination<Q>(
    max_count: usize,
    query: &Q,
    sentinel: &Sentinel,
) -> Result<(Vec<LedgerEntry>, Termination), BackfillError>
where
    Q: LedgerQuery + ?Sized,
{
    if max_count == 0 {
        return Err(BackfillError::InvalidBound(max_count));
    }

    let frontier = query.frontier().await?;
    debug!("Frontier is #{} {}", frontier.index, frontier.hash);

    let mut previous = frontier.previous_hash.clone();
    let mut entries = vec![frontier];

    let termination = loop {
        if sentinel.matches(&previous) {
            break Termination::Genesis;
        }
        if entries.len() >= max_count {
            break Termination::Bound;
        }

        let entry = query.by_hash(&previous).await?;
        debug!("Fetched #{} {}", entry.index, entry.hash);

        previous = entry.previous_hash.clone();
        entries.push(entry);
    };

    debug!("Collected {} entries, stopped at {:?}", entries.len(), termination);

    Ok((entries, termination))
}

/// A query capability bundled with the window it should be read through.
pub struct Backfiller<Q> {
    query: Q,
    sentinel: Sentinel,
    window: usize,
}

impl<Q: LedgerQuery> Backfiller<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            sentinel: Sentinel::default(),
            window: DEFAULT_WINDOW,
        }
    }

    pub fn with_sentinel(mut self, sentinel: Sentinel) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub async fn collect(&self) -> Result<Vec<LedgerEntry>, BackfillError> {
        collect_recent(self.window, &self.query, &self.sentinel).await
    }
}
