use clipsift_types::{ContentBlock, HistoryRecord};
use rusqlite::Connection;
use tracing::Dispatch;

use crate::Result;
use crate::layout::{Listing, Tier};
use crate::queries::{contents, history};

/// Read-only view of a Maccy store over a caller-owned connection.
///
/// Diagnostics go to the injected [`Dispatch`], which is silent unless
/// [`HistoryStore::with_dispatch`] supplies a subscriber. Every call probes
/// the layouts again; nothing is cached between calls.
pub struct HistoryStore<'conn> {
    conn: &'conn Connection,
    dispatch: Dispatch,
}

impl<'conn> HistoryStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            dispatch: Dispatch::none(),
        }
    }

    /// Route diagnostics to `dispatch` for every call on this store.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Most recently copied records first. `limit == 0` fetches everything.
    pub fn fetch_recent(&self, limit: usize) -> Result<Vec<HistoryRecord>> {
        self.scoped(|| history::list(self.conn, Listing::Recent { limit }, Tier::LISTING))
    }

    pub fn fetch_all(&self) -> Result<Vec<HistoryRecord>> {
        self.fetch_recent(0)
    }

    /// Records with a non-empty pin, most recently copied first.
    pub fn fetch_pinned(&self) -> Result<Vec<HistoryRecord>> {
        self.scoped(|| history::list(self.conn, Listing::Pinned, Tier::FIXED))
    }

    /// Content blocks of one record in storage order.
    pub fn fetch_contents(&self, record_id: i64) -> Result<Vec<ContentBlock>> {
        self.scoped(|| contents::fetch(self.conn, record_id))
    }

    fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
