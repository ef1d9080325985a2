//! Query dispatch: one free-text question, one displayable answer
//!
//! A submission is split into three steps so overlapping queries can be
//! expressed against a single owned store:
//!
//! 1. [`QueryDispatcher::begin`] validates the text, marks the query in
//!    flight and hands out a sequence-numbered [`QueryTicket`]
//! 2. [`QueryDispatcher::resolve`] performs the request without touching the
//!    store, folding every failure into [`fallback_result`]
//! 3. [`ResourceStore::complete_query`] clears the in-flight mark and applies
//!    the result according to the configured [`QueryOrdering`]
//!
//! [`QueryDispatcher::submit_query`] runs all three back to back. A ticket
//! that will never be completed must be handed to
//! [`ResourceStore::abandon_query`].

use std::sync::Arc;

use brain_types::{QueryRequest, QueryResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::backend::Backend;
use crate::store::ResourceStore;

/// Answer shown when the backend could not be reached or understood
pub const FALLBACK_ANSWER: &str = "Error processing query. Make sure the backend is running.";

/// The result substituted for any failed query
pub fn fallback_result() -> QueryResult {
    QueryResult::error(FALLBACK_ANSWER)
}

/// Reconciliation policy for responses to overlapping queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOrdering {
    /// Only the response to the most recently issued query is displayed
    #[default]
    LatestIssued,
    /// Whichever response arrives last is displayed, regardless of issue order
    LastArrival,
}

/// Handle for one outstanding query
#[derive(Debug, PartialEq, Eq)]
pub struct QueryTicket {
    seq: u64,
    text: String,
}

impl QueryTicket {
    pub(crate) fn new(seq: u64, text: &str) -> Self {
        Self {
            seq,
            text: text.to_string(),
        }
    }

    /// Monotonically increasing per store
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Submits queries and normalizes their outcome
pub struct QueryDispatcher<B> {
    backend: Arc<B>,
}

impl<B> Clone for QueryDispatcher<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: Backend> QueryDispatcher<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Start a query. Blank or whitespace-only text is a no-op and yields `None`.
    pub fn begin(&self, store: &mut ResourceStore, text: &str) -> Option<QueryTicket> {
        if text.trim().is_empty() {
            return None;
        }
        Some(store.begin_query(text))
    }

    /// Send the query. Never fails: errors become [`fallback_result`].
    #[instrument(skip(self, ticket), fields(seq = ticket.seq()))]
    pub async fn resolve(&self, ticket: &QueryTicket) -> QueryResult {
        let request = QueryRequest {
            query: ticket.text().to_string(),
        };

        match self.backend.submit_query(&request).await {
            Ok(result) => {
                info!(
                    query_type = %result.query_type,
                    rows = result.data.len(),
                    "query resolved"
                );
                result
            }
            Err(e) => {
                warn!("Query error: {}", e);
                fallback_result()
            }
        }
    }

    /// Submit `text` and settle it against `store`.
    ///
    /// Returns the result received for this query, or `None` when the text
    /// was blank and nothing was sent. If the returned future is dropped
    /// before the response arrives, the query is abandoned and no longer
    /// counts as in flight.
    pub async fn submit_query(&self, store: &mut ResourceStore, text: &str) -> Option<QueryResult> {
        let ticket = self.begin(store, text)?;
        let pending = PendingQuery {
            seq: Some(ticket.seq()),
            store,
        };
        let result = self.resolve(&ticket).await;
        pending.complete(ticket, result.clone());
        Some(result)
    }
}

/// Settles a query exactly once: completed with a result, or abandoned when
/// dropped first
struct PendingQuery<'a> {
    store: &'a mut ResourceStore,
    seq: Option<u64>,
}

impl PendingQuery<'_> {
    fn complete(mut self, ticket: QueryTicket, result: QueryResult) {
        self.seq = None;
        self.store.complete_query(ticket, result);
    }
}

impl Drop for PendingQuery<'_> {
    fn drop(&mut self) {
        if let Some(seq) = self.seq.take() {
            warn!(seq, "query abandoned before its response arrived");
            self.store.release_query(seq);
        }
    }
}
