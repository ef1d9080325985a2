//! Resource store: the client-held snapshot plus transient UI state
//!
//! The store is an ordinary owned value. Components receive it as
//! `&mut ResourceStore`, mutate it through the methods here and return a typed
//! outcome; views only ever read it.

use std::collections::BTreeSet;

use brain_types::{AnalyticsSummary, Document, MaintenanceIssue, Property, QueryResult};
use chrono::{DateTime, Utc};

use crate::query::{QueryOrdering, QueryTicket};
use crate::view::View;

/// The four backend collections as of the last successful refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub properties: Vec<Property>,
    pub maintenance: Vec<MaintenanceIssue>,
    pub documents: Vec<Document>,
    /// `None` until the first successful refresh
    pub analytics: Option<AnalyticsSummary>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.maintenance.is_empty()
            && self.documents.is_empty()
            && self.analytics.is_none()
    }
}

/// How the most recent refresh went
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RefreshStatus {
    /// No refresh has completed yet
    #[default]
    Never,
    Fresh { at: DateTime<Utc> },
    /// The snapshot is older than the last attempt
    Failed { reason: String, at: DateTime<Utc> },
}

impl RefreshStatus {
    pub fn is_stale(&self) -> bool {
        matches!(self, RefreshStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message for the user, shown once and then discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Whether a completed query became the live result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryApplied {
    Applied,
    /// A newer query was issued after this one
    Discarded,
}

#[derive(Debug, Default)]
struct QueryState {
    live: Option<QueryResult>,
    latest_seq: u64,
    /// Sequence numbers issued but not yet completed or abandoned
    outstanding: BTreeSet<u64>,
    ordering: QueryOrdering,
}

/// Client-side cache of the backend collections and UI state
#[derive(Debug, Default)]
pub struct ResourceStore {
    snapshot: Snapshot,
    refresh: RefreshStatus,
    view: View,
    query: QueryState,
    uploading: bool,
    notices: Vec<Notice>,
}

impl ResourceStore {
    pub fn new(ordering: QueryOrdering) -> Self {
        Self {
            query: QueryState {
                ordering,
                ..QueryState::default()
            },
            ..Self::default()
        }
    }

    // ==================== Snapshot ====================

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn properties(&self) -> &[Property] {
        &self.snapshot.properties
    }

    pub fn maintenance(&self) -> &[MaintenanceIssue] {
        &self.snapshot.maintenance
    }

    pub fn documents(&self) -> &[Document] {
        &self.snapshot.documents
    }

    pub fn analytics(&self) -> Option<&AnalyticsSummary> {
        self.snapshot.analytics.as_ref()
    }

    pub fn refresh_status(&self) -> &RefreshStatus {
        &self.refresh
    }

    /// Replace all four collections in one assignment
    pub(crate) fn commit_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.refresh = RefreshStatus::Fresh { at: Utc::now() };
    }

    /// Record a failed refresh; the snapshot itself is left alone
    pub(crate) fn mark_refresh_failed(&mut self, reason: String) {
        self.refresh = RefreshStatus::Failed {
            reason,
            at: Utc::now(),
        };
    }

    // ==================== View ====================

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    // ==================== Query ====================

    /// The result currently on display, if any
    pub fn live_result(&self) -> Option<&QueryResult> {
        self.query.live.as_ref()
    }

    /// True while at least one query is awaiting its response
    pub fn is_query_in_flight(&self) -> bool {
        !self.query.outstanding.is_empty()
    }

    pub(crate) fn begin_query(&mut self, text: &str) -> QueryTicket {
        self.query.latest_seq += 1;
        self.query.outstanding.insert(self.query.latest_seq);
        QueryTicket::new(self.query.latest_seq, text)
    }

    /// Settle a query started with [`QueryDispatcher::begin`].
    ///
    /// Always clears this query's in-flight mark. Whether `result` replaces
    /// the live result depends on the store's [`QueryOrdering`].
    ///
    /// [`QueryDispatcher::begin`]: crate::query::QueryDispatcher::begin
    pub fn complete_query(&mut self, ticket: QueryTicket, result: QueryResult) -> QueryApplied {
        self.query.outstanding.remove(&ticket.seq());

        let current = match self.query.ordering {
            QueryOrdering::LatestIssued => ticket.seq() == self.query.latest_seq,
            QueryOrdering::LastArrival => true,
        };

        if current {
            self.query.live = Some(result);
            QueryApplied::Applied
        } else {
            QueryApplied::Discarded
        }
    }

    /// Give up on a query whose response will never be applied. Clears its
    /// in-flight mark and leaves the live result alone.
    pub fn abandon_query(&mut self, ticket: QueryTicket) {
        self.release_query(ticket.seq());
    }

    pub(crate) fn release_query(&mut self, seq: u64) {
        self.query.outstanding.remove(&seq);
    }

    // ==================== Upload ====================

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub(crate) fn set_uploading(&mut self, uploading: bool) {
        self.uploading = uploading;
    }

    // ==================== Notices ====================

    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notices to the caller and forget them
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
