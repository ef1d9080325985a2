//! Fetch orchestration: fan out the four collection reads, join, commit
//!
//! ```text
//!            ┌─ GET /api/properties  ─┐
//!            ├─ GET /api/maintenance ─┤
//! refresh ───┤                        ├── all ok? ── commit snapshot
//!            ├─ GET /api/documents   ─┤       │
//!            └─ GET /api/analytics   ─┘       └── any error: keep old snapshot,
//!                                                 mark refresh failed
//! ```
//!
//! Partial results are never committed: a stale but consistent snapshot is
//! preferred over a fresh but mixed one.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::backend::Backend;
use crate::error::Result;
use crate::store::{ResourceStore, Snapshot};

/// Collection sizes committed by a successful refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCounts {
    pub properties: usize,
    pub maintenance: usize,
    pub documents: usize,
}

impl From<&Snapshot> for SnapshotCounts {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            properties: snapshot.properties.len(),
            maintenance: snapshot.maintenance.len(),
            documents: snapshot.documents.len(),
        }
    }
}

/// What a call to [`FetchOrchestrator::refresh_all`] did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All four reads succeeded and replaced the snapshot
    Refreshed(SnapshotCounts),
    /// At least one read failed; the previous snapshot is still in place
    Failed { reason: String },
}

impl RefreshOutcome {
    pub fn is_refreshed(&self) -> bool {
        matches!(self, RefreshOutcome::Refreshed(_))
    }
}

/// Performs the coordinated four-way read
pub struct FetchOrchestrator<B> {
    backend: Arc<B>,
}

impl<B> Clone for FetchOrchestrator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: Backend> FetchOrchestrator<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Issue the four reads concurrently and join them.
    ///
    /// # Errors
    ///
    /// Returns the first error to occur; the remaining reads are dropped.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let (properties, maintenance, documents, analytics) = futures::try_join!(
            self.backend.list_properties(),
            self.backend.list_maintenance(),
            self.backend.list_documents(),
            self.backend.analytics(),
        )?;

        Ok(Snapshot {
            properties,
            maintenance,
            documents,
            analytics: Some(analytics),
        })
    }

    /// Refresh every collection in `store`, all or nothing. Never fails; the
    /// outcome is returned and mirrored in the store's refresh status.
    #[instrument(skip_all)]
    pub async fn refresh_all(&self, store: &mut ResourceStore) -> RefreshOutcome {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let counts = SnapshotCounts::from(&snapshot);
                store.commit_snapshot(snapshot);
                info!(
                    properties = counts.properties,
                    maintenance = counts.maintenance,
                    documents = counts.documents,
                    "snapshot refreshed"
                );
                RefreshOutcome::Refreshed(counts)
            }
            Err(e) => {
                warn!("Error fetching data: {}", e);
                let reason = e.to_string();
                store.mark_refresh_failed(reason.clone());
                RefreshOutcome::Failed { reason }
            }
        }
    }
}
