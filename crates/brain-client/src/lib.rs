//! Client-side orchestration for the Asset Brain property dashboard
//!
//! This crate keeps a local snapshot of the backend's collections and drives
//! every request the dashboard makes against it.
//!
//! # Components
//!
//! - **Resource store** ([`store`]): last-fetched snapshot of properties,
//!   maintenance issues, documents and analytics, plus transient UI state
//! - **Fetch orchestrator** ([`orchestrator`]): four concurrent reads joined
//!   all-or-nothing, then committed in a single replace
//! - **Query dispatcher** ([`query`]): one free-text query in, one result out,
//!   with every failure folded into a displayable fallback
//! - **Upload coordinator** ([`upload`]): multipart upload followed by a full
//!   resynchronisation
//! - **Renderer** ([`render`]): text fragments for partially-populated query
//!   rows and plain-text panels for each view
//!
//! # Example
//!
//! ```no_run
//! use brain_client::{ClientConfig, Dashboard, View};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::default();
//! let mut dashboard = Dashboard::connect(&config)?;
//!
//! // Populate the store on startup
//! dashboard.refresh_all().await;
//!
//! // Ask the backend a question and show the rows that came back
//! dashboard.submit_query("When was the last roof repair at 12 Elm?").await;
//!
//! dashboard.select_view(View::Maintenance);
//! println!("{}", dashboard.render_active_view()?);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod orchestrator;
pub mod query;
pub mod render;
pub mod store;
pub mod upload;
pub mod view;

// Re-export main types for convenience
pub use backend::{Backend, HttpBackend};
pub use brain_types as types;
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use error::{ClientError, Result};
pub use orchestrator::{FetchOrchestrator, RefreshOutcome};
pub use query::{QueryDispatcher, QueryOrdering, QueryTicket};
pub use render::{render, render_result, DisplayFragment, DisplayLine};
pub use store::{Notice, NoticeLevel, QueryApplied, RefreshStatus, ResourceStore, Snapshot};
pub use upload::{UploadCoordinator, UploadFile, UploadOutcome};
pub use view::View;
