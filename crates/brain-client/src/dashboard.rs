//! Dashboard facade: one store plus the components that act on it

use std::fmt;
use std::sync::Arc;

use brain_types::{PropertyDetail, QueryResult, ServiceStatus};

use crate::backend::{Backend, HttpBackend};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::orchestrator::{FetchOrchestrator, RefreshOutcome};
use crate::query::QueryDispatcher;
use crate::render::views;
use crate::store::ResourceStore;
use crate::upload::{UploadCoordinator, UploadFile, UploadOutcome};
use crate::view::View;

/// Owns the resource store and routes every user action to its component
pub struct Dashboard<B> {
    backend: Arc<B>,
    store: ResourceStore,
    orchestrator: FetchOrchestrator<B>,
    dispatcher: QueryDispatcher<B>,
    uploader: UploadCoordinator<B>,
    default_property_id: String,
}

impl Dashboard<HttpBackend> {
    /// Dashboard talking HTTP to the configured backend. The store starts
    /// empty; call [`Dashboard::refresh_all`] to populate it.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let backend = HttpBackend::new(config)?;
        Ok(Self::new(Arc::new(backend), config))
    }
}

impl<B: Backend> Dashboard<B> {
    pub fn new(backend: Arc<B>, config: &ClientConfig) -> Self {
        let orchestrator = FetchOrchestrator::new(Arc::clone(&backend));
        Self {
            store: ResourceStore::new(config.query_ordering),
            dispatcher: QueryDispatcher::new(Arc::clone(&backend)),
            uploader: UploadCoordinator::new(Arc::clone(&backend), orchestrator.clone()),
            orchestrator,
            backend,
            default_property_id: config.default_property_id.clone(),
        }
    }

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ResourceStore {
        &mut self.store
    }

    pub fn default_property_id(&self) -> &str {
        &self.default_property_id
    }

    pub async fn refresh_all(&mut self) -> RefreshOutcome {
        self.orchestrator.refresh_all(&mut self.store).await
    }

    pub async fn submit_query(&mut self, text: &str) -> Option<QueryResult> {
        self.dispatcher.submit_query(&mut self.store, text).await
    }

    /// Upload for the configured default property
    pub async fn upload_file(&mut self, file: &UploadFile) -> UploadOutcome {
        let property_id = self.default_property_id.clone();
        self.upload_file_to(file, &property_id).await
    }

    pub async fn upload_file_to(&mut self, file: &UploadFile, property_id: &str) -> UploadOutcome {
        self.uploader
            .upload_file(&mut self.store, file, property_id)
            .await
    }

    /// Switch views. Never touches the network.
    pub fn select_view(&mut self, view: View) {
        self.store.select_view(view);
    }

    pub fn render_active_view(&self) -> std::result::Result<String, fmt::Error> {
        views::render_view(&self.store, &self.default_property_id)
    }

    /// Look up one property and its maintenance history. Does not touch the
    /// store.
    pub async fn property_detail(&self, property_id: &str) -> Result<PropertyDetail> {
        self.backend.property_detail(property_id).await
    }

    pub async fn service_status(&self) -> Result<ServiceStatus> {
        self.backend.service_status().await
    }
}
