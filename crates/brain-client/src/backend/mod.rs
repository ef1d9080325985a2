//! Transport seam between the dashboard components and the property backend
//!
//! Components only ever talk to a [`Backend`]. [`HttpBackend`] is the real
//! implementation; tests substitute scripted in-memory backends.

mod http;

use async_trait::async_trait;
use brain_types::{
    AnalyticsSummary, Document, MaintenanceIssue, Property, PropertyDetail, QueryRequest,
    QueryResult, ServiceStatus, UploadResponse,
};

use crate::error::Result;
use crate::upload::UploadFile;

pub use http::HttpBackend;

/// The backend's request/response contract
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/properties`
    async fn list_properties(&self) -> Result<Vec<Property>>;

    /// `GET /api/maintenance`
    async fn list_maintenance(&self) -> Result<Vec<MaintenanceIssue>>;

    /// `GET /api/documents`
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// `GET /api/analytics`
    async fn analytics(&self) -> Result<AnalyticsSummary>;

    /// `POST /api/query`
    async fn submit_query(&self, request: &QueryRequest) -> Result<QueryResult>;

    /// `POST /api/upload` as multipart `file` + `property_id`.
    ///
    /// Implementations return `Ok` for any response whose body carries a
    /// message, whatever its status: the backend may have stored the file
    /// even when it reports a problem.
    async fn upload(&self, file: &UploadFile, property_id: &str) -> Result<UploadResponse>;

    /// `GET /api/properties/{id}`
    async fn property_detail(&self, property_id: &str) -> Result<PropertyDetail>;

    /// `GET /`
    async fn service_status(&self) -> Result<ServiceStatus>;
}
