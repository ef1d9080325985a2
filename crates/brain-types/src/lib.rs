//! Shared data model for the Asset Brain dashboard
//!
//! These types mirror the JSON bodies served by the property backend. The
//! backend owns every record; clients only ever re-fetch them.

mod de;
pub mod query;
pub mod types;

pub use query::{QueryRequest, QueryResult, ResultRecord};
pub use types::{
    AnalyticsSummary, CategoryBreakdown, Document, IssueStatus, MaintenanceIssue, Property,
    PropertyDetail, ServiceStatus, UploadResponse,
};
