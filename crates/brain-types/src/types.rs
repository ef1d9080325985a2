use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A leased property as listed by `GET /api/properties`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub address: String,
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub lease_type: Option<String>,
    #[serde(default)]
    pub rent_amount: Option<f64>,
    #[serde(default)]
    pub lease_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub lease_end_date: Option<NaiveDate>,
}

/// Work order status. Only "Resolved" is singled out for display; every
/// other value is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    Resolved,
    Other(String),
}

impl IssueStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(self, IssueStatus::Resolved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Other(s) => s,
        }
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Other(String::new())
    }
}

impl From<String> for IssueStatus {
    fn from(s: String) -> Self {
        if s == "Resolved" {
            IssueStatus::Resolved
        } else {
            IssueStatus::Other(s)
        }
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Resolved => "Resolved".to_string(),
            IssueStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maintenance work order joined with its property address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceIssue {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_id: String,
    /// Only present on the joined listing, not on a property's history
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cost: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: IssueStatus,
}

/// An uploaded document and its extracted metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_date: String,
    /// Classification, usually the MIME type reported at upload
    #[serde(rename = "type", default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub content_summary: Option<String>,
    #[serde(default)]
    pub extracted_data: Option<serde_json::Value>,
}

/// Portfolio-wide totals from `GET /api/analytics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_properties: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_monthly_rent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_issues: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_maintenance_cost: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues_by_category: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cost: f64,
}

/// A single property with its full maintenance history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    pub property: Property,
    #[serde(default)]
    pub maintenance_history: Vec<MaintenanceIssue>,
}

/// Body returned by `POST /api/upload`
///
/// Only `message` is guaranteed; the rest depends on how far the backend got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub document_id: Option<i64>,
    #[serde(default)]
    pub extracted_data: Option<serde_json::Value>,
}

/// Banner served at the backend root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub status: String,
}
