//! Shared helpers for brain-client integration tests

#![allow(dead_code)]

pub mod scripted;
pub mod server;

use brain_types::{
    AnalyticsSummary, CategoryBreakdown, Document, IssueStatus, MaintenanceIssue, Property,
};
use chrono::NaiveDate;

pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "12_elm_street".into(),
            address: "12 Elm Street".into(),
            property_type: Some("Commercial".into()),
            tenant_name: Some("Acme Corp".into()),
            lease_type: Some("Triple Net".into()),
            rent_amount: Some(5000.0),
            lease_start_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            lease_end_date: NaiveDate::from_ymd_opt(2028, 1, 14),
        },
        Property {
            id: "45_oak_avenue".into(),
            address: "45 Oak Avenue".into(),
            property_type: Some("Residential".into()),
            tenant_name: Some("Smith Family".into()),
            lease_type: Some("Gross Lease".into()),
            rent_amount: Some(2500.0),
            lease_start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            lease_end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        },
    ]
}

pub fn sample_maintenance() -> Vec<MaintenanceIssue> {
    vec![
        MaintenanceIssue {
            id: 1,
            property_id: "12_elm_street".into(),
            address: Some("12 Elm Street".into()),
            description: "Water infiltration northeast corner".into(),
            date: "2023-03-15".into(),
            vendor: "ABC Roofing".into(),
            category: "roof".into(),
            cost: 3200.0,
            status: IssueStatus::Resolved,
        },
        MaintenanceIssue {
            id: 4,
            property_id: "78_pine_road".into(),
            address: Some("78 Pine Road".into()),
            description: "Circuit breaker tripping issues".into(),
            date: "2024-05-22".into(),
            vendor: "ElectroFix".into(),
            category: "electrical".into(),
            cost: 0.0,
            status: IssueStatus::Other("In Progress".into()),
        },
    ]
}

pub fn sample_documents() -> Vec<Document> {
    vec![Document {
        id: 1,
        filename: "lease.pdf".into(),
        property_id: "12_elm_street".into(),
        upload_date: "2024-09-01T12:30:00".into(),
        doc_type: Some("application/pdf".into()),
        content_summary: Some("Uploaded lease.pdf".into()),
        extracted_data: None,
    }]
}

pub fn sample_analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_properties: 2,
        total_monthly_rent: 7500.0,
        active_issues: 1,
        total_maintenance_cost: 3200.0,
        issues_by_category: vec![
            CategoryBreakdown {
                category: "roof".into(),
                count: 1,
                total_cost: 3200.0,
            },
            CategoryBreakdown {
                category: "electrical".into(),
                count: 1,
                total_cost: 0.0,
            },
        ],
    }
}
