//! Printing for actions that do not map onto a view

use std::path::Path;

use brain_client::render::format_currency;
use brain_client::{Backend, Dashboard, NoticeLevel, ResourceStore, UploadFile};
use brain_types::PropertyDetail;
use tracing::warn;

/// Print and discard pending notices. Errors go to stderr.
pub fn print_notices(store: &mut ResourceStore) {
    for notice in store.take_notices() {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("{}", notice.message),
        }
    }
}

/// Read `path` and upload it. Returns whether the backend answered.
pub async fn upload<B: Backend>(
    dashboard: &mut Dashboard<B>,
    path: &Path,
    property_id: Option<&str>,
) -> bool {
    let file = match UploadFile::from_path(path).await {
        Ok(file) => file,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            eprintln!("Cannot read {}", path.display());
            return false;
        }
    };

    println!("Uploading {} ({} bytes)...", file.filename(), file.len());
    let outcome = match property_id {
        Some(id) => dashboard.upload_file_to(&file, id).await,
        None => dashboard.upload_file(&file).await,
    };
    matches!(outcome, brain_client::UploadOutcome::Delivered { .. })
}

pub async fn property<B: Backend>(dashboard: &Dashboard<B>, property_id: &str) {
    match dashboard.property_detail(property_id).await {
        Ok(detail) => print!("{}", format_detail(&detail)),
        Err(e) => {
            warn!("Property lookup failed: {}", e);
            eprintln!("Property {} could not be loaded.", property_id);
        }
    }
}

pub async fn status<B: Backend>(dashboard: &Dashboard<B>) {
    match dashboard.service_status().await {
        Ok(status) => println!("{} ({})", status.message, status.status),
        Err(e) => {
            warn!("Status check failed: {}", e);
            eprintln!("Backend is not reachable.");
        }
    }
}

pub fn format_detail(detail: &PropertyDetail) -> String {
    let prop = &detail.property;
    let mut out = format!("{}\n", prop.address);

    if let Some(kind) = &prop.property_type {
        out.push_str(&format!("  Type:   {}\n", kind));
    }
    if let Some(tenant) = &prop.tenant_name {
        out.push_str(&format!("  Tenant: {}\n", tenant));
    }
    if let Some(lease) = &prop.lease_type {
        out.push_str(&format!("  Lease:  {}\n", lease));
    }
    if let Some(rent) = prop.rent_amount {
        out.push_str(&format!("  Rent:   {}/mo\n", format_currency(rent)));
    }
    if let (Some(start), Some(end)) = (prop.lease_start_date, prop.lease_end_date) {
        out.push_str(&format!("  Term:   {} to {}\n", start, end));
    }

    if detail.maintenance_history.is_empty() {
        out.push_str("  No maintenance history\n");
    } else {
        out.push_str("  Maintenance history:\n");
        for issue in &detail.maintenance_history {
            out.push_str(&format!(
                "    {}  {}  {}  {}  [{}]\n",
                issue.date,
                issue.category,
                issue.description,
                format_currency(issue.cost),
                issue.status
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_types::{IssueStatus, MaintenanceIssue, Property};
    use pretty_assertions::assert_eq;

    fn elm() -> Property {
        Property {
            id: "12_elm_street".into(),
            address: "12 Elm Street".into(),
            property_type: Some("Commercial".into()),
            tenant_name: Some("Acme Corp".into()),
            lease_type: None,
            rent_amount: Some(5000.0),
            lease_start_date: None,
            lease_end_date: None,
        }
    }

    #[test]
    fn test_detail_without_history() {
        let detail = PropertyDetail {
            property: elm(),
            maintenance_history: vec![],
        };
        assert_eq!(
            format_detail(&detail),
            "12 Elm Street\n  Type:   Commercial\n  Tenant: Acme Corp\n  Rent:   $5,000/mo\n  No maintenance history\n"
        );
    }

    #[test]
    fn test_detail_lists_history() {
        let detail = PropertyDetail {
            property: elm(),
            maintenance_history: vec![MaintenanceIssue {
                id: 1,
                property_id: "12_elm_street".into(),
                address: None,
                description: "Water infiltration northeast corner".into(),
                date: "2023-03-15".into(),
                vendor: "ABC Roofing".into(),
                category: "roof".into(),
                cost: 3200.0,
                status: IssueStatus::Resolved,
            }],
        };
        let out = format_detail(&detail);
        assert!(out.contains(
            "    2023-03-15  roof  Water infiltration northeast corner  $3,200  [Resolved]"
        ));
    }
}
