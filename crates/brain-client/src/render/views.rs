//! Plain-text panels for each dashboard view

use std::fmt::{self, Write};

use brain_types::{AnalyticsSummary, Document, MaintenanceIssue, Property};

use super::{format_currency, render_result};
use crate::store::ResourceStore;
use crate::upload::{ACCEPTED_EXTENSIONS, SIZE_HINT};
use crate::view::View;

const RULE: &str = "────────────────────────────────────────────────────────────────";

const BUSY_LINE: &str = "Processing...";

/// Shown above every view while the last refresh failed
pub const STALE_NOTICE: &str = "! Data may be stale: the last refresh failed.";

/// Render the store's active view. `upload_target` is the property new
/// uploads are filed under.
pub fn render_view(store: &ResourceStore, upload_target: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if store.refresh_status().is_stale() {
        writeln!(out, "{}", STALE_NOTICE)?;
        writeln!(out)?;
    }

    match store.active_view() {
        View::Dashboard => {
            if let Some(analytics) = store.analytics() {
                format_dashboard(&mut out, analytics)?;
            }
        }
        View::Properties => format_properties(&mut out, store.properties())?,
        View::Maintenance => format_maintenance(&mut out, store.maintenance())?,
        View::Documents => format_documents(&mut out, store.documents())?,
        View::Upload => format_upload(&mut out, upload_target)?,
    }

    Ok(out)
}

/// Tab strip with the active view bracketed
pub fn render_tabs(active: View) -> String {
    View::ALL
        .iter()
        .map(|v| {
            if *v == active {
                format!("[{}]", v)
            } else {
                format!(" {} ", v)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The search panel: the live result if there is one, with a busy line above
/// it while a query is outstanding
pub fn render_query_panel(store: &ResourceStore) -> Option<String> {
    let live = store.live_result().map(render_result);
    if !store.is_query_in_flight() {
        return live;
    }
    Some(match live {
        Some(result) => format!("{}\n{}", BUSY_LINE, result),
        None => BUSY_LINE.to_string(),
    })
}

fn format_dashboard(out: &mut String, analytics: &AnalyticsSummary) -> fmt::Result {
    writeln!(out, "  Total Properties:   {}", analytics.total_properties)?;
    writeln!(
        out,
        "  Monthly Rent:       {}",
        format_currency(analytics.total_monthly_rent)
    )?;
    writeln!(out, "  Active Issues:      {}", analytics.active_issues)?;
    writeln!(
        out,
        "  Total Maintenance:  {}",
        format_currency(analytics.total_maintenance_cost)
    )?;
    writeln!(out)?;

    writeln!(out, "Maintenance by Category")?;
    writeln!(out, "{}", RULE)?;
    for cat in &analytics.issues_by_category {
        writeln!(
            out,
            "  {:<20} {:>4} issues  {:>12}",
            cat.category,
            cat.count,
            format_currency(cat.total_cost)
        )?;
    }
    Ok(())
}

fn format_properties(out: &mut String, properties: &[Property]) -> fmt::Result {
    for prop in properties {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", prop.address)?;
        writeln!(
            out,
            "  {} • {}",
            prop.property_type.as_deref().unwrap_or("-"),
            prop.lease_type.as_deref().unwrap_or("-")
        )?;
        if let Some(rent) = prop.rent_amount {
            writeln!(out, "  {}/mo", format_currency(rent))?;
        }
        if let Some(end) = prop.lease_end_date {
            writeln!(out, "  Expires: {}", end)?;
        }
        writeln!(
            out,
            "  Tenant: {}",
            prop.tenant_name.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

fn format_maintenance(out: &mut String, issues: &[MaintenanceIssue]) -> fmt::Result {
    for issue in issues {
        let badge = if issue.status.is_resolved() { "✓" } else { "•" };

        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{}  {} {}",
            issue.address.as_deref().unwrap_or(&issue.property_id),
            badge,
            issue.status
        )?;
        writeln!(out, "  {}", issue.description)?;
        writeln!(
            out,
            "  {} • {} • {}",
            issue.date, issue.vendor, issue.category
        )?;
        writeln!(out, "  {}", format_currency(issue.cost))?;
    }
    Ok(())
}

fn format_documents(out: &mut String, documents: &[Document]) -> fmt::Result {
    for doc in documents {
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{}  [{}]",
            doc.filename,
            doc.doc_type.as_deref().unwrap_or("unknown")
        )?;
        writeln!(out, "  {} • {}", doc.property_id, doc.upload_date)?;
    }
    Ok(())
}

fn format_upload(out: &mut String, upload_target: &str) -> fmt::Result {
    writeln!(out, "Upload a document with: upload <path> [property_id]")?;
    writeln!(out, "  Property: {}", upload_target)?;
    writeln!(
        out,
        "  Accepted: {} ({})",
        ACCEPTED_EXTENSIONS
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", "),
        SIZE_HINT
    )?;
    writeln!(
        out,
        "  Documents are stored by the backend and metadata is extracted automatically."
    )?;
    Ok(())
}
