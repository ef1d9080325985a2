//! Rendering for query rows and dashboard views
//!
//! [`render`] turns one partially-populated [`ResultRecord`] into a
//! [`DisplayFragment`]: a line per field that is present and meaningful, in a
//! fixed order. It is pure and total; an empty record renders nothing.
//!
//! The [`views`] submodule builds the plain-text panel for each
//! [`View`](crate::View) from a [`ResourceStore`](crate::ResourceStore).

mod currency;
pub mod views;

use std::fmt;

use brain_types::{QueryResult, ResultRecord};

pub use currency::{format_currency, group_thousands};

/// One displayed field of a query row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    Address(String),
    Description(String),
    /// Date shown verbatim
    Date(String),
    /// Grouped amount without the currency sign, e.g. `1,500`
    Cost(String),
    /// Grouped amount without the currency sign
    TotalCost(String),
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayLine::Address(s) | DisplayLine::Description(s) => f.write_str(s),
            DisplayLine::Date(s) => write!(f, "Date: {}", s),
            DisplayLine::Cost(s) => write!(f, "${}", s),
            DisplayLine::TotalCost(s) => write!(f, "Total: ${}", s),
        }
    }
}

/// The rendered form of one query row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFragment {
    pub lines: Vec<DisplayLine>,
}

impl DisplayFragment {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for DisplayFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render the fields of `record` that are worth showing.
///
/// Text fields appear when present and non-empty. Currency fields appear only
/// when strictly greater than zero; absent and zero both mean "nothing to
/// show".
pub fn render(record: &ResultRecord) -> DisplayFragment {
    let mut lines = Vec::new();

    if let Some(address) = non_empty(&record.address) {
        lines.push(DisplayLine::Address(address.to_string()));
    }
    if let Some(description) = non_empty(&record.description) {
        lines.push(DisplayLine::Description(description.to_string()));
    }
    if let Some(date) = non_empty(&record.date) {
        lines.push(DisplayLine::Date(date.to_string()));
    }
    if let Some(cost) = positive(record.cost) {
        lines.push(DisplayLine::Cost(group_thousands(cost)));
    }
    if let Some(total) = positive(record.total_cost) {
        lines.push(DisplayLine::TotalCost(group_thousands(total)));
    }

    DisplayFragment { lines }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn positive(amount: Option<f64>) -> Option<f64> {
    amount.filter(|v| *v > 0.0)
}

/// Render a whole result: the answer, then one fragment per row that has
/// anything to show
pub fn render_result(result: &QueryResult) -> String {
    let mut out = result.answer.clone();
    for fragment in result.data.iter().map(render).filter(|f| !f.is_empty()) {
        out.push_str("\n\n");
        for line in &fragment.lines {
            out.push_str("  ");
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out.pop();
    }
    out
}
