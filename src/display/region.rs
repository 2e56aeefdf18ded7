//! List region formatting
//!
//! Prints a rendered region as a table when it has data rows, or as its
//! single placeholder/error line otherwise.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::controller::{ListRegion, Row};

/// Format a region with the given column headers
pub fn format_region(region: &ListRegion, headers: [&str; 2]) -> String {
    if region.entry_count() == 0 {
        let mut output = String::new();
        for row in region.rows() {
            output.push_str(&row.text());
            output.push('\n');
        }
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));

    for row in region.rows() {
        if let Row::Entry { label, detail } = row {
            builder.push_record([label.clone(), detail.clone()]);
        }
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the receipts region
pub fn format_receipts(region: &ListRegion) -> String {
    format_region(region, ["Receipt", "Date"])
}

/// Format the budgets region
pub fn format_budgets(region: &ListRegion) -> String {
    format_region(region, ["Category", "Spent / Limit"])
}
