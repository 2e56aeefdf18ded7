//! Display regions
//!
//! A region is the rendered form of one list. Every render pass replaces
//! the whole region; nothing is carried over between fetches.

use crate::models::{Budget, Receipt};

/// Placeholder shown when the receipts list is empty
pub const NO_RECEIPTS: &str = "No receipts yet.";

/// Placeholder shown when the budgets list is empty
pub const NO_BUDGETS: &str = "No budgets yet.";

/// One rendered line of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A data row: primary label and secondary detail
    Entry { label: String, detail: String },
    /// Shown instead of data rows when the list is empty
    Placeholder(String),
    /// Shown instead of data rows when the fetch failed
    Error(String),
}

impl Row {
    pub fn entry(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Entry {
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// A receipt row: "<vendor> — <total>" plus the date
    pub fn receipt(receipt: &Receipt) -> Self {
        Self::entry(
            format!("{} — {}", receipt.vendor_label(), receipt.total_or_zero()),
            receipt.date_label(),
        )
    }

    /// A budget row: category plus "spent / limit"
    pub fn budget(budget: &Budget) -> Self {
        Self::entry(budget.category.clone(), budget.usage_label())
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Entry { .. })
    }

    /// Plain-text rendering of the row
    pub fn text(&self) -> String {
        match self {
            Self::Entry { label, detail } if detail.is_empty() => label.clone(),
            Self::Entry { label, detail } => format!("{}  {}", label, detail),
            Self::Placeholder(text) | Self::Error(text) => text.clone(),
        }
    }
}

/// The rendered contents of one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRegion {
    rows: Vec<Row>,
}

impl ListRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replace everything with the given rows
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Render a fetched list, or the placeholder when it is empty
    pub fn render<T>(&mut self, items: &[T], placeholder: &str, to_row: impl Fn(&T) -> Row) {
        if items.is_empty() {
            self.replace(vec![Row::Placeholder(placeholder.to_string())]);
        } else {
            self.replace(items.iter().map(to_row).collect());
        }
    }

    /// Replace everything with a single error row
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.replace(vec![Row::Error(message.into())]);
    }

    /// Number of data rows (placeholders and errors excluded)
    pub fn entry_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_entry()).count()
    }

    pub fn has_error(&self) -> bool {
        self.rows.iter().any(|r| matches!(r, Row::Error(_)))
    }
}
