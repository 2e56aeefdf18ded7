//! Display formatting for terminal output
//!
//! Provides utilities for formatting regions, receipts and exports for the
//! command line.

pub mod export;
pub mod receipt;
pub mod region;

pub use export::format_csv_table;
pub use receipt::format_receipt_details;
pub use region::{format_budgets, format_receipts, format_region};
