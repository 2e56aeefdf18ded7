//! Data models for receiptbook
//!
//! The wire types exchanged with the receipts/budgets API.

pub mod amount;
pub mod budget;
pub mod receipt;

pub use amount::Amount;
pub use budget::{Budget, BudgetPayload};
pub use receipt::Receipt;
