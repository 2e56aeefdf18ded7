//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the controller.

pub mod budget;
pub mod receipt;

pub use budget::{handle_budget_command, BudgetCommands};
pub use receipt::{handle_receipt_command, ReceiptCommands};
