//! receiptbook - terminal client for a receipts and budgets API
//!
//! This library provides the client side of a small receipts/budgets
//! service: it lists receipts and budgets fetched over HTTP, uploads receipt
//! images and creates or updates budgets.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Wire types (receipts, budgets, amounts)
//! - `api`: The `BudgetApi` trait and its HTTP implementation
//! - `controller`: `ReceiptsBudgetsClient`, which owns the list regions,
//!   the upload status and the two forms
//! - `display`: Plain-text formatting for the command line
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use receiptbook::api::HttpApi;
//! use receiptbook::config::Settings;
//! use receiptbook::controller::ReceiptsBudgetsClient;
//!
//! let api = HttpApi::new(&Settings::default())?;
//! let mut client = ReceiptsBudgetsClient::new(api);
//! client.load();
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use controller::ReceiptsBudgetsClient;
pub use error::{ClientError, ClientResult};
