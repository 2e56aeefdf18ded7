//! Terminal User Interface module
//!
//! One screen built with ratatui: the receipts and budgets lists side by
//! side, the upload and budget forms below them and a status bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
