//! TUI Views module
//!
//! The two list regions, the two forms and the status bar.

pub mod forms;
pub mod list;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;
use crate::api::BudgetApi;

/// Render the entire application
pub fn render<A: BudgetApi>(frame: &mut Frame, app: &App<A>) {
    let layout = AppLayout::new(frame.area());

    list::render(frame, " Receipts ", app.client.receipts(), layout.receipts);
    list::render(frame, " Budgets ", app.client.budgets(), layout.budgets);

    forms::render_upload_form(frame, app, layout.upload_form);
    forms::render_budget_form(frame, app, layout.budget_form);

    status_bar::render(frame, app, layout.status_bar);
}
