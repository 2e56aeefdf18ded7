//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::api::BudgetApi;
use crate::controller::{BudgetSubmission, ReceiptsBudgetsClient, TextField};

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ReceiptFile,
    Category,
    MonthlyLimit,
    Spent,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::ReceiptFile,
        Focus::Category,
        Focus::MonthlyLimit,
        Focus::Spent,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// True for the three budget form fields
    pub fn is_budget_field(self) -> bool {
        self != Focus::ReceiptFile
    }
}

/// Main application state
pub struct App<A: BudgetApi> {
    /// The controller owning lists, forms and the API handle
    pub client: ReceiptsBudgetsClient<A>,

    /// Focused form field
    pub focus: Focus,

    /// Result of the last budget submission, shown on the budget form
    pub budget_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<A: BudgetApi> App<A> {
    pub fn new(client: ReceiptsBudgetsClient<A>) -> Self {
        Self {
            client,
            focus: Focus::default(),
            budget_message: None,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The text field the focus points at
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            Focus::ReceiptFile => &mut self.client.upload_form.file,
            Focus::Category => &mut self.client.budget_form.category,
            Focus::MonthlyLimit => &mut self.client.budget_form.monthly_limit,
            Focus::Spent => &mut self.client.budget_form.spent,
        }
    }

    /// Submit the budget form and remember how it went
    pub fn submit_budget(&mut self) {
        let message = match self.client.submit_budget() {
            BudgetSubmission::Skipped => "Category is required".to_string(),
            BudgetSubmission::Accepted => "Budget saved".to_string(),
            BudgetSubmission::Rejected { status, detail } => match detail {
                Some(detail) => format!("Rejected ({}): {}", status, detail),
                None => format!("Rejected ({})", status),
            },
            BudgetSubmission::Failed(reason) => format!("Not sent: {}", reason),
        };
        self.budget_message = Some(message);
    }
}
