//! Layout definitions for the TUI
//!
//! Lists on top, forms below them, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Receipts list (top left)
    pub receipts: Rect,
    /// Budgets list (top right)
    pub budgets: Rect,
    /// Upload form (bottom left)
    pub upload_form: Rect,
    /// Budget form (bottom right)
    pub budget_form: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Lists
                Constraint::Length(5), // Forms
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = [Constraint::Percentage(50), Constraint::Percentage(50)];
        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns)
            .split(vertical[0]);
        let forms = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns)
            .split(vertical[1]);

        Self {
            receipts: lists[0],
            budgets: lists[1],
            upload_form: forms[0],
            budget_form: forms[1],
            status_bar: vertical[2],
        }
    }
}
