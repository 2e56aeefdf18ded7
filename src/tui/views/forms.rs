//! Form views
//!
//! The upload form holds a single file path field; the budget form holds
//! category, monthly limit and spent.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::api::BudgetApi;
use crate::tui::app::{App, Focus};
use crate::tui::widgets::TextInput;

fn form_block(title: String, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::White };
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// One line per field inside a bordered block
fn field_rows(area: Rect, count: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); count])
        .split(area)
        .to_vec()
}

/// Render the upload form
pub fn render_upload_form<A: BudgetApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let focused = app.focus == Focus::ReceiptFile;
    let block = form_block(" Upload Receipt (Enter to send) ".into(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = field_rows(inner, 1);
    frame.render_widget(
        TextInput::new(&app.client.upload_form.file)
            .label("File")
            .placeholder("path/to/receipt.jpg")
            .focused(focused),
        rows[0],
    );
}

/// Render the budget form
pub fn render_budget_form<A: BudgetApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let focused = app.focus.is_budget_field();
    let title = match &app.budget_message {
        Some(message) => format!(" Set Budget: {} ", message),
        None => " Set Budget ".to_string(),
    };
    let block = form_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.client.budget_form;
    let rows = field_rows(inner, 3);
    let fields = [
        ("Category", &form.category, Focus::Category, "Groceries"),
        ("Limit", &form.monthly_limit, Focus::MonthlyLimit, "0"),
        ("Spent", &form.spent, Focus::Spent, "0"),
    ];

    for ((label, field, focus, placeholder), row) in fields.into_iter().zip(rows) {
        frame.render_widget(
            TextInput::new(field)
                .label(label)
                .placeholder(placeholder)
                .focused(app.focus == focus),
            row,
        );
    }
}
