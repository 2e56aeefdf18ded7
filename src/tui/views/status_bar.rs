//! Status bar view
//!
//! Shows the upload status indicator and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::BudgetApi;
use crate::controller::{STATUS_UPLOADED, STATUS_UPLOADING};
use crate::tui::app::App;

const HINTS: &str = " Tab:Next  Enter:Submit  ^R:Refresh  Esc:Quit ";

/// Render the status bar
pub fn render<A: BudgetApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let mut spans = vec![];

    if let Some(status) = app.client.upload_status() {
        let color = match status {
            STATUS_UPLOADING => Color::Yellow,
            STATUS_UPLOADED => Color::Green,
            _ => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    // Key hints (right-aligned)
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
