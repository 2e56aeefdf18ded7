//! List region view
//!
//! Draws a `ListRegion`: data rows as label/detail pairs, placeholder rows
//! dimmed and error rows in red.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::controller::{ListRegion, Row};

/// Render a list region inside a titled block
pub fn render(frame: &mut Frame, title: &str, region: &ListRegion, area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let items: Vec<ListItem> = region.rows().iter().map(row_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn row_item(row: &Row) -> ListItem<'static> {
    let line = match row {
        Row::Entry { label, detail } => {
            let mut spans = vec![Span::styled(
                label.clone(),
                Style::default().fg(Color::White),
            )];
            if !detail.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    detail.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Line::from(spans)
        }
        Row::Placeholder(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Row::Error(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Red),
        )),
    };
    ListItem::new(line)
}
