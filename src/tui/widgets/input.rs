//! Text input widget
//!
//! Draws a `TextField` on one line with a label, a placeholder and a block
//! cursor when focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::controller::TextField;

/// A labelled view of a text field
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    field: &'a TextField,
    focused: bool,
    placeholder: &'a str,
    label: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(field: &'a TextField) -> Self {
        Self {
            field,
            focused: false,
            placeholder: "",
            label: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Labels are padded so the fields of one form line up
        let label_width = if self.label.is_empty() {
            0
        } else {
            10u16.max(self.label.chars().count() as u16 + 2)
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));
        }

        let input_start = area.x + label_width.min(area.width);
        let input_width = area.width.saturating_sub(label_width);
        if input_width == 0 {
            return;
        }

        let content = self.field.value();
        let (display_text, text_style) = if content.is_empty() && !self.focused {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (content, Style::default().fg(Color::White))
        } else {
            (content, Style::default().fg(Color::Yellow))
        };

        // Keep the cursor visible when the value is wider than the field
        let cursor = self.field.cursor();
        let skip = if self.focused {
            (cursor + 1).saturating_sub(input_width as usize)
        } else {
            0
        };
        let visible: String = display_text
            .chars()
            .skip(skip)
            .take(input_width as usize)
            .collect();
        buf.set_string(input_start, area.y, &visible, text_style);

        if self.focused {
            let cursor_x = input_start + (cursor - skip) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = content.chars().nth(cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
