// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header {
    content: Line<'static>,
}

impl Header {
    pub fn board(clock: String) -> Self {
        let mut spans = vec![
            Span::styled("  Beads Board", Style::default().bold()),
            Span::raw(format!("  —  {}  —  ", clock)),
        ];

        let hints = [
            ("q", "quit"),
            ("r", "refresh"),
            ("←→", "switch col"),
            ("tab", "switch row"),
            ("↑↓", "navigate"),
        ];

        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{}:{}", key, desc),
                Style::default().fg(Color::Gray),
            ));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled("◆", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled("=feature", Style::default().fg(Color::Gray)));

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .render(area, buf);
    }
}
