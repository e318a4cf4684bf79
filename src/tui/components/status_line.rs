//! # StatusLine Component
//!
//! Bottom line. Shows the outcome of the last intent when there is one,
//! otherwise the key help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusLine<'a> {
    pub status: &'a str,
    pub help: &'a str,
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = if self.status.is_empty() {
            Span::styled(self.help, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.status, Style::default().fg(Color::Yellow))
        };
        frame.render_widget(Line::from(span), area);
    }
}
