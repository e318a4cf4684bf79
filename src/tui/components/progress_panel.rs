//! # ProgressPanel Component
//!
//! "Your Progress" card: a gauge over the course plus the completion message.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Gauge, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ProgressPanel<'a> {
    pub title: &'a str,
    /// In `(0, 100]`.
    pub percent: f64,
    pub message: &'a str,
}

impl Component for ProgressPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [gauge_area, message_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .ratio((self.percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}%", self.percent));
        frame.render_widget(gauge, gauge_area);

        let message = Paragraph::new(self.message)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, message_area);
    }
}
