//! # NavBar Component
//!
//! Previous / Next buttons. A button at a boundary is drawn dimmed; the key
//! still reaches the navigator, which treats it as a no-op.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub previous: &'a str,
    pub next: &'a str,
    pub is_first: bool,
    pub is_last: bool,
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let previous = format!(" ◀ {} ", self.previous);
        let next = format!(" {} ▶ ", self.next);

        let [left, _, right] = Layout::horizontal([
            Constraint::Length(previous.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(next.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(previous, button_style(!self.is_first))),
            left,
        );
        frame.render_widget(
            Line::from(Span::styled(next, button_style(!self.is_last))),
            right,
        );
    }
}
