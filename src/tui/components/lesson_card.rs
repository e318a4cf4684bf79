//! # Lesson Cards
//!
//! Two bordered cards: the static welcome card and the card for the current
//! lesson module (icon + title in the border, body text inside).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::icons;

pub struct WelcomeCard<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl WelcomeCard<'_> {
    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(self.body, width)
    }
}

impl Component for WelcomeCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.body)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

pub struct LessonCard<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub content: &'a str,
}

impl LessonCard<'_> {
    /// Rows needed for the card at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(self.content, width)
    }
}

/// Rows for `text` wrapped inside a bordered, horizontally padded block.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let inner_width = width.saturating_sub(4); // borders + padding
    let lines = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .line_count(inner_width) as u16;
    lines + 2
}

impl Component for LessonCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let icon = icons::lookup(self.icon);
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon.glyph, Style::default().fg(icon.color)),
            Span::raw(" "),
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ]);

        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(icon.color))
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.content)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
