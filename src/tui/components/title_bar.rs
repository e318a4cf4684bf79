//! # TitleBar Component
//!
//! Top line showing the course heading and the active language.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     view.labels.heading.clone(),
//!     view.labels.language.clone(),
//!     view.active_language.display_name.to_string(),
//! );
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props are stored as struct fields rather than passed to `render()`, because
//! the Component trait requires a fixed render() signature.
//!
//! ## Narrow terminals
//!
//! The heading is on the left, the language on the right. When both don't
//! fit, the language indicator is dropped and the heading keeps the line.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Course heading (e.g., "Machine Learning for Beginners")
    pub heading: String,
    /// Localized word for "Language"
    pub language_label: String,
    /// Active language's display name (e.g., "Français")
    pub language_name: String,
}

impl TitleBar {
    pub fn new(heading: String, language_label: String, language_name: String) -> Self {
        Self {
            heading,
            language_label,
            language_name,
        }
    }

    fn language_text(&self) -> String {
        format!("{}: {}", self.language_label, self.language_name)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = Span::styled(
            self.heading.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );

        let language = self.language_text();
        let language_width = language.chars().count() as u16;
        let heading_width = self.heading.chars().count() as u16;

        if heading_width + language_width + 1 > area.width {
            frame.render_widget(Line::from(heading), area);
            return;
        }

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(language_width)]).areas(area);
        frame.render_widget(Line::from(heading), left);
        frame.render_widget(
            Line::from(Span::styled(language, Style::default().fg(Color::DarkGray))).right_aligned(),
            right,
        );
    }
}
