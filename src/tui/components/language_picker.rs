//! # Language Picker Component
//!
//! Overlay for switching the display language. Opened with `l`.
//! Only supported languages are listed, so a selection is always a valid
//! code for `set_language`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LanguagePickerState` lives in `TuiState`
//! - `LanguagePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::view::LanguageOption;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the language picker overlay.
pub struct LanguagePickerState {
    pub options: Vec<LanguageOption>,
    pub selected: usize,
    pub list_state: ListState,
}

impl LanguagePickerState {
    /// Opens with the active language highlighted.
    pub fn new(options: Vec<LanguageOption>, active_code: &str) -> Self {
        let selected = options
            .iter()
            .position(|option| option.code == active_code)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            options,
            selected,
            list_state,
        }
    }
}

impl EventHandler for LanguagePickerState {
    type Event = LanguagePickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LanguagePickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::OpenLanguagePicker => Some(LanguagePickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.options.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.options.is_empty() {
                    self.selected = (self.selected + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected)
                .map(|option| LanguagePickerEvent::Select(option.code.to_string())),
            _ => None,
        }
    }
}

/// Events emitted by the language picker.
#[derive(Debug, PartialEq, Eq)]
pub enum LanguagePickerEvent {
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the language picker overlay.
pub struct LanguagePicker<'a> {
    state: &'a mut LanguagePickerState,
    active_code: &'a str,
    title: &'a str,
    help: &'a str,
}

impl<'a> LanguagePicker<'a> {
    pub fn new(
        state: &'a mut LanguagePickerState,
        active_code: &'a str,
        title: &'a str,
        help: &'a str,
    ) -> Self {
        Self {
            state,
            active_code,
            title,
            help,
        }
    }
}

impl Component for LanguagePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.state.options.len() as u16 + 2;
        let overlay = centered_rect(60, height, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(format!(" {} ", self.help)).centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_active = option.code == self.active_code;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", option.code), style),
                    Span::styled(option.display_name, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Horizontally a percentage of `outer`, vertically a fixed row count, centered.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height.min(outer.height)),
        Constraint::Min(0),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Language;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn options() -> Vec<LanguageOption> {
        Language::ALL.into_iter().map(LanguageOption::from).collect()
    }

    #[test]
    fn test_opens_on_active_language() {
        let state = LanguagePickerState::new(options(), "fr");
        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = LanguagePickerState::new(options(), "en");
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_submit_selects_code() {
        let mut state = LanguagePickerState::new(options(), "en");
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(LanguagePickerEvent::Select("fr".to_string()))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = LanguagePickerState::new(options(), "en");
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(LanguagePickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_display_names() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut state = LanguagePickerState::new(options(), "en");
        terminal
            .draw(|f| {
                let area = f.area();
                LanguagePicker::new(&mut state, "en", "Language", "Enter select").render(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("English"));
        assert!(text.contains("Français"));
        assert!(text.contains("Language"));
    }
}
