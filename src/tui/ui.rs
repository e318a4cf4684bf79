use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    LanguagePicker, LessonCard, NavBar, ProgressPanel, StatusLine, TitleBar, WelcomeCard,
};

/// Cards never stretch wider than this, so long lines stay readable.
const MAX_CONTENT_WIDTH: u16 = 80;

pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState) {
    let area = content_area(frame.area());
    let labels = &view.labels;

    let mut welcome = WelcomeCard {
        title: &labels.welcome_title,
        body: &labels.welcome_body,
    };
    let module = &view.current_module;
    let mut lesson = LessonCard {
        icon: &module.icon,
        title: &module.title,
        content: &module.content,
    };
    let mut progress = ProgressPanel {
        title: &labels.progress_title,
        percent: view.progress_percent,
        message: &labels.completed,
    };

    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(welcome.height(area.width)),
        Length(lesson.height(area.width)),
        Length(1),
        Length(progress_height(labels.completed.as_str(), area.width)),
        Min(0),
        Length(1),
    ]);
    let [title_area, welcome_area, lesson_area, nav_area, progress_area, _, status_area] =
        layout.areas(area);

    TitleBar::new(
        labels.heading.clone(),
        labels.language.clone(),
        view.active_language.display_name.to_string(),
    )
    .render(frame, title_area);
    welcome.render(frame, welcome_area);
    lesson.render(frame, lesson_area);
    NavBar {
        previous: &labels.previous,
        next: &labels.next,
        is_first: view.is_first,
        is_last: view.is_last,
    }
    .render(frame, nav_area);
    progress.render(frame, progress_area);
    StatusLine {
        status: &view.status_message,
        help: &labels.help_keys,
    }
    .render(frame, status_area);

    if let Some(picker) = tui.language_picker.as_mut() {
        let full = frame.area();
        LanguagePicker::new(
            picker,
            view.active_language.code,
            &labels.language,
            &labels.help_select,
        )
        .render(frame, full);
    }
}

/// Centers a column of at most `MAX_CONTENT_WIDTH`.
fn content_area(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let [_, center, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(area);
    center
}

/// Borders + gauge row + wrapped message.
fn progress_height(message: &str, width: u16) -> u16 {
    use ratatui::widgets::{Paragraph, Wrap};
    let inner_width = width.saturating_sub(4);
    let lines = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .line_count(inner_width) as u16;
    lines + 3
}
