//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Keyboard routing
//!
//! Left/right keys are not mapped to actions directly. They become
//! [`Signal`]s that go through the [`SignalRouter`], and the navigator only
//! sees them while its [`NavigatorBinding`] is attached:
//!
//! ```text
//! startup          attach
//! picker opens     detach   (arrows belong to the overlay)
//! picker closes    attach
//! run() returns    binding dropped, routes released
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms per poll and only redraws
//! after an event or a terminal resize.

mod component;
mod components;
mod event;
mod icons;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::keys::{NavigatorBinding, Signal, SignalRouter};
use crate::core::locale::Language;
use crate::core::state::App;
use crate::core::view::LanguageOption;
use crate::tui::component::EventHandler;
use crate::tui::components::{LanguagePickerEvent, LanguagePickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Language picker overlay (None = hidden)
    pub language_picker: Option<LanguagePickerState>,
    router: SignalRouter,
    binding: NavigatorBinding,
}

impl TuiState {
    /// Starts with the navigator listening for left/right.
    pub fn new() -> Self {
        let router = SignalRouter::new();
        let mut binding = NavigatorBinding::new();
        binding.attach(&router);
        Self {
            language_picker: None,
            router,
            binding,
        }
    }

    pub fn navigator_attached(&self) -> bool {
        self.binding.is_attached()
    }

    fn open_language_picker(&mut self, active: Language) {
        let options = Language::ALL.into_iter().map(LanguageOption::from).collect();
        self.language_picker = Some(LanguagePickerState::new(options, active.code()));
        self.binding.detach();
        debug!("Language picker opened, navigator detached");
    }

    fn close_language_picker(&mut self) {
        self.language_picker = None;
        self.binding.attach(&self.router);
        debug!("Language picker closed, navigator attached");
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hides the cursor for the lifetime of the lesson screen.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Applies one terminal event to the app. Returns `Effect::Quit` when the
/// loop should stop.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if event == TuiEvent::ForceQuit {
        return update(app, Action::Quit);
    }

    if let Some(picker) = tui.language_picker.as_mut() {
        match picker.handle_event(&event) {
            Some(LanguagePickerEvent::Select(code)) => {
                tui.close_language_picker();
                return update(app, Action::SetLanguage(code));
            }
            Some(LanguagePickerEvent::Dismiss) => {
                tui.close_language_picker();
                return Effect::None;
            }
            None => {}
        }
    }

    let signal = match event {
        TuiEvent::MoveRight => Signal::MoveRight,
        TuiEvent::MoveLeft => Signal::MoveLeft,
        TuiEvent::OpenLanguagePicker => {
            tui.open_language_picker(app.locale.language());
            return Effect::None;
        }
        TuiEvent::Quit if tui.language_picker.is_none() => return update(app, Action::Quit),
        _ => return Effect::None,
    };

    for action in tui.router.dispatch(signal) {
        if update(app, action) == Effect::Quit {
            return Effect::Quit;
        }
    }
    Effect::None
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        debug!("Could not hide cursor: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    info!("Lesson screen closed");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let view = app.view().map_err(io::Error::other)?;
            terminal.draw(|f| ui::draw_ui(f, &view, tui))?;
            needs_redraw = false;
        }

        let Some(first) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Drain everything pending before the next draw
        let mut next = Some(first);
        while let Some(event) = next {
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}
