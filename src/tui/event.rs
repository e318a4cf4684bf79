use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Routed through the navigator's signal subscription
    MoveLeft,
    MoveRight,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    Submit,
    Escape,
    OpenLanguagePicker,
    Quit,
    ForceQuit, // Ctrl+C, quits from anywhere
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Right | KeyCode::Char('n')) => Some(TuiEvent::MoveRight),
        (_, KeyCode::Left | KeyCode::Char('p')) => Some(TuiEvent::MoveLeft),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Char('l')) => Some(TuiEvent::OpenLanguagePicker),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        _ => None,
    }
}
