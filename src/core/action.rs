//! # Actions
//!
//! Everything the user can ask for becomes an `Action`.
//! Right arrow? That's `Action::Advance`.
//! Picked "Français" in the language picker? That's `Action::SetLanguage("fr")`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the UI loop what
//! else to do. Nothing here blocks.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Errors from the locale layer stop here: they are logged and turned into
//! a status message, never returned to the caller.

use log::{debug, error};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    SetLanguage(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Advance => {
            app.navigation = app.navigation.advance();
            app.status_message.clear();
            Effect::None
        }
        Action::Retreat => {
            app.navigation = app.navigation.retreat();
            app.status_message.clear();
            Effect::None
        }
        Action::SetLanguage(code) => {
            match app.locale.set_language(&code) {
                Ok(()) => {
                    let name = app.locale.language().display_name().to_string();
                    app.status_message = app
                        .locale
                        .resolve("status.language_changed", &[("language", name)]);
                }
                Err(e) => {
                    error!("Language change rejected: {}", e);
                    app.status_message = app
                        .locale
                        .resolve("status.language_rejected", &[("reason", e.to_string())]);
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
