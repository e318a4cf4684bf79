//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: course heading and active language
//! - `WelcomeCard` / `LessonCard`: the two content cards
//! - `NavBar`: Previous / Next buttons
//! - `ProgressPanel`: gauge and completion message
//! - `StatusLine`: last status or key help
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `LanguagePicker`: overlay list that emits `LanguagePickerEvent`s
//!
//! ### Props-Based Data Flow
//!
//! Components receive data from the core's `View`, never from `App`
//! directly, so none of them can see untranslated keys or mutate state.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top line)
//! ├── lesson_card.rs      (welcome + lesson cards)
//! ├── nav_bar.rs          (Previous / Next)
//! ├── progress_panel.rs   (gauge + message)
//! ├── status_line.rs      (bottom line)
//! └── language_picker.rs  (overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod language_picker;
pub mod lesson_card;
pub mod nav_bar;
pub mod progress_panel;
pub mod status_line;
pub use language_picker::{LanguagePicker, LanguagePickerEvent, LanguagePickerState};
pub use lesson_card::{LessonCard, WelcomeCard};
pub use nav_bar::NavBar;
pub use progress_panel::ProgressPanel;
pub use status_line::StatusLine;
