//! # Core Application Logic
//!
//! Navigation and localization for the lesson viewer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │  • View (render input)  │
//!                    │                         │
//!                    │  No terminal. No async. │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Tests    │
//!             │  Adapter   │          │ (tests/)   │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: `NavigationState`, the bounded module counter
//! - [`keys`]: signal routing and the navigator's keyboard subscription
//! - [`locale`]: language selection and string resolution
//! - [`catalog`]: per-language string tables and `{{param}}` interpolation
//! - [`preferences`]: the persisted language preference
//! - [`course`]: loading and validating the module list
//! - [`state`] / [`action`] / [`view`]: the app, its reducer, its render snapshot

pub mod action;
pub mod catalog;
pub mod config;
pub mod course;
pub mod error;
pub mod keys;
pub mod locale;
pub mod navigation;
pub mod preferences;
pub mod state;
pub mod view;
