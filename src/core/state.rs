//! # Application State
//!
//! Core business state. No terminal types here; presentation state lives
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── course: Course               // immutable module list, N ≥ 1
//! ├── navigation: NavigationState  // current index into the course
//! ├── locale: LocaleResolver       // active language + string tables
//! └── status_message: String       // outcome of the last intent
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::course::{Course, Module, Text};
use crate::core::error::ConfigurationError;
use crate::core::locale::{Language, LocaleResolver, environment_language};
use crate::core::navigation::NavigationState;
use crate::core::preferences::FilePreferenceStore;
use crate::core::view::{self, View};

pub struct App {
    pub course: Course,
    pub navigation: NavigationState,
    pub locale: LocaleResolver,
    pub status_message: String,
}

impl App {
    /// Checks that every keyed module string exists in every supported
    /// language before any UI is shown.
    pub fn new(course: Course, locale: LocaleResolver) -> Result<Self, ConfigurationError> {
        validate_localization(&course, &locale)?;
        let navigation = NavigationState::new(course.len())?;
        Ok(Self {
            course,
            navigation,
            locale,
            status_message: String::new(),
        })
    }

    /// Loads the course, string tables and preference store named by `config`.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigurationError> {
        let course = match &config.course_file {
            Some(path) => Course::load(path)?,
            None => Course::builtin()?,
        };
        let catalog = Catalog::builtin()?;
        let store = FilePreferenceStore::new(&config.preferences_path);
        info!("Preferences at {}", store.path().display());

        let environment = environment_language();
        let locale = LocaleResolver::new(catalog, Box::new(store), environment.as_deref());
        Self::new(course, locale)
    }

    /// Everything the renderer needs for one frame.
    pub fn view(&self) -> Result<View, ConfigurationError> {
        view::build(self)
    }
}

fn validate_localization(course: &Course, locale: &LocaleResolver) -> Result<(), ConfigurationError> {
    // Conventional `modules.<i>.*` keys tie the course to the tables' module list
    if course.modules().iter().any(uses_conventional_keys) {
        for language in Language::ALL {
            let Some(expected) = locale.catalog().module_count(language) else {
                continue;
            };
            if expected != course.len() {
                return Err(ConfigurationError::ModuleCountMismatch {
                    expected,
                    found: course.len(),
                });
            }
        }
    }

    for module in course.modules() {
        for text in [&module.title, &module.content] {
            let Text::Key(key) = text else { continue };
            for language in Language::ALL {
                if locale.try_resolve_in(language, key, &[]).is_err() {
                    return Err(ConfigurationError::MissingLocalization {
                        language: language.code().to_string(),
                        key: key.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn uses_conventional_keys(module: &Module) -> bool {
    let prefix = format!("modules.{}.", module.index);
    [&module.title, &module.content]
        .into_iter()
        .any(|text| matches!(text, Text::Key(key) if key.starts_with(&prefix)))
}
