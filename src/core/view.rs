//! # View Model
//!
//! The per-frame snapshot handed to the renderer. Every string in it is
//! already localized; the renderer only lays it out.

use crate::core::course::{Module, Text};
use crate::core::error::ConfigurationError;
use crate::core::locale::{Language, LocaleResolver};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub current_module: LocalizedModule,
    pub progress_percent: f64,
    pub is_first: bool,
    pub is_last: bool,
    pub module_count: usize,
    pub active_language: LanguageOption,
    pub supported_languages: Vec<LanguageOption>,
    pub labels: Labels,
    pub status_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedModule {
    pub index: usize,
    pub icon: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub display_name: &'static str,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        Self {
            code: language.code(),
            display_name: language.display_name(),
        }
    }
}

/// Fixed UI text for the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub heading: String,
    pub welcome_title: String,
    pub welcome_body: String,
    pub previous: String,
    pub next: String,
    pub progress_title: String,
    /// "You've completed 2 out of 3 lessons…", already interpolated.
    pub completed: String,
    pub language: String,
    pub help_keys: String,
    pub help_select: String,
}

pub fn build(app: &App) -> Result<View, ConfigurationError> {
    let navigation = &app.navigation;
    let module = navigation.current_module(app.course.modules())?;
    let locale = &app.locale;

    Ok(View {
        current_module: localize(module, locale),
        progress_percent: navigation.progress(),
        is_first: navigation.is_first(),
        is_last: navigation.is_last(),
        module_count: navigation.module_count(),
        active_language: locale.language().into(),
        supported_languages: Language::ALL.into_iter().map(LanguageOption::from).collect(),
        labels: labels(locale, navigation.current_index() + 1, navigation.module_count()),
        status_message: app.status_message.clone(),
    })
}

fn localize(module: &Module, locale: &LocaleResolver) -> LocalizedModule {
    let text = |text: &Text| match text {
        Text::Key(key) => locale.resolve(key, &[]),
        Text::Literal(literal) => literal.clone(),
    };
    LocalizedModule {
        index: module.index,
        icon: module.icon.clone(),
        title: text(&module.title),
        content: text(&module.content),
    }
}

fn labels(locale: &LocaleResolver, current: usize, total: usize) -> Labels {
    Labels {
        heading: locale.resolve("heading", &[]),
        welcome_title: locale.resolve("welcome.title", &[]),
        welcome_body: locale.resolve("welcome.body", &[]),
        previous: locale.resolve("previous", &[]),
        next: locale.resolve("next", &[]),
        progress_title: locale.resolve("progress.title", &[]),
        completed: locale.resolve(
            "completed",
            &[
                ("currentModule", current.to_string()),
                ("totalModules", total.to_string()),
            ],
        ),
        language: locale.resolve("language", &[]),
        help_keys: locale.resolve("help.keys", &[]),
        help_select: locale.resolve("help.select", &[]),
    }
}
