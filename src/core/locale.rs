//! # Locale Resolution
//!
//! Decides the active display language and turns translation keys into text.
//!
//! ```text
//! startup:  stored "language"  →  environment primary subtag  →  "en"
//!                (supported?)          (supported?)             (always)
//!
//! runtime:  set_language(code) ── unsupported ──► Err(InvalidLanguage)
//!                 │
//!                 └── supported ──► active language + write-through to store
//! ```
//!
//! `initial_language` degrades silently: anything unsupported falls through
//! to the next tier. `set_language` is strict, because its caller (the
//! language picker) only ever offers supported codes.
//!
//! Missing keys: [`LocaleResolver::resolve`] returns the key path itself so
//! the gap is visible on screen; [`LocaleResolver::try_resolve`] returns
//! `LocaleError::MissingTranslation` and is what startup validation uses.

use log::{debug, error, info, warn};

use crate::core::catalog::{Catalog, interpolate};
use crate::core::error::LocaleError;
use crate::core::preferences::{LANGUAGE_KEY, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Fr,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub const DEFAULT: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name in the language itself, as shown in the picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }

    /// Exact match on a short code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Only the canonical code itself (`"fr"`, not `"FR"` or `" fr "`).
    pub fn from_exact_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

/// `"fr-CA"` → `"fr"`, `"pt_BR.UTF-8"` → `"pt"`.
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// The host's preferred language tag, if it reports one.
pub fn environment_language() -> Option<String> {
    let tag = sys_locale::get_locale();
    debug!("Environment locale: {:?}", tag);
    tag
}

/// Three-tier startup precedence. Never returns an unsupported language.
pub fn initial_language(store: &dyn PreferenceStore, environment: Option<&str>) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(stored)) => match Language::from_code(&stored) {
            Some(language) => {
                debug!("Using stored language preference: {}", language.code());
                return language;
            }
            None => warn!("Ignoring unsupported stored language {:?}", stored),
        },
        Ok(None) => debug!("No stored language preference"),
        Err(e) => warn!("Failed to read language preference: {}", e),
    }

    if let Some(tag) = environment {
        let subtag = primary_subtag(tag);
        if let Some(language) = Language::from_code(&subtag) {
            debug!("Using environment language: {} (from {:?})", language.code(), tag);
            return language;
        }
        debug!("Environment language {:?} is unsupported", tag);
    }

    Language::DEFAULT
}

pub struct LocaleResolver {
    catalog: Catalog,
    store: Box<dyn PreferenceStore>,
    active: Language,
}

impl LocaleResolver {
    /// Reads the store once to pick the starting language.
    pub fn new(
        catalog: Catalog,
        store: Box<dyn PreferenceStore>,
        environment: Option<&str>,
    ) -> Self {
        let active = initial_language(&*store, environment);
        info!("Active language: {}", active.code());
        Self {
            catalog,
            store,
            active,
        }
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switches language and persists it.
    ///
    /// The in-memory switch happens even if the write fails; the failure is
    /// logged and only affects the next session.
    pub fn set_language(&mut self, code: &str) -> Result<(), LocaleError> {
        let Some(language) = Language::from_exact_code(code) else {
            error!("set_language called with unsupported code {:?}", code);
            return Err(LocaleError::InvalidLanguage(code.to_string()));
        };

        self.active = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language preference: {}", e);
        }
        info!("Language set to {}", language.code());
        Ok(())
    }

    pub fn try_resolve(&self, key: &str, params: &[(&str, String)]) -> Result<String, LocaleError> {
        self.try_resolve_in(self.active, key, params)
    }

    pub fn try_resolve_in(
        &self,
        language: Language,
        key: &str,
        params: &[(&str, String)],
    ) -> Result<String, LocaleError> {
        self.catalog
            .lookup(language, key)
            .map(|template| interpolate(template, params))
            .ok_or_else(|| LocaleError::MissingTranslation {
                language: language.code().to_string(),
                key: key.to_string(),
            })
    }

    /// Falls back to the key path itself when the key is missing.
    pub fn resolve(&self, key: &str, params: &[(&str, String)]) -> String {
        self.try_resolve(key, params).unwrap_or_else(|e| {
            warn!("{}", e);
            key.to_string()
        })
    }
}
