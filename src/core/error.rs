//! # Errors
//!
//! Two families, split by how far they are allowed to travel:
//!
//! - [`ConfigurationError`] is fatal. It is raised while loading the course
//!   and the string tables, and aborts startup before the terminal is touched.
//! - [`LocaleError`] is local. `update()` catches it, logs it and shows it in
//!   the status line; it never escapes the core.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigurationError {
    /// The course file declared no modules.
    EmptyCourse,
    /// A module entry had the wrong shape.
    MalformedModule { index: usize, reason: String },
    /// A module slice did not match the navigator's module count.
    ModuleCountMismatch { expected: usize, found: usize },
    /// A module string has no entry in one of the supported languages.
    MissingLocalization { language: String, key: String },
    CourseIo { path: PathBuf, source: std::io::Error },
    CourseParse(toml::de::Error),
    CatalogParse { language: String, source: toml::de::Error },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyCourse => write!(f, "course has no modules"),
            ConfigurationError::MalformedModule { index, reason } => {
                write!(f, "module {index} is malformed: {reason}")
            }
            ConfigurationError::ModuleCountMismatch { expected, found } => {
                write!(f, "expected {expected} modules, found {found}")
            }
            ConfigurationError::MissingLocalization { language, key } => {
                write!(f, "no '{language}' translation for '{key}'")
            }
            ConfigurationError::CourseIo { path, source } => {
                write!(f, "failed to read course file {}: {source}", path.display())
            }
            ConfigurationError::CourseParse(e) => write!(f, "course parse error: {e}"),
            ConfigurationError::CatalogParse { language, source } => {
                write!(f, "string table '{language}' parse error: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::CourseIo { source, .. } => Some(source),
            ConfigurationError::CourseParse(e) => Some(e),
            ConfigurationError::CatalogParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// `set_language` was called with a code outside the supported set.
    InvalidLanguage(String),
    MissingTranslation { language: String, key: String },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::InvalidLanguage(code) => write!(f, "unsupported language: {code:?}"),
            LocaleError::MissingTranslation { language, key } => {
                write!(f, "missing '{language}' translation for '{key}'")
            }
        }
    }
}

impl std::error::Error for LocaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::MalformedModule {
            index: 2,
            reason: "icon is empty".to_string(),
        };
        assert_eq!(err.to_string(), "module 2 is malformed: icon is empty");
        assert_eq!(ConfigurationError::EmptyCourse.to_string(), "course has no modules");
    }

    #[test]
    fn test_locale_error_display() {
        let err = LocaleError::InvalidLanguage("xx".to_string());
        assert_eq!(err.to_string(), "unsupported language: \"xx\"");
    }
}
