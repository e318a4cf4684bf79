//! # Course
//!
//! The ordered, immutable list of lesson modules.
//!
//! A course is read once at startup from TOML. Each `[[modules]]` entry
//! names an icon and says where its title and content come from:
//!
//! ```toml
//! [[modules]]
//! icon = "brain"                       # title/content from modules.0.*
//!
//! [[modules]]
//! icon = "branch"
//! title_key = "lessons.classification" # explicit translation key
//! content_key = "lessons.classification_body"
//!
//! [[modules]]
//! icon = "trend"
//! title = "Prediction"                 # literal, not translated
//! content = "Guessing a number from other numbers."
//! ```
//!
//! Shape problems are `ConfigurationError`s raised here, never later.

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::ConfigurationError;

const BUILTIN_COURSE: &str = include_str!("../../assets/course.toml");

/// Where a module's visible text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    /// Dotted key into the active language's string table.
    Key(String),
    /// Pre-localized text, shown as-is in every language.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub index: usize,
    /// Opaque to the core; the renderer maps it to a glyph.
    pub icon: String,
    pub title: Text,
    pub content: Text,
}

#[derive(Debug, Clone)]
pub struct Course {
    modules: Vec<Module>,
}

// Raw file shape. Everything optional so the error messages can be ours.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseFile {
    #[serde(default)]
    modules: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleEntry {
    icon: Option<String>,
    title_key: Option<String>,
    content_key: Option<String>,
    title: Option<String>,
    content: Option<String>,
}

impl Course {
    /// The three-module introductory course embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_toml(BUILTIN_COURSE)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigurationError::CourseIo {
            path: path.to_path_buf(),
            source,
        })?;
        let course = Self::from_toml(&contents)?;
        info!("Loaded {} modules from {}", course.len(), path.display());
        Ok(course)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigurationError> {
        let file: CourseFile = toml::from_str(contents).map_err(ConfigurationError::CourseParse)?;
        let modules = file
            .modules
            .into_iter()
            .enumerate()
            .map(|(index, entry)| build_module(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(modules)
    }

    pub fn new(modules: Vec<Module>) -> Result<Self, ConfigurationError> {
        if modules.is_empty() {
            return Err(ConfigurationError::EmptyCourse);
        }
        debug!("Course built with {} modules", modules.len());
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

fn build_module(index: usize, entry: ModuleEntry) -> Result<Module, ConfigurationError> {
    let malformed = |reason: &str| ConfigurationError::MalformedModule {
        index,
        reason: reason.to_string(),
    };

    let icon = match entry.icon {
        Some(icon) if !icon.trim().is_empty() => icon.trim().to_string(),
        Some(_) => return Err(malformed("icon is empty")),
        None => return Err(malformed("missing icon")),
    };

    let title = text_source(entry.title_key, entry.title, format!("modules.{index}.title"))
        .map_err(|reason| malformed(&format!("title: {reason}")))?;
    let content = text_source(
        entry.content_key,
        entry.content,
        format!("modules.{index}.content"),
    )
    .map_err(|reason| malformed(&format!("content: {reason}")))?;

    Ok(Module {
        index,
        icon,
        title,
        content,
    })
}

/// Picks the text source for one field; neither given means the conventional key.
fn text_source(
    key: Option<String>,
    literal: Option<String>,
    conventional_key: String,
) -> Result<Text, &'static str> {
    match (key, literal) {
        (Some(_), Some(_)) => Err("both a key and a literal were given"),
        (Some(key), None) if key.trim().is_empty() => Err("key is empty"),
        (Some(key), None) => Ok(Text::Key(key.trim().to_string())),
        (None, Some(literal)) => Ok(Text::Literal(literal)),
        (None, None) => Ok(Text::Key(conventional_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_course_has_three_modules() {
        let course = Course::builtin().unwrap();
        assert_eq!(course.len(), 3);
        let icons: Vec<&str> = course.modules().iter().map(|m| m.icon.as_str()).collect();
        assert_eq!(icons, ["brain", "branch", "trend"]);
    }

    #[test]
    fn test_conventional_keys_follow_index() {
        let course = Course::builtin().unwrap();
        let second = &course.modules()[1];
        assert_eq!(second.index, 1);
        assert_eq!(second.title, Text::Key("modules.1.title".to_string()));
        assert_eq!(second.content, Text::Key("modules.1.content".to_string()));
    }

    #[test]
    fn test_explicit_keys_and_literals() {
        let toml_str = r#"
[[modules]]
icon = "brain"
title_key = "lessons.intro"
content = "Plain text."
"#;
        let course = Course::from_toml(toml_str).unwrap();
        let module = &course.modules()[0];
        assert_eq!(module.title, Text::Key("lessons.intro".to_string()));
        assert_eq!(module.content, Text::Literal("Plain text.".to_string()));
    }

    #[test]
    fn test_empty_course_is_rejected() {
        let err = Course::from_toml("modules = []").unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyCourse));

        let err = Course::from_toml("").unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyCourse));
    }

    #[test]
    fn test_missing_icon_is_malformed() {
        let toml_str = r#"
[[modules]]
icon = "brain"

[[modules]]
title = "No icon here"
"#;
        let err = Course::from_toml(toml_str).unwrap_err();
        match err {
            ConfigurationError::MalformedModule { index, reason } => {
                assert_eq!(index, 1);
                assert_eq!(reason, "missing icon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_key_and_literal_conflict_is_malformed() {
        let toml_str = r#"
[[modules]]
icon = "brain"
title_key = "a.b"
title = "Also a literal"
"#;
        let err = Course::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedModule { index: 0, .. }));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let toml_str = r#"
[[modules]]
icon = "brain"
colour = "blue"
"#;
        let err = Course::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, ConfigurationError::CourseParse(_)));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Course::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
