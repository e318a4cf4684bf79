//! # String Catalog
//!
//! One TOML string table per supported language, embedded at compile time
//! and parsed once at startup. Keys are dotted paths; a numeric segment
//! indexes into an array, so `modules.1.title` reads the `title` of the
//! second `[[modules]]` entry.

use log::debug;
use std::collections::HashMap;

use crate::core::error::ConfigurationError;
use crate::core::locale::Language;

const EN_TABLE: &str = include_str!("../../assets/locales/en.toml");
const FR_TABLE: &str = include_str!("../../assets/locales/fr.toml");

#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<Language, toml::Table>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_sources(&[(Language::En, EN_TABLE), (Language::Fr, FR_TABLE)])
    }

    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, ConfigurationError> {
        let mut tables = HashMap::new();
        for (language, source) in sources {
            let table: toml::Table =
                toml::from_str(source).map_err(|source| ConfigurationError::CatalogParse {
                    language: language.code().to_string(),
                    source,
                })?;
            debug!("String table '{}' has {} top-level keys", language.code(), table.len());
            tables.insert(*language, table);
        }
        Ok(Self { tables })
    }

    /// Raw template for `key`, without interpolation.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let table = self.tables.get(&language)?;
        let mut segments = key.split('.');
        let mut current = table.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                toml::Value::Table(t) => t.get(segment)?,
                toml::Value::Array(items) => items.get(array_index(segment)?)?,
                _ => return None,
            };
        }
        current.as_str()
    }

    /// Length of the `[[modules]]` array in `language`'s table, if it has one.
    pub fn module_count(&self, language: Language) -> Option<usize> {
        match self.tables.get(&language)?.get("modules")? {
            toml::Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// `"0"`, `"12"`; not `"01"`, `"+1"` or `""`.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    segment.parse().ok()
}

/// Replaces `{{name}}` tokens with the matching parameter.
///
/// Unknown names and unterminated tokens are left in the output verbatim.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
