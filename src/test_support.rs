//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Catalog;
use crate::core::course::Course;
use crate::core::locale::LocaleResolver;
use crate::core::preferences::MemoryPreferenceStore;
use crate::core::state::App;

/// Resolver over the built-in tables, with no environment language.
pub fn test_locale(store: MemoryPreferenceStore) -> LocaleResolver {
    LocaleResolver::new(Catalog::builtin().unwrap(), Box::new(store), None)
}

/// Creates a test App on the built-in course, in English, with an in-memory store.
pub fn test_app() -> App {
    App::new(Course::builtin().unwrap(), test_locale(MemoryPreferenceStore::new())).unwrap()
}
