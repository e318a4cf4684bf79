use mlcourse::core::action::{Action, Effect, update};
use mlcourse::core::catalog::Catalog;
use mlcourse::core::config::ResolvedConfig;
use mlcourse::core::course::Course;
use mlcourse::core::error::{ConfigurationError, LocaleError};
use mlcourse::core::keys::{NavigatorBinding, Signal, SignalRouter};
use mlcourse::core::locale::{Language, LocaleResolver};
use mlcourse::core::preferences::{
    FilePreferenceStore, LANGUAGE_KEY, MemoryPreferenceStore, PreferenceStore,
};
use mlcourse::core::state::App;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn app_with(store: impl PreferenceStore + 'static, environment: Option<&str>) -> App {
    let locale = LocaleResolver::new(Catalog::builtin().unwrap(), Box::new(store), environment);
    match App::new(Course::builtin().unwrap(), locale) {
        Ok(app) => app,
        Err(e) => panic!("built-in course should validate: {e}"),
    }
}

fn title(app: &App) -> String {
    app.view().unwrap().current_module.title
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_walk_through_three_modules() {
    let mut app = app_with(MemoryPreferenceStore::new(), None);

    let view = app.view().unwrap();
    assert_eq!(view.current_module.title, "What is Machine Learning?");
    assert!(view.is_first);
    assert!((view.progress_percent - 100.0 / 3.0).abs() < 1e-9);

    update(&mut app, Action::Advance);
    let view = app.view().unwrap();
    assert_eq!(view.current_module.title, "Your First ML Concept: Classification");
    assert_eq!(
        view.labels.completed,
        "You've completed 2 out of 3 lessons. Keep going!"
    );

    update(&mut app, Action::Advance);
    update(&mut app, Action::Advance);
    let view = app.view().unwrap();
    assert_eq!(view.current_module.title, "Fun with Numbers: Prediction");
    assert!(view.is_last);
    assert_eq!(view.progress_percent, 100.0);

    update(&mut app, Action::Retreat);
    update(&mut app, Action::Retreat);
    update(&mut app, Action::Retreat);
    assert_eq!(app.navigation.current_index(), 0);
}

#[test]
fn test_empty_course_is_rejected() {
    let result = Course::new(Vec::new());
    assert!(matches!(result, Err(ConfigurationError::EmptyCourse)));
}

#[test]
fn test_course_file_shorter_than_translations_aborts_startup() {
    let dir = TempDir::new().unwrap();
    let course_file = dir.path().join("course.toml");
    let contents = r#"
[[modules]]
icon = "brain"

[[modules]]
icon = "branch"
"#;
    std::fs::write(&course_file, contents).unwrap();
    let config = ResolvedConfig {
        course_file: Some(course_file),
        preferences_path: dir.path().join("preferences.json"),
    };

    let result = App::from_config(&config);
    assert!(matches!(
        result,
        Err(ConfigurationError::ModuleCountMismatch { expected: 3, found: 2 })
    ));
}

// ============================================================================
// Language selection
// ============================================================================

#[test]
fn test_environment_language_used_without_preference() {
    let app = app_with(MemoryPreferenceStore::new(), Some("fr-CA"));
    assert_eq!(app.locale.language(), Language::Fr);
    assert_eq!(title(&app), "Qu'est-ce que l'apprentissage automatique ?");

    let app = app_with(MemoryPreferenceStore::new(), Some("de-DE"));
    assert_eq!(app.locale.language(), Language::En);
}

#[test]
fn test_stored_preference_beats_environment() {
    let store = MemoryPreferenceStore::with(LANGUAGE_KEY, "en");
    let app = app_with(store, Some("fr_FR.UTF-8"));
    assert_eq!(app.locale.language(), Language::En);
}

#[test]
fn test_language_choice_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs").join("preferences.json");

    let mut app = app_with(FilePreferenceStore::new(&path), None);
    assert_eq!(update(&mut app, Action::SetLanguage("fr".into())), Effect::None);
    assert_eq!(app.locale.language(), Language::Fr);

    let restarted = app_with(FilePreferenceStore::new(&path), Some("en-US"));
    assert_eq!(restarted.locale.language(), Language::Fr);
    assert_eq!(restarted.view().unwrap().labels.next, "Suivant");
}

#[test]
fn test_invalid_language_keeps_current_one() {
    let store = MemoryPreferenceStore::new();
    let mut app = app_with(store.clone(), None);
    update(&mut app, Action::SetLanguage("fr".into()));

    let result = app.locale.set_language("xx");
    assert_eq!(result, Err(LocaleError::InvalidLanguage("xx".to_string())));
    assert_eq!(app.locale.language(), Language::Fr);
    assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("fr"));
}

#[test]
fn test_french_progress_message() {
    let mut app = app_with(MemoryPreferenceStore::with(LANGUAGE_KEY, "fr"), None);
    update(&mut app, Action::Advance);
    assert_eq!(
        app.view().unwrap().labels.completed,
        "Vous avez terminé 2 leçons sur 3. Continuez !"
    );
}

// ============================================================================
// Keyboard binding
// ============================================================================

#[test]
fn test_binding_routes_signals_until_detached() {
    let router = SignalRouter::new();
    let mut binding = NavigatorBinding::new();
    let mut app = app_with(MemoryPreferenceStore::new(), None);

    binding.attach(&router);
    for action in router.dispatch(Signal::MoveRight) {
        update(&mut app, action);
    }
    assert_eq!(app.navigation.current_index(), 1);

    binding.detach();
    binding.detach();
    assert!(router.dispatch(Signal::MoveRight).is_empty());
    assert_eq!(router.listener_count(), 0);
}

#[test]
fn test_dropping_binding_releases_routes() {
    let router = SignalRouter::new();
    {
        let mut binding = NavigatorBinding::new();
        binding.attach(&router);
        assert_eq!(router.listener_count(), 2);
    }
    assert_eq!(router.listener_count(), 0);
}
