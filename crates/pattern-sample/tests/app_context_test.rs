use pattern_framework::SingletonError;
use pattern_sample::database::Database;
use pattern_sample::lifecycle::{AppConfig, AppContext};

/// Bootstrap connects the database from config; the accessor then returns that instance.
#[test]
fn test_bootstrap_connects_once() {
    let config = AppConfig {
        database_url: "memory://bootstrap".to_string(),
        ..AppConfig::default()
    };

    let context = AppContext::bootstrap(config.clone()).unwrap();
    assert_eq!(context.database.connection(), "memory://bootstrap");
    assert!(std::ptr::eq(context.database, Database::instance()));

    let err = AppContext::bootstrap(config).unwrap_err();
    assert_eq!(err, SingletonError::AlreadyInitialized("Database"));
    assert_eq!(Database::constructions(), 1);

    let mut editor = context.file_editor();
    editor.open_file("/path/to/myfile.txt").unwrap();
    let report = editor.save_file().unwrap();
    assert!(report.is_clean());
    assert_eq!(report.delivered, 1);
}
