use pattern_framework::mock::MockSubscriber;
use pattern_framework::{Subscriber, SubscriberError, SubscriberHandle};
use pattern_sample::file_editor::{Editor, EditorError};
use pattern_sample::listeners::{EmailAlertsListener, LoggingListener};
use pattern_sample::model::EditorEvent;
use std::sync::Arc;

/// The logger hears about opens, the alerter about saves, and neither about the other.
#[test]
fn test_listeners_receive_only_their_event_type() {
    let mut editor = Editor::new();
    let logger = Arc::new(LoggingListener::new(
        "/path/to/log.txt",
        "Someone has opened the file: %s",
    ));
    let alerts = Arc::new(EmailAlertsListener::new(
        "admin@example.com",
        "Someone has changed the file: %s",
    ));
    editor.events().subscribe(EditorEvent::Open, logger.clone());
    editor.events().subscribe(EditorEvent::Save, alerts.clone());

    let opened = editor.open_file("/path/to/myfile.txt").unwrap();
    assert_eq!(opened.delivered, 1);
    assert!(alerts.sent().is_empty());

    let saved = editor.save_file().unwrap();
    assert_eq!(saved.delivered, 1);

    assert_eq!(logger.log_file(), std::path::Path::new("/path/to/log.txt"));
    assert_eq!(logger.lines(), vec!["Someone has opened the file: /path/to/myfile.txt"]);
    assert_eq!(alerts.sent(), vec!["Someone has changed the file: /path/to/myfile.txt"]);
}

#[test]
fn test_save_without_open_file() {
    let editor = Editor::new();
    let mock = Arc::new(MockSubscriber::<String>::new("save-watcher"));
    editor.events().subscribe(EditorEvent::Save, mock.clone());

    assert_eq!(editor.save_file(), Err(EditorError::NoOpenFile));
    assert!(mock.received().is_empty());
    mock.verify();
}

#[test]
fn test_failing_listener_does_not_block_the_rest() {
    let mut editor = Editor::new();
    let broken = Arc::new(EmailAlertsListener::new("nobody", "changed %s"));
    let mock = Arc::new(MockSubscriber::new("after-broken"));
    mock.expect_update("notes.txt".to_string()).return_ok();

    editor.events().subscribe(EditorEvent::Open, broken.clone());
    editor.events().subscribe(EditorEvent::Open, mock.clone());

    let report = editor.open_file("notes.txt").unwrap();

    assert_eq!(report.delivered, 1);
    assert_eq!(report.faults.len(), 1);
    assert_eq!(report.faults[0].subscriber, "email-alerts");
    assert!(!report.faults[0].panicked);
    mock.verify();
}

struct Grumpy;

impl Subscriber<String> for Grumpy {
    fn name(&self) -> &str {
        "grumpy"
    }

    fn update(&self, _: &String) -> Result<(), SubscriberError> {
        panic!("refusing {}", "to listen")
    }
}

#[test]
fn test_panicking_listener_is_reported() {
    let mut editor = Editor::new();
    let grumpy: SubscriberHandle<String> = Arc::new(Grumpy);
    let logger = Arc::new(LoggingListener::new("/tmp/log", "%s"));
    editor.events().subscribe(EditorEvent::Open, grumpy);
    editor.events().subscribe(EditorEvent::Open, logger.clone());

    let report = editor.open_file("a.txt").unwrap();

    assert_eq!(report.faults[0].subscriber, "grumpy");
    assert!(report.faults[0].panicked);
    assert_eq!(report.faults[0].reason, "refusing to listen");
    assert_eq!(logger.lines(), vec!["a.txt"]);
}

#[test]
fn test_unsubscribed_listener_stops_hearing() {
    let mut editor = Editor::new();
    let mock = Arc::new(MockSubscriber::new("transient"));
    mock.expect_update("first.txt".to_string()).return_ok();
    let handle: SubscriberHandle<String> = mock.clone();

    editor.events().subscribe(EditorEvent::Open, handle.clone());
    editor.open_file("first.txt").unwrap();

    assert_eq!(editor.events().unsubscribe(&EditorEvent::Open, &handle), 1);
    let report = editor.open_file("second.txt").unwrap();

    assert_eq!(report.notified(), 0);
    assert_eq!(mock.received(), vec!["first.txt".to_string()]);
    mock.verify();
}
