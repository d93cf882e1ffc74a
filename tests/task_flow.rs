//! Integration tests for the analyze/accept/alert flow

use std::sync::Mutex;

use taskmind::advisor;
use taskmind::auth::Registry;
use taskmind::notify::{self, Notifier, Permission, ALERT_TITLE};
use taskmind::store::MemStore;
use taskmind::task::{Priority, Task, TaskBook};

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str, tag: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string(), tag.to_string()));
    }
}

/// Sign up, log in, and return the session user's id.
fn login(store: &MemStore, email: &str) -> String {
    let registry = Registry::new(store);
    registry.signup(email, "pw", "Test User").unwrap();
    registry.login(email, "pw").unwrap().id
}

#[test]
fn test_accepting_a_suggestion_persists_and_alerts() {
    let store = MemStore::new();
    let user_id = login(&store, "maria@example.com");

    let suggestion = advisor::analyze("Urgent: submit report ASAP", None);
    assert_eq!(suggestion.priority, Priority::High);

    let task = Task::new(
        "Urgent: submit report ASAP",
        None,
        suggestion.priority,
        suggestion.category.label(),
    );

    let book = TaskBook::open(&store, &user_id);
    let task = book.add(task).unwrap();

    let notifier = RecordingNotifier::default();
    assert!(notify::send_task_alert(&notifier, Permission::Granted, &task));

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].0, ALERT_TITLE);
    assert!(sent[0].1.contains("Urgent: submit report ASAP"));
    assert_eq!(sent[0].2, task.id);

    let tasks = book.load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].category, "Work");
}

#[test]
fn test_low_priority_acceptance_stays_silent() {
    let store = MemStore::new();
    let user_id = login(&store, "maria@example.com");

    let suggestion = advisor::analyze("Buy groceries", None);
    let task = Task::new(
        "Buy groceries",
        None,
        suggestion.priority,
        suggestion.category.label(),
    );
    let task = TaskBook::open(&store, &user_id).add(task).unwrap();

    let notifier = RecordingNotifier::default();
    assert!(!notify::send_task_alert(&notifier, Permission::Granted, &task));
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[test]
fn test_denied_permission_never_blocks_submission() {
    let store = MemStore::new();
    let user_id = login(&store, "maria@example.com");

    let task = Task::new("Emergency vet visit", None, Priority::High, "Personal");
    let book = TaskBook::open(&store, &user_id);
    let task = book.add(task).unwrap();

    let notifier = RecordingNotifier::default();
    assert!(!notify::send_task_alert(&notifier, Permission::Denied, &task));

    // The task landed regardless of the alert outcome
    assert_eq!(book.load().unwrap().len(), 1);
}

#[test]
fn test_task_lists_are_scoped_per_user() {
    let store = MemStore::new();
    let registry = Registry::new(&store);
    registry.signup("a@example.com", "pw", "A").unwrap();
    registry.signup("b@example.com", "pw", "B").unwrap();

    let a = registry.login("a@example.com", "pw").unwrap();
    TaskBook::open(&store, &a.id)
        .add(Task::new("mine", None, Priority::Low, "General"))
        .unwrap();

    let b = registry.login("b@example.com", "pw").unwrap();
    assert!(TaskBook::open(&store, &b.id).load().unwrap().is_empty());
}

#[test]
fn test_double_toggle_is_idempotent() {
    let store = MemStore::new();
    let user_id = login(&store, "maria@example.com");
    let book = TaskBook::open(&store, &user_id);

    let task = book
        .add(Task::new("laundry", None, Priority::Low, "General"))
        .unwrap();

    book.toggle(&task.id).unwrap();
    book.toggle(&task.id).unwrap();

    assert!(!book.load().unwrap()[0].completed);
}

#[test]
fn test_removing_unknown_id_changes_nothing() {
    let store = MemStore::new();
    let user_id = login(&store, "maria@example.com");
    let book = TaskBook::open(&store, &user_id);

    book.add(Task::new("laundry", None, Priority::Low, "General"))
        .unwrap();
    let before = book.load().unwrap();

    assert!(!book.remove("not-a-real-id").unwrap());

    let after = book.load().unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0].id, before[0].id);
}
