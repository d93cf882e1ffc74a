//! Integration tests for the signup/login/session flow

use taskmind::auth::{AuthError, Registry};
use taskmind::store::{MemStore, Store};

#[test]
fn test_full_session_lifecycle() {
    let store = MemStore::new();
    let registry = Registry::new(&store);

    registry
        .signup("maria@example.com", "correcthorse", "Maria")
        .unwrap();
    assert!(!registry.is_authenticated().unwrap());

    let session = registry.login("maria@example.com", "correcthorse").unwrap();
    assert_eq!(session.email, "maria@example.com");
    assert!(registry.is_authenticated().unwrap());

    registry.logout().unwrap();
    assert!(registry.current_user().unwrap().is_none());
}

#[test]
fn test_second_signup_with_same_email_is_rejected() {
    let store = MemStore::new();
    let registry = Registry::new(&store);

    registry
        .signup("maria@example.com", "one", "Maria")
        .unwrap();
    let err = registry
        .signup("maria@example.com", "two", "Other Maria")
        .unwrap_err();

    assert!(matches!(err, AuthError::UserExists));

    // The registry still holds exactly one record for that email
    let raw = store.get(taskmind::store::USERS_KEY).unwrap().unwrap();
    assert_eq!(raw.matches("maria@example.com").count(), 1);
}

#[test]
fn test_failed_login_leaves_no_session() {
    let store = MemStore::new();
    let registry = Registry::new(&store);

    registry
        .signup("maria@example.com", "correcthorse", "Maria")
        .unwrap();

    let err = registry.login("maria@example.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(store.get(taskmind::store::CURRENT_USER_KEY).unwrap().is_none());
}

#[test]
fn test_login_replaces_previous_session() {
    let store = MemStore::new();
    let registry = Registry::new(&store);

    registry.signup("a@example.com", "pw-a", "A").unwrap();
    registry.signup("b@example.com", "pw-b", "B").unwrap();

    registry.login("a@example.com", "pw-a").unwrap();
    registry.login("b@example.com", "pw-b").unwrap();

    let current = registry.current_user().unwrap().unwrap();
    assert_eq!(current.email, "b@example.com");
}
