//! Persistent key-value storage seam
//!
//! Every persisted record (user registry, session pointer, per-user task
//! lists) goes through the `Store` trait, so flows can run against the
//! in-memory backend in tests instead of the real data directory.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid JSON under key '{key}': {source}")]
    InvalidJson {
        key: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key holding the user registry array.
pub const USERS_KEY: &str = "users";

/// Key holding the current-session pointer.
pub const CURRENT_USER_KEY: &str = "current_user";

/// Key holding one user's task list.
pub fn tasks_key(user_id: &str) -> String {
    format!("tasks_{}", user_id)
}

/// Keyed JSON document storage. Values are JSON texts; `get` returns
/// `None` for unknown keys and `remove` of an unknown key is a no-op.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

pub fn get_json<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(text) => {
            let value = serde_json::from_str(&text).map_err(|source| StoreError::InvalidJson {
                key: key.to_string(),
                source,
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn set_json<T: Serialize>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| StoreError::InvalidJson {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &text)
}
