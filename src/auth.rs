//! Mock authentication backed by the store seam
//!
//! User records live in one JSON array keyed by unique email; passwords
//! are plaintext and carry no security guarantees. The presence of the
//! current-user pointer is the sole authentication signal.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::store::{self, Store, StoreError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    UserExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Stored user record, including the plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// The current-session pointer. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

pub struct Registry<'a> {
    store: &'a dyn Store,
}

impl<'a> Registry<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    fn load_users(&self) -> Result<Vec<User>> {
        Ok(store::get_json(self.store, store::USERS_KEY)?.unwrap_or_default())
    }

    /// Register a new account. Fails on duplicate email without touching
    /// the registry or the session.
    pub fn signup(&self, email: &str, password: &str, name: &str) -> Result<User> {
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::UserExists);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };

        users.push(user.clone());
        store::set_json(self.store, store::USERS_KEY, &users)?;
        debug!("Registered user {}", user.email);

        Ok(user)
    }

    /// Match email and password against the registry; on success the
    /// session pointer is replaced. On failure no session is established.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser> {
        let users = self.load_users()?;

        let user = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = SessionUser {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        };

        store::set_json(self.store, store::CURRENT_USER_KEY, &session)?;
        Ok(session)
    }

    /// Clear the session pointer. Logging out twice is fine.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(store::CURRENT_USER_KEY)?;
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<SessionUser>> {
        Ok(store::get_json(self.store, store::CURRENT_USER_KEY)?)
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some())
    }
}
