//! User Entity
//!
//! One row per account: identity, credentials, and the creation timestamp.
//! The id is assigned by the store, so a not-yet-persisted account is a
//! separate type.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, password::StoredPassword, user_name::UserName,
};

/// Account data before the store has assigned an id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password: StoredPassword,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(user_name: UserName, email: Email, password: StoredPassword) -> Self {
        Self {
            user_name,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}

/// Persisted user entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned integer identifier
    pub user_id: UserId,
    /// Unique handle, 6-20 letters
    pub user_name: UserName,
    /// Unique login email
    pub email: Email,
    /// Stored credential (see `platform::credential`)
    pub password: StoredPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
