use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read user seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse user seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate user id `{0}`")]
    DuplicateId(String),
}

/// A single user record. `id` is an opaque identifier, never interpreted
/// as a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}
impl User {
    pub fn new(id: &str, name: &str, email: &str, age: Option<i32>) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

/**
 * The read-only record collection backing every query.
 *
 * Built once at startup and never mutated afterwards, so it can be shared
 * between concurrent requests without any locking. Insertion order is
 * preserved and is what `take()` truncates against.
 */
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
}
impl UserStore {
    pub fn new(users: Vec<User>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(StoreError::DuplicateId(user.id.clone()));
            }
        }
        Ok(UserStore { users })
    }

    /// The built-in two-record fixture served when no seed file is configured.
    pub fn seeded() -> Self {
        UserStore {
            users: vec![
                User::new("1", "Laion", "laion@example.com", Some(30)),
                User::new("2", "John Doe", "john@example.com", Some(25)),
            ],
        }
    }

    /// Loads a JSON array of user records, keeping file order.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let users: Vec<User> = serde_json::from_str(&contents)?;
        UserStore::new(users)
    }

    pub fn all_records(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /**
     * Returns the first `limit` records in store order, or all of them when
     * no limit is given. Zero and negative limits yield an empty slice and a
     * limit past the end yields the whole collection.
     */
    pub fn take(&self, limit: Option<i32>) -> &[User] {
        match limit {
            None => &self.users,
            Some(limit) => {
                let count = usize::try_from(limit).unwrap_or(0).min(self.users.len());
                &self.users[..count]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
impl Default for UserStore {
    fn default() -> Self {
        UserStore::seeded()
    }
}
