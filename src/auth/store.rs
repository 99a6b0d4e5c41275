//! Credential Storage
//! Mission: Store user accounts behind a swappable trait

use crate::auth::models::User;
use parking_lot::RwLock;
use tracing::info;

/// Backend-agnostic credential store.
///
/// Handlers only see this trait, so the in-memory backend can be swapped
/// for a real database without touching them.
pub trait CredentialStore: Send + Sync {
    /// Find a user by username (first match).
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// Find a user by id.
    fn find_by_id(&self, id: u64) -> Option<User>;

    /// Insert a new user with a pre-computed password hash.
    /// Returns `None` when the username is already taken.
    fn insert(&self, username: &str, password_hash: &str) -> Option<User>;

    /// Remove a user by id, preserving the order of remaining records.
    /// Returns `false` when no such user exists.
    fn remove(&self, id: u64) -> bool;

    /// All users in insertion order.
    fn list(&self) -> Vec<User>;
}

struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory credential store. All data is lost on restart.
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for MemoryStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read();
        inner.users.iter().find(|u| u.username == username).cloned()
    }

    fn find_by_id(&self, id: u64) -> Option<User> {
        let inner = self.inner.read();
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    fn insert(&self, username: &str, password_hash: &str) -> Option<User> {
        let mut inner = self.inner.write();

        // Uniqueness check and append under the same write lock
        if inner.users.iter().any(|u| u.username == username) {
            return None;
        }

        // Monotonic counter: ids are never reused after a deletion
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.users.push(user.clone());

        info!("Created user: {} (id {})", user.username, user.id);

        Some(user)
    }

    fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write();

        match inner.users.iter().position(|u| u.id == id) {
            Some(index) => {
                inner.users.remove(index);
                info!("Deleted user id {}", id);
                true
            }
            None => false,
        }
    }

    fn list(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }
}
