//! User registry
//!
//! Append-only store of registered participants. Ids are assigned
//! sequentially under the write lock.

use std::sync::RwLock;
use types::errors::RegistryError;
use types::ids::UserId;
use types::user::User;

/// Store of registered riders and drivers
#[derive(Default)]
pub struct UserRegistry {
    users: RwLock<Vec<User>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new participant
    ///
    /// Rejects an empty name. The next sequential id is assigned and the
    /// created record returned.
    pub fn register(
        &self,
        name: &str,
        phone: Option<String>,
        is_driver: bool,
    ) -> Result<User, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::NameRequired);
        }

        let mut users = self.users.write().expect("registry lock poisoned");
        let user = User {
            id: UserId::new(users.len() as u64 + 1),
            name: name.to_string(),
            phone,
            is_driver,
        };
        users.push(user.clone());
        Ok(user)
    }

    /// All registered users, in registration order
    pub fn list(&self) -> Vec<User> {
        self.users.read().expect("registry lock poisoned").clone()
    }
}
