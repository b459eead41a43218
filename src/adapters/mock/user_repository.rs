use crate::domain::{User, UserId};
use crate::ports::user_repository::{Result, UserRepository as UserRepositoryTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of UserRepository
///
/// Supports stateful testing by storing users in memory.
pub struct UserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Add a user for testing purposes
    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.user_id, user);
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }
}
