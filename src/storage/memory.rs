//! In-memory store with the same semantics as the file store, minus the
//! disk writes. Used by the test suites.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::AppResult;

use super::record::{UserMap, UserRecord, UserStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<UserMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, UserMap> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for MemoryStore {
    fn get(&self, user_id: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.lock().get(user_id).cloned())
    }

    fn put(&self, user_id: &str, record: UserRecord) -> AppResult<()> {
        self.lock().insert(user_id.to_string(), record);
        Ok(())
    }

    fn delete(&self, user_id: &str) -> AppResult<()> {
        self.lock().shift_remove(user_id);
        Ok(())
    }
}
