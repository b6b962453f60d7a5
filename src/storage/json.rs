//! Write-through JSON flat-file store.

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::{AppError, AppResult};

use super::record::{UserMap, UserRecord, UserStore};

/// Keeps every user record in a single pretty-printed JSON document.
///
/// The whole document is rewritten on each mutation, under the same lock
/// that guards the in-memory map. There is no atomic rename; a crash in the
/// middle of a write can corrupt the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    users: Mutex<UserMap>,
}

impl JsonFileStore {
    /// Opens the store at `path`, reading the existing document if present.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// is an error; the caller decides whether to abort startup.
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let users = match fs_err::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => UserMap::new(),
            Err(err) => return Err(AppError::Store(err)),
        };
        log::debug!("Loaded {} user record(s) from {}", users.len(), path.display());
        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    fn persist(&self, users: &UserMap) -> AppResult<()> {
        let document = serde_json::to_string_pretty(users)?;
        fs_err::write(&self.path, document)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, UserMap> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for JsonFileStore {
    fn get(&self, user_id: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.lock().get(user_id).cloned())
    }

    fn put(&self, user_id: &str, record: UserRecord) -> AppResult<()> {
        let mut users = self.lock();
        users.insert(user_id.to_string(), record);
        self.persist(&users)
    }

    fn delete(&self, user_id: &str) -> AppResult<()> {
        let mut users = self.lock();
        // shift_remove keeps the remaining keys in their original order
        if users.shift_remove(user_id).is_some() {
            self.persist(&users)?;
        }
        Ok(())
    }
}
