//! User records and the store seam.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;
use crate::directory::{ClassType, Direction};

/// The full persisted mapping, keyed by user id.
///
/// `IndexMap` keeps key insertion order stable across load/save cycles, so
/// the on-disk document diffs cleanly between writes.
pub type UserMap = IndexMap<String, UserRecord>;

/// One user's collected registration answers.
///
/// Every field starts empty and fills in as the conversation advances. A
/// user with both name and phone set counts as registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

impl UserRecord {
    /// A brand-new record holding only the name, dropping any earlier answers.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Registered users skip the flow on /start.
    pub fn is_registered(&self) -> bool {
        self.name.is_some() && self.phone.is_some()
    }
}

/// Persistence seam for user records.
///
/// Handlers only see this trait. Production wires in the JSON file store,
/// tests an in-memory double.
pub trait UserStore: Send + Sync {
    /// Looks up the record for a user, if any.
    fn get(&self, user_id: &str) -> AppResult<Option<UserRecord>>;

    /// Inserts or replaces the record and persists the change immediately.
    fn put(&self, user_id: &str, record: UserRecord) -> AppResult<()>;

    /// Removes the record, if present, and persists the change.
    fn delete(&self, user_id: &str) -> AppResult<()>;
}
