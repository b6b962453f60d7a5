//! Storage module for user registration records

pub mod json;
pub mod memory;
pub mod record;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{UserMap, UserRecord, UserStore};
