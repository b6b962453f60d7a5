//! Spivanka - Telegram bot that registers vocal-studio students
//!
//! This library provides the full bot: a six-step registration
//! conversation (name, phone, class type, vocal direction, teacher),
//! a static teacher directory, and JSON flat-file persistence of the
//! collected answers.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, and logging
//! - `directory`: The static teacher catalog
//! - `flow`: The conversation state machine (transport-free)
//! - `storage`: User records and persistence
//! - `telegram`: Bot wiring and dispatch schema

pub mod cli;
pub mod core;
pub mod directory;
pub mod flow;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use directory::{ClassType, Direction, Directory, TeacherProfile};
pub use flow::{Event, State, Step};
pub use storage::{JsonFileStore, MemoryStore, UserRecord, UserStore};
pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
