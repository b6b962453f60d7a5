//! Telegram wiring: commands, dispatch schema, keyboard rendering

pub mod bot;
pub mod keyboards;
pub mod schema;

pub use bot::{create_bot, setup_bot_commands, Command};
pub use schema::{schema, FlowDialogue, HandlerDeps, HandlerError};
