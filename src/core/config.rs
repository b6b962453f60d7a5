use once_cell::sync::Lazy;
use std::env;

/// Bot authentication token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// User records file path
/// Read from USERS_FILE environment variable
/// Default: users_data.json (working directory)
pub static USERS_FILE: Lazy<String> =
    Lazy::new(|| env::var("USERS_FILE").unwrap_or_else(|_| "users_data.json".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: spivanka.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "spivanka.log".to_string()));
