//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Telegram bot that registers vocal-studio students
#[derive(Parser)]
#[command(name = "spivanka")]
#[command(author, version, about = "Telegram bot that registers vocal-studio students", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (default when no subcommand is given)
    Run {
        /// Path to the user records file (overrides USERS_FILE)
        #[arg(long, value_name = "PATH")]
        users_file: Option<String>,
    },
    /// Print the teacher catalog and exit
    Directory,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
