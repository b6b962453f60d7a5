use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;

use spivanka::cli::{Cli, Commands};
use spivanka::core::{config, init_logger};
use spivanka::directory::{ClassType, Directory};
use spivanka::flow::State;
use spivanka::storage::JsonFileStore;
use spivanka::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point
///
/// Parses CLI arguments and dispatches to the matching subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, store, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run { users_file }) => {
            if let Some(path) = users_file {
                // Must happen before the first USERS_FILE read
                std::env::set_var("USERS_FILE", path);
            }
            run_bot().await
        }
        Some(Commands::Directory) => {
            print_directory();
            Ok(())
        }
        None => {
            log::info!("No command specified, running bot in default mode");
            run_bot().await
        }
    }
}

/// Run the registration bot with long polling
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let bot = create_bot()?;
    setup_bot_commands(&bot).await?;

    let store = JsonFileStore::load(config::USERS_FILE.as_str())?;
    log::info!("User records loaded from {}", config::USERS_FILE.as_str());

    let deps = HandlerDeps::new(Arc::new(store), Arc::new(Directory::builtin()));
    let handler = schema(deps);

    log::info!("Ready to receive updates");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Print the built-in teacher catalog to stdout
fn print_directory() {
    let directory = Directory::builtin();
    for profile in directory.teachers() {
        let styles = profile
            .styles
            .iter()
            .map(|direction| direction.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} ({})", profile.name, styles);
        println!("  {}", profile.bio);
        println!("  Price: {}", profile.price);
        for class_type in ClassType::ALL {
            if let Some(info) = profile.class_info(class_type) {
                println!("  {}: {}", class_type.label(), info);
            }
        }
        println!();
    }
}
