//! Bot initialization and command registration

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::{config, AppResult};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "begin or resume registration")]
    Start,
    #[command(description = "cancel the current registration")]
    Cancel,
    #[command(description = "wipe your answers and start over")]
    Restart,
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - No token configured
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        anyhow::bail!("BOT_TOKEN (or TELOXIDE_TOKEN) is not set");
    }
    Ok(Bot::new(token))
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
pub async fn setup_bot_commands(bot: &Bot) -> AppResult<()> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "begin or resume registration"),
        BotCommand::new("cancel", "cancel the current registration"),
        BotCommand::new("restart", "wipe your answers and start over"),
    ])
    .await?;

    Ok(())
}
