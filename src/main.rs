use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use relaybot::cli::{Cli, Commands};
use relaybot::conversation::types::parse_destinations;
use relaybot::conversation::Conversation;
use relaybot::core::{config, init_logger, install_panic_hook};
use relaybot::storage::MemorySessionStore;
use relaybot::telegram::{create_bot, schema, setup_bot_commands, wait_for_bot_api, HandlerDeps, TelegramTransport};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation, Bot API unreachable).
/// A missing token is logged as fatal and the process exits before serving anything.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    install_panic_hook();
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
    }
}

async fn run_bot() -> Result<()> {
    let token = match config::bot_token() {
        Ok(token) => token,
        Err(e) => {
            log::error!("FATAL: {}", e);
            return Err(e.into());
        }
    };
    let destinations = parse_destinations(config::DESTINATION_CHANNELS)?;

    log::info!("Starting bot...");
    let bot = create_bot(&token)?;

    let me = wait_for_bot_api(&bot).await?;
    let bot_username = me.username.clone();
    log::info!("Bot username: {:?}, Bot ID: {}", bot_username, me.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let store = Arc::new(MemorySessionStore::new());
    let transport = Arc::new(TelegramTransport::new(bot.clone()));
    let conversation = Arc::new(Conversation::new(store, transport, destinations));
    log::info!(
        "Relaying to {} destination(s): {}",
        conversation.destinations().len(),
        conversation
            .destinations()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let deps = HandlerDeps::new(conversation, bot_username);

    // Drop updates queued while the bot was down; sessions did not survive anyway.
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    log::info!("Bot is starting polling...");
    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
