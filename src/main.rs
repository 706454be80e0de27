use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dogpedia::bot::{self, AppContext};
use dogpedia::config::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Dogpedia Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = BotConfig::from_env()?;
    let bot = Bot::new(&config.bot_token);

    // Shared application context: configuration plus the catalog client
    let ctx = Arc::new(AppContext::new(config.clone()));

    info!("Bot initialized, starting dispatcher");

    let mut dispatcher = Dispatcher::builder(bot.clone(), bot::build_handler())
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build();

    // The same handler tree serves both delivery modes
    match config.webhook_url {
        Some(url) => {
            let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
            info!(listen_addr = %addr, webhook_url = %url, "Running in webhook mode");

            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("Running in long-polling mode");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
