//! # Configuration Module
//!
//! This module loads the bot configuration from environment variables,
//! including the Telegram token, the upstream catalog credentials, and the
//! optional webhook settings for push-mode delivery.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

// Constants for configuration defaults
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.thedogapi.com/v1";
pub const DEFAULT_LISTEN_PORT: u16 = 8000;

/// Runtime configuration for the bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// API key for the upstream breed catalog
    pub catalog_api_key: String,
    /// Base URL of the upstream breed catalog
    pub catalog_base_url: String,
    /// Public URL registered with Telegram; enables webhook delivery when set
    pub webhook_url: Option<Url>,
    /// Local port the webhook listener binds to (webhook mode only)
    pub listen_port: u16,
}

impl BotConfig {
    /// Load configuration from the environment.
    ///
    /// `BOT_TOKEN` and `CATALOG_API_KEY` are required; everything else has
    /// a default. `PUBLIC_WEBHOOK_URL`, when present, must parse as a URL.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN must be set")?;
        let catalog_api_key =
            env::var("CATALOG_API_KEY").context("CATALOG_API_KEY must be set")?;

        let catalog_base_url = env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());

        let webhook_url = match env::var("PUBLIC_WEBHOOK_URL") {
            Ok(raw) => Some(
                Url::parse(&raw).context("PUBLIC_WEBHOOK_URL is not a valid URL")?,
            ),
            Err(_) => None,
        };

        let listen_port = match env::var("LISTEN_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("LISTEN_PORT is not a valid port number")?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            bot_token,
            catalog_api_key,
            catalog_base_url,
            webhook_url,
            listen_port,
        })
    }
}
