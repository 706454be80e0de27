//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `router`: Classifies inbound text into a handling action
//! - `message_handler`: Executes routed actions and sends replies
//! - `ui_builder`: Creates keyboards and formats messages

pub mod message_handler;
pub mod router;
pub mod ui_builder;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::catalog::CatalogClient;
use crate::config::BotConfig;

// Re-export main handler functions for use in main.rs
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use router::{classify, Route};
pub use ui_builder::{breed_keyboard, chunk_text, format_breed_caption, CANCEL_LABEL};

/// Application context constructed once at startup and shared immutably
/// with every handler invocation
pub struct AppContext {
    pub config: BotConfig,
    pub catalog: CatalogClient,
}

impl AppContext {
    pub fn new(config: BotConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog_base_url, &config.catalog_api_key);
        Self { config, catalog }
    }
}

/// Build the update handler tree.
///
/// The same tree serves both delivery modes; polling or webhook is chosen
/// by the dispatcher setup, not here.
pub fn build_handler() -> UpdateHandler<anyhow::Error> {
    dptree::entry().branch(Update::filter_message().endpoint(message_handler))
}
