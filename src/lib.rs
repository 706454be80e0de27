//! # Dogpedia Telegram Bot
//!
//! A Telegram bot encyclopedia of dog breeds. It answers commands and
//! free-text breed names by querying an upstream breed catalog API and
//! replying with text, photos, and reply keyboards.

pub mod bot;
pub mod breed_query;
pub mod catalog;
pub mod config;
