//! Message Handler module for processing incoming Telegram messages
//!
//! Each inbound text message is classified by the router and executed
//! here against the catalog client, the query functions, and the UI
//! builders. Handlers hold no state between events; every search
//! re-fetches the catalog.

use anyhow::Result;
use reqwest::Url;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, KeyboardRemove, ParseMode};
use tracing::{debug, error, warn};

// Import the catalog client and query engine
use crate::breed_query::{
    filter_by_max_weight, filter_by_min_weight, filter_by_prefix_letter, find_by_exact_name,
};
use crate::catalog::{Breed, CatalogError};

// Import routing and UI building
use super::router::{classify, Route};
use super::ui_builder::{breed_keyboard, chunk_text, format_breed_caption};
use super::AppContext;

// Weight thresholds (kilograms) for the quick weight searches
const LIGHT_DOGS_MAX_KG: f32 = 2.0;
const HEAVY_DOGS_MIN_KG: f32 = 80.0;

// Telegram message length ceiling, applied to the /list output
const MESSAGE_CHUNK_LIMIT: usize = 4000;

// Keyboard widths: letter and light-dog results pack three names per row,
// heavy-dog names are longer and get two
const LETTER_KEYBOARD_COLUMNS: usize = 3;
const HEAVY_KEYBOARD_COLUMNS: usize = 2;

pub async fn message_handler(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    match classify(text) {
        Route::Start => handle_start(&bot, &msg).await,
        Route::Random => handle_random(&bot, &msg, &ctx).await,
        Route::LightDogs => handle_light_dogs(&bot, &msg, &ctx).await,
        Route::HeavyDogs => handle_heavy_dogs(&bot, &msg, &ctx).await,
        Route::ByLetterPrompt => handle_by_letter_prompt(&bot, &msg).await,
        Route::List => handle_list(&bot, &msg, &ctx).await,
        Route::Letter(letter) => handle_letter(&bot, &msg, &ctx, letter).await,
        Route::Cancel => handle_cancel(&bot, &msg).await,
        Route::BreedQuery(name) => handle_breed_query(&bot, &msg, &ctx, &name).await,
        Route::Ignore => {
            debug!(user_id = %msg.chat.id, "Ignoring unrecognized command");
            Ok(())
        }
    }
}

async fn handle_start(bot: &Bot, msg: &Message) -> Result<()> {
    let help_message = format!(
        "🐶 Привет! Я бот-энциклопедия собак!\n\
         Вот что я умею:\n\
         /start - показать это сообщение\n\
         /by_letter - найти породу по первой букве\n\
         /random - случайное фото собаки\n\
         /list - список всех пород\n\n\
         /light_dogs - собаки весом до {LIGHT_DOGS_MAX_KG} кг\n\
         /heavy_dogs - собаки весом более {HEAVY_DOGS_MIN_KG} кг\n\
         Можешь просто написать название породы или выбрать поиск по букве!"
    );

    bot.send_message(msg.chat.id, help_message)
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}

async fn handle_random(bot: &Bot, msg: &Message, ctx: &AppContext) -> Result<()> {
    let image = ctx.catalog.fetch_random_image().await?;
    let url = Url::parse(&image.url)?;

    debug!(user_id = %msg.chat.id, image_url = %image.url, "Sending random dog photo");

    bot.send_photo(msg.chat.id, InputFile::url(url))
        .caption("Вот случайный песик для тебя! 🐕")
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}

async fn handle_light_dogs(bot: &Bot, msg: &Message, ctx: &AppContext) -> Result<()> {
    let breeds = ctx.catalog.fetch_all_breeds().await?;
    let names = filter_by_max_weight(&breeds, LIGHT_DOGS_MAX_KG);

    if names.is_empty() {
        bot.send_message(
            msg.chat.id,
            format!("Не найдено пород собак весом до {LIGHT_DOGS_MAX_KG} кг"),
        )
        .reply_markup(KeyboardRemove::new())
        .await?;
        return Ok(());
    }

    debug!(user_id = %msg.chat.id, matches = names.len(), "Light-dog search produced matches");

    bot.send_message(
        msg.chat.id,
        format!(
            "🐕 Найдено {} пород собак весом до {LIGHT_DOGS_MAX_KG} кг:",
            names.len()
        ),
    )
    .reply_markup(breed_keyboard(&names, LETTER_KEYBOARD_COLUMNS))
    .await?;
    Ok(())
}

async fn handle_heavy_dogs(bot: &Bot, msg: &Message, ctx: &AppContext) -> Result<()> {
    let breeds = ctx.catalog.fetch_all_breeds().await?;
    let heavy = filter_by_min_weight(&breeds, HEAVY_DOGS_MIN_KG);

    if heavy.is_empty() {
        bot.send_message(
            msg.chat.id,
            format!("Не найдено пород собак весом более {HEAVY_DOGS_MIN_KG} кг"),
        )
        .reply_markup(KeyboardRemove::new())
        .await?;
        return Ok(());
    }

    debug!(user_id = %msg.chat.id, matches = heavy.len(), "Heavy-dog search produced matches");

    let breeds_list = heavy
        .iter()
        .map(|b| format!("🐕‍🦺 {} ({})", b.name, b.weight_label))
        .collect::<Vec<_>>()
        .join("\n");

    let names: Vec<String> = heavy.into_iter().map(|b| b.name).collect();

    bot.send_message(
        msg.chat.id,
        format!("🦮 Крупные породы собак (весом более {HEAVY_DOGS_MIN_KG} кг):\n\n{breeds_list}"),
    )
    .reply_markup(breed_keyboard(&names, HEAVY_KEYBOARD_COLUMNS))
    .await?;
    Ok(())
}

async fn handle_by_letter_prompt(bot: &Bot, msg: &Message) -> Result<()> {
    bot.send_message(
        msg.chat.id,
        "Введите первую букву породы собаки (A-Z или А-Я):",
    )
    .reply_markup(KeyboardRemove::new())
    .await?;
    Ok(())
}

async fn handle_letter(bot: &Bot, msg: &Message, ctx: &AppContext, letter: char) -> Result<()> {
    let breeds = ctx.catalog.fetch_all_breeds().await?;
    let names = filter_by_prefix_letter(&breeds, letter);
    let letter_upper: String = letter.to_uppercase().collect();

    if names.is_empty() {
        bot.send_message(msg.chat.id, format!("Не найдено пород на букву {letter_upper}"))
            .reply_markup(KeyboardRemove::new())
            .await?;
        return Ok(());
    }

    debug!(user_id = %msg.chat.id, letter = %letter_upper, matches = names.len(), "Letter search produced matches");

    bot.send_message(
        msg.chat.id,
        format!("🔍 Найдено {} пород на букву {letter_upper}:", names.len()),
    )
    .reply_markup(breed_keyboard(&names, LETTER_KEYBOARD_COLUMNS))
    .await?;
    Ok(())
}

async fn handle_cancel(bot: &Bot, msg: &Message) -> Result<()> {
    bot.send_message(msg.chat.id, "Поиск отменен. Что хотите сделать?")
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}

async fn handle_list(bot: &Bot, msg: &Message, ctx: &AppContext) -> Result<()> {
    let breeds = ctx.catalog.fetch_all_breeds().await?;
    let names: Vec<&str> = breeds.iter().map(|b| b.name.as_str()).collect();

    let full_list = format!("📜 Список всех пород собак:\n\n{}", names.join("\n"));

    for chunk in chunk_text(&full_list, MESSAGE_CHUNK_LIMIT) {
        bot.send_message(msg.chat.id, chunk)
            .reply_markup(KeyboardRemove::new())
            .await?;
    }
    Ok(())
}

async fn handle_breed_query(bot: &Bot, msg: &Message, ctx: &AppContext, name: &str) -> Result<()> {
    let breeds = ctx.catalog.fetch_all_breeds().await?;

    let Some(breed) = find_by_exact_name(&breeds, name) else {
        debug!(user_id = %msg.chat.id, query = %name, "Breed not found in catalog");
        bot.send_message(
            msg.chat.id,
            "Порода не найдена. Попробуйте /by_letter для поиска по букве \
             или /list для списка всех пород.",
        )
        .reply_markup(KeyboardRemove::new())
        .await?;
        return Ok(());
    };

    match ctx.catalog.fetch_image_for_breed(breed.id).await {
        Ok(image) => match Url::parse(&image.url) {
            Ok(url) => send_breed_card(bot, msg, breed, url).await,
            Err(e) => {
                error!(user_id = %msg.chat.id, breed_id = breed.id, error = %e, "Catalog returned an unusable image URL");
                send_generic_breed_error(bot, msg).await
            }
        },
        Err(CatalogError::EmptyResult) => {
            warn!(user_id = %msg.chat.id, breed_id = breed.id, "No image available for breed");
            bot.send_message(msg.chat.id, "Для этой породы пока нет фотографий 😢")
                .reply_markup(KeyboardRemove::new())
                .await?;
            Ok(())
        }
        Err(e) => {
            error!(user_id = %msg.chat.id, breed_id = breed.id, error = %e, "Image fetch failed");
            send_generic_breed_error(bot, msg).await
        }
    }
}

async fn send_breed_card(bot: &Bot, msg: &Message, breed: &Breed, url: Url) -> Result<()> {
    debug!(user_id = %msg.chat.id, breed_id = breed.id, breed_name = %breed.name, "Sending breed card");

    bot.send_photo(msg.chat.id, InputFile::url(url))
        .caption(format_breed_caption(breed))
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}

async fn send_generic_breed_error(bot: &Bot, msg: &Message) -> Result<()> {
    bot.send_message(
        msg.chat.id,
        "Произошла ошибка при получении данных о собаке 😢",
    )
    .reply_markup(KeyboardRemove::new())
    .await?;
    Ok(())
}
