//! UI Builder module for creating reply keyboards and formatting messages

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use teloxide::utils::html;

use crate::catalog::Breed;

/// Label of the cancel button appended to every breed keyboard; incoming
/// text equal to this label cancels the current search
pub const CANCEL_LABEL: &str = "❌ Отмена";

/// Placeholder shown for breed fields the catalog does not know
pub const UNKNOWN_FIELD: &str = "неизвестно";

/// Build a reply keyboard from a flat list of breed names.
///
/// Names are chunked into rows of `columns` buttons, preserving order; a
/// final single-button row with the cancel label is always appended, even
/// for an empty list.
pub fn breed_keyboard(names: &[String], columns: usize) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = names
        .chunks(columns)
        .map(|row| row.iter().map(|name| KeyboardButton::new(name.as_str())).collect())
        .collect();

    rows.push(vec![KeyboardButton::new(CANCEL_LABEL)]);

    KeyboardMarkup::new(rows)
        .resize_keyboard()
        .one_time_keyboard()
}

/// Split text into consecutive slices of at most `max_len` characters.
///
/// Telegram caps message length, so long outputs are sent as several
/// messages. Chunk boundaries are counted in characters, not bytes; the
/// texts are Cyrillic-heavy and a byte split could land inside a code
/// point. Concatenating the result reproduces the input exactly.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Assemble the HTML photo caption for a breed record.
///
/// Missing fields fall back to a fixed placeholder. Field values come
/// from the upstream catalog and are escaped before being embedded in
/// the HTML markup.
pub fn format_breed_caption(breed: &Breed) -> String {
    let origin = field_or_unknown(breed.origin.as_deref());
    let life_span = field_or_unknown(breed.life_span.as_deref());
    let temperament = field_or_unknown(breed.temperament.as_deref());
    let weight = match breed.weight.as_ref().and_then(|w| w.metric.as_deref()) {
        Some(metric) => format!("{} кг", html::escape(metric)),
        None => UNKNOWN_FIELD.to_string(),
    };

    format!(
        "🐕 <b>{}</b>\n\n\
         🌍 <i>Происхождение:</i> {}\n\
         ⏳ <i>Продолжительность жизни:</i> {}\n\
         ⚖️ <i>Вес:</i> {}\n\n\
         😊 <i>Темперамент:</i> {}",
        html::escape(&breed.name),
        origin,
        life_span,
        weight,
        temperament
    )
}

fn field_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) => html::escape(v),
        None => UNKNOWN_FIELD.to_string(),
    }
}
