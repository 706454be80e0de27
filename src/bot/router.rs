//! Router module mapping inbound message text to a handling action
//!
//! Classification is a pure priority match so the whole transition table
//! can be tested without a live bot. The effectful part lives in
//! `message_handler`.

use lazy_static::lazy_static;
use regex::Regex;

use super::ui_builder::CANCEL_LABEL;

// A single Latin or Cyrillic letter triggers the first-letter search
lazy_static! {
    static ref SINGLE_LETTER: Regex =
        Regex::new(r"^[а-яёА-ЯЁa-zA-Z]$").expect("Single-letter pattern should be valid");
}

/// The action selected for one inbound text message
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// `/start`: send the static help text
    Start,
    /// `/random`: send a random dog photo
    Random,
    /// `/light_dogs`: breeds under the light-weight threshold
    LightDogs,
    /// `/heavy_dogs`: breeds over the heavy-weight threshold
    HeavyDogs,
    /// `/by_letter`: prompt for a single letter
    ByLetterPrompt,
    /// `/list`: the full breed list, chunked
    List,
    /// A single letter: first-letter breed search
    Letter(char),
    /// The cancel button label
    Cancel,
    /// Free text treated as a breed name lookup
    BreedQuery(String),
    /// Unrecognized slash command; produces no reply
    Ignore,
}

/// Classify one inbound text message, in priority order: known commands
/// first, then the single-letter and cancel shapes, then free text as a
/// breed name. Unknown commands are ignored rather than answered.
pub fn classify(text: &str) -> Route {
    match text {
        "/start" => Route::Start,
        "/random" => Route::Random,
        "/light_dogs" => Route::LightDogs,
        "/heavy_dogs" => Route::HeavyDogs,
        "/by_letter" => Route::ByLetterPrompt,
        "/list" => Route::List,
        _ if SINGLE_LETTER.is_match(text) => {
            // The pattern guarantees exactly one char
            Route::Letter(text.chars().next().unwrap())
        }
        _ if text == CANCEL_LABEL => Route::Cancel,
        _ if text.starts_with('/') => Route::Ignore,
        _ => Route::BreedQuery(text.to_string()),
    }
}
