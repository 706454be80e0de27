use dogpedia::bot::ui_builder::{
    breed_keyboard, chunk_text, format_breed_caption, CANCEL_LABEL, UNKNOWN_FIELD,
};
use dogpedia::catalog::{Breed, BreedWeight};

fn row_texts(keyboard: &teloxide::types::KeyboardMarkup) -> Vec<Vec<String>> {
    keyboard
        .keyboard
        .iter()
        .map(|row| row.iter().map(|button| button.text.clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_exact_lengths() {
        let text = "x".repeat(9000);

        let chunks = chunk_text(&text, 4000);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1].chars().count(), 4000);
        assert_eq!(chunks[2].chars().count(), 1000);
    }

    #[test]
    fn test_chunk_text_concatenation_reproduces_input() {
        let text = "📜 Список всех пород собак: Akita, Бигль, Affenpinscher".repeat(50);

        let chunks = chunk_text(&text, 100);

        assert_eq!(chunks.concat(), text);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 100);
        }
        assert!(chunks.last().unwrap().chars().count() <= 100);
    }

    #[test]
    fn test_chunk_text_counts_characters_not_bytes() {
        // Cyrillic letters are two bytes each; a byte-based split at 4
        // would land inside a code point
        let text = "абвгдежзик";

        let chunks = chunk_text(text, 4);

        assert_eq!(chunks, vec!["абвг", "дежз", "ик"]);
    }

    #[test]
    fn test_chunk_text_short_input_is_one_chunk() {
        assert_eq!(chunk_text("hello", 4000), vec!["hello"]);
    }

    #[test]
    fn test_chunk_text_empty_input() {
        assert!(chunk_text("", 4000).is_empty());
    }

    #[test]
    fn test_keyboard_chunks_names_into_rows() {
        let names: Vec<String> = ["Akita", "Beagle", "Collie", "Dalmatian", "Eurasier"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = row_texts(&breed_keyboard(&names, 3));

        assert_eq!(
            rows,
            vec![
                vec!["Akita", "Beagle", "Collie"],
                vec!["Dalmatian", "Eurasier"],
                vec![CANCEL_LABEL],
            ]
        );
    }

    #[test]
    fn test_keyboard_two_column_layout() {
        let names: Vec<String> = ["Mastiff", "Newfoundland", "Leonberger"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = row_texts(&breed_keyboard(&names, 2));

        assert_eq!(
            rows,
            vec![
                vec!["Mastiff", "Newfoundland"],
                vec!["Leonberger"],
                vec![CANCEL_LABEL],
            ]
        );
    }

    #[test]
    fn test_keyboard_always_ends_with_cancel_row() {
        let keyboard = breed_keyboard(&[], 3);
        let rows = row_texts(&keyboard);

        assert_eq!(rows, vec![vec![CANCEL_LABEL]]);
    }

    #[test]
    fn test_caption_with_all_fields() {
        let akita = Breed {
            id: 1,
            name: "Akita".to_string(),
            origin: Some("Japan".to_string()),
            life_span: Some("10 - 14 years".to_string()),
            temperament: Some("Docile, Alert".to_string()),
            weight: Some(BreedWeight {
                metric: Some("32 - 45".to_string()),
                imperial: None,
            }),
        };

        let caption = format_breed_caption(&akita);

        assert!(caption.contains("<b>Akita</b>"));
        assert!(caption.contains("<i>Происхождение:</i> Japan"));
        assert!(caption.contains("<i>Продолжительность жизни:</i> 10 - 14 years"));
        assert!(caption.contains("<i>Вес:</i> 32 - 45 кг"));
        assert!(caption.contains("<i>Темперамент:</i> Docile, Alert"));
    }

    #[test]
    fn test_caption_substitutes_placeholder_for_missing_fields() {
        let mystery = Breed {
            id: 2,
            name: "Mystery".to_string(),
            origin: None,
            life_span: None,
            temperament: None,
            weight: None,
        };

        let caption = format_breed_caption(&mystery);

        assert!(caption.contains("<b>Mystery</b>"));
        assert_eq!(caption.matches(UNKNOWN_FIELD).count(), 4);
    }

    #[test]
    fn test_caption_escapes_upstream_values() {
        let odd = Breed {
            id: 3,
            name: "Fox <Terrier>".to_string(),
            origin: None,
            life_span: None,
            temperament: Some("Loyal & Friendly".to_string()),
            weight: None,
        };

        let caption = format_breed_caption(&odd);

        assert!(caption.contains("<b>Fox &lt;Terrier&gt;</b>"));
        assert!(caption.contains("Loyal &amp; Friendly"));
    }
}
