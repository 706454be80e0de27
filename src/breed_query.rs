//! # Breed Query Module
//!
//! Pure lookup and filter functions over a freshly fetched catalog
//! snapshot. Nothing here performs I/O; every function is a linear scan
//! that preserves the upstream catalog order.

use log::debug;

use crate::catalog::Breed;

/// A parsed metric weight, in kilograms. A single upstream value is kept
/// as a degenerate one-point range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    pub min: f32,
    pub max: f32,
}

impl WeightRange {
    /// Display label in the form shown to users: `"32-45 кг"` for a true
    /// range, `"90 кг"` for a point value.
    pub fn label(&self) -> String {
        if self.min == self.max {
            format!("{} кг", self.min)
        } else {
            format!("{}-{} кг", self.min, self.max)
        }
    }
}

/// A breed name paired with its display weight label
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedBreed {
    pub name: String,
    pub weight_label: String,
}

/// Parse an upstream metric weight string.
///
/// Accepts a single number (`"3"`) or a hyphen-separated range with
/// optional surrounding whitespace (`"32 - 45"`). Returns `None` for
/// anything that does not parse; callers skip such records rather than
/// failing the whole operation.
pub fn parse_weight_range(raw: &str) -> Option<WeightRange> {
    if let Some((lo, hi)) = raw.split_once('-') {
        let min = lo.trim().parse::<f32>().ok()?;
        let max = hi.trim().parse::<f32>().ok()?;
        Some(WeightRange { min, max })
    } else {
        let value = raw.trim().parse::<f32>().ok()?;
        Some(WeightRange {
            min: value,
            max: value,
        })
    }
}

fn metric_weight(breed: &Breed) -> Option<WeightRange> {
    let raw = breed.weight.as_ref()?.metric.as_deref()?;
    let parsed = parse_weight_range(raw);
    if parsed.is_none() {
        debug!("Skipping breed '{}': unparsable weight '{}'", breed.name, raw);
    }
    parsed
}

/// Find a breed by exact, case-insensitive name. First match wins when
/// the catalog contains duplicate names.
pub fn find_by_exact_name<'a>(breeds: &'a [Breed], name: &str) -> Option<&'a Breed> {
    let wanted = name.to_lowercase();
    breeds.iter().find(|b| b.name.to_lowercase() == wanted)
}

/// Names of all breeds whose name starts with the given letter,
/// case-insensitively, in catalog order.
pub fn filter_by_prefix_letter(breeds: &[Breed], letter: char) -> Vec<String> {
    breeds
        .iter()
        .filter(|b| {
            b.name
                .chars()
                .next()
                .is_some_and(|first| first.to_uppercase().eq(letter.to_uppercase()))
        })
        .map(|b| b.name.clone())
        .collect()
}

/// Names of all breeds at or under the weight threshold.
///
/// For a range the lower bound is compared against the threshold, not the
/// upper one; see the tests for the consequences of that choice. Records
/// without a parsable metric weight are skipped.
pub fn filter_by_max_weight(breeds: &[Breed], threshold_kg: f32) -> Vec<String> {
    breeds
        .iter()
        .filter(|b| metric_weight(b).is_some_and(|w| w.min <= threshold_kg))
        .map(|b| b.name.clone())
        .collect()
}

/// Breeds whose weight range reaches the threshold, paired with their
/// display weight label. A range qualifies through its upper bound.
pub fn filter_by_min_weight(breeds: &[Breed], threshold_kg: f32) -> Vec<WeightedBreed> {
    breeds
        .iter()
        .filter_map(|b| {
            let weight = metric_weight(b)?;
            if weight.max >= threshold_kg {
                Some(WeightedBreed {
                    name: b.name.clone(),
                    weight_label: weight.label(),
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_value() {
        let range = parse_weight_range("3").unwrap();
        assert_eq!(range, WeightRange { min: 3.0, max: 3.0 });
    }

    #[test]
    fn test_parse_range_with_whitespace() {
        let range = parse_weight_range(" 32 - 45 ").unwrap();
        assert_eq!(range, WeightRange { min: 32.0, max: 45.0 });
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_weight_range("NaN?kg").is_none());
        assert!(parse_weight_range("heavy").is_none());
        assert!(parse_weight_range("3 - heavy").is_none());
        assert!(parse_weight_range("").is_none());
    }

    #[test]
    fn test_label_formats() {
        assert_eq!(WeightRange { min: 32.0, max: 45.0 }.label(), "32-45 кг");
        assert_eq!(WeightRange { min: 90.0, max: 90.0 }.label(), "90 кг");
        assert_eq!(WeightRange { min: 4.5, max: 6.0 }.label(), "4.5-6 кг");
    }
}
