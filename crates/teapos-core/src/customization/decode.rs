//! Canonical customization string back to selection state.
//!
//! Decoding is lossy on purpose: sweetness is never written by the
//! encoder and flavor shots carry no recognizable marker, so neither
//! survives a close/reopen cycle.

use crate::customization::state::{DrinkSelection, Temperature, DEFAULT_INTENSITY};
use regex::Regex;

/// Machine keys whose presence in a fragment marks it as a topping.
pub const TOPPING_KEYS: [&str; 4] = ["boba", "lychee_jelly", "pudding", "grass_jelly"];

/// Re-hydrate a drink selection from its canonical string.
///
/// Accepts both the `"Size: Medium (+$0.50); ..."` format and plain
/// comma-separated strings. Fragments that match no rule are dropped.
pub fn decode_drink(customizations: &str) -> DrinkSelection {
    let mut selection = DrinkSelection::default();

    // Patterns for the size prefix and the literal word "ice"
    let size_re = Regex::new(r"(?i)Size:\s*(Small|Medium|Large)").unwrap();
    let prefix_re =
        Regex::new(r"(?i)Size:\s*(Small|Medium|Large)(\s*\(\+\$[0-9]+(\.[0-9]+)?\)\s*)?;\s*")
            .unwrap();
    let ice_re = Regex::new(r"(?i)ice").unwrap();

    if let Some(caps) = size_re.captures(customizations) {
        selection.size = title_case(&caps[1]);
    }

    // Strip the size prefix before reading body fragments
    let cleaned = prefix_re.replace(customizations, "");

    for part in cleaned.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let lower = part.to_lowercase();

        if lower == "hot" {
            selection.temperature = Temperature::Hot;
            selection.ice_level = "No Ice".to_string();
            continue;
        }

        if lower.contains("extra ice") {
            selection.ice_level = "Extra Ice".to_string();
            continue;
        }
        if lower == "no ice" {
            selection.ice_level = "No Ice".to_string();
            continue;
        }
        if lower.contains("ice") {
            // "50% ice", etc.
            let level = ice_re.replace(part, "").trim().to_string();
            selection.ice_level = if level.is_empty() {
                "Normal".to_string()
            } else {
                level
            };
            continue;
        }

        if lower.contains("milk") || lower.contains("tea base") {
            selection.base = part.to_string();
            continue;
        }

        // Toppings are recognized by their machine keys, which means
        // label-only fragments like "Lychee Jelly" slip through and
        // get dropped with everything else unrecognized.
        if TOPPING_KEYS.iter().any(|key| lower.contains(key)) {
            if !selection.toppings.iter().any(|t| t == part) {
                selection.toppings.push(part.to_string());
            }
            continue;
        }

        // Flavor shots land here: they are plain labels with no
        // marker, so they stay in the string for display only.
    }

    selection
}

/// Pull a flavor intensity out of a snack string.
///
/// Accepts "Flavor: 7/10", "Flavor 7/10", "Spice/Sweetness: 9/10" and
/// the like; the first `n/10` wins, clamped to 0..=10.
pub fn parse_flavor_intensity(customizations: &str) -> Option<u8> {
    let flavor_re = Regex::new(r"(\d{1,2})\s*/\s*10").unwrap();
    let caps = flavor_re.captures(customizations)?;
    let n: u8 = caps[1].parse().ok()?;
    Some(n.min(10))
}

/// Flavor intensity of a snack string, falling back to the default.
pub fn decode_snack(customizations: &str) -> u8 {
    parse_flavor_intensity(customizations).unwrap_or(DEFAULT_INTENSITY)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_decodes_to_defaults() {
        assert_eq!(decode_drink("Standard"), DrinkSelection::default());
        assert_eq!(decode_drink(""), DrinkSelection::default());
    }

    #[test]
    fn test_size_prefix_extracted_and_stripped() {
        let selection = decode_drink("Size: Medium (+$0.50); Standard");
        assert_eq!(selection.size, "Medium");
        assert_eq!(selection.ice_level, "Normal");
        assert!(selection.toppings.is_empty());
    }

    #[test]
    fn test_size_without_delta_note() {
        let selection = decode_drink("Size: Small; 25% ice");
        assert_eq!(selection.size, "Small");
        assert_eq!(selection.ice_level, "25%");
    }

    #[test]
    fn test_size_match_is_case_insensitive_and_normalized() {
        let selection = decode_drink("size: LARGE; Standard");
        assert_eq!(selection.size, "Large");
    }

    #[test]
    fn test_hot_sets_temperature_and_kills_ice() {
        let selection = decode_drink("Hot, Oat Milk, Boba");
        assert_eq!(selection.temperature, Temperature::Hot);
        assert_eq!(selection.ice_level, "No Ice");
        assert_eq!(selection.base, "Oat Milk");
        assert_eq!(selection.toppings, vec!["Boba"]);
    }

    #[test]
    fn test_ice_levels() {
        assert_eq!(decode_drink("Extra Ice").ice_level, "Extra Ice");
        assert_eq!(decode_drink("No Ice").ice_level, "No Ice");
        assert_eq!(decode_drink("25% ice").ice_level, "25%");
        assert_eq!(decode_drink("75% ice").ice_level, "75%");
        // Nothing left once the word is removed
        assert_eq!(decode_drink("ice").ice_level, "Normal");
    }

    #[test]
    fn test_base_recognition() {
        assert_eq!(decode_drink("Whole Milk").base, "Whole Milk");
        assert_eq!(decode_drink("Tea Base").base, "Tea Base");
        assert_eq!(decode_drink("Almond Milk, Boba").base, "Almond Milk");
    }

    #[test]
    fn test_topping_dedup_is_exact() {
        let selection = decode_drink("Boba, Boba, boba");
        assert_eq!(selection.toppings, vec!["Boba", "boba"]);
    }

    #[test]
    fn test_jelly_labels_do_not_survive_decode() {
        // Encoded labels are "Lychee Jelly"/"Grass Jelly" but the keys
        // carry underscores, so contains() never fires for them.
        let selection = decode_drink("Lychee Jelly, Grass Jelly, Egg Pudding, Boba");
        assert_eq!(selection.toppings, vec!["Egg Pudding", "Boba"]);
    }

    #[test]
    fn test_flavor_shot_is_not_recovered() {
        let selection = decode_drink("Oat Milk, Vanilla");
        assert_eq!(selection.base, "Oat Milk");
        assert!(selection.flavor_shot.is_empty());
        assert!(selection.toppings.is_empty());
    }

    #[test]
    fn test_reopen_loses_shot_keeps_rest() {
        use crate::customization::encode::encode_drink;

        let mut selection = DrinkSelection::default();
        selection.temperature = Temperature::Hot;
        selection.base = "Oat Milk".to_string();
        selection.toppings = vec!["Boba".to_string()];
        selection.flavor_shot = "Vanilla".to_string();
        selection.size = "Medium".to_string();

        let encoded = encode_drink(&selection);
        assert_eq!(encoded, "Size: Medium (+$0.50); Hot, Oat Milk, Boba, Vanilla");

        let reopened = decode_drink(&encoded);
        assert_eq!(reopened.size, "Medium");
        assert_eq!(reopened.temperature, Temperature::Hot);
        assert_eq!(reopened.ice_level, "No Ice");
        assert_eq!(reopened.base, "Oat Milk");
        assert_eq!(reopened.toppings, vec!["Boba"]);
        assert!(reopened.flavor_shot.is_empty());
    }

    #[test]
    fn test_parse_flavor_intensity() {
        assert_eq!(parse_flavor_intensity("Flavor: 7/10"), Some(7));
        assert_eq!(parse_flavor_intensity("Flavor 9/10"), Some(9));
        assert_eq!(parse_flavor_intensity("Spice/Sweetness: 3 / 10"), Some(3));
        assert_eq!(parse_flavor_intensity("Flavor: 15/10"), Some(10));
        assert_eq!(parse_flavor_intensity("Standard"), None);
    }

    #[test]
    fn test_decode_snack_defaults_to_middle() {
        assert_eq!(decode_snack("Flavor: 2/10"), 2);
        assert_eq!(decode_snack("whatever"), DEFAULT_INTENSITY);
    }

    #[test]
    fn test_snack_round_trip() {
        use crate::customization::encode::encode_snack;
        for intensity in 0..=10u8 {
            assert_eq!(decode_snack(&encode_snack(intensity)), intensity);
        }
    }
}
