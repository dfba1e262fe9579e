//! Customization option lists, as served by `GET /meta/options`.

use serde::{Deserialize, Serialize};

/// A keyed option with a human label (toppings, flavor shots).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionEntry {
    /// Stable machine key, e.g. "lychee_jelly".
    pub key: String,
    /// Display label, e.g. "Lychee Jelly".
    pub label: String,
}

impl OptionEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Everything the drink editor offers, straight off the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomizationOptions {
    pub ice_levels: Vec<String>,
    pub sweetness_levels: Vec<String>,
    pub sizes: Vec<String>,
    pub bases: Vec<String>,
    pub toppings: Vec<OptionEntry>,
    pub flavor_shots: Vec<OptionEntry>,
}

impl CustomizationOptions {
    /// The shop's standard option set, used as a fallback when the
    /// backend is unreachable. Mirrors the backend defaults.
    pub fn standard() -> Self {
        Self {
            ice_levels: string_vec(&["No Ice", "25%", "50%", "75%", "Normal"]),
            sweetness_levels: string_vec(&["0%", "25%", "50%", "75%", "100%"]),
            sizes: string_vec(&["Small", "Medium", "Large"]),
            bases: string_vec(&[
                "Whole Milk",
                "Oat Milk",
                "Almond Milk",
                "Soy Milk",
                "Tea Base",
            ]),
            toppings: vec![
                OptionEntry::new("boba", "Boba"),
                OptionEntry::new("lychee_jelly", "Lychee Jelly"),
                OptionEntry::new("pudding", "Egg Pudding"),
                OptionEntry::new("grass_jelly", "Grass Jelly"),
            ],
            flavor_shots: vec![
                OptionEntry::new("vanilla", "Vanilla"),
                OptionEntry::new("caramel", "Caramel"),
                OptionEntry::new("hazelnut", "Hazelnut"),
            ],
        }
    }

    /// First listed size, used as the editor's default.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_options_shape() {
        let options = CustomizationOptions::standard();
        assert_eq!(options.ice_levels.len(), 5);
        assert_eq!(options.sweetness_levels.len(), 5);
        assert_eq!(options.sizes, vec!["Small", "Medium", "Large"]);
        assert_eq!(options.bases.len(), 5);
        assert_eq!(options.toppings.len(), 4);
        assert_eq!(options.flavor_shots.len(), 3);
    }

    #[test]
    fn test_default_size_is_first_listed() {
        let options = CustomizationOptions::standard();
        assert_eq!(options.default_size(), Some("Small"));
    }

    #[test]
    fn test_options_wire_shape() {
        let json = r#"{
            "ice_levels": ["No Ice", "25%", "50%", "75%", "Normal"],
            "sweetness_levels": ["0%", "25%", "50%", "75%", "100%"],
            "sizes": ["Small", "Medium", "Large"],
            "bases": ["Whole Milk", "Oat Milk", "Almond Milk", "Soy Milk", "Tea Base"],
            "toppings": [{"key": "boba", "label": "Boba"}],
            "flavor_shots": [{"key": "vanilla", "label": "Vanilla"}]
        }"#;

        let options: CustomizationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.toppings[0], OptionEntry::new("boba", "Boba"));
        assert_eq!(options.default_size(), Some("Small"));
    }
}
