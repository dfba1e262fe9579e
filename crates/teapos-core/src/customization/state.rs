//! Editor working state for a drink.

use serde::{Deserialize, Serialize};

/// Snack flavor intensity when nothing says otherwise (middle of 0-10).
pub const DEFAULT_INTENSITY: u8 = 5;

/// Served temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Temperature {
    #[default]
    Iced,
    Hot,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Iced => "Iced",
            Temperature::Hot => "Hot",
        }
    }
}

/// Everything the drink editor tracks for one product.
///
/// `sweetness` is tracked and shown but never written into the encoded
/// string, so it does not survive a close/reopen cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSelection {
    pub temperature: Temperature,
    /// Ice level label, "Normal" meaning the default pour.
    pub ice_level: String,
    /// Sweetness label (display only, not encoded).
    pub sweetness: String,
    /// Milk or tea base label, empty when unset.
    pub base: String,
    /// Topping labels in the order they were picked.
    pub toppings: Vec<String>,
    /// Flavor shot label, empty when none.
    pub flavor_shot: String,
    /// Size name, empty when not chosen yet.
    pub size: String,
}

impl Default for DrinkSelection {
    fn default() -> Self {
        Self {
            temperature: Temperature::Iced,
            ice_level: "Normal".to_string(),
            sweetness: "100%".to_string(),
            base: String::new(),
            toppings: Vec::new(),
            flavor_shot: String::new(),
            size: String::new(),
        }
    }
}

impl DrinkSelection {
    /// Add the topping if absent, remove it if present. Matching is
    /// exact on the label; pick order is preserved.
    pub fn toggle_topping(&mut self, label: &str) {
        if let Some(idx) = self.toppings.iter().position(|t| t == label) {
            self.toppings.remove(idx);
        } else {
            self.toppings.push(label.to_string());
        }
    }
}
