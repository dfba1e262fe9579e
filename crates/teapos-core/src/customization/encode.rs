//! Selection state to canonical customization string.

use crate::customization::state::{DrinkSelection, Temperature};
use crate::pricing::{format_delta_suffix, size_delta};

/// Build the canonical string for a drink selection.
///
/// Fragment order is fixed: temperature or ice first, then base, then
/// toppings in pick order, then the flavor shot. An all-default
/// selection encodes as "Standard". When a size is chosen the body is
/// prefixed with `"Size: {size}; "`, the size name carrying a
/// `" (+$x.xx)"` note when it costs extra.
pub fn encode_drink(selection: &DrinkSelection) -> String {
    let mut parts: Vec<String> = Vec::new();

    // Temperature first. Hot drinks carry no ice fragment at all.
    if selection.temperature == Temperature::Hot {
        parts.push("Hot".to_string());
    } else if !selection.ice_level.is_empty() && selection.ice_level != "Normal" {
        if selection.ice_level.to_lowercase().contains("ice") {
            // "No Ice" and "Extra Ice" already name ice
            parts.push(selection.ice_level.clone());
        } else {
            parts.push(format!("{} ice", selection.ice_level));
        }
    }

    // Sweetness is deliberately left out of the string.

    if !selection.base.is_empty() {
        parts.push(selection.base.clone());
    }
    parts.extend(selection.toppings.iter().cloned());
    if !selection.flavor_shot.is_empty() {
        parts.push(selection.flavor_shot.clone());
    }

    let body = if parts.is_empty() {
        "Standard".to_string()
    } else {
        parts.join(", ")
    };

    if selection.size.is_empty() {
        body
    } else {
        let delta = size_delta(&selection.size);
        format!(
            "Size: {}{}; {}",
            selection.size,
            format_delta_suffix(delta),
            body
        )
    }
}

/// Build the canonical string for a snack, e.g. "Flavor: 7/10".
pub fn encode_snack(intensity: u8) -> String {
    format!("Flavor: {}/10", intensity.min(10))
}
