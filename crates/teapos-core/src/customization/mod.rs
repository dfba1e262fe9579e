//! Customization string codec.
//!
//! A line's customization is carried everywhere as a single canonical
//! string (e.g., `"Size: Medium (+$0.50); 25% ice, Oat Milk, Boba"`).
//! This module owns both directions: building the string from editor
//! state and re-hydrating editor state from the string.

mod decode;
mod encode;
mod state;

pub use decode::{decode_drink, decode_snack, parse_flavor_intensity, TOPPING_KEYS};
pub use encode::{encode_drink, encode_snack};
pub use state::{DrinkSelection, Temperature, DEFAULT_INTENSITY};
