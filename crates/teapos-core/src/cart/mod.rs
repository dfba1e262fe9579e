//! Order-in-progress module.
//!
//! Contains the cart, its line items, and totals math.

mod cart;
mod totals;

pub use cart::{Cart, LineItem};
pub use totals::CartTotals;
