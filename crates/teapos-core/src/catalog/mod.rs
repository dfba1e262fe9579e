//! Menu catalog module.
//!
//! Contains the product wire types served by the shop backend and the
//! customization option lists used by the editor.

mod options;
mod product;

pub use options::{CustomizationOptions, OptionEntry};
pub use product::{Product, ProductKind};
