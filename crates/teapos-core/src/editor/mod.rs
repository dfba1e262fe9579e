//! Customization editor module.
//!
//! One modal editor session driving the codec: open a product, mutate
//! the selection, confirm into a canonical string.

mod session;

pub use session::{CatalogStatus, ConfirmedCustomization, EditorSession};
