//! Register error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    /// Nothing to submit.
    #[error("Cart is empty")]
    EmptyCart,
}

/// Errors that can occur while driving the customization editor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// No product is open for editing.
    #[error("No product is open for editing")]
    NotOpen,

    /// The operation does not apply to the open product kind.
    #[error("Operation not valid for a {0} editor")]
    WrongKind(&'static str),

    /// Drink customizations cannot be confirmed before options load.
    #[error("Customization options are not ready")]
    CatalogNotReady,
}
