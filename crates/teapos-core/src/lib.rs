//! Register domain logic for the TeaPOS front counter.
//!
//! This crate is the headless core of the point of sale:
//!
//! - **Catalog**: Products, kinds, customization options
//! - **Customization**: The canonical string codec and editor session
//! - **Cart**: Order-in-progress aggregation and totals
//! - **Checkout**: Submission payloads and the register session
//!
//! # Example
//!
//! ```rust,ignore
//! use teapos_core::prelude::*;
//!
//! let tea = Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50);
//!
//! // Customize through the editor
//! let mut editor = EditorSession::new();
//! let token = editor.open(&tea, None, None);
//! editor.apply_catalog(token, CatalogStatus::Ready(CustomizationOptions::standard()));
//! editor.set_base("Oat Milk")?;
//! editor.toggle_topping("Boba")?;
//! let confirmed = editor.confirm()?;
//!
//! // Ring it up and total the ticket
//! let mut session = CheckoutSession::new();
//! session.cart.add(&tea, confirmed.customizations);
//! println!("Total: {}", session.totals().total);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customization;
pub mod editor;

pub use error::{CartError, EditorError};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, EditorError};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::pricing::{size_delta, tax_on, PricingPolicy, TAX_RATE};

    // Catalog
    pub use crate::catalog::{CustomizationOptions, OptionEntry, Product, ProductKind};

    // Customization
    pub use crate::customization::{
        decode_drink, decode_snack, encode_drink, encode_snack, DrinkSelection, Temperature,
    };

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem};

    // Checkout
    pub use crate::checkout::{
        CheckoutSession, OrderDraft, OrderItemDraft, OrderReceipt, PaymentDraft, PaymentMethod,
    };

    // Editor
    pub use crate::editor::{CatalogStatus, ConfirmedCustomization, EditorSession};
}
