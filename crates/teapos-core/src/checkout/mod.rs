//! Checkout module.
//!
//! Contains order submission payloads and the session that carries a
//! cart from first ring-up to payment.

mod order;
mod session;

pub use order::{OrderDraft, OrderItemDraft, OrderReceipt, PaymentDraft, PaymentMethod};
pub use session::CheckoutSession;
