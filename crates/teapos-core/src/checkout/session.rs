//! Checkout session: one cart from first ring-up to payment.

use crate::cart::{Cart, CartTotals};
use crate::checkout::{OrderDraft, OrderReceipt, PaymentMethod};
use crate::error::CartError;
use crate::ids::EmployeeId;
use crate::pricing::PricingPolicy;
use serde::{Deserialize, Serialize};

/// A register session owning the order in progress.
///
/// The cart survives failed submissions; only `complete` (a backend
/// acknowledgement) or an explicit `reset` empties it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutSession {
    pub cart: Cart,
    pub policy: PricingPolicy,
    /// Staffed-register attribution; kiosks leave it unset.
    pub cashier: Option<EmployeeId>,
    /// Ticket number of the last completed order, e.g. "ORD-17".
    pub last_order_number: Option<String>,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PricingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Attribute sales in this session to a cashier.
    pub fn with_cashier(mut self, cashier: EmployeeId) -> Self {
        self.cashier = Some(cashier);
        self
    }

    /// Totals for the order in progress.
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart, &self.policy)
    }

    /// Build the submission payload without touching the cart, so a
    /// failed POST leaves the order intact for retry.
    pub fn draft_order(&self, method: PaymentMethod) -> Result<OrderDraft, CartError> {
        OrderDraft::from_cart(&self.cart, &self.policy, method, self.cashier)
    }

    /// Record a successful submission: remember the ticket number and
    /// start the next order with an empty cart.
    pub fn complete(&mut self, receipt: &OrderReceipt) {
        self.last_order_number = Some(receipt.order_number());
        self.cart.clear();
    }

    /// Abandon the order in progress.
    pub fn reset(&mut self) {
        self.cart.clear();
    }
}
