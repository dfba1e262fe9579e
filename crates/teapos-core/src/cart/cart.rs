//! Cart and line item types.

use crate::catalog::{Product, ProductKind};
use crate::customization::{decode_drink, decode_snack, encode_drink, encode_snack};
use crate::ids::ProductId;
use crate::money::Money;
use crate::pricing::{size_delta, PricingPolicy};
use serde::{Deserialize, Serialize};

/// A line on the ticket: one product plus one exact customization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product being sold (denormalized for display and pricing).
    pub product: Product,
    /// Quantity.
    pub quantity: i64,
    /// Canonical customization string, byte-for-byte as confirmed.
    pub customizations: String,
}

impl LineItem {
    fn new(product: Product, customizations: String) -> Self {
        Self {
            product,
            quantity: 1,
            customizations,
        }
    }

    /// Price for one unit under the given policy.
    ///
    /// With `charge_size_delta` on, the size named in the string's
    /// prefix is billed on top of the base price.
    pub fn unit_price(&self, policy: &PricingPolicy) -> Money {
        let base = self.product.unit_price();
        if policy.charge_size_delta {
            base + size_delta(&decode_drink(&self.customizations).size)
        } else {
            base
        }
    }

    /// Price for the whole line (unit price times quantity).
    pub fn line_total(&self, policy: &PricingPolicy) -> Money {
        self.unit_price(policy) * self.quantity
    }

    /// Normalized identity for diagnostics: the customization string
    /// round-tripped through the codec, keyed by product.
    ///
    /// Two lines the register keeps separate (say "Standard" and
    /// "Standard ") collapse to one structural key. Cart identity
    /// itself stays byte-exact; this is the structural view of it.
    pub fn structural_key(&self) -> String {
        let normalized = match self.product.kind() {
            ProductKind::Drink => encode_drink(&decode_drink(&self.customizations)),
            ProductKind::Snack => encode_snack(decode_snack(&self.customizations)),
        };
        format!("{}::{}", self.product.id, normalized)
    }
}

/// An order in progress.
///
/// Lines keep their insertion order; identity is the exact
/// (product, customization string) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order they were first rung up.
    pub items: Vec<LineItem>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Ring up one unit of a product with the given customization.
    ///
    /// A line already holding the identical (product, string) pair is
    /// bumped by one; anything else starts a new line at the end. The
    /// string comparison is byte-exact on purpose: a stray space makes
    /// a different line.
    pub fn add(&mut self, product: &Product, customizations: impl Into<String>) {
        let customizations = customizations.into();

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product.id && i.customizations == customizations)
        {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem::new(product.clone(), customizations));
        }
        self.updated_at = current_timestamp();
    }

    /// Set a line's quantity.
    ///
    /// Zero or negative removes the line. Returns whether a line was
    /// touched.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        customizations: &str,
        quantity: i64,
    ) -> bool {
        if quantity <= 0 {
            return self.remove(product_id, customizations);
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product_id && i.customizations == customizations)
        {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Remove a line.
    pub fn remove(&mut self, product_id: ProductId, customizations: &str) -> bool {
        let len_before = self.items.len();
        self.items
            .retain(|i| !(i.product.id == product_id && i.customizations == customizations));
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
