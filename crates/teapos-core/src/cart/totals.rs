//! Subtotal, tax, and total for a cart.

use crate::cart::Cart;
use crate::money::Money;
use crate::pricing::{tax_on, PricingPolicy};
use serde::{Deserialize, Serialize};

/// The three figures printed at the bottom of every ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl CartTotals {
    /// Compute totals for a cart under a pricing policy.
    ///
    /// Tax is applied to the subtotal as a whole and rounded once, at
    /// the cent, rather than per line.
    pub fn compute(cart: &Cart, policy: &PricingPolicy) -> Self {
        let line_totals: Vec<Money> = cart.items().iter().map(|i| i.line_total(policy)).collect();
        let subtotal = Money::sum(line_totals.iter());
        let tax = tax_on(subtotal);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_reference_totals() {
        let mut cart = Cart::new();
        let a = Product::new(1, "Drink A", "Milk Tea", 5.00);
        let b = Product::new(2, "Drink B", "Fruit Tea", 3.50);

        cart.add(&a, "Standard");
        cart.add(&a, "Standard");
        cart.add(&b, "Standard");

        let totals = CartTotals::compute(&cart, &PricingPolicy::default());
        assert_eq!(totals.subtotal, Money::new(1350));
        assert_eq!(totals.tax, Money::new(111)); // 13.50 * 0.0825 = 1.11375
        assert_eq!(totals.total, Money::new(1461));
        assert_eq!(totals.total.display(), "$14.61");
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = CartTotals::compute(&Cart::new(), &PricingPolicy::default());
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_totals_with_size_delta_charged() {
        let mut cart = Cart::new();
        let tea = Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50);
        cart.add(&tea, "Size: Medium (+$0.50); Standard");

        let legacy = CartTotals::compute(&cart, &PricingPolicy::default());
        assert_eq!(legacy.subtotal, Money::new(550));

        let billed = CartTotals::compute(
            &cart,
            &PricingPolicy {
                charge_size_delta: true,
            },
        );
        assert_eq!(billed.subtotal, Money::new(600));
        assert_eq!(billed.tax, Money::new(50)); // 6.00 * 0.0825 = 0.495
        assert_eq!(billed.total, Money::new(650));
    }
}
