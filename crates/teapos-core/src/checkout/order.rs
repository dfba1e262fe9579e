//! Order submission types.

use crate::cart::{Cart, CartTotals};
use crate::error::CartError;
use crate::ids::{EmployeeId, OrderId, ProductId};
use crate::pricing::PricingPolicy;
use serde::{Deserialize, Serialize};

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    /// Kiosk default.
    #[default]
    Card,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "other" => Some(PaymentMethod::Other),
            _ => None,
        }
    }
}

/// One line of the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemDraft {
    pub product_id: ProductId,
    pub quantity: i64,
    pub customizations: String,
    /// Line price in decimal dollars, as the backend expects.
    pub line_price: f64,
}

/// Payment block of the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDraft {
    pub method: PaymentMethod,
    /// Charged amount in decimal dollars.
    pub amount: f64,
}

/// Everything `POST /orders/` wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Present for staffed-register sales, absent for kiosk sales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashier_id: Option<EmployeeId>,
    pub items: Vec<OrderItemDraft>,
    pub payment: PaymentDraft,
}

impl OrderDraft {
    /// Build the payload from a cart.
    ///
    /// Money leaves the cents domain here: line prices and the payment
    /// amount go out as decimal dollars. The amount is the cart total,
    /// subtotal plus tax, under the given policy.
    pub fn from_cart(
        cart: &Cart,
        policy: &PricingPolicy,
        method: PaymentMethod,
        cashier_id: Option<EmployeeId>,
    ) -> Result<Self, CartError> {
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let totals = CartTotals::compute(cart, policy);
        let items = cart
            .items()
            .iter()
            .map(|item| OrderItemDraft {
                product_id: item.product.id,
                quantity: item.quantity,
                customizations: item.customizations.clone(),
                line_price: item.line_total(policy).to_decimal(),
            })
            .collect();

        Ok(Self {
            cashier_id,
            items,
            payment: PaymentDraft {
                method,
                amount: totals.total.to_decimal(),
            },
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Backend acknowledgement of a created order.
///
/// The server echoes its own totals so the register can show
/// authoritative figures next to the locally computed ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
}

impl OrderReceipt {
    /// Printable ticket number, e.g. "ORD-17".
    pub fn order_number(&self) -> String {
        format!("ORD-{}", self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use serde_json::json;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let tea = Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50);
        cart.add(&tea, "Size: Medium (+$0.50); Boba");
        cart.add(&tea, "Size: Medium (+$0.50); Boba");
        cart
    }

    #[test]
    fn test_payment_method_wire_casing() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"cash\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "\"card\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!(PaymentMethod::from_str("CASH"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_str("card"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::from_str("check"), None);
    }

    #[test]
    fn test_from_cart_builds_wire_payload() {
        let draft = OrderDraft::from_cart(
            &sample_cart(),
            &PricingPolicy::default(),
            PaymentMethod::Card,
            None,
        )
        .unwrap();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{
                    "product_id": 1,
                    "quantity": 2,
                    "customizations": "Size: Medium (+$0.50); Boba",
                    "line_price": 11.0
                }],
                "payment": {
                    "method": "card",
                    // 11.00 + round(11.00 * 0.0825) = 11.00 + 0.91
                    "amount": 11.91
                }
            })
        );
    }

    #[test]
    fn test_cashier_id_present_for_staffed_sales() {
        let draft = OrderDraft::from_cart(
            &sample_cart(),
            &PricingPolicy::default(),
            PaymentMethod::Cash,
            Some(EmployeeId::new(2)),
        )
        .unwrap();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["cashier_id"], json!(2));
    }

    #[test]
    fn test_empty_cart_cannot_submit() {
        let result = OrderDraft::from_cart(
            &Cart::new(),
            &PricingPolicy::default(),
            PaymentMethod::Card,
            None,
        );
        assert_eq!(result.unwrap_err(), CartError::EmptyCart);
    }

    #[test]
    fn test_line_price_respects_policy() {
        let draft = OrderDraft::from_cart(
            &sample_cart(),
            &PricingPolicy {
                charge_size_delta: true,
            },
            PaymentMethod::Card,
            None,
        )
        .unwrap();

        // (5.50 + 0.50) * 2
        assert_eq!(draft.items[0].line_price, 12.0);
    }

    #[test]
    fn test_receipt_order_number() {
        let receipt = OrderReceipt {
            order_id: OrderId::new(17),
            subtotal: 5.00,
            tax: 0.41,
            total: 5.41,
        };
        assert_eq!(receipt.order_number(), "ORD-17");
    }

    #[test]
    fn test_receipt_wire_shape() {
        let receipt: OrderReceipt = serde_json::from_str(
            r#"{"order_id": 42, "subtotal": 13.5, "tax": 1.11, "total": 14.61}"#,
        )
        .unwrap();
        assert_eq!(receipt.order_id, OrderId::new(42));
        assert_eq!(receipt.total, 14.61);

        // Older deployments only echo the id
        let sparse: OrderReceipt = serde_json::from_str(r#"{"order_id": 7}"#).unwrap();
        assert_eq!(sparse.order_id, OrderId::new(7));
        assert_eq!(sparse.total, 0.0);
    }
}
