//! Products and their kind classification.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What flavor of customization editor a product gets.
///
/// Decided once from the category at the catalog boundary; everything
/// downstream branches on this enum instead of re-inspecting category
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Drinks get the full editor: temperature, ice, base, toppings.
    #[default]
    Drink,
    /// Snacks get a single flavor-intensity dial.
    Snack,
}

impl ProductKind {
    /// Classify a menu category.
    ///
    /// Anything whose category mentions "snack" (any casing) is a
    /// snack; everything else is a drink.
    pub fn from_category(category: &str) -> Self {
        if category.to_lowercase().contains("snack") {
            ProductKind::Snack
        } else {
            ProductKind::Drink
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Drink => "drink",
            ProductKind::Snack => "snack",
        }
    }
}

/// A sellable menu item, as served by `GET /products/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Menu category (e.g., "Milk Tea", "Snacks").
    pub category: String,
    /// Base price in decimal dollars, before any size upcharge.
    pub base_price: f64,
    /// Whether the item is highlighted on the menu board.
    pub is_popular: bool,
    /// Optional menu-board blurb.
    pub description: Option<String>,
}

impl Product {
    /// Create a product for seeding and tests.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: f64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            base_price,
            is_popular: false,
            description: None,
        }
    }

    /// Mark the product as popular.
    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Attach a menu-board blurb.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Base price as cents-backed money.
    pub fn unit_price(&self) -> Money {
        Money::from_decimal(self.base_price)
    }

    /// Which editor this product gets.
    pub fn kind(&self) -> ProductKind {
        ProductKind::from_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_category() {
        assert_eq!(ProductKind::from_category("Milk Tea"), ProductKind::Drink);
        assert_eq!(ProductKind::from_category("Fruit Tea"), ProductKind::Drink);
        assert_eq!(ProductKind::from_category("Snacks"), ProductKind::Snack);
        assert_eq!(ProductKind::from_category("SNACK BOX"), ProductKind::Snack);
        assert_eq!(ProductKind::from_category(""), ProductKind::Drink);
    }

    #[test]
    fn test_product_kind_decided_from_category() {
        let tea = Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50);
        let chips = Product::new(5, "Sea Salt Chips", "Snacks", 3.25);

        assert_eq!(tea.kind(), ProductKind::Drink);
        assert_eq!(chips.kind(), ProductKind::Snack);
    }

    #[test]
    fn test_unit_price_in_cents() {
        let tea = Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50);
        assert_eq!(tea.unit_price(), Money::new(550));
    }

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{
            "id": 1,
            "name": "Brown Sugar Milk Tea",
            "category": "Milk Tea",
            "base_price": 5.5,
            "is_popular": true,
            "description": "Classic brown sugar boba drink"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Brown Sugar Milk Tea");
        assert!(product.is_popular);
        assert_eq!(product.kind(), ProductKind::Drink);
    }
}
