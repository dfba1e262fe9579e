//! Built-in sample menu.
//!
//! Mirrors the shop's seed data so the demo runs without a backend.

use teapos_core::catalog::Product;

/// The demo product list.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50)
            .popular()
            .with_description("Classic brown sugar boba drink"),
        Product::new(2, "Strawberry Fruit Tea", "Fruit Tea", 5.25)
            .with_description("Strawberry + jasmine green tea"),
        Product::new(3, "Taro Milk Tea", "Milk Tea", 5.75)
            .with_description("Creamy taro over black tea"),
        Product::new(4, "Matcha Latte", "Milk Tea", 5.95)
            .with_description("Stone-ground matcha with milk"),
        Product::new(5, "Mochi Bites", "Snacks", 3.50)
            .with_description("Chewy rice cakes, six per box"),
        Product::new(6, "Sea Salt Chips", "Snacks", 3.25)
            .with_description("Kettle-cooked and lightly salted"),
    ]
}

/// Group products by category, preserving first-seen order.
pub fn grouped(products: &[Product]) -> Vec<(String, Vec<&Product>)> {
    let mut groups: Vec<(String, Vec<&Product>)> = Vec::new();

    for product in products {
        match groups.iter_mut().find(|(name, _)| *name == product.category) {
            Some((_, members)) => members.push(product),
            None => groups.push((product.category.clone(), vec![product])),
        }
    }

    groups
}
