//! End-to-end register flows: customize, ring up, re-edit, total,
//! submit. Everything goes through the public API the way a register
//! front end would drive it.

use teapos_core::prelude::*;

fn milk_tea() -> Product {
    Product::new(1, "Brown Sugar Milk Tea", "Milk Tea", 5.50).popular()
}

fn chips() -> Product {
    Product::new(5, "Sea Salt Chips", "Snacks", 3.25)
}

fn ready_catalog() -> CatalogStatus {
    CatalogStatus::Ready(CustomizationOptions::standard())
}

#[test]
fn test_customize_and_ring_up_a_drink() {
    let tea = milk_tea();
    let mut editor = EditorSession::new();
    let mut session = CheckoutSession::new();

    let token = editor.open(&tea, None, None);
    editor.apply_catalog(token, ready_catalog());
    editor.set_temperature(Temperature::Hot).unwrap();
    editor.set_base("Oat Milk").unwrap();
    editor.toggle_topping("Boba").unwrap();
    editor.set_flavor_shot("Vanilla").unwrap();

    let confirmed = editor.confirm().unwrap();
    assert_eq!(
        confirmed.customizations,
        "Size: Small; Hot, Oat Milk, Boba, Vanilla"
    );

    session.cart.add(&tea, confirmed.customizations.clone());
    session.cart.add(&tea, confirmed.customizations);
    assert_eq!(session.cart.line_count(), 1);
    assert_eq!(session.cart.item_count(), 2);
}

#[test]
fn test_reediting_a_line_loses_only_the_flavor_shot() {
    let tea = milk_tea();
    let mut editor = EditorSession::new();

    let token = editor.open(&tea, None, None);
    editor.apply_catalog(token, ready_catalog());
    editor.set_temperature(Temperature::Hot).unwrap();
    editor.set_base("Oat Milk").unwrap();
    editor.toggle_topping("Boba").unwrap();
    editor.set_flavor_shot("Vanilla").unwrap();
    let first = editor.confirm().unwrap();

    // Reopen the line off its string, as editing a ticket line does
    let token = editor.open(&tea, Some(&first.customizations), None);
    editor.apply_catalog(token, ready_catalog());

    let selection = editor.selection().unwrap();
    assert_eq!(selection.temperature, Temperature::Hot);
    assert_eq!(selection.ice_level, "No Ice");
    assert_eq!(selection.base, "Oat Milk");
    assert_eq!(selection.toppings, vec!["Boba"]);
    assert!(selection.flavor_shot.is_empty());
    assert_eq!(selection.size, "Small");

    // Confirm unchanged: the shot is gone from the new string
    let second = editor.confirm().unwrap();
    assert_eq!(second.customizations, "Size: Small; Hot, Oat Milk, Boba");
}

#[test]
fn test_replacing_an_edited_line_keeps_other_lines() {
    let tea = milk_tea();
    let snack = chips();
    let mut cart = Cart::new();

    cart.add(&tea, "Size: Small; Standard");
    cart.add(&snack, "Flavor: 7/10");

    // The register swaps a re-edited line by remove + add
    assert!(cart.remove(tea.id, "Size: Small; Standard"));
    cart.add(&tea, "Size: Large (+$2.00); Standard");

    assert_eq!(cart.line_count(), 2);
    let strings: Vec<&str> = cart
        .items()
        .iter()
        .map(|i| i.customizations.as_str())
        .collect();
    assert_eq!(strings, vec!["Flavor: 7/10", "Size: Large (+$2.00); Standard"]);
}

#[test]
fn test_snack_flow_needs_no_catalog() {
    let snack = chips();
    let mut editor = EditorSession::new();

    editor.open(&snack, None, None);
    editor.set_intensity(9).unwrap();

    // Catalog never arrived; snacks confirm anyway
    let confirmed = editor.confirm().unwrap();
    assert_eq!(confirmed.customizations, "Flavor: 9/10");
    assert_eq!(confirmed.size, None);
}

#[test]
fn test_reference_ticket_totals() {
    let a = Product::new(10, "House Special", "Milk Tea", 5.00);
    let b = Product::new(11, "Seasonal Tea", "Fruit Tea", 3.50);
    let mut session = CheckoutSession::new();

    session.cart.add(&a, "Standard");
    session.cart.add(&a, "Standard");
    session.cart.add(&b, "Standard");

    let totals = session.totals();
    assert_eq!(totals.subtotal.display(), "$13.50");
    assert_eq!(totals.tax.display(), "$1.11");
    assert_eq!(totals.total.display(), "$14.61");
}

#[test]
fn test_submission_round_trip() {
    let tea = milk_tea();
    let mut session = CheckoutSession::new().with_cashier(EmployeeId::new(2));
    session.cart.add(&tea, "Standard");

    let draft = session.draft_order(PaymentMethod::Cash).unwrap();
    assert_eq!(draft.cashier_id, Some(EmployeeId::new(2)));
    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.items[0].line_price, 5.50);

    // Wire shape survives a serialize/deserialize cycle
    let json = serde_json::to_string(&draft).unwrap();
    let back: OrderDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);

    // Backend acknowledges; the next ticket starts clean
    session.complete(&OrderReceipt {
        order_id: OrderId::new(108),
        subtotal: 5.50,
        tax: 0.45,
        total: 5.95,
    });
    assert!(session.cart.is_empty());
    assert_eq!(session.last_order_number.as_deref(), Some("ORD-108"));
}

#[test]
fn test_two_registers_one_slow_catalog() {
    // An operator opens a drink, gives up waiting, opens another
    // product. The first fetch landing late must change nothing.
    let tea = milk_tea();
    let mut editor = EditorSession::new();

    let slow = editor.open(&tea, None, None);
    let current = editor.open(&tea, Some("Size: Large (+$2.00); No Ice"), None);

    editor.apply_catalog(slow, ready_catalog());
    assert!(!editor.catalog().is_ready());

    editor.apply_catalog(current, ready_catalog());
    // The decoded Large survives; the catalog default fills nothing
    assert_eq!(editor.selection().unwrap().size, "Large");

    let confirmed = editor.confirm().unwrap();
    assert_eq!(confirmed.customizations, "Size: Large (+$2.00); No Ice");
}
