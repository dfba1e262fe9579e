//! Register session command.

use anyhow::{anyhow, bail, Result};
use chrono::Local;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use teapos_client::{PosApi, StaticTransport};
use teapos_core::cart::CartTotals;
use teapos_core::catalog::{CustomizationOptions, Product, ProductKind};
use teapos_core::checkout::{CheckoutSession, OrderDraft, OrderReceipt, PaymentMethod};
use teapos_core::customization::Temperature;
use teapos_core::editor::{CatalogStatus, EditorSession};
use teapos_core::ids::EmployeeId;
use teapos_core::pricing::{format_delta_suffix, size_delta, PricingPolicy};
use teapos_store::Store;

use super::SellArgs;
use crate::context::Context;
use crate::menu::sample_products;

/// Order id the simulated backend hands out.
const DEMO_ORDER_ID: i64 = 241;

/// Run the sell command.
pub async fn run(args: SellArgs, ctx: &Context) -> Result<()> {
    let policy = PricingPolicy {
        charge_size_delta: ctx.config.charge_size_delta,
    };
    let mut session = CheckoutSession::with_policy(policy);

    match args.cashier.or(ctx.config.cashier_id) {
        Some(id) => session = session.with_cashier(EmployeeId::new(id)),
        None => ctx.output.warn("No cashier attributed to this sale"),
    }

    // Catalog store: editors receive their options through it, the
    // way the register surfaces receive them from the backend.
    let catalog: Store<CatalogStatus> = Store::new(CatalogStatus::Loading);
    let log = ctx.output.clone();
    catalog.subscribe(move |status| {
        if status.is_ready() {
            log.debug("customization catalog ready");
        }
    });

    let products = sample_products();
    let mut editor = EditorSession::new();

    ctx.output.header("Register session");
    ctx.output.step(1, 4, "Ringing up items");

    if args.interactive {
        interactive_ring_up(&mut session, &mut editor, &catalog, &products, ctx)?;
    } else {
        scripted_ring_up(&mut session, &mut editor, &catalog, &products, ctx)?;
    }

    if session.cart.is_empty() {
        bail!("Nothing rung up");
    }

    print_ticket(&session, ctx);

    let method = if args.interactive {
        prompt_payment()?
    } else {
        PaymentMethod::from_str(&args.payment)
            .ok_or_else(|| anyhow!("Unknown payment method: {}", args.payment))?
    };

    ctx.output.step(3, 4, "Order payload");
    let draft = session.draft_order(method)?;
    let totals = session.totals();
    ctx.output.json(&draft);

    ctx.output.step(4, 4, "Submitting order");
    let receipt = submit(&draft, &totals, &ctx.config.api_base_url, ctx).await?;
    session.complete(&receipt);

    ctx.output.success(&format!(
        "Order {} complete, total {}",
        receipt.order_number(),
        totals.total.display()
    ));
    ctx.output
        .info(&format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S")));

    Ok(())
}

fn scripted_ring_up(
    session: &mut CheckoutSession,
    editor: &mut EditorSession,
    catalog: &Store<CatalogStatus>,
    products: &[Product],
    ctx: &Context,
) -> Result<()> {
    let tea = find(products, "Brown Sugar Milk Tea")?;
    let fruit = find(products, "Strawberry Fruit Tea")?;
    let mochi = find(products, "Mochi Bites")?;

    // Options arrive while the first editor is open
    let token = editor.open(tea, None, None);
    catalog.set(CatalogStatus::Ready(CustomizationOptions::standard()));
    editor.apply_catalog(token, catalog.get());

    editor.set_size("Medium")?;
    editor.set_base("Oat Milk")?;
    editor.toggle_topping("Boba")?;
    let confirmed = editor.confirm()?;
    ctx.output
        .info(&format!("{} | {}", tea.name, confirmed.customizations));
    session.cart.add(tea, confirmed.customizations.clone());

    // Same drink again merges into one line
    session.cart.add(tea, confirmed.customizations);

    let token = editor.open(fruit, None, None);
    editor.apply_catalog(token, catalog.get());
    editor.set_ice("No Ice")?;
    let confirmed = editor.confirm()?;
    ctx.output
        .info(&format!("{} | {}", fruit.name, confirmed.customizations));
    session.cart.add(fruit, confirmed.customizations);

    editor.open(mochi, None, None);
    editor.set_intensity(7)?;
    let confirmed = editor.confirm()?;
    ctx.output
        .info(&format!("{} | {}", mochi.name, confirmed.customizations));
    session.cart.add(mochi, confirmed.customizations);

    Ok(())
}

fn interactive_ring_up(
    session: &mut CheckoutSession,
    editor: &mut EditorSession,
    catalog: &Store<CatalogStatus>,
    products: &[Product],
    ctx: &Context,
) -> Result<()> {
    catalog.set(CatalogStatus::Ready(CustomizationOptions::standard()));

    loop {
        let names: Vec<String> = products
            .iter()
            .map(|p| format!("{} ({})", p.name, p.unit_price().display()))
            .collect();
        let idx = Select::new()
            .with_prompt("Product")
            .items(&names)
            .default(0)
            .interact()?;
        let product = &products[idx];

        let token = editor.open(product, None, None);
        editor.apply_catalog(token, catalog.get());

        match product.kind() {
            ProductKind::Drink => prompt_drink(editor)?,
            ProductKind::Snack => prompt_snack(editor)?,
        }

        let confirmed = editor.confirm()?;
        ctx.output
            .info(&format!("{} | {}", product.name, confirmed.customizations));
        session.cart.add(product, confirmed.customizations);

        let again = Confirm::new()
            .with_prompt("Add another item?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

fn prompt_drink(editor: &mut EditorSession) -> Result<()> {
    let options = match editor.catalog().options() {
        Some(options) => options.clone(),
        None => bail!("Customization catalog not loaded"),
    };

    let sizes: Vec<String> = options
        .sizes
        .iter()
        .map(|s| format!("{}{}", s, format_delta_suffix(size_delta(s))))
        .collect();
    let size = Select::new()
        .with_prompt("Size")
        .items(&sizes)
        .default(0)
        .interact()?;
    editor.set_size(options.sizes[size].as_str())?;

    let temps = ["Iced", "Hot"];
    let temp = Select::new()
        .with_prompt("Temperature")
        .items(&temps)
        .default(0)
        .interact()?;
    if temp == 1 {
        editor.set_temperature(Temperature::Hot)?;
    } else {
        let ice = Select::new()
            .with_prompt("Ice")
            .items(&options.ice_levels)
            .default(options.ice_levels.len().saturating_sub(1))
            .interact()?;
        editor.set_ice(options.ice_levels[ice].as_str())?;
    }

    let sweetness = Select::new()
        .with_prompt("Sweetness")
        .items(&options.sweetness_levels)
        .default(options.sweetness_levels.len().saturating_sub(1))
        .interact()?;
    editor.set_sweetness(options.sweetness_levels[sweetness].as_str())?;

    let mut bases = vec!["(none)".to_string()];
    bases.extend(options.bases.iter().cloned());
    let base = Select::new()
        .with_prompt("Base")
        .items(&bases)
        .default(0)
        .interact()?;
    if base > 0 {
        editor.set_base(bases[base].as_str())?;
    }

    let labels: Vec<&str> = options.toppings.iter().map(|t| t.label.as_str()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Toppings")
        .items(&labels)
        .interact()?;
    for idx in picked {
        editor.toggle_topping(labels[idx])?;
    }

    let mut shots = vec!["(none)".to_string()];
    shots.extend(options.flavor_shots.iter().map(|s| s.label.clone()));
    let shot = Select::new()
        .with_prompt("Flavor shot")
        .items(&shots)
        .default(0)
        .interact()?;
    if shot > 0 {
        editor.set_flavor_shot(shots[shot].as_str())?;
    }

    Ok(())
}

fn prompt_snack(editor: &mut EditorSession) -> Result<()> {
    let intensity: u8 = Input::new()
        .with_prompt("Flavor intensity (0-10)")
        .default(5)
        .interact_text()?;
    editor.set_intensity(intensity)?;
    Ok(())
}

fn prompt_payment() -> Result<PaymentMethod> {
    let choices = ["Cash", "Card", "Other"];
    let idx = Select::new()
        .with_prompt("Payment method")
        .items(&choices)
        .default(0)
        .interact()?;
    Ok(PaymentMethod::from_str(choices[idx]).unwrap_or_default())
}

fn print_ticket(session: &CheckoutSession, ctx: &Context) {
    ctx.output.step(2, 4, "Ticket");
    ctx.output.table_row(
        &["QTY", "ITEM", "CUSTOMIZATIONS", "LINE"],
        &[4, 22, 36, 8],
    );

    for line in session.cart.items() {
        let qty = line.quantity.to_string();
        let total = line.line_total(&session.policy).display();
        ctx.output.table_row(
            &[&qty, &line.product.name, &line.customizations, &total],
            &[4, 22, 36, 8],
        );
        if ctx.output.is_verbose() {
            ctx.output
                .debug(&format!("line key: {}", line.structural_key()));
        }
    }

    let totals = session.totals();
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    ctx.output.kv("Tax", &totals.tax.display());
    ctx.output.kv("Total", &totals.total.display());
}

async fn submit(
    draft: &OrderDraft,
    totals: &CartTotals,
    base_url: &str,
    ctx: &Context,
) -> Result<OrderReceipt> {
    let base = base_url.trim().trim_end_matches('/');

    // No live backend in the demo: a canned transport answers the way
    // the order service would.
    let receipt_body = serde_json::to_string(&serde_json::json!({
        "order_id": DEMO_ORDER_ID,
        "subtotal": totals.subtotal.to_decimal(),
        "tax": totals.tax.to_decimal(),
        "total": totals.total.to_decimal(),
    }))?;
    let transport = StaticTransport::new().with_post(format!("{base}/orders/"), 201, receipt_body);
    let api = PosApi::new(transport).with_base_url(base_url)?;

    ctx.output
        .debug(&format!("POST {}/orders/ (simulated)", api.base_url()));
    let receipt = api.create_order(draft).await?;
    Ok(receipt)
}

fn find<'a>(products: &'a [Product], name: &str) -> Result<&'a Product> {
    products
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| anyhow!("'{}' missing from the sample menu", name))
}
