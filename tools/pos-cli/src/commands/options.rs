//! Customization catalog command.

use anyhow::Result;

use teapos_core::catalog::CustomizationOptions;
use teapos_core::pricing::{format_delta_suffix, size_delta};

use crate::context::Context;

/// Run the options command.
pub async fn run(ctx: &Context) -> Result<()> {
    let options = CustomizationOptions::standard();

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Sizes");
    for size in &options.sizes {
        let delta = size_delta(size);
        ctx.output
            .list_item(&format!("{}{}", size, format_delta_suffix(delta)));
    }

    ctx.output.header("Ice");
    for level in &options.ice_levels {
        ctx.output.list_item(level);
    }

    ctx.output.header("Sweetness");
    for level in &options.sweetness_levels {
        ctx.output.list_item(level);
    }

    ctx.output.header("Bases");
    for base in &options.bases {
        ctx.output.list_item(base);
    }

    ctx.output.header("Toppings");
    for topping in &options.toppings {
        ctx.output.list_item(&topping.label);
    }

    ctx.output.header("Flavor shots");
    for shot in &options.flavor_shots {
        ctx.output.list_item(&shot.label);
    }

    Ok(())
}
