//! Menu listing command.

use anyhow::{bail, Result};

use teapos_core::pricing::TAX_RATE;

use super::MenuArgs;
use crate::context::Context;
use crate::menu::{grouped, sample_products};
use crate::output::popular_badge;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let products = sample_products();

    let groups: Vec<_> = grouped(&products)
        .into_iter()
        .filter(|(name, _)| match &args.category {
            Some(wanted) => name.eq_ignore_ascii_case(wanted),
            None => true,
        })
        .collect();

    if groups.is_empty() {
        bail!("No category matches '{}'", args.category.as_deref().unwrap_or(""));
    }

    if ctx.output.is_json() {
        let listed: Vec<_> = groups
            .iter()
            .flat_map(|(_, members)| members.iter())
            .collect();
        ctx.output.json(&listed);
        return Ok(());
    }

    for (category, members) in &groups {
        ctx.output.header(category);

        for product in members {
            let price = product.unit_price().display();
            let note = if product.is_popular {
                popular_badge()
            } else {
                product.description.clone().unwrap_or_default()
            };
            ctx.output.table_row(&[&product.name, &price, &note], &[26, 8, 32]);
        }
    }

    ctx.output.info("");
    if ctx.config.tax_included_hint {
        ctx.output.info("Prices include sales tax");
    } else {
        ctx.output
            .info(&format!("Prices exclude {:.2}% sales tax", TAX_RATE * 100.0));
    }

    Ok(())
}
