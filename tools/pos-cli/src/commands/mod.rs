//! CLI command implementations.

pub mod menu;
pub mod options;
pub mod sell;

use clap::Args;

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Show only one category.
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the sell command.
#[derive(Args)]
pub struct SellArgs {
    /// Walk the register flow with prompts instead of the scripted
    /// demo ticket.
    #[arg(short, long)]
    pub interactive: bool,

    /// Employee id to attribute the sale to.
    #[arg(long)]
    pub cashier: Option<i64>,

    /// Payment method for the scripted ticket (cash, card, other).
    #[arg(long, default_value = "cash")]
    pub payment: String,
}
