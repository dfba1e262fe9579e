//! POS CLI - Register demo tool for the tea shop point of sale.
//!
//! Commands:
//! - `pos menu` - Print the sample menu
//! - `pos options` - Print the customization catalog
//! - `pos sell` - Run a register session (scripted or interactive)

mod commands;
mod config;
mod context;
mod menu;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{MenuArgs, SellArgs};

/// POS CLI - Ring up tea shop orders from the terminal
#[derive(Parser)]
#[command(name = "pos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample menu grouped by category
    Menu(MenuArgs),

    /// Print the customization catalog
    Options,

    /// Run a register session
    Sell(SellArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Options => commands::options::run(&ctx).await,
        Commands::Sell(args) => commands::sell::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
