mod cli;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

use cli::formatters::{self, INVALID_INPUT_MESSAGE};
use cli::{Cli, Commands};
use plotprice::config::Config;
use plotprice::pricing::{compute_all_with_rates, parse_positive_decimal};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Quote {
            length,
            width,
            unit_price,
        } => handle_quote(&config, cli.json, &length, &width, &unit_price),

        Commands::Rates => {
            if cli.json {
                println!("{}", formatters::format_rates_json(&config));
            } else {
                println!("{}", formatters::format_rates(&config));
            }
            Ok(())
        }

        Commands::Interactive => ui::form::run(&config),
    }
}

/// Handle the one-shot quote command
fn handle_quote(
    config: &Config,
    json: bool,
    length: &str,
    width: &str,
    unit_price: &str,
) -> Result<()> {
    let length = parse_field(length)?;
    let width = parse_field(width)?;
    let unit_price = parse_field(unit_price)?;

    let quote = compute_all_with_rates(length, width, unit_price, &config.rates);
    info!(plot_price = %quote.plot_price, total_with_vat = %quote.total_with_vat, "quote computed");

    if json {
        println!("{}", formatters::format_quote_json(&quote, config));
    } else {
        println!("{}", formatters::format_quote_table(&quote, config));
    }

    Ok(())
}

// Any rejected field collapses into the one generic notification; the
// offending value only goes to the debug log.
fn parse_field(text: &str) -> Result<Decimal> {
    parse_positive_decimal(text).map_err(|err| {
        debug!(error = %err, "rejected field input");
        anyhow!(INVALID_INPUT_MESSAGE)
    })
}
