//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of quote derivation from presentation.

use colored::Colorize;
use plotprice::config::{Config, ConfigSource};
use plotprice::pricing::PlotQuote;
use plotprice::utils::{format_amount, format_currency, format_percent};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

/// Generic notification shown for any rejected input field.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a positive number.";

/// Format a quote for JSON output
pub fn format_quote_json(quote: &PlotQuote, config: &Config) -> String {
    #[derive(Serialize)]
    struct JsonQuote {
        plot_price: String,
        commission: String,
        total_with_commission: String,
        vat_on_commission: String,
        total_with_vat: String,
        currency: String,
    }

    let json_quote = JsonQuote {
        plot_price: format_amount(quote.plot_price),
        commission: format_amount(quote.commission),
        total_with_commission: format_amount(quote.total_with_commission),
        vat_on_commission: format_amount(quote.vat_on_commission),
        total_with_vat: format_amount(quote.total_with_vat),
        currency: config.currency_symbol.clone(),
    };

    serde_json::to_string_pretty(&json_quote)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

/// Format a quote for terminal table output
pub fn format_quote_table(quote: &PlotQuote, config: &Config) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Plot quote\n\n", "📐".cyan().bold()));

    #[derive(Tabled)]
    struct QuoteRow {
        #[tabled(rename = "Item")]
        item: String,
        #[tabled(rename = "Amount")]
        amount: String,
    }

    let commission_pct = format_percent(config.rates.commission_rate);
    let vat_pct = format_percent(config.rates.vat_rate);
    let symbol = config.currency_symbol.as_str();

    let rows = vec![
        QuoteRow {
            item: "Plot price".to_string(),
            amount: format_currency(quote.plot_price, symbol),
        },
        QuoteRow {
            item: format!("Commission ({})", commission_pct),
            amount: format_currency(quote.commission, symbol),
        },
        QuoteRow {
            item: format!("Total incl. {} commission", commission_pct),
            amount: format_currency(quote.total_with_commission, symbol),
        },
        QuoteRow {
            item: format!("VAT on commission ({})", vat_pct),
            amount: format_currency(quote.vat_on_commission, symbol),
        },
        QuoteRow {
            item: format!("Total incl. commission and {} VAT", vat_pct),
            amount: format_currency(quote.total_with_vat, symbol),
        },
    ];

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(1..), Alignment::right());

    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Format the active rates for terminal output
pub fn format_rates(config: &Config) -> String {
    let source = match &config.source {
        ConfigSource::Defaults => "built-in defaults".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
    };

    format!(
        "{:<20} {}\n{:<20} {}\n{:<20} {}\n{:<20} {}\n",
        "Commission rate:".bold(),
        format_percent(config.rates.commission_rate),
        "VAT rate:".bold(),
        format_percent(config.rates.vat_rate),
        "Currency:".bold(),
        config.currency_symbol,
        "Source:".bold(),
        source
    )
}

/// Format the active rates for JSON output
pub fn format_rates_json(config: &Config) -> String {
    #[derive(Serialize)]
    struct JsonRates {
        commission_rate: String,
        vat_rate: String,
        currency: String,
        source: String,
    }

    let json_rates = JsonRates {
        commission_rate: config.rates.commission_rate.to_string(),
        vat_rate: config.rates.vat_rate.to_string(),
        currency: config.currency_symbol.clone(),
        source: match &config.source {
            ConfigSource::Defaults => "defaults".to_string(),
            ConfigSource::File(path) => path.display().to_string(),
        },
    };

    serde_json::to_string_pretty(&json_rates)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotprice::pricing::compute_all;
    use rust_decimal_macros::dec;

    fn reference_quote() -> PlotQuote {
        compute_all(dec!(10), dec!(20), dec!(100))
    }

    #[test]
    fn test_quote_table_contains_all_amounts() {
        colored::control::set_override(false);
        let table = format_quote_table(&reference_quote(), &Config::default());
        assert!(table.contains("20000.00 €"));
        assert!(table.contains("1000.00 €"));
        assert!(table.contains("21000.00 €"));
        assert!(table.contains("190.00 €"));
        assert!(table.contains("21190.00 €"));
        assert!(table.contains("Commission (5%)"));
        assert!(table.contains("VAT on commission (19%)"));
    }

    #[test]
    fn test_quote_json_round_trips() {
        let json = format_quote_json(&reference_quote(), &Config::default());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plot_price"], "20000.00");
        assert_eq!(value["total_with_commission"], "21000.00");
        assert_eq!(value["total_with_vat"], "21190.00");
        assert_eq!(value["currency"], "€");
    }

    #[test]
    fn test_json_amounts_are_display_rounded() {
        let quote = compute_all(dec!(1), dec!(1), dec!(1));
        let json = format_quote_json(&quote, &Config::default());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // 1.0595 rounds to 1.06 for display
        assert_eq!(value["total_with_vat"], "1.06");
    }

    #[test]
    fn test_rates_output_names_source() {
        colored::control::set_override(false);
        let output = format_rates(&Config::default());
        assert!(output.contains("5%"));
        assert!(output.contains("19%"));
        assert!(output.contains("built-in defaults"));
    }
}
