//! Quote derivations.
//!
//! All amounts are derived fresh on every call; nothing is cached between
//! invocations. VAT is charged on the commission only, never on the plot
//! price itself - a domain policy of the brokerage, preserved as-is.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Rates;

/// Fully derived quote for a single plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotQuote {
    pub plot_price: Decimal,
    pub commission: Decimal,
    pub total_with_commission: Decimal,
    pub vat_on_commission: Decimal,
    pub total_with_vat: Decimal,
}

/// Plot price: length x width x price per square meter.
pub fn compute_plot_price(length: Decimal, width: Decimal, unit_price: Decimal) -> Decimal {
    length * width * unit_price
}

/// Brokerage commission at the default 5% rate.
pub fn compute_commission(plot_price: Decimal) -> Decimal {
    plot_price * Rates::default().commission_rate
}

/// VAT at the default 19% rate on the given amount.
pub fn compute_vat(amount: Decimal) -> Decimal {
    amount * Rates::default().vat_rate
}

/// Derive a full quote using the default rates.
pub fn compute_all(length: Decimal, width: Decimal, unit_price: Decimal) -> PlotQuote {
    compute_all_with_rates(length, width, unit_price, &Rates::default())
}

/// Derive a full quote with explicit rates (e.g. from a config override).
pub fn compute_all_with_rates(
    length: Decimal,
    width: Decimal,
    unit_price: Decimal,
    rates: &Rates,
) -> PlotQuote {
    let plot_price = compute_plot_price(length, width, unit_price);
    let commission = plot_price * rates.commission_rate;
    let total_with_commission = plot_price + commission;
    let vat_on_commission = commission * rates.vat_rate;
    let total_with_vat = total_with_commission + vat_on_commission;

    PlotQuote {
        plot_price,
        commission,
        total_with_commission,
        vat_on_commission,
        total_with_vat,
    }
}
