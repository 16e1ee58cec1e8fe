//! Utility functions for formatting and common operations
//!
//! This module provides centralized formatting utilities for consistent
//! display of currency values throughout the application.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a value to 2 fractional digits for display, using standard
/// (midpoint away from zero) rounding: 1.0595 rounds to 1.06.
///
/// # Examples
/// ```
/// use plotprice::utils::round_display;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_display(dec!(1.0595)), dec!(1.06));
/// assert_eq!(round_display(dec!(0.005)), dec!(0.01));
/// ```
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with fixed 2 decimal places: "21190.00"
///
/// # Examples
/// ```
/// use plotprice::utils::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(20000)), "20000.00");
/// assert_eq!(format_amount(dec!(1.0595)), "1.06");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_display(value))
}

/// Format an amount as a currency string, symbol suffixed: "21190.00 €"
///
/// # Examples
/// ```
/// use plotprice::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.5), "€"), "1234.50 €");
/// ```
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    format!("{} {}", format_amount(value), symbol)
}

/// Format a fractional rate as a percentage: 0.05 becomes "5%".
///
/// # Examples
/// ```
/// use plotprice::utils::format_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_percent(dec!(0.05)), "5%");
/// assert_eq!(format_percent(dec!(0.19)), "19%");
/// ```
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
