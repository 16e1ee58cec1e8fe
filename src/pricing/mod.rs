// Pricing module - plot price, commission, and VAT derivations

pub mod input;
pub mod quote;

pub use input::parse_positive_decimal;
pub use quote::{
    compute_all, compute_all_with_rates, compute_commission, compute_plot_price, compute_vat,
    PlotQuote,
};
