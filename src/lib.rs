//! Plotprice - land plot purchase price calculator
//!
//! This library provides the pricing core: parsing of plot measurements,
//! derivation of the purchase price, brokerage commission, and the VAT
//! surcharge on that commission, all in exact decimal arithmetic.

pub mod config;
pub mod error;
pub mod pricing;
pub mod utils;
