//! Input parsing for quote fields.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::PricingError;

/// Parse a text field into a strictly positive decimal.
///
/// Surrounding whitespace is tolerated. Empty strings, non-numeric text,
/// zero, and negative values are all rejected with the same error kind so
/// the presentation layer can show one generic notification.
///
/// # Examples
/// ```
/// use plotprice::pricing::parse_positive_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_positive_decimal("12.5").unwrap(), dec!(12.5));
/// assert!(parse_positive_decimal("0").is_err());
/// assert!(parse_positive_decimal("abc").is_err());
/// ```
pub fn parse_positive_decimal(text: &str) -> Result<Decimal, PricingError> {
    let value = Decimal::from_str(text.trim())
        .map_err(|_| PricingError::InvalidInput(text.to_string()))?;
    if value <= Decimal::ZERO {
        return Err(PricingError::InvalidInput(text.to_string()));
    }
    Ok(value)
}
