//! Error handling for the plot price calculator
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for pricing operations
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for pricing operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = PricingError::InvalidInput("abc".to_string());
        assert_eq!(err.to_string(), "invalid input: abc");
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> =
            Err(anyhow::anyhow!("original error")).context("failed to compute quote");
        match result {
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("failed to compute quote"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("original error") || msg.contains("original error"));
            }
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_pricing_error_variants() {
        let input_err = PricingError::InvalidInput("-5".to_string());
        assert!(input_err.to_string().starts_with("invalid input"));

        let config_err = PricingError::Config("commission rate must be positive".to_string());
        assert!(config_err.to_string().starts_with("config error"));
    }
}
