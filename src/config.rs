//! Rate and display configuration
//!
//! Commission and VAT rates default to the statutory values (5% brokerage
//! commission, 19% VAT) and may be overridden by an optional TOML file.
//! Once loaded, the rates stay fixed for the lifetime of the process.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{PricingError, Result};

/// Config file name, looked up under the platform config directory
/// (e.g. `~/.config/plotprice/plotprice.toml`).
pub const CONFIG_FILENAME: &str = "plotprice.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "PLOTPRICE_CONFIG";

/// Percentage rates applied when deriving a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Rates {
    /// Brokerage commission as a fraction of the plot price
    pub commission_rate: Decimal,
    /// VAT as a fraction of the commission
    pub vat_rate: Decimal,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            commission_rate: Decimal::new(5, 2),
            vat_rate: Decimal::new(19, 2),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub rates: Rates,
    pub currency_symbol: String,
    pub source: ConfigSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: Rates::default(),
            currency_symbol: "€".to_string(),
            source: ConfigSource::Defaults,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    rates: Option<RatesSection>,
    display: Option<DisplaySection>,
}

#[derive(Debug, Deserialize)]
struct RatesSection {
    commission: Option<Decimal>,
    vat: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct DisplaySection {
    currency_symbol: Option<String>,
}

impl Config {
    /// Load configuration from the platform config dir, falling back to
    /// compiled-in defaults when no file exists.
    pub fn load() -> Result<Config> {
        match config_path() {
            Some(path) if path.exists() => Config::from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let parsed = Config::from_toml_str(&raw)?;
        Ok(Config {
            source: ConfigSource::File(path.to_path_buf()),
            ..parsed
        })
    }

    fn from_toml_str(raw: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(raw)
            .map_err(|e| PricingError::Config(e.to_string()))?;

        let mut config = Config::default();
        if let Some(rates) = file.rates {
            if let Some(commission) = rates.commission {
                config.rates.commission_rate = validate_rate("commission", commission)?;
            }
            if let Some(vat) = rates.vat {
                config.rates.vat_rate = validate_rate("vat", vat)?;
            }
        }
        if let Some(display) = file.display {
            if let Some(symbol) = display.currency_symbol {
                config.currency_symbol = symbol;
            }
        }
        Ok(config)
    }
}

// A zero or negative rate would break the quote ordering invariant
// (plot price <= total with commission <= total with VAT).
fn validate_rate(name: &str, rate: Decimal) -> Result<Decimal> {
    if rate <= Decimal::ZERO {
        let err = PricingError::Config(format!("{} rate must be positive, got {}", name, rate));
        return Err(err.into());
    }
    Ok(rate)
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dir_spec::config_home().map(|dir| dir.join("plotprice").join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rates() {
        let rates = Rates::default();
        assert_eq!(rates.commission_rate, dec!(0.05));
        assert_eq!(rates.vat_rate, dec!(0.19));
    }

    #[test]
    fn test_default_config_uses_euro_symbol() {
        let config = Config::default();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.source, ConfigSource::Defaults);
    }

    #[test]
    fn test_full_toml_override() {
        let config = Config::from_toml_str(
            r#"
            [rates]
            commission = 0.03
            vat = 0.07

            [display]
            currency_symbol = "CHF"
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.commission_rate, dec!(0.03));
        assert_eq!(config.rates.vat_rate, dec!(0.07));
        assert_eq!(config.currency_symbol, "CHF");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[rates]\ncommission = 0.02\n").unwrap();
        assert_eq!(config.rates.commission_rate, dec!(0.02));
        assert_eq!(config.rates.vat_rate, dec!(0.19));
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_zero_rate_rejected() {
        let result = Config::from_toml_str("[rates]\nvat = 0.0\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("vat rate must be positive"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = Config::from_toml_str("[rates]\ncommission = -0.05\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = Config::from_toml_str("rates = not toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("config error"));
    }
}
