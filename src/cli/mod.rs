use clap::{Parser, Subcommand};

pub mod formatters;

#[derive(Parser)]
#[command(name = "plotprice")]
#[command(
    version,
    about = "Land plot purchase price calculator with commission and VAT"
)]
#[command(
    long_about = "Compute the purchase price of a land plot from its length, width, and price per square meter, plus the 5% brokerage commission and the 19% VAT charged on that commission."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a quote for a single plot
    Quote {
        /// Plot length in meters
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Plot width in meters
        #[arg(allow_hyphen_values = true)]
        width: String,

        /// Price per square meter
        #[arg(allow_hyphen_values = true)]
        unit_price: String,
    },

    /// Show the active commission and VAT rates
    Rates,

    /// Launch the interactive form
    Interactive,
}
