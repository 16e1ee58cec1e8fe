//! Interactive prompt form.
//!
//! Collects length, width, and price per square meter, prints the derived
//! quote, and loops for the next plot. A rejected field shows the generic
//! notification and re-prompts that field; previously printed results are
//! left untouched.

use colored::Colorize;
use rust_decimal::Decimal;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use plotprice::config::Config;
use plotprice::error::Result;
use plotprice::pricing::{compute_all_with_rates, parse_positive_decimal};

use crate::cli::formatters::{self, INVALID_INPUT_MESSAGE};

enum FieldInput {
    Value(Decimal),
    Quit,
}

/// Run the form loop until the user quits (Ctrl-C, Ctrl-D, or `quit`).
pub fn run(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!(
        "\n{} Plot price calculator - enter measurements, or 'quit' to exit\n",
        "📐".cyan().bold()
    );

    loop {
        let length = match read_field(&mut editor, "Length (m): ")? {
            FieldInput::Value(v) => v,
            FieldInput::Quit => break,
        };
        let width = match read_field(&mut editor, "Width (m): ")? {
            FieldInput::Value(v) => v,
            FieldInput::Quit => break,
        };
        let unit_price = match read_field(&mut editor, "Price per m²: ")? {
            FieldInput::Value(v) => v,
            FieldInput::Quit => break,
        };

        let quote = compute_all_with_rates(length, width, unit_price, &config.rates);
        println!("{}", formatters::format_quote_table(&quote, config));
    }

    println!("Bye!");
    Ok(())
}

fn read_field(editor: &mut DefaultEditor, prompt: &str) -> Result<FieldInput> {
    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
                    return Ok(FieldInput::Quit);
                }
                match parse_positive_decimal(&line) {
                    Ok(value) => {
                        let _ = editor.add_history_entry(&line);
                        return Ok(FieldInput::Value(value));
                    }
                    Err(err) => {
                        debug!(input = %line, error = %err, "rejected field input");
                        eprintln!("{} {}", "✗".red().bold(), INVALID_INPUT_MESSAGE);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Ok(FieldInput::Quit)
            }
            Err(e) => return Err(e.into()),
        }
    }
}
