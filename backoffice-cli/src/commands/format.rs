use anyhow::Result;
use clap::Subcommand;
use shared::format::{format_currency, format_date};

/// Values the dashboard knows how to display
#[derive(Subcommand, Debug)]
pub enum FormatKind {
    /// Format an amount as Brazilian reais
    Currency {
        /// The amount, e.g. 1234.5
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Reformat a YYYY-MM-DD date as DD/MM/YYYY
    Date {
        /// The date; omit for an empty result
        date: Option<String>,
    },
}

pub fn run(kind: &FormatKind) -> Result<()> {
    match kind {
        FormatKind::Currency { amount } => println!("{}", format_currency(*amount)),
        FormatKind::Date { date } => println!("{}", format_date(date.as_deref())),
    }
    Ok(())
}
