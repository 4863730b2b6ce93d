use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use mquery::{DEFAULT_ENCODING, DEFAULT_HEADER_MARKER, FilterCriteria, MbankAmount};
use rust_decimal::Decimal;

/// Read and filter your mBank history exports.
#[derive(Debug, Parser)]
#[command(name = "mquery", version, about)]
pub struct Cli {
    /// mBank CSV history export
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Earliest operation date (inclusive, YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date_from: Option<NaiveDate>,

    /// Latest operation date (inclusive, YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date_to: Option<NaiveDate>,

    /// Smallest signed amount (inclusive), e.g. -100 or 12,50
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount_from: Option<Decimal>,

    /// Largest signed amount (inclusive)
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount_to: Option<Decimal>,

    /// Case-insensitive text the description must contain
    #[arg(short, long)]
    pub description: Option<String>,

    /// Case-insensitive text the category must contain
    #[arg(short, long)]
    pub category: Option<String>,

    /// Currency code, e.g. PLN
    #[arg(long)]
    pub currency: Option<String>,

    /// Print total income and expense after the listing
    #[arg(short, long)]
    pub summary: bool,

    /// Print a date header followed by that day's operations
    #[arg(short, long)]
    pub group_by_date: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Text encoding of the export file
    #[arg(long, env = "MQUERY_ENCODING", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Prefix of the column header line preceding the operations
    #[arg(long, env = "MQUERY_HEADER_MARKER", default_value = DEFAULT_HEADER_MARKER)]
    pub header_marker: String,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            date_from: self.date_from,
            date_to: self.date_to,
            amount_from: self.amount_from,
            amount_to: self.amount_to,
            description: self.description.clone(),
            category: self.category.clone(),
            currency: self.currency.clone(),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("date must use YYYY-MM-DD format ({err})"))
}

fn parse_amount(value: &str) -> Result<Decimal, String> {
    MbankAmount::from(value)
        .parse()
        .map(|amount| amount.value)
        .map_err(|err| err.reason)
}

#[cfg(test)]
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
