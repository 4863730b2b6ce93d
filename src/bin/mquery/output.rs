use std::io::{self, Write};

use mquery::{Summary, Transaction, group_history_by_date};
use owo_colors::{OwoColorize, Style};
use rust_decimal::Decimal;
use serde::Serialize;

const DESCRIPTION_WIDTH: usize = 50;
const AMOUNT_WIDTH: usize = 10;

/// Applies terminal styles, or nothing when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn amount_style(amount: Decimal) -> Style {
        if amount > Decimal::ZERO {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    }
}

/// One line per operation: date, amount, currency, description, category.
pub fn write_listing(
    out: &mut impl Write,
    history: &[Transaction],
    palette: Palette,
) -> io::Result<()> {
    for txn in history {
        let date = palette.paint(&txn.date.to_string(), Style::new().white().bold());
        write!(out, "{date} ")?;
        write_entry(out, txn, palette)?;
    }
    Ok(())
}

/// A bold date header followed by the operations booked that day.
pub fn write_grouped(
    out: &mut impl Write,
    history: &[Transaction],
    palette: Palette,
) -> io::Result<()> {
    for group in group_history_by_date(history) {
        writeln!(
            out,
            "{}",
            palette.paint(&group.date.to_string(), Style::new().white().bold())
        )?;
        for txn in &group.entries {
            write_entry(out, txn, palette)?;
        }
    }
    Ok(())
}

fn write_entry(out: &mut impl Write, txn: &Transaction, palette: Palette) -> io::Result<()> {
    let amount_style = Palette::amount_style(txn.amount);
    let amount = format!("{:>AMOUNT_WIDTH$}", txn.amount.to_string());
    let currency = txn.currency.as_deref().unwrap_or("");
    let description = format!(
        "{:DESCRIPTION_WIDTH$}",
        truncate(&txn.description, DESCRIPTION_WIDTH)
    );

    writeln!(
        out,
        "{} {} {} {}",
        palette.paint(&amount, amount_style.bold()),
        palette.paint(currency, Palette::amount_style(txn.amount)),
        palette.paint(&description, Style::new().cyan()),
        palette.paint(&txn.category, Style::new().magenta()),
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() < width {
        return text.to_string();
    }
    let head: String = text.chars().take(width - 3).collect();
    format!("{head}...")
}

pub fn write_summary(out: &mut impl Write, summary: &Summary, palette: Palette) -> io::Result<()> {
    let rows = [
        ("Income", summary.total_income, Style::new().green()),
        ("Expense", summary.total_expense, Style::new().yellow()),
        ("Balance", summary.balance(), Style::new().bold()),
    ];

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        palette.paint(
            &format!("Summary of {} operations", summary.count),
            Style::new().white().bold()
        )
    )?;
    for (label, value, style) in rows {
        let value = format!("{:>AMOUNT_WIDTH$}", value.to_string());
        writeln!(out, "{label:<8} {}", palette.paint(&value, style))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    transactions: &'a [Transaction],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
}

pub fn write_json(
    out: &mut impl Write,
    history: &[Transaction],
    summary: Option<&Summary>,
) -> io::Result<()> {
    let report = JsonReport {
        transactions: history,
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
