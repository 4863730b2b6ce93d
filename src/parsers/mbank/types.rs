use crate::errors::{FieldError, RowField};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date column of an mBank export row, e.g. `2019-04-30`.
///
/// Only the export's own format is accepted; there is no guessing between
/// day-first and month-first layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbankDate(String);

impl MbankDate {
    pub fn parse(&self) -> Result<NaiveDate, FieldError> {
        let s = self.0.trim();

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| FieldError::new(RowField::Date, format!("{s:?} ({e})")))
    }
}

impl From<String> for MbankDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MbankDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<MbankDate> for NaiveDate {
    type Error = FieldError;

    fn try_from(date: MbankDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

/// An amount together with the currency code that followed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub value: Decimal,
    pub currency: Option<String>,
}

/// Amount column of an mBank export row, e.g. `-1 234,50 PLN`.
///
/// Decimal comma (a dot is tolerated too), whitespace as thousands separator
/// and an optional trailing currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbankAmount(String);

impl MbankAmount {
    pub fn parse(&self) -> Result<Amount, FieldError> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return Err(FieldError::new(RowField::Amount, "empty value"));
        }

        let (number, currency) = match raw.rsplit_once(char::is_whitespace) {
            Some((number, code)) if is_currency_code(code) => (number, Some(code.to_string())),
            _ => (raw, None),
        };

        let normalized: String = number
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        if !is_plain_decimal(&normalized) {
            return Err(FieldError::new(
                RowField::Amount,
                format!("not a number: {raw:?}"),
            ));
        }

        let unsigned = normalized.strip_prefix('+').unwrap_or(&normalized);
        let value = Decimal::from_str(unsigned)
            .map_err(|e| FieldError::new(RowField::Amount, format!("{raw:?} ({e})")))?;

        Ok(Amount { value, currency })
    }
}

impl From<String> for MbankAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MbankAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

fn is_currency_code(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

// Optional sign, digits, at most one decimal point. Keeps out what
// `Decimal::from_str` would otherwise tolerate (underscores, exponents).
fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let mut points = 0;
    let mut has_digit = false;

    for c in digits.chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' => points += 1,
            _ => return false,
        }
    }

    has_digit && points <= 1
}
